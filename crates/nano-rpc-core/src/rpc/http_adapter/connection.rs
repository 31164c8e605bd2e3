use std::collections::BTreeMap;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;

use crate::error::RpcError;

pub(super) fn parse_connection(connection: &str) -> Result<Url, RpcError> {
    let parsed = Url::parse(connection).map_err(|e| {
        RpcError::Config(format!(
            "invalid node url `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(RpcError::Config(format!(
            "unsupported node url scheme `{other}`; expected http or https"
        ))),
    }
}

/// Default headers with the caller's headers layered on top.
///
/// Built once per transport from immutable config; a caller header with the
/// same (case-insensitive) name replaces the default.
pub(super) fn merge_headers(custom: &BTreeMap<String, String>) -> Result<HeaderMap, RpcError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    for (name, value) in custom {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RpcError::Config(format!("invalid header name `{name}`: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| RpcError::Config(format!("invalid value for header `{name}`: {e}")))?;
        headers.insert(name, value);
    }

    Ok(headers)
}
