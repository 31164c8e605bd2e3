use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Url;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::RpcError;

use super::super::{Envelope, Transport};
use super::connection::{merge_headers, parse_connection};

/// Node RPC transport over HTTP(S).
///
/// Every [`send`](Transport::send) is a single POST of the envelope to the
/// configured URL. Nothing is retried and no timeout is set beyond reqwest's
/// own defaults. The header set is fixed at construction.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
    headers: HeaderMap,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, RpcError> {
        let url = parse_connection(&config.url)?;
        let headers = merge_headers(&config.request_headers)?;
        let client = reqwest::Client::builder().tcp_nodelay(true).build()?;

        Ok(Self {
            client,
            url,
            headers,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, envelope: &Envelope) -> Result<serde_json::Value, RpcError> {
        let action = envelope.action();
        let payload = serde_json::to_vec(envelope).map_err(RpcError::Serialization)?;
        debug!(
            rpc.action = action,
            rpc.params = envelope.params().len(),
            "rpc call"
        );

        let response = self
            .client
            .post(self.url.clone())
            .headers(self.headers.clone())
            .body(payload)
            .send()
            .await?;
        let status = response.status();

        let body = response.text().await?;
        debug!(rpc.action = action, %status, body_len = body.len(), "rpc response");
        trace!(rpc.action = action, body = %body, "rpc response body");

        serde_json::from_str(&body).map_err(|e| {
            RpcError::InvalidResponse(format!(
                "decode `{action}` response (HTTP {status}): {e}; body={body}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header;

    use super::*;

    #[test]
    fn new_applies_config_headers() {
        let config = ClientConfig::new("http://127.0.0.1:7076").header("x-api-key", "k");
        let transport = HttpTransport::new(&config).expect("transport must build");

        assert_eq!(transport.url().as_str(), "http://127.0.0.1:7076/");
        assert_eq!(transport.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(transport.headers()["x-api-key"], "k");
    }

    #[test]
    fn new_rejects_bad_url() {
        let config = ClientConfig::new("unix:///tmp/node.sock");
        let err = HttpTransport::new(&config).expect_err("unix scheme must fail");
        assert!(matches!(err, RpcError::Config(_)));
    }
}
