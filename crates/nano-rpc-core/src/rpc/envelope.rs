use serde::ser::Error as _;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::RpcError;

/// The flat `{action, ...params}` object POSTed to the node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(flatten)]
    params: Map<String, Value>,
    action: String,
}

impl Envelope {
    /// Build an envelope from an action tag and a parameter record.
    ///
    /// `params` must serialize to a JSON object (merged flat next to
    /// `action`) or to `null` (no parameters). This runs before any I/O, so
    /// encoding failures never reach the transport.
    pub fn new<P>(action: &str, params: &P) -> Result<Self, RpcError>
    where
        P: Serialize + ?Sized,
    {
        let mut params = match serde_json::to_value(params).map_err(RpcError::Serialization)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(RpcError::Serialization(serde_json::Error::custom(format!(
                    "parameters for `{action}` must encode to a JSON object, got {other}"
                ))));
            }
        };
        // The tag always wins over a parameter of the same name.
        params.remove("action");

        Ok(Self {
            params,
            action: action.to_owned(),
        })
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// The envelope as a single JSON object, exactly as it goes on the wire.
    pub fn to_value(&self) -> Value {
        let mut body = self.params.clone();
        body.insert("action".to_owned(), Value::String(self.action.clone()));
        Value::Object(body)
    }
}
