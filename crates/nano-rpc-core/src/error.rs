use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("failed to encode request parameters: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("node returned error: {0}")]
    Node(NodeError),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl RpcError {
    /// The node's error payload, when the failure came from the node itself.
    pub fn node_error(&self) -> Option<&NodeError> {
        match self {
            Self::Node(err) => Some(err),
            _ => None,
        }
    }
}

/// An error object returned by the node, kept exactly as decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeError {
    body: Value,
}

impl NodeError {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// The `error` field when the node sent it as a string.
    pub fn message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => f.write_str(message),
            None => write!(f, "{}", self.body),
        }
    }
}
