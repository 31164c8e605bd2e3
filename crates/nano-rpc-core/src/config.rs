//! Client configuration: the node endpoint plus extra request headers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where to reach the node and which headers to add to every request.
///
/// Set once when the client is built and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// The node's RPC endpoint, e.g. `http://127.0.0.1:7076`.
    pub url: String,

    /// Headers merged over the `content-type: application/json` default.
    #[serde(default, alias = "requestHeaders")]
    pub request_headers: BTreeMap<String, String>,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_headers: BTreeMap::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request_headers.insert(name.into(), value.into());
        self
    }
}
