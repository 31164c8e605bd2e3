use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RpcError;

use super::{Envelope, Transport};

/// A mock node transport for testing. Returns canned bodies per action and
/// records every envelope it is handed, in call order.
pub struct MockTransport {
    responses: HashMap<String, Value>,
    sent: Mutex<Vec<Envelope>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            responses: HashMap::new(),
        }
    }

    /// Wire bodies of every envelope sent so far.
    pub fn sent(&self) -> Vec<Value> {
        self.sent
            .lock()
            .expect("mock transport lock poisoned")
            .iter()
            .map(Envelope::to_value)
            .collect()
    }

    /// Wire body of the most recent envelope.
    pub fn last_sent(&self) -> Value {
        self.sent().pop().expect("no request was sent")
    }
}

pub struct MockTransportBuilder {
    responses: HashMap<String, Value>,
}

impl MockTransportBuilder {
    pub fn respond(mut self, action: &str, body: Value) -> Self {
        self.responses.insert(action.to_owned(), body);
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            responses: self.responses,
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, envelope: &Envelope) -> Result<Value, RpcError> {
        self.sent
            .lock()
            .expect("mock transport lock poisoned")
            .push(envelope.clone());

        // Unregistered actions answer the way a node answers unknown actions.
        Ok(self
            .responses
            .get(envelope.action())
            .cloned()
            .unwrap_or_else(|| serde_json::json!({ "error": "Unknown command" })))
    }
}
