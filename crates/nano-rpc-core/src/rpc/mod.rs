//! Node RPC transport layer.
//!
//! Defines the request [`Envelope`], the [`Transport`] trait that ships one
//! envelope to the node, the reqwest-backed [`HttpTransport`], and a
//! recording test mock (`mock::MockTransport`).

mod envelope;
mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use envelope::Envelope;
pub use http_adapter::HttpTransport;

use async_trait::async_trait;

use crate::error::RpcError;

/// Sends one envelope to a node and returns the JSON-decoded response body.
///
/// Implementations perform exactly one exchange per call and never retry.
/// Interpreting the body (node errors, response shapes) is left to
/// [`NodeClient`](crate::NodeClient).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, envelope: &Envelope) -> Result<serde_json::Value, RpcError>;
}
