//! Typed node client.
//!
//! [`NodeClient`] exposes one async method per RPC action. Every method
//! builds an [`Envelope`], hands it to the [`Transport`] once, and turns the
//! decoded body into either the action's response type or an [`RpcError`].

mod accounts;
mod blocks;
mod network;
mod units;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{NodeError, RpcError};
use crate::rpc::{Envelope, HttpTransport, Transport};

/// `count` sent when the caller leaves it unset.
pub const DEFAULT_COUNT: u64 = 1;

/// Client for a node's JSON RPC.
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent calls. Dropping a call's future aborts its request.
#[derive(Debug, Clone)]
pub struct NodeClient<T = HttpTransport> {
    transport: T,
}

impl NodeClient<HttpTransport> {
    /// Build an HTTP client from `config`.
    ///
    /// Fails with [`RpcError::Config`] if the URL or any header is invalid.
    pub fn new(config: ClientConfig) -> Result<Self, RpcError> {
        Ok(Self::with_transport(HttpTransport::new(&config)?))
    }
}

impl<T: Transport> NodeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Call `action` and decode the response as `R`.
    ///
    /// The per-action methods all go through here; use it directly for
    /// actions this crate has no method for.
    pub async fn call<P, R>(&self, action: &str, params: &P) -> Result<R, RpcError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = self.call_value(action, params).await?;
        serde_json::from_value(body).map_err(|e| {
            RpcError::InvalidResponse(format!("unexpected `{action}` response shape: {e}"))
        })
    }

    /// Call `action` and return the decoded body without typing it.
    pub async fn call_value<P>(&self, action: &str, params: &P) -> Result<Value, RpcError>
    where
        P: Serialize + ?Sized,
    {
        let envelope = Envelope::new(action, params)?;
        let body = self.transport.send(&envelope).await?;
        into_result(action, body)
    }
}

/// Separate node errors from successful bodies.
///
/// A body that arrives as a JSON string is decoded once more first. Any body
/// with a top-level `error` field is a node error, whatever the HTTP status.
fn into_result(action: &str, body: Value) -> Result<Value, RpcError> {
    let body = match body {
        Value::String(encoded) => serde_json::from_str(&encoded).map_err(|e| {
            RpcError::InvalidResponse(format!(
                "decode string-encoded `{action}` response: {e}; body={encoded}"
            ))
        })?,
        other => other,
    };

    if body.get("error").is_some() {
        let err = NodeError::new(body);
        debug!(rpc.action = action, error = %err, "node rejected call");
        return Err(RpcError::Node(err));
    }

    Ok(body)
}
