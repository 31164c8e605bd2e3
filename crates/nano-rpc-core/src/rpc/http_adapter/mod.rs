//! reqwest-backed transport for the node's JSON-over-HTTP RPC.
//!
//! Validates the node URL, merges caller headers over the JSON content-type
//! default, and performs one POST per envelope.

mod connection;
mod transport;

pub use transport::HttpTransport;
