pub mod client;
pub mod config;
pub mod error;
pub mod rpc;
#[cfg(test)]
mod test_util;
pub mod types;

pub use client::NodeClient;
pub use config::ClientConfig;
pub use error::{NodeError, RpcError};
