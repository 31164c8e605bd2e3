//! Shared test helpers for `nano-rpc-core` unit tests.
//!
//! Fixed addresses and hashes plus a constructor for a client over the
//! recording mock transport, so per-action tests read the same way.

use crate::client::NodeClient;
use crate::rpc::mock::{MockTransport, MockTransportBuilder};

// ==============================================================================
// Fixtures
// ==============================================================================

pub const ACCOUNT: &str = "nano_1abcxyz7kq6xgkq9q3shb4jrwwzwh4k3x8nb3kiqhxqhmfzimaxbk8h5c5m3";
pub const OTHER_ACCOUNT: &str = "nano_3t6k35gi95xu6tergt6p69ck76ogmitsa8mnijtpxm9fkcm736xtoncuohr3";
pub const PUBLIC_KEY: &str = "3068BB1CA04525BB0E416C485FE6A67FD52540227D267CC8B6E8DA958A7FA039";
pub const HASH: &str = "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F";
pub const OTHER_HASH: &str = "991CF190094C00F0B68E2E5F75F6BEE95A2E0BD93CEAA4A6734DB9F19B728948";

// ==============================================================================
// Client Builders
// ==============================================================================

/// Client over a mock transport answering with the builder's canned bodies.
pub fn mock_client(builder: MockTransportBuilder) -> NodeClient<MockTransport> {
    NodeClient::with_transport(builder.build())
}
