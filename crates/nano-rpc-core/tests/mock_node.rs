use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use nano_rpc_core::{ClientConfig, NodeClient, RpcError};
use serde_json::{json, Value};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nano_rpc_core=debug")),
            )
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

/// Serve `app` on an ephemeral local port and return its base URL.
async fn spawn_node(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("mock node must bind");
    let addr = listener.local_addr().expect("bound listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock node must serve");
    });

    format!("http://{addr}")
}

fn client(url: &str) -> NodeClient {
    NodeClient::new(ClientConfig::new(url)).expect("client must construct")
}

// ==============================================================================
// Handlers
// ==============================================================================

/// Reflect the received body and the headers the client sent.
async fn echo(headers: HeaderMap, body: Bytes) -> Json<Value> {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    let received: Value = serde_json::from_slice(&body).expect("client must send JSON");
    Json(json!({
        "received": received,
        "content_type": header_str(header::CONTENT_TYPE.as_str()),
        "api_key": header_str("x-api-key"),
    }))
}

async fn account_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Account not found" })),
    )
}

async fn bad_account() -> Json<Value> {
    Json(json!({ "error": "Bad account number" }))
}

async fn double_encoded_balance() -> Json<Value> {
    let encoded = json!({ "balance": "100", "pending": "5" }).to_string();
    Json(Value::String(encoded))
}

async fn bad_gateway() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
}

/// Answers `account_balance`, delaying the account named `slow`.
async fn delayed_balance(State(hits): State<Arc<AtomicUsize>>, body: Bytes) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    let request: Value = serde_json::from_slice(&body).expect("client must send JSON");
    let account = request["account"].as_str().unwrap_or_default().to_owned();
    if account == "slow" {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
    Json(json!({ "balance": account, "pending": "0" }))
}

// ==============================================================================
// Tests
// ==============================================================================

#[tokio::test]
async fn posts_envelope_with_default_content_type() {
    init_tracing();
    let url = spawn_node(Router::new().route("/", post(echo))).await;

    let reply = client(&url)
        .call_value("mrai_to_raw", &json!({ "amount": 5 }))
        .await
        .expect("echo must resolve");

    assert_eq!(
        reply["received"],
        json!({ "action": "mrai_to_raw", "amount": 5 })
    );
    assert_eq!(reply["content_type"], "application/json");
    assert!(reply["api_key"].is_null());
}

#[tokio::test]
async fn caller_headers_merge_over_defaults() {
    init_tracing();
    let url = spawn_node(Router::new().route("/", post(echo))).await;

    let config = ClientConfig::new(&url)
        .header("x-api-key", "secret")
        .header("Content-Type", "application/json; charset=utf-8");
    let rpc = NodeClient::new(config).expect("client must construct");

    let reply = rpc.call_value("version", &()).await.expect("echo must resolve");
    assert_eq!(reply["received"], json!({ "action": "version" }));
    assert_eq!(reply["content_type"], "application/json; charset=utf-8");
    assert_eq!(reply["api_key"], "secret");
}

#[tokio::test]
async fn error_field_rejects_regardless_of_status() {
    init_tracing();
    let url = spawn_node(
        Router::new()
            .route("/", post(account_not_found))
            .route("/ok-status", post(bad_account)),
    )
    .await;

    let err = client(&url)
        .account_balance("nano_1abc")
        .await
        .expect_err("500 with error field must reject");
    let RpcError::Node(node) = err else {
        panic!("expected node error");
    };
    assert_eq!(node.body(), &json!({ "error": "Account not found" }));

    let err = client(&format!("{url}/ok-status"))
        .account_key("nano_1abc")
        .await
        .expect_err("200 with error field must reject");
    assert_eq!(
        err.node_error().and_then(|e| e.message()),
        Some("Bad account number")
    );
}

#[tokio::test]
async fn string_encoded_body_is_decoded() {
    init_tracing();
    let url = spawn_node(Router::new().route("/", post(double_encoded_balance))).await;

    let balance = client(&url)
        .account_balance("nano_1abc")
        .await
        .expect("double-encoded body must resolve");
    assert_eq!(balance.balance, "100");
    assert_eq!(balance.pending, "5");
}

#[tokio::test]
async fn non_json_body_is_invalid_response() {
    init_tracing();
    let url = spawn_node(Router::new().route("/", post(bad_gateway))).await;

    let err = client(&url)
        .block_count()
        .await
        .expect_err("html body must fail");
    assert!(matches!(err, RpcError::InvalidResponse(_)));
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("must bind");
    let addr = listener.local_addr().expect("bound listener has an address");
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .block_count()
        .await
        .expect_err("closed port must fail");

    assert!(matches!(err, RpcError::Transport(_)));
    assert!(err.node_error().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_calls_resolve_in_arrival_order() {
    init_tracing();
    let hits = Arc::new(AtomicUsize::new(0));
    let url = spawn_node(
        Router::new()
            .route("/", post(delayed_balance))
            .with_state(Arc::clone(&hits)),
    )
    .await;

    let rpc = client(&url);
    let (done_tx, mut done_rx) = tokio::sync::mpsc::unbounded_channel();

    for account in ["slow", "fast"] {
        let rpc = rpc.clone();
        let done_tx = done_tx.clone();
        tokio::spawn(async move {
            let balance = rpc
                .account_balance(account)
                .await
                .expect("balance must resolve");
            let _ = done_tx.send(balance.balance);
        });
        // Make sure the slow request is issued first.
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    drop(done_tx);

    let mut order = Vec::new();
    while let Some(account) = done_rx.recv().await {
        order.push(account);
    }

    assert_eq!(order, vec!["fast".to_owned(), "slow".to_owned()]);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn joined_calls_each_get_their_own_response() {
    init_tracing();
    let hits = Arc::new(AtomicUsize::new(0));
    let url = spawn_node(
        Router::new()
            .route("/", post(delayed_balance))
            .with_state(Arc::clone(&hits)),
    )
    .await;

    let rpc = client(&url);
    let (a, b) = futures::join!(rpc.account_balance("alice"), rpc.account_balance("bob"));

    assert_eq!(a.expect("alice must resolve").balance, "alice");
    assert_eq!(b.expect("bob must resolve").balance, "bob");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
