/*
[INPUT]:  Mock exchange responses
[OUTPUT]: Test results for the session driver
[POS]:    Integration tests - authenticate-then-operate flow
[UPDATE]: When session startup or failure handling changes
*/

use deribit_session::{Operation, RunSummary, Session, SessionConfig, demo_plan};
use serde_json::{Value, json};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> SessionConfig {
    SessionConfig {
        base_url: server.uri(),
        client_id: Some("client-id".to_string()),
        client_secret: Some("client-secret".to_string()),
        ..SessionConfig::default()
    }
}

fn ok(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"jsonrpc": "2.0", "id": 1, "result": result}))
}

async fn mount(server: &MockServer, method_path: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(format!("/api/v2/{method_path}")))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_exchange(server: &MockServer) {
    mount(server, "public/auth", ok(json!({"access_token": "T"}))).await;
    mount(server, "private/buy", ok(json!({"order": {"order_id": "1"}, "trades": []}))).await;
    mount(server, "private/edit", ok(json!({"order": {"order_id": "ETH-21668794289"}}))).await;
    mount(
        server,
        "public/get_order_book",
        ok(json!({
            "best_bid_price": 99, "best_bid_amount": 2,
            "best_ask_price": 100, "best_ask_amount": 5,
            "asks": [[100, 5], [101, 3]], "bids": [[99, 2]],
            "mark_price": 99.5, "open_interest": 10, "timestamp": 0
        })),
    )
    .await;
    mount(
        server,
        "private/get_position",
        ok(json!({
            "estimated_liquidation_price": null, "size_currency": 0,
            "total_profit_loss": 0, "leverage": 50,
            "average_price": 0, "mark_price": 62000
        })),
    )
    .await;
    mount(
        server,
        "private/get_open_orders",
        ok(json!([{"instrument_name": "BTC-PERPETUAL", "order_id": "1", "price": 20, "amount": 10}])),
    )
    .await;
}

#[tokio::test]
async fn test_missing_credentials_fail_before_network() {
    let server = MockServer::start().await;
    let config = SessionConfig {
        client_secret: None,
        ..config_for(&server)
    };

    let err = Session::start(&config).await.unwrap_err();
    assert!(err.to_string().contains("CLIENT_SECRET"));

    let requests = server.received_requests().await.expect("recording");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_auth_failure_stops_session() {
    let server = MockServer::start().await;
    mount(
        &server,
        "public/auth",
        ResponseTemplate::new(400).set_body_json(json!({
            "jsonrpc": "2.0", "id": 1,
            "error": {"code": 13004, "message": "invalid_credentials"}
        })),
    )
    .await;

    let err = Session::start(&config_for(&server)).await.unwrap_err();
    assert!(err.to_string().contains("unable to obtain access token"));
    assert!(format!("{err:#}").contains("invalid_credentials"));

    let requests = server.received_requests().await.expect("recording");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_demo_continues_past_failures() {
    let server = MockServer::start().await;
    mount_exchange(&server).await;
    mount(
        &server,
        "private/cancel",
        ResponseTemplate::new(400).set_body_json(json!({
            "jsonrpc": "2.0", "id": 1,
            "error": {"code": 11044, "message": "not_open_order"}
        })),
    )
    .await;

    let session = assert_ok!(Session::start(&config_for(&server)).await);
    let mut out = Vec::new();
    let summary = assert_ok!(session.run_all(&demo_plan(), &mut out).await);

    assert_eq!(summary, RunSummary { succeeded: 7, failed: 1 });

    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Cancel order failed [rejected]: RPC error code 11044: not_open_order"));
    assert!(text.contains("Asks:\nPrice: 100, Amount: 5\nPrice: 101, Amount: 3\n"));
    assert!(text.contains("Instrument: BTC-PERPETUAL, Order ID: 1, Price: 20, Amount: 10"));

    let requests = server.received_requests().await.expect("recording");
    assert_eq!(requests.len(), 9);
    for request in &requests[1..] {
        let auth = request
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok());
        assert_eq!(auth, Some("Bearer T"));
    }
}

#[tokio::test]
async fn test_single_operation() {
    let server = MockServer::start().await;
    mount_exchange(&server).await;

    let session = assert_ok!(Session::start(&config_for(&server)).await);
    let mut out = Vec::new();
    let operation = Operation::Buy {
        instrument: "BTC-PERPETUAL".to_string(),
        price: "20".to_string(),
        amount: "10".to_string(),
    };
    let summary = assert_ok!(session.run_all(&[operation], &mut out).await);

    assert_eq!(summary, RunSummary { succeeded: 1, failed: 0 });
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "Place order response: {\"order\":{\"order_id\":\"1\"},\"trades\":[]}\n"
    );
}
