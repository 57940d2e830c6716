/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for deribit-adapter tests

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use deribit_adapter::{AccessToken, ClientConfig, Credentials, DeribitClient, Transport};
use reqwest::Url;
use serde_json::{Value, json};
use wiremock::{MockServer, Request, ResponseTemplate};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> DeribitClient {
    DeribitClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Base URL nothing is listening on
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn mock_access_token() -> AccessToken {
    AccessToken::new("1582628593469.1MbQ-J_4.CBP-OqOwm_FBdMYj4cRK2dMXyHPfBtXGpzLxhWg31nHu")
}

pub fn test_credentials() -> Credentials {
    Credentials::new("client-id", "client-secret").expect("credentials")
}

/// 200 response carrying a JSON-RPC result
pub fn rpc_result(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": result,
        "usIn": 1_700_000_000_000_000_i64,
        "usOut": 1_700_000_000_000_500_i64,
        "usDiff": 500,
        "testnet": true,
    }))
}

/// 400 response carrying a JSON-RPC error, as the exchange sends it
pub fn rpc_error(code: i64, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": {"code": code, "message": message},
        "testnet": true,
    }))
}

/// Bodies of every request the server received, parsed as JSON
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    received(server)
        .await
        .iter()
        .map(|request| request.body_json::<Value>().expect("json body"))
        .collect()
}

pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
}

pub fn authorization(request: &Request) -> Option<String> {
    request
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// One call as seen by [`RecordingTransport`]
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub url: String,
    pub body: String,
    pub bearer: Option<String>,
}

/// Transport that records what it is given and replies with a fixed body
#[derive(Debug)]
pub struct RecordingTransport {
    reply: String,
    sent: Mutex<Vec<SentRequest>>,
}

impl RecordingTransport {
    pub fn replying(reply: Value) -> Self {
        Self {
            reply: reply.to_string(),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(
        &self,
        url: &Url,
        body: String,
        bearer: Option<&AccessToken>,
    ) -> deribit_adapter::Result<String> {
        self.sent.lock().expect("lock").push(SentRequest {
            url: url.to_string(),
            body,
            bearer: bearer.map(|token| token.as_str().to_string()),
        });
        Ok(self.reply.clone())
    }
}

/// Shared handle so the test can inspect a transport owned by the client
#[derive(Debug, Clone)]
pub struct SharedRecorder(pub std::sync::Arc<RecordingTransport>);

impl SharedRecorder {
    pub fn sent(&self) -> Vec<SentRequest> {
        self.0.sent.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Transport for SharedRecorder {
    async fn send(
        &self,
        url: &Url,
        body: String,
        bearer: Option<&AccessToken>,
    ) -> deribit_adapter::Result<String> {
        self.0.send(url, body, bearer).await
    }
}
