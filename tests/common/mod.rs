//! Shared helpers for integration tests using WireMock.

#![allow(dead_code)]

use integrations_word_embeddings::WordEmbeddingsClient;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CUSTOMER_ID: &str = "cust-123";
pub const API_KEY: &str = "key-abcdef";

/// Start a server that knows the test customer
pub async fn authenticated_server() -> MockServer {
    let server = MockServer::start().await;
    mount_customer_check(&server, true).await;
    server
}

/// Start a server that does not know the test customer
pub async fn unauthenticated_server() -> MockServer {
    let server = MockServer::start().await;
    mount_customer_check(&server, false).await;
    server
}

/// Mount the `/customer` existence check, requiring the credential headers
pub async fn mount_customer_check(server: &MockServer, exists: bool) {
    Mock::given(method("GET"))
        .and(path("/customer"))
        .and(header("customer_id", CUSTOMER_ID))
        .and(header("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "exists": exists })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mock with credential headers already matched
pub fn authed(method_name: &str, endpoint: &str) -> wiremock::MockBuilder {
    Mock::given(method(method_name))
        .and(path(endpoint))
        .and(header("customer_id", CUSTOMER_ID))
        .and(header("api_key", API_KEY))
}

/// Connect a client to the mock server
pub async fn connect(server: &MockServer) -> WordEmbeddingsClient {
    WordEmbeddingsClient::builder()
        .customer_id(CUSTOMER_ID)
        .api_key(API_KEY)
        .base_url(server.uri())
        .connect()
        .await
        .expect("Failed to connect client")
}
