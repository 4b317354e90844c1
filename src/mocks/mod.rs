//! Mock implementations for testing.
//!
//! `MockHttpTransport` records every request and replays queued responses,
//! so tests can assert on both the wire payload and the number of calls.

use crate::auth::AuthManager;
use crate::client::WordEmbeddingsClient;
use crate::config::EmbeddingsConfig;
use crate::errors::{EmbeddingsError, EmbeddingsResult};
use crate::fixtures::{customer_exists, customer_missing};
use crate::transport::{HttpTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use url::Url;

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<EmbeddingsResult<MockResponse>>>,
    requests: Mutex<Vec<MockRequest>>,
}

/// A mock response to return
#[derive(Clone)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: serde::Serialize>(data: &T) -> Self {
        Self {
            status: 200,
            body: serde_json::to_vec(data).unwrap(),
        }
    }

    /// Create a JSON error response
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::to_vec(&serde_json::json!({ "detail": message })).unwrap(),
        }
    }

    /// Create a response with a plain text body
    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
        }
    }
}

/// A recorded request
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// HTTP method
    pub method: Method,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Vec<u8>>,
}

impl MockRequest {
    /// Request body parsed as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().unwrap_or(b"null")).unwrap()
    }

    /// URL path of the request
    pub fn path(&self) -> String {
        Url::parse(&self.url).unwrap().path().to_string()
    }
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Add a response to return
    pub fn add_response(&self, response: MockResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    /// Make the next request fail without a response
    pub fn fail_next(&self, message: &str) {
        self.responses.lock().push_back(Err(EmbeddingsError::Network {
            message: message.to_string(),
        }));
    }

    /// Get recorded requests
    pub fn get_requests(&self) -> Vec<MockRequest> {
        self.requests.lock().clone()
    }

    /// Get the last request
    pub fn last_request(&self) -> Option<MockRequest> {
        self.requests.lock().last().cloned()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> EmbeddingsResult<TransportResponse> {
        self.requests.lock().push(MockRequest {
            method,
            url: url.to_string(),
            headers,
            body: body.as_ref().map(|b| b.to_vec()),
        });

        let response = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(MockResponse::raw(500, "No mock response configured")))?;

        Ok(TransportResponse {
            status: response.status,
            headers: HeaderMap::new(),
            body: Bytes::from(response.body),
        })
    }
}

/// Mock auth manager
pub struct MockAuthManager {
    headers: HeaderMap,
}

impl MockAuthManager {
    /// Create a new mock auth manager
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("customer_id", "mock-customer".parse().unwrap());
        headers.insert("api_key", "mock-api-key".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());
        Self { headers }
    }
}

impl Default for MockAuthManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthManager for MockAuthManager {
    fn get_headers(&self) -> HeaderMap {
        self.headers.clone()
    }

    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
    }

    fn validate_credentials(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Builder for clients wired to a `MockHttpTransport`
pub struct MockClientBuilder {
    transport: Arc<MockHttpTransport>,
}

impl MockClientBuilder {
    /// Create a builder whose customer check succeeds
    pub fn new() -> Self {
        let transport = Arc::new(MockHttpTransport::new());
        transport.add_response(MockResponse::json(&customer_exists()));
        Self { transport }
    }

    /// Create a builder whose customer check reports an unknown customer
    pub fn unauthenticated() -> Self {
        let transport = Arc::new(MockHttpTransport::new());
        transport.add_response(MockResponse::json(&customer_missing()));
        Self { transport }
    }

    /// Add a mock response
    pub fn with_response(self, response: MockResponse) -> Self {
        self.transport.add_response(response);
        self
    }

    /// Connect a client, then forget the customer check request
    pub async fn connect(self) -> (WordEmbeddingsClient, Arc<MockHttpTransport>) {
        let config = EmbeddingsConfig::builder()
            .customer_id("mock-customer")
            .api_key("mock-api-key")
            .base_url("https://api.example.com")
            .build()
            .unwrap();

        let client = WordEmbeddingsClient::builder()
            .config(config)
            .transport(self.transport.clone())
            .connect()
            .await
            .unwrap();

        self.transport.clear_requests();
        (client, self.transport)
    }
}

impl Default for MockClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport() {
        let transport = MockHttpTransport::new();
        transport.add_response(MockResponse::json(&serde_json::json!({"id": "m1"})));

        let response = transport
            .send(
                Method::POST,
                Url::parse("https://api.example.com/model").unwrap(),
                HeaderMap::new(),
                Some(Bytes::from(r#"{"model_name": "food"}"#)),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);

        let requests = transport.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path(), "/model");
        assert_eq!(requests[0].json()["model_name"], "food");
    }

    #[tokio::test]
    async fn test_mock_transport_failure() {
        let transport = MockHttpTransport::new();
        transport.fail_next("connection reset");

        let result = transport
            .send(
                Method::GET,
                Url::parse("https://api.example.com/customer").unwrap(),
                HeaderMap::new(),
                None,
            )
            .await;

        assert!(matches!(result, Err(EmbeddingsError::Network { .. })));
        assert_eq!(transport.get_requests().len(), 1);
    }
}
