//! Credential headers for the WordEmbeddings API.
//!
//! The service identifies a caller by two plain headers, `customer_id` and
//! `api_key`, sent on every request of a session.

use http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

/// Header carrying the customer identifier.
pub const CUSTOMER_ID_HEADER: &str = "customer_id";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "api_key";

/// Trait for managing authentication headers
pub trait AuthManager: Send + Sync {
    /// Get the authentication headers for a request
    fn get_headers(&self) -> HeaderMap;

    /// Add authentication headers to an existing header map
    fn add_auth_headers(&self, headers: &mut HeaderMap);

    /// Check that the credentials can be carried in HTTP headers
    fn validate_credentials(&self) -> Result<(), String>;
}

/// Customer id + API key header authentication
pub struct CustomerAuthManager {
    customer_id: String,
    api_key: SecretString,
    user_agent_suffix: Option<String>,
}

impl CustomerAuthManager {
    /// Create a new customer authentication manager
    pub fn new(customer_id: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            customer_id: customer_id.into(),
            api_key,
            user_agent_suffix: None,
        }
    }

    /// Create a new customer authentication manager with a User-Agent suffix
    pub fn with_user_agent_suffix(
        customer_id: impl Into<String>,
        api_key: SecretString,
        user_agent_suffix: Option<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            api_key,
            user_agent_suffix,
        }
    }

    /// Build the User-Agent header value
    fn build_user_agent(&self) -> String {
        let base = format!("integrations-word-embeddings/{}", env!("CARGO_PKG_VERSION"));
        match self.user_agent_suffix {
            Some(ref suffix) => format!("{} {}", base, suffix),
            None => base,
        }
    }
}

impl AuthManager for CustomerAuthManager {
    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.add_auth_headers(&mut headers);
        headers
    }

    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        let json = HeaderValue::from_static("application/json");
        headers.insert(CONTENT_TYPE, json.clone());
        headers.insert(ACCEPT, json);

        if let Ok(value) = HeaderValue::from_str(&self.build_user_agent()) {
            headers.insert(USER_AGENT, value);
        }

        if let Ok(value) = HeaderValue::from_str(&self.customer_id) {
            headers.insert(HeaderName::from_static(CUSTOMER_ID_HEADER), value);
        }

        if let Ok(mut value) = HeaderValue::from_str(self.api_key.expose_secret()) {
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }
    }

    fn validate_credentials(&self) -> Result<(), String> {
        if self.customer_id.trim().is_empty() {
            return Err("Customer id cannot be empty".to_string());
        }
        if self.api_key.expose_secret().trim().is_empty() {
            return Err("API key cannot be empty".to_string());
        }

        HeaderValue::from_str(&self.customer_id)
            .map_err(|_| "Customer id contains characters not allowed in a header".to_string())?;
        HeaderValue::from_str(self.api_key.expose_secret())
            .map_err(|_| "API key contains characters not allowed in a header".to_string())?;

        if let Some(ref suffix) = self.user_agent_suffix {
            HeaderValue::from_str(suffix).map_err(|_| {
                "User-Agent suffix contains characters not allowed in a header".to_string()
            })?;
        }

        Ok(())
    }
}
