//! Authenticated session shared by every service.

use crate::auth::AuthManager;
use crate::errors::{EmbeddingsError, EmbeddingsResult};
use crate::observability::{log_request, log_response, log_transport_error};
use crate::transport::{HttpTransport, TransportResponse};
use bytes::Bytes;
use http::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Body of the `/customer` existence check.
#[derive(Debug, Default, Deserialize)]
struct CustomerCheck {
    #[serde(default)]
    exists: bool,
}

/// Transport, credentials and validity of one client instance.
///
/// `valid` is decided once by [`Session::authenticate`] and never changes.
pub(crate) struct Session {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
    valid: bool,
}

impl Session {
    /// Probe `/customer` and build a session from the answer.
    ///
    /// Any outcome other than a 2xx with `"exists": true` yields an invalid
    /// session rather than an error.
    pub(crate) async fn authenticate(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        base_url: Url,
    ) -> EmbeddingsResult<Self> {
        let mut session = Self {
            transport,
            auth_manager,
            base_url,
            valid: false,
        };

        let url = session.url(&["customer"])?;
        session.valid = match session.dispatch(Method::GET, url, None).await {
            Ok(response) if response.is_success() => response
                .json::<CustomerCheck>()
                .map(|check| check.exists)
                .unwrap_or(false),
            Ok(response) => {
                tracing::debug!(status = response.status, "Customer check rejected");
                false
            }
            Err(e) => {
                tracing::debug!(error = %e, "Customer check failed");
                false
            }
        };

        if !session.valid {
            tracing::warn!("Session not authenticated, check api_key and customer_id are valid");
        }

        Ok(session)
    }

    /// Whether the service recognised the credentials
    pub(crate) fn is_valid(&self) -> bool {
        self.valid
    }

    /// Base URL requests are sent to
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fail with an authentication error unless the session is valid
    pub(crate) fn ensure_valid(&self) -> EmbeddingsResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(EmbeddingsError::invalid_session())
        }
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    pub(crate) fn url(&self, segments: &[&str]) -> EmbeddingsResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| EmbeddingsError::Configuration {
                message: format!("Base URL cannot carry endpoint paths: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send one request on a valid session and return the raw response.
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        payload: Option<&B>,
    ) -> EmbeddingsResult<TransportResponse> {
        self.ensure_valid()?;

        let url = self.url(segments)?;
        let body = payload
            .map(serde_json::to_vec)
            .transpose()?
            .map(Bytes::from);

        self.dispatch(method, url, body).await
    }

    /// Send one request on a valid session and require a 2xx answer.
    pub(crate) async fn execute<B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        method: Method,
        segments: &[&str],
        payload: Option<&B>,
    ) -> EmbeddingsResult<TransportResponse> {
        let response = self.send(method, segments, payload).await?;

        if response.is_success() {
            Ok(response)
        } else {
            Err(EmbeddingsError::Remote {
                operation,
                status: response.status,
                body: response.text(),
            })
        }
    }

    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        body: Option<Bytes>,
    ) -> EmbeddingsResult<TransportResponse> {
        let path = url.path().to_string();
        log_request(&method, &path);

        let started = Instant::now();
        let result = self
            .transport
            .send(method.clone(), url, self.auth_manager.get_headers(), body)
            .await;

        match &result {
            Ok(response) => log_response(
                &method,
                &path,
                response.status,
                started.elapsed().as_millis() as u64,
            ),
            Err(e) => log_transport_error(&method, &path, &e.to_string()),
        }

        result
    }
}

/// Payload with no fields, for requests that must not send a body.
pub(crate) const NO_BODY: Option<&()> = None;
