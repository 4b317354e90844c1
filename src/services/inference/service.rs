//! Inference service implementation.

use super::types::{EvaluationRequest, InferenceRequest, WorkerRequest};
use crate::client::session::Session;
use crate::errors::{EmbeddingsError, EmbeddingsResult};
use crate::transport::TransportResponse;
use crate::types::Embedding;
use http::Method;
use serde_json::Value;
use std::sync::Arc;

/// Embedding inference, evaluation and worker lifecycle
#[derive(Clone)]
pub struct InferenceService {
    session: Arc<Session>,
}

impl InferenceService {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Embed texts, returning one vector per input in input order
    pub async fn embed(&self, request: InferenceRequest) -> EmbeddingsResult<Vec<Embedding>> {
        let response = self
            .session
            .execute("performing inference", Method::POST, &["inference"], Some(&request))
            .await?;

        response.json()
    }

    /// Score samples with a model version
    pub async fn evaluate(&self, request: EvaluationRequest) -> EmbeddingsResult<Value> {
        let response = self
            .session
            .execute("performing evaluation", Method::POST, &["evaluation"], Some(&request))
            .await?;

        response.json()
    }

    /// Ask the service to keep the worker for a model version warm.
    ///
    /// Best effort: a failed call is logged and reported as `false`. Only an
    /// unauthenticated session produces an error.
    pub async fn keep_alive(
        &self,
        model_id: &str,
        model_version_id: &str,
    ) -> EmbeddingsResult<bool> {
        let request = WorkerRequest::new(model_id, model_version_id);
        let outcome = self
            .session
            .send(Method::POST, &["keep_alive"], Some(&request))
            .await;

        match best_effort(outcome)? {
            Ok(()) => {
                tracing::info!(
                    model_id = model_id,
                    model_version_id = model_version_id,
                    "Model worker will be kept alive until tear down"
                );
                Ok(true)
            }
            Err(reason) => {
                tracing::warn!(
                    model_id = model_id,
                    model_version_id = model_version_id,
                    reason = %reason,
                    "Issue setting worker to be kept alive"
                );
                Ok(false)
            }
        }
    }

    /// Ask the service to release the worker for a model version.
    ///
    /// Best effort: a failed call is logged and otherwise ignored. Only an
    /// unauthenticated session produces an error.
    pub async fn tear_down(&self, model_id: &str, model_version_id: &str) -> EmbeddingsResult<()> {
        let request = WorkerRequest::new(model_id, model_version_id);
        let outcome = self
            .session
            .send(Method::POST, &["tear_down"], Some(&request))
            .await;

        match best_effort(outcome)? {
            Ok(()) => tracing::info!(
                model_id = model_id,
                model_version_id = model_version_id,
                "Model worker will be torn down"
            ),
            Err(reason) => tracing::warn!(
                model_id = model_id,
                model_version_id = model_version_id,
                reason = %reason,
                "Issue tearing down worker"
            ),
        }

        Ok(())
    }
}

/// Split a best-effort call into a hard error (authentication only) and a
/// soft outcome carrying the failure description.
fn best_effort(
    outcome: EmbeddingsResult<TransportResponse>,
) -> EmbeddingsResult<Result<(), String>> {
    match outcome {
        Ok(response) if response.is_success() => Ok(Ok(())),
        Ok(response) => Ok(Err(format!(
            "status code: {}, text: {}",
            response.status,
            response.text()
        ))),
        Err(e @ EmbeddingsError::Authentication { .. }) => Err(e),
        Err(e) => Ok(Err(e.to_string())),
    }
}
