//! Models service implementation.

use super::types::{CreateModelRequest, ModelVersionFilter};
use crate::client::session::{Session, NO_BODY};
use crate::errors::EmbeddingsResult;
use http::Method;
use serde_json::Value;
use std::sync::Arc;

/// Model and model version management
#[derive(Clone)]
pub struct ModelsService {
    session: Arc<Session>,
}

impl ModelsService {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// List every model of the customer.
    ///
    /// The response body is returned as sent by the service.
    pub async fn list(&self) -> EmbeddingsResult<Value> {
        let response = self
            .session
            .execute("getting models", Method::GET, &["models"], NO_BODY)
            .await?;

        response.json()
    }

    /// Create a model and return the service's record, including its id
    pub async fn create(&self, model_name: impl Into<String>) -> EmbeddingsResult<Value> {
        let request = CreateModelRequest::new(model_name);

        let response = self
            .session
            .execute("creating model", Method::POST, &["model"], Some(&request))
            .await?;

        response.json()
    }

    /// Delete a model by id
    pub async fn delete(&self, model_id: &str) -> EmbeddingsResult<bool> {
        self.session
            .execute("deleting model", Method::DELETE, &["model", model_id], NO_BODY)
            .await?;

        Ok(true)
    }

    /// Delete one version of a model
    pub async fn delete_version(
        &self,
        model_id: &str,
        model_version_id: &str,
    ) -> EmbeddingsResult<bool> {
        self.session
            .execute(
                "deleting model version",
                Method::DELETE,
                &["model", model_id, "model_version", model_version_id],
                NO_BODY,
            )
            .await?;

        Ok(true)
    }

    /// List model versions, optionally narrowed by `filter`
    pub async fn list_versions(&self, filter: ModelVersionFilter) -> EmbeddingsResult<Value> {
        let response = self
            .session
            .execute(
                "getting model versions",
                Method::POST,
                &["model_versions"],
                Some(&filter),
            )
            .await?;

        response.json()
    }
}
