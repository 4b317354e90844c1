//! Fine-tune service implementation.

use super::types::FineTuneRequest;
use crate::client::session::Session;
use crate::errors::EmbeddingsResult;
use http::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Serialize)]
struct StatusRequest<'a> {
    finetune_id: &'a str,
}

/// Fine-tune job submission and status reads.
///
/// The client never waits on a job; callers poll [`FineTuneService::check_status`]
/// themselves.
#[derive(Clone)]
pub struct FineTuneService {
    session: Arc<Session>,
}

impl FineTuneService {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Submit a fine-tune job and return the job record (including its id)
    pub async fn submit(&self, request: FineTuneRequest) -> EmbeddingsResult<Value> {
        let response = self
            .session
            .execute("finetuning", Method::POST, &["finetune_model"], Some(&request))
            .await?;

        response.json()
    }

    /// Read the current status of a fine-tune job
    pub async fn check_status(&self, finetune_id: &str) -> EmbeddingsResult<Value> {
        let response = self
            .session
            .execute(
                "checking finetune status",
                Method::POST,
                &["status_model"],
                Some(&StatusRequest { finetune_id }),
            )
            .await?;

        response.json()
    }
}
