//! Common types for the WordEmbeddings client.
//!
//! Operations hand back the service's JSON verbatim. The structs here are
//! optional typed views a caller can decode a returned record into with
//! [`from_record`].

use crate::errors::EmbeddingsResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single embedding vector, with the service's values kept at full precision.
pub type Embedding = Vec<f64>;

/// Decode a record returned by the client into a typed view.
pub fn from_record<T: DeserializeOwned>(record: &serde_json::Value) -> EmbeddingsResult<T> {
    Ok(T::deserialize(record)?)
}

/// A named embeddings model owned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Model identifier
    #[serde(alias = "model_id")]
    pub id: String,
    /// Model name
    #[serde(default, alias = "model_name")]
    pub name: Option<String>,
}

/// A trained snapshot of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelVersion {
    /// Version identifier
    #[serde(alias = "model_version_id")]
    pub id: String,
    /// Parent model identifier
    #[serde(default)]
    pub model_id: Option<String>,
    /// Training status
    #[serde(default, alias = "training_status")]
    pub status: Option<FineTuneStatus>,
}

/// A submitted fine-tuning job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineTuneJob {
    /// Job identifier, used with `check_status`
    #[serde(alias = "id")]
    pub finetune_id: String,
    /// Model being fine-tuned
    #[serde(default)]
    pub model_id: Option<String>,
    /// Model version the job produces
    #[serde(default)]
    pub model_version_id: Option<String>,
    /// Current status, when the service reports one
    #[serde(default)]
    pub status: Option<FineTuneStatus>,
}

/// Status of a fine-tuning job as reported by the service.
///
/// The service drives the job through submitted, running and then
/// succeeded or failed. Unrecognised values are kept in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FineTuneStatus {
    /// Accepted but not started
    Submitted,
    /// Training in progress
    Running,
    /// Training finished and the version is usable
    Succeeded,
    /// Training failed
    Failed,
    /// A status string this client does not know
    Unknown(String),
}

impl FineTuneStatus {
    /// Check if the job reached a final state
    pub fn is_terminal(&self) -> bool {
        matches!(self, FineTuneStatus::Succeeded | FineTuneStatus::Failed)
    }

    /// Check if the job finished successfully
    pub fn is_succeeded(&self) -> bool {
        matches!(self, FineTuneStatus::Succeeded)
    }

    /// Canonical string form
    pub fn as_str(&self) -> &str {
        match self {
            FineTuneStatus::Submitted => "submitted",
            FineTuneStatus::Running => "running",
            FineTuneStatus::Succeeded => "succeeded",
            FineTuneStatus::Failed => "failed",
            FineTuneStatus::Unknown(raw) => raw,
        }
    }
}

impl From<String> for FineTuneStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "submitted" | "queued" | "pending" => FineTuneStatus::Submitted,
            "running" | "training" | "in_progress" => FineTuneStatus::Running,
            "succeeded" | "success" | "completed" | "complete" | "done" => {
                FineTuneStatus::Succeeded
            }
            "failed" | "failure" | "error" => FineTuneStatus::Failed,
            _ => FineTuneStatus::Unknown(raw),
        }
    }
}

impl From<FineTuneStatus> for String {
    fn from(status: FineTuneStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for FineTuneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
