//! Types for the Inference service.

use serde::Serialize;
use serde_json::Value;

/// Similarity function used when an evaluation does not name one
pub const DEFAULT_SIMILARITY_FUNCTION: &str = "cosine";

/// Request to embed texts with a model version
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest {
    /// Model to use
    pub model_id: String,
    /// Model version to use
    pub model_version_id: String,
    /// Texts to embed, in order
    pub input_texts: Vec<String>,
}

impl InferenceRequest {
    /// Create a new inference request
    pub fn new<I, S>(
        model_id: impl Into<String>,
        model_version_id: impl Into<String>,
        input_texts: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            model_id: model_id.into(),
            model_version_id: model_version_id.into(),
            input_texts: input_texts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Request to score samples with a model version
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRequest {
    /// Model to use
    pub model_id: String,
    /// Model version to use
    pub model_version_id: String,
    /// Samples to score, passed through untouched
    pub samples: Vec<Value>,
    /// Similarity function name
    pub similarity_function: String,
}

impl EvaluationRequest {
    /// Create a new evaluation request using cosine similarity
    pub fn new(
        model_id: impl Into<String>,
        model_version_id: impl Into<String>,
        samples: Vec<Value>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            model_version_id: model_version_id.into(),
            samples,
            similarity_function: DEFAULT_SIMILARITY_FUNCTION.to_string(),
        }
    }

    /// Set the similarity function
    pub fn similarity_function(mut self, similarity_function: impl Into<String>) -> Self {
        self.similarity_function = similarity_function.into();
        self
    }
}

/// Identifies the worker hosting one model version
#[derive(Debug, Clone, Serialize)]
pub(crate) struct WorkerRequest {
    model_id: String,
    model_version_id: String,
}

impl WorkerRequest {
    pub(crate) fn new(model_id: impl Into<String>, model_version_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            model_version_id: model_version_id.into(),
        }
    }
}
