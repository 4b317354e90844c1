//! Inference, evaluation and model worker lifecycle.

mod service;
mod types;

pub use service::InferenceService;
pub use types::{EvaluationRequest, InferenceRequest, DEFAULT_SIMILARITY_FUNCTION};
