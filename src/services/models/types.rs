//! Types for the Models service.

use serde::Serialize;

/// Request to create a model
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateModelRequest {
    model_name: String,
}

impl CreateModelRequest {
    pub(crate) fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
        }
    }
}

/// Filter for listing model versions.
///
/// Unset or empty fields are left out of the payload entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelVersionFilter {
    /// Only versions of this model
    #[serde(skip_serializing_if = "is_blank")]
    pub model_id: Option<String>,
    /// Only this version
    #[serde(skip_serializing_if = "is_blank")]
    pub model_version_id: Option<String>,
}

impl ModelVersionFilter {
    /// Filter that matches every version of the customer
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one model
    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// Restrict to one version
    pub fn model_version_id(mut self, model_version_id: impl Into<String>) -> Self {
        self.model_version_id = Some(model_version_id.into());
        self
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
