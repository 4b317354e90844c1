//! Types for the Fine-tune service.

use serde::Serialize;
use serde_json::Value;

/// Loss function used when a dataset does not name one
pub const DEFAULT_LOSS: &str = "tripletloss";

/// Training epochs used when a request does not set them
pub const DEFAULT_EPOCHS: u32 = 10;

/// Batch size used when a request does not set it
pub const DEFAULT_BATCH_SIZE: u32 = 4;

/// Learning rate used when a request does not set it
pub const DEFAULT_LEARNING_RATE: f64 = 1e-3;

/// A set of training examples sharing one loss function.
///
/// Examples are opaque to the client, e.g. `["anchor", "positive",
/// "negative"]` or `{"texts": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FineTuneDataset {
    /// Loss function name
    pub loss: String,
    /// Parameters for the loss function
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loss_params: Option<Value>,
    /// Training examples
    pub examples: Vec<Value>,
}

impl Default for FineTuneDataset {
    fn default() -> Self {
        Self {
            loss: DEFAULT_LOSS.to_string(),
            loss_params: None,
            examples: Vec::new(),
        }
    }
}

impl FineTuneDataset {
    /// Create an empty dataset using the default loss
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the loss function
    pub fn loss(mut self, loss: impl Into<String>) -> Self {
        self.loss = loss.into();
        self
    }

    /// Set the loss function parameters
    pub fn loss_params(mut self, params: Value) -> Self {
        self.loss_params = Some(params);
        self
    }

    /// Add one example as given
    pub fn example(mut self, example: Value) -> Self {
        self.examples.push(example);
        self
    }

    /// Add one example made of ordered text fields
    pub fn texts<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        self.examples.push(Value::from(texts));
        self
    }
}

/// Request to fine-tune a new version of a model.
///
/// Optional identifiers and the evaluator are sent as `null` when unset.
#[derive(Debug, Clone, Serialize)]
pub struct FineTuneRequest {
    /// Model to fine-tune
    pub model_id: String,
    /// Version to start from
    pub model_version_id: Option<String>,
    /// Version number to assign
    pub model_version: Option<u32>,
    /// Training data
    pub datasets: Vec<FineTuneDataset>,
    /// Number of training epochs
    pub epochs: u32,
    /// Batch size
    pub batch_size: u32,
    /// Evaluator configuration, passed through untouched
    pub evaluator: Option<Value>,
    /// Learning rate
    pub learning_rate: f64,
}

impl FineTuneRequest {
    /// Create a request with default hyperparameters
    pub fn new(model_id: impl Into<String>, datasets: Vec<FineTuneDataset>) -> Self {
        Self {
            model_id: model_id.into(),
            model_version_id: None,
            model_version: None,
            datasets,
            epochs: DEFAULT_EPOCHS,
            batch_size: DEFAULT_BATCH_SIZE,
            evaluator: None,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    /// Start from an existing version
    pub fn model_version_id(mut self, model_version_id: impl Into<String>) -> Self {
        self.model_version_id = Some(model_version_id.into());
        self
    }

    /// Set the version number to assign
    pub fn model_version(mut self, model_version: u32) -> Self {
        self.model_version = Some(model_version);
        self
    }

    /// Set training epochs
    pub fn epochs(mut self, epochs: u32) -> Self {
        self.epochs = epochs;
        self
    }

    /// Set batch size
    pub fn batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set evaluator configuration
    pub fn evaluator(mut self, evaluator: Value) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Set learning rate
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }
}
