//! Service implementations for the WordEmbeddings API.
//!
//! - `models` - Model and model version management
//! - `finetune` - Fine-tune submission and status
//! - `inference` - Embedding inference, evaluation and worker lifecycle

pub mod finetune;
pub mod inference;
pub mod models;
