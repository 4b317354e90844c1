//! # WordEmbeddings API Client
//!
//! Rust client for the WordEmbeddings service: manage embeddings models,
//! fine-tune new model versions, and run inference and evaluation against
//! them.
//!
//! ## Features
//!
//! - Session authentication checked once at connect time
//! - Models: list, create, delete, list and delete versions
//! - Fine-tuning: submit jobs and read their status
//! - Inference and evaluation with a trained model version
//! - Best-effort keep-alive and tear-down of model workers
//! - Secure credential handling with `SecretString`
//! - Structured logging through `tracing`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_word_embeddings::{InferenceRequest, WordEmbeddingsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Or WordEmbeddingsClient::from_env().await?
//!     let client = WordEmbeddingsClient::builder()
//!         .customer_id("your-customer-id")
//!         .api_key("your-api-key")
//!         .connect()
//!         .await?;
//!
//!     let vectors = client
//!         .inference()
//!         .embed(InferenceRequest::new("model-id", "version-id", ["bagel", "fried chicken"]))
//!         .await?;
//!     println!("{} embeddings", vectors.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Main client interface and builder
//! - `config` - Configuration types and builder
//! - `auth` - Credential headers
//! - `transport` - HTTP transport layer
//! - `errors` - Error types
//! - `types` - Typed views over returned records
//! - `observability` - Logging
//! - `services` - API service implementations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

// Development/testing modules
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mocks;

pub use auth::{AuthManager, CustomerAuthManager};
pub use client::{WordEmbeddingsClient, WordEmbeddingsClientBuilder};
pub use config::{EmbeddingsConfig, EmbeddingsConfigBuilder, DEFAULT_BASE_URL};
pub use errors::{EmbeddingsError, EmbeddingsResult};
pub use observability::{LogFormat, LogLevel, LoggingConfig};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
pub use types::{from_record, Embedding, FineTuneJob, FineTuneStatus, Model, ModelVersion};

pub use services::finetune::{FineTuneDataset, FineTuneRequest, FineTuneService};
pub use services::inference::{EvaluationRequest, InferenceRequest, InferenceService};
pub use services::models::{ModelVersionFilter, ModelsService};
