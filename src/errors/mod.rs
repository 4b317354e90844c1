//! Error types for the WordEmbeddings API client.

mod error;

pub use error::{EmbeddingsError, EmbeddingsResult};
