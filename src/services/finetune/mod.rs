//! Fine-tuning jobs.

mod service;
mod types;

pub use service::FineTuneService;
pub use types::{
    FineTuneDataset, FineTuneRequest, DEFAULT_BATCH_SIZE, DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE,
    DEFAULT_LOSS,
};
