//! Model and model version management.

mod service;
mod types;

pub use service::ModelsService;
pub use types::ModelVersionFilter;
