//! Observability module for logging.

mod logging;

pub use logging::{
    log_request, log_response, log_transport_error, LogFormat, LogLevel, LoggingConfig,
};
