//! HTTP transport layer for the WordEmbeddings API.

mod http_transport;

pub use http_transport::{HttpTransport, ReqwestTransport, TransportResponse};
