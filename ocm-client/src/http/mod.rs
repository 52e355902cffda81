//! HTTP transport layer

pub mod transport;

pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
