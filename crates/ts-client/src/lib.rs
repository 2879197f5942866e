//! Transport layer for the `/api/simplify` endpoint.

pub mod http;
pub mod transport;

pub use http::HttpTransport;
pub use transport::SimplifyTransport;
