//! HTTP transport for the SnapAPI service.

pub mod http;

pub use http::HttpTransport;
