//! Decoding of service response bodies.
//!
//! Success bodies are either raw bytes (binary endpoints) or JSON parsed into
//! the endpoint's declared shape. Error bodies come in two wire shapes, both
//! tolerated here; anything unparseable falls back to a synthesized
//! `HTTP_ERROR` so every failed call yields a structured error.

use crate::error::{ApiError, Details, Error};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Nested envelope: `{"error": {"code": ..., "message": ..., "details": ...}}`.
#[derive(Debug, Deserialize)]
struct NestedEnvelope {
    error: NestedError,
}

#[derive(Debug, Deserialize)]
struct NestedError {
    code: String,
    message: String,
    #[serde(default)]
    details: Option<Details>,
}

/// Flat envelope: `{"statusCode": N, "error": "CODE", "message": ..., "details": ...}`.
/// The `error` field carries the taxonomy code.
#[derive(Debug, Deserialize)]
struct FlatEnvelope {
    error: String,
    message: String,
    #[serde(default)]
    details: Option<Details>,
}

/// Parse an error body into an [`ApiError`].
///
/// The nested shape is probed first, then the flat shape. A body that is
/// neither (HTML error pages, truncated JSON, empty bodies) yields
/// `HTTP_ERROR` with an `"HTTP <status>"` message.
pub(crate) fn decode_error(status: u16, body: &[u8]) -> ApiError {
    if let Ok(env) = serde_json::from_slice::<NestedEnvelope>(body) {
        return ApiError::from_wire(env.error.code, env.error.message, status, env.error.details);
    }
    if let Ok(env) = serde_json::from_slice::<FlatEnvelope>(body) {
        return ApiError::from_wire(env.error, env.message, status, env.details);
    }
    ApiError::from_wire("HTTP_ERROR", format!("HTTP {status}"), status, None)
}

/// Parse a success body into the endpoint's declared shape.
///
/// Failure here is a local decode error, not an [`ApiError`].
pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(Error::Decode)
}
