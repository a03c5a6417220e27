//! Opt-in resilience wrappers around dispatch operations.
//!
//! Retry is never embedded in dispatch itself; callers opt in by wrapping an
//! operation with [`retry::with_retry`]. This keeps every endpoint call a
//! single request unless the caller decided otherwise.

pub mod retry;

pub use retry::{with_retry, RetryPolicy};
