//! Error types shared by the containers.
//!
//! All failures are synchronous and fail-fast: detected before any mutation,
//! surfaced to the immediate caller, never retried or suppressed.

use thiserror::Error;

/// Index outside the container's valid window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for length {len}")]
pub struct OutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// Removal or peek on an empty queue or stack. The structure is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is empty")]
pub struct EmptyStructure(pub &'static str);
