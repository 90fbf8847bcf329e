//! Error types for stackprobe operations.
//!
//! This module defines [`StackprobeError`], the primary error type, and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures never appear here: each probe folds them into the
//!   rendered page as display text
//! - `StackprobeError` covers startup failures (binding the listener,
//!   serving) that happen before any page exists
//! - Use `anyhow::Error` (via `StackprobeError::Other`) for unexpected errors

use std::net::SocketAddr;
use thiserror::Error;

/// Core error type for stackprobe operations.
#[derive(Debug, Error)]
pub enum StackprobeError {
    /// The HTTP listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for stackprobe operations.
pub type Result<T> = std::result::Result<T, StackprobeError>;
