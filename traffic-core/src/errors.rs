//! errors.rs - Custom error types for the traffic-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific error types that callers can handle programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `traffic-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TrafficError {
    /// A call into the `Catalog` collaborator failed. Scoring aborts on the first one.
    #[error("Catalog operation '{operation}' failed: {source}")]
    Catalog {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid traffic configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to serialize traffic stats: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

impl TrafficError {
    pub(crate) fn catalog(operation: &'static str, source: anyhow::Error) -> Self {
        Self::Catalog { operation, source }
    }
}

/// Convenience alias used throughout the scorer.
pub type Result<T> = std::result::Result<T, TrafficError>;
