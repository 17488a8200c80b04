//! Error types for the staffdesk plugin.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// The main error type for directory operations.
///
/// Consolidates every failure the plugin can observe: rejected or failed
/// backend calls, undecodable payloads, form validation and local I/O
/// (themes, trace files).
///
/// # Examples
///
/// ```
/// use staffdesk::DirectoryError;
///
/// let err = DirectoryError::Validation("Please fill in all fields".to_string());
/// assert_eq!(err.to_string(), "Validation error: Please fill in all fields");
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The backend answered with a non-success status, or the host reported
    /// a transport failure.
    #[error("Remote store error (status {status}): {message}")]
    Remote {
        /// HTTP status reported by the host.
        status: u16,
        /// Response body, lossily decoded, for diagnostics.
        message: String,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request body could not be encoded.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Form input failed the presence checks.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DirectoryError {
    /// Returns `true` for failures reported by the backend or the transport.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::Decode(_))
    }
}

/// A specialized `Result` type for staffdesk operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
