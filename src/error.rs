//! Error types for ChatGenius
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for ChatGenius operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, snapshot persistence, user input validation,
/// and attachment handling.
#[derive(Error, Debug)]
pub enum ChatGeniusError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Snapshot persistence errors (reading/writing state files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// User input failed command-layer validation
    ///
    /// The stores themselves never validate; this variant belongs to the
    /// CLI surface (phone format, OTP format, empty titles).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Attachment-related errors (missing file, over the size cap)
    #[error("Attachment error: {0}")]
    Attachment(String),

    /// Operation requires a signed-in session
    #[error("Not signed in: {0}")]
    NotSignedIn(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for ChatGenius operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
