//! Error types for the validation service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that business-rule violations are not errors: validators report them
//! as plain string messages returned to the caller. The variants here cover
//! infrastructure failures only (configuration, server startup).

use thiserror::Error;

/// The main error type for the validation service.
///
/// # Example
///
/// ```
/// use fincheck::error::ServiceError;
///
/// let error = ServiceError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The HTTP server failed to start or crashed while serving.
    #[error("Server error: {message}")]
    Server {
        /// A description of the server failure.
        message: String,
    },
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
