//! Error types for the HR admin engine.
//!
//! The payroll engine and the route gate never fail; these errors come from
//! the layers around them (configuration loading and request decoding).

use thiserror::Error;

/// The main error type for the HR admin engine.
///
/// # Example
///
/// ```
/// use hr_admin_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/gate.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/gate.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// An inbound request could not be turned into engine input.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
