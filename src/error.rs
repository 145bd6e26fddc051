//! Error types for the staffing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and its HTTP layer can report.

use thiserror::Error;

/// The main error type for the staffing engine.
///
/// # Example
///
/// ```
/// use staffing_engine::error::EngineError;
///
/// let error = EngineError::EmptyResult {
///     scope: "employee 7 in 2024-03".to_string(),
/// };
/// assert_eq!(error.to_string(), "No records found for employee 7 in 2024-03");
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

    /// A caller-supplied value was missing or malformed.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The parameter that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Nothing matched a request scoped to a single subject.
    #[error("No records found for {scope}")]
    EmptyResult {
        /// Human-readable description of the requested scope.
        scope: String,
    },

    /// The record store could not be read.
    #[error("Failed to fetch {resource}: {message}")]
    UpstreamFetchFailure {
        /// The kind of record that was being fetched.
        resource: String,
        /// The store's description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
