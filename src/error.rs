//! Error types for the Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur outside of input validation: loading
//! statutory configuration and building persistence records.

use thiserror::Error;

/// The main error type for the Settlement Engine.
///
/// Input problems are not reported through this type. A malformed
/// [`SettlementInput`](crate::models::SettlementInput) produces a
/// [`SettlementResult`](crate::models::SettlementResult) whose
/// `validation_errors` list is non-empty.
///
/// # Example
///
/// ```
/// use settlement_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// The statutory rate table is empty or inconsistent.
    #[error("Invalid statutory table: {message}")]
    InvalidStatutoryTable {
        /// A description of what made the table invalid.
        message: String,
    },

    /// A settlement could not be turned into a history record.
    #[error("Invalid settlement: {message}")]
    InvalidSettlement {
        /// A description of why the settlement was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
