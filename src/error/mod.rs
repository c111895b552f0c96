// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for formrules.
//!
//! Builders never fail. Errors only surface from configuration loading,
//! from a form validation run, and as the failure value a checker reports
//! for a single field.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for formrules operations.
#[derive(Error, Debug)]
pub enum FormError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Field declared more than once: {name}")]
    DuplicateField { name: String },
}

/// Errors from running a whole form through the validator.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Form validation failed: {count} fields invalid")]
    Failed { count: usize },
}

/// Failure reported by a single rule checker.
///
/// The display form is the literal, user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CheckFailure {
    pub message: String,
}

impl CheckFailure {
    /// Create a failure carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// ID card rejection reasons, in the order the gates run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCardError {
    #[error("格式错误")]
    Format,

    #[error("地址编码错误")]
    Region,

    #[error("校验位错误")]
    Checksum,
}

/// Result type alias for formrules operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FormError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
