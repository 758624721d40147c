//! Shared Error Types
//!
//! This module defines error types that are shared between API clients and the
//! server. They describe input problems that can be detected without touching
//! the database.
//!
//! # Error Categories
//!
//! - `ValidationError` - Request field validation failures
//!
//! # Usage
//!
//! ```rust
//! use blog_gateway::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "Username cannot be empty");
//! ```
use thiserror::Error;

/// Shared error types that can occur on both sides of the API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
