/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors carry their own status code:
 * - Invalid identifiers or request fields (400)
 * - Missing or invalid bearer tokens (401)
 * - Unknown resources (404)
 * - Duplicate usernames or emails (409)
 *
 * ## Fatal Errors
 *
 * Internal inconsistencies that are not the caller's fault, such as a
 * validated identity for which no session token could be issued.
 *
 * ## Infrastructure Errors
 *
 * Database, migration, password hashing and token signing failures. Their
 * details are logged but never sent to the client.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use blog_gateway::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::not_found("User 7 not found");
/// let err = BackendError::fatal("Token is null");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., bad input, missing resource, missing token)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Unexpected internal inconsistency
    #[error("Fatal error: {message}")]
    Fatal {
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// JWT signing or verification error
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// bcrypt hashing or verification error
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// Create a new fatal error
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message: message.into(),
        }
    }

    /// Whether this error is a duplicate key violation reported by the database
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database(err) => err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation()),
            _ => false,
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Database` - 409 for unique violations, otherwise 500
    /// - `SharedError` - 400 (request validation)
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Database(_) if self.is_unique_violation() => StatusCode::CONFLICT,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Fatal { .. }
            | Self::Database(_)
            | Self::Migration(_)
            | Self::Token(_)
            | Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Infrastructure details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(_) => self.to_string(),
            Self::Database(_) if self.is_unique_violation() => {
                "Username or email already registered".to_string()
            }
            _ => "Internal server error".to_string(),
        }
    }
}
