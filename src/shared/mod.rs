//! Shared Module
//!
//! This module contains the request and response types exchanged between API
//! clients and the server, together with the input validation rules that both
//! sides agree on.
//!
//! Nothing in here depends on the `ssr` feature, so client code can reuse the
//! same types to build requests and decode responses.

/// User account types, identifiers and validation rules
pub mod users;

/// Post types
pub mod posts;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use posts::PostResponse;
pub use users::{AddUserRequest, Identity, LoginRequest, UpdateUserRequest, UserId, UserResponse};
