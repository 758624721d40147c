//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`login`** - GET /api/users/login - Login with query parameters
//! - **`login_json`** - POST /api/users/login - Login with a JSON body
//! - **`validate`** - GET /api/users/validate - Check credentials, no token

/// Login handlers
pub mod login;

/// Credential check handler
pub mod validate;

pub use login::{login, login_json};
pub use validate::validate;
