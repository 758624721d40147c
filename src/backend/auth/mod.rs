//! Authentication Module
//!
//! This module handles login: validating credentials and issuing session
//! tokens, plus the HTTP handlers that expose it.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Credentials, UsernameMatching, CredentialStore port
//! ├── sessions.rs     - TokenIssuer port and JWT sessions
//! ├── gateway.rs      - AuthGateway login orchestration
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs
//!     ├── login.rs    - GET/POST /api/users/login
//!     └── validate.rs - GET /api/users/validate
//! ```
//!
//! # Login Flow
//!
//! 1. Credentials validated by the `CredentialStore` → no match is 404
//! 2. Token requested from the `TokenIssuer` → no token is 500
//! 3. Identity returned with the token attached
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Secrets are redacted from `Debug` output and never logged
//! - JWT tokens expire after the configured TTL (30 days by default)

/// Credentials and the credential store port
pub mod credentials;

/// Token issuance and JWT verification
pub mod sessions;

/// Login orchestration
pub mod gateway;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use credentials::{CredentialStore, Credentials, UsernameMatching};
pub use gateway::{AuthGateway, LoginError};
pub use sessions::{Claims, JwtSessions, TokenIssuer};
pub use handlers::{login, login_json, validate};
