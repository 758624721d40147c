//! Backend Module
//!
//! All server-side code: the Axum HTTP server, the login gateway, SQLite
//! persistence for users and posts, and JWT sessions.
//!
//! This module is only compiled when the `ssr` feature is enabled (it is on
//! by default).
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credentials, token issuance, the login gateway
//! - **`users`** - User storage, `UserService`, account handlers
//! - **`posts`** - Post lookups, `PostService`
//! - **`middleware`** - Bearer token verification
//! - **`extract`** - Extractors that reject with `BackendError`
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Collaborators
//!
//! Handlers never reach for globals. Every collaborator is a trait object
//! held by `AppState` and handed in at construction time:
//!
//! | Port | Production implementation |
//! |------|---------------------------|
//! | `CredentialStore` | `SqliteUserStore` |
//! | `TokenIssuer` | `JwtSessions` |
//! | `UserService` | `SqliteUserStore` |
//! | `PostService` | `SqlitePostStore` |
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, BackendError>`; `BackendError` maps itself
//! to a status code and a JSON body.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and login
pub mod auth;

/// User accounts
pub mod users;

/// Posts by author and editor
pub mod posts;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

/// Re-export commonly used types
pub use server::{create_app, AppState, ServerConfig};
pub use auth::{AuthGateway, LoginError};
pub use error::BackendError;
