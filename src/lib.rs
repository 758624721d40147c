//! Blog Gateway - Main Library
//!
//! HTTP service for blog user accounts. Its core is the login gateway:
//! credentials are validated first, and only a confirmed identity is handed a
//! signed session token.
//!
//! # Module Structure
//!
//! - **`shared`** - Request/response types and validation rules usable by
//!   API clients as well as the server
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and routes
//!   - Login gateway, credential store and JWT sessions
//!   - SQLite persistence for users and posts
//!
//! # Login Outcomes
//!
//! | Outcome | Status |
//! |---------|--------|
//! | Identity with token | 200 |
//! | Credentials do not match | 404 |
//! | Token could not be issued | 500 |
//!
//! # Usage
//!
//! ```rust,no_run
//! use blog_gateway::backend::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Types shared between clients and server
pub mod shared;

/// Server-side code
#[cfg(feature = "ssr")]
pub mod backend;
