//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token verification for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use blog_gateway::backend::middleware::auth_middleware;
//!
//! let protected = get(handler).route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{AuthenticatedUser, AuthUser, auth_middleware};
