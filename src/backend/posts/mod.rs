//! Posts Module
//!
//! Read-only access to posts by author or last editor, used by the
//! `/api/users/{id}/posts` and `/api/users/{id}/edited-posts` endpoints.

pub mod db;
pub mod service;

pub use service::{PostService, SqlitePostStore};
