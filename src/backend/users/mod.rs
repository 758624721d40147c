//! Users Module
//!
//! User account storage and the HTTP handlers for `/api/users`.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - SQLite queries
//! ├── service.rs  - UserService trait
//! ├── store.rs    - SqliteUserStore (UserService + CredentialStore)
//! └── handlers.rs - HTTP handlers
//! ```

pub mod db;
pub mod service;
pub mod store;
pub mod handlers;

pub use service::UserService;
pub use store::SqliteUserStore;
