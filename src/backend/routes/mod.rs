//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - /api/users endpoints
//! ```
//!
//! # Route Organization
//!
//! 1. **API Routes** - Login, credential check, account endpoints
//! 2. **Fallback Handler** - JSON 404 for everything else
//!
//! Requests are traced with `tower_http::trace::TraceLayer`.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
