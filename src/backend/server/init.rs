/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum application: opening
 * the database, wiring collaborators into `AppState` and building the router.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Build `AppState` from the pool and configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated; the server has no
/// useful mode of operation without it.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing blog gateway");

    let pool = load_database(&config.database_url).await?;
    let app_state = AppState::from_pool(pool, config);

    tracing::info!(
        "Router configured (username matching: {:?})",
        config.username_matching
    );

    Ok(create_router(app_state))
}
