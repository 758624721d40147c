//! Main router creation

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Assemble every route, the 404 fallback and request tracing
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    router
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn fallback() -> BackendError {
    BackendError::not_found("Route not found")
}
