//! Test server over a fresh in-memory database

use std::sync::Arc;

use axum_test::TestServer;
use blog_gateway::backend::auth::{JwtSessions, TokenIssuer, UsernameMatching};
use blog_gateway::backend::posts::SqlitePostStore;
use blog_gateway::backend::routes::create_router;
use blog_gateway::backend::server::config::connect_in_memory;
use blog_gateway::backend::users::SqliteUserStore;
use blog_gateway::backend::{AppState, ServerConfig};
use sqlx::SqlitePool;

pub const TEST_SECRET: &str = "test-secret";

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub pool: SqlitePool,
}

pub fn test_config(matching: UsernameMatching) -> ServerConfig {
    ServerConfig {
        jwt_secret: TEST_SECRET.to_string(),
        username_matching: matching,
        bcrypt_cost: 4,
        ..ServerConfig::default()
    }
}

/// Production wiring, case-sensitive usernames
pub async fn spawn_app() -> TestApp {
    spawn_app_with(UsernameMatching::CaseSensitive).await
}

pub async fn spawn_app_with(matching: UsernameMatching) -> TestApp {
    let pool = connect_in_memory().await.expect("Failed to open in-memory database");
    let state = AppState::from_pool(pool.clone(), &test_config(matching));
    build(state, pool)
}

/// Production stores, but tokens come from `issuer`
pub async fn spawn_app_with_issuer(issuer: Arc<dyn TokenIssuer>) -> TestApp {
    let pool = connect_in_memory().await.expect("Failed to open in-memory database");
    let config = test_config(UsernameMatching::CaseSensitive);
    let store = Arc::new(SqliteUserStore::new(pool.clone(), config.username_matching, config.bcrypt_cost));

    let state = AppState::new(
        store.clone(),
        issuer,
        store,
        Arc::new(SqlitePostStore::new(pool.clone())),
        Arc::new(JwtSessions::new(TEST_SECRET, config.token_ttl_secs)),
    );
    build(state, pool)
}

fn build(state: AppState, pool: SqlitePool) -> TestApp {
    let server = TestServer::new(create_router(state.clone())).expect("Failed to start test server");
    TestApp { server, state, pool }
}
