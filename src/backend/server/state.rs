/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds every collaborator the handlers need, passed in
 * explicitly:
 * - The authentication gateway (credential store + token issuer)
 * - The credential store on its own, for the token-less validate endpoint
 * - The user and post services
 * - JWT sessions, for verifying bearer tokens on protected routes
 *
 * Everything is behind `Arc`, so cloning the state per request is cheap.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::credentials::CredentialStore;
use crate::backend::auth::gateway::AuthGateway;
use crate::backend::auth::sessions::{JwtSessions, TokenIssuer};
use crate::backend::posts::{PostService, SqlitePostStore};
use crate::backend::server::config::ServerConfig;
use crate::backend::users::{SqliteUserStore, UserService};

#[derive(Clone)]
pub struct AppState {
    pub gateway: AuthGateway,
    pub credentials: Arc<dyn CredentialStore>,
    pub users: Arc<dyn UserService>,
    pub posts: Arc<dyn PostService>,
    pub sessions: Arc<JwtSessions>,
}

impl AppState {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        issuer: Arc<dyn TokenIssuer>,
        users: Arc<dyn UserService>,
        posts: Arc<dyn PostService>,
        sessions: Arc<JwtSessions>,
    ) -> Self {
        Self {
            gateway: AuthGateway::new(credentials.clone(), issuer),
            credentials,
            users,
            posts,
            sessions,
        }
    }

    /// Production wiring over a migrated SQLite pool
    pub fn from_pool(pool: SqlitePool, config: &ServerConfig) -> Self {
        let user_store = Arc::new(SqliteUserStore::new(
            pool.clone(),
            config.username_matching,
            config.bcrypt_cost,
        ));
        let sessions = Arc::new(JwtSessions::new(config.jwt_secret.clone(), config.token_ttl_secs));

        Self::new(
            user_store.clone(),
            sessions.clone(),
            user_store,
            Arc::new(SqlitePostStore::new(pool)),
            sessions,
        )
    }
}

impl FromRef<AppState> for AuthGateway {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gateway.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UserService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn PostService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CredentialStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}
