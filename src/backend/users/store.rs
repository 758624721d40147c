/**
 * SQLite User Store
 *
 * Production implementation of both `CredentialStore` (login validation)
 * and `UserService` (account endpoints).
 *
 * # Credential Validation
 *
 * 1. Blank username or password never matches
 * 2. Candidate accounts are selected according to `UsernameMatching`
 * 3. The first candidate (lowest id) whose bcrypt hash verifies wins
 *
 * A malformed stored hash is an infrastructure fault, not a mismatch.
 */

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::backend::auth::credentials::{CredentialStore, Credentials, UsernameMatching};
use crate::backend::error::BackendError;
use crate::backend::users::db;
use crate::backend::users::service::UserService;
use crate::shared::{AddUserRequest, Identity, UpdateUserRequest, UserId, UserResponse};

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
    matching: UsernameMatching,
    bcrypt_cost: u32,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool, matching: UsernameMatching, bcrypt_cost: u32) -> Self {
        Self {
            pool,
            matching,
            bcrypt_cost,
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, BackendError> {
        Ok(bcrypt::hash(password, self.bcrypt_cost)?)
    }
}

#[async_trait]
impl CredentialStore for SqliteUserStore {
    async fn validate(&self, credentials: &Credentials) -> Result<Option<Identity>, BackendError> {
        if credentials.is_blank() {
            return Ok(None);
        }

        let candidates = db::find_users_by_username(&self.pool, credentials.username(), self.matching).await?;

        for user in candidates
            .into_iter()
            .filter(|user| self.matching.matches(&user.username, credentials.username()))
        {
            if bcrypt::verify(credentials.secret(), &user.password_hash)? {
                return Ok(Some(user.into_identity()));
            }
        }

        tracing::debug!("No matching credentials for: {}", credentials.username());
        Ok(None)
    }
}

#[async_trait]
impl UserService for SqliteUserStore {
    async fn get(&self, id: UserId) -> Result<Option<UserResponse>, BackendError> {
        Ok(db::get_user_by_id(&self.pool, id).await?)
    }

    async fn get_all(&self) -> Result<Vec<UserResponse>, BackendError> {
        Ok(db::list_users(&self.pool).await?)
    }

    async fn exists(&self, id: UserId) -> Result<bool, BackendError> {
        Ok(db::user_exists(&self.pool, id).await?)
    }

    async fn get_user_id_by_username(&self, username: &str) -> Result<Option<i64>, BackendError> {
        let users = db::find_users_by_username(&self.pool, username, self.matching).await?;
        Ok(users.first().map(|user| user.id))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, BackendError> {
        Ok(db::email_exists(&self.pool, email).await?)
    }

    async fn add(&self, request: AddUserRequest) -> Result<u64, BackendError> {
        request.validate()?;

        let password_hash = self.hash_password(&request.password)?;
        let rows = db::insert_user(
            &self.pool,
            &request.username,
            &request.email,
            &password_hash,
            request.display_name.as_deref(),
            self.matching,
        )
        .await?;

        if rows == 0 {
            tracing::warn!("Username already exists: {}", request.username);
            return Err(BackendError::handler(
                axum::http::StatusCode::CONFLICT,
                "Username already taken",
            ));
        }

        tracing::info!("User created: {}", request.username);
        Ok(rows)
    }

    async fn update(&self, request: UpdateUserRequest) -> Result<u64, BackendError> {
        let id = request.validate()?;
        let password_hash = request
            .password
            .as_deref()
            .map(|password| self.hash_password(password))
            .transpose()?;

        let rows = db::update_user(
            &self.pool,
            id,
            request.email.as_deref(),
            request.display_name.as_deref(),
            password_hash.as_deref(),
        )
        .await?;

        Ok(rows)
    }

    async fn delete(&self, id: UserId) -> Result<u64, BackendError> {
        Ok(db::delete_user(&self.pool, id).await?)
    }
}
