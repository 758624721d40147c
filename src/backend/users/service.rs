//! User service port
//!
//! The account endpoints depend on this trait rather than on the SQLite store,
//! so handler tests can substitute their own implementation.

use async_trait::async_trait;

use crate::backend::error::BackendError;
use crate::shared::{AddUserRequest, UpdateUserRequest, UserId, UserResponse};

#[async_trait]
pub trait UserService: Send + Sync {
    async fn get(&self, id: UserId) -> Result<Option<UserResponse>, BackendError>;

    /// All users ordered by id
    async fn get_all(&self) -> Result<Vec<UserResponse>, BackendError>;

    async fn exists(&self, id: UserId) -> Result<bool, BackendError>;

    async fn get_user_id_by_username(&self, username: &str) -> Result<Option<i64>, BackendError>;

    async fn email_exists(&self, email: &str) -> Result<bool, BackendError>;

    /// Create an account, returning affected rows
    async fn add(&self, request: AddUserRequest) -> Result<u64, BackendError>;

    /// Apply a partial update, returning affected rows (0 for unknown ids)
    async fn update(&self, request: UpdateUserRequest) -> Result<u64, BackendError>;

    /// Delete an account, returning affected rows
    async fn delete(&self, id: UserId) -> Result<u64, BackendError>;
}
