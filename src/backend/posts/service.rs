//! Post service port and its SQLite implementation

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::posts::db;
use crate::shared::{PostResponse, UserId};

#[async_trait]
pub trait PostService: Send + Sync {
    async fn get_all_by_user_id(&self, user_id: UserId) -> Result<Vec<PostResponse>, BackendError>;

    async fn get_all_by_editor_id(&self, editor_id: UserId) -> Result<Vec<PostResponse>, BackendError>;
}

#[derive(Clone)]
pub struct SqlitePostStore {
    pool: SqlitePool,
}

impl SqlitePostStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostService for SqlitePostStore {
    async fn get_all_by_user_id(&self, user_id: UserId) -> Result<Vec<PostResponse>, BackendError> {
        Ok(db::get_posts_by_author(&self.pool, user_id).await?)
    }

    async fn get_all_by_editor_id(&self, editor_id: UserId) -> Result<Vec<PostResponse>, BackendError> {
        Ok(db::get_posts_by_editor(&self.pool, editor_id).await?)
    }
}
