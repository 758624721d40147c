//! Post Types
//!
//! Posts are authored and edited elsewhere; the account API only lists them
//! per author or per last editor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post as returned by `/api/users/{id}/posts` and `/api/users/{id}/edited-posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Author's user ID
    pub author_id: i64,
    /// User who last edited the post, if anyone did
    pub editor_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
