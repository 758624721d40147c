//! Database operations for posts

use sqlx::SqlitePool;

use crate::shared::{PostResponse, UserId};

/// Posts written by `author_id`, oldest first
pub async fn get_posts_by_author(
    pool: &SqlitePool,
    author_id: UserId,
) -> Result<Vec<PostResponse>, sqlx::Error> {
    sqlx::query_as::<_, PostResponse>(
        r#"
        SELECT id, title, content, author_id, editor_id, created_at, updated_at
        FROM posts
        WHERE author_id = ?1
        ORDER BY created_at, id
        "#
    )
    .bind(author_id.get())
    .fetch_all(pool)
    .await
}

/// Posts last edited by `editor_id`, oldest first
pub async fn get_posts_by_editor(
    pool: &SqlitePool,
    editor_id: UserId,
) -> Result<Vec<PostResponse>, sqlx::Error> {
    sqlx::query_as::<_, PostResponse>(
        r#"
        SELECT id, title, content, author_id, editor_id, created_at, updated_at
        FROM posts
        WHERE editor_id = ?1
        ORDER BY created_at, id
        "#
    )
    .bind(editor_id.get())
    .fetch_all(pool)
    .await
}
