//! Database operations for user accounts
//!
//! Plain query functions over a `SqlitePool`. Callers are responsible for
//! validating input and hashing passwords before calling in here.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::auth::credentials::UsernameMatching;
use crate::shared::{Identity, UserId, UserResponse};

/// User row including the password hash
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            username: self.username,
            email: self.email,
            display_name: self.display_name,
            token: None,
        }
    }
}

/// Insert a new user, returning the number of inserted rows
///
/// Returns 0 when a user with the same username under `matching` already
/// exists. The check and the insert are one statement, so concurrent sign-ups
/// cannot both pass it.
pub async fn insert_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
    display_name: Option<&str>,
    matching: UsernameMatching,
) -> Result<u64, sqlx::Error> {
    let now = Utc::now();
    let sql = format!(
        "INSERT INTO users (username, email, password_hash, display_name, created_at, updated_at) \
         SELECT ?1, ?2, ?3, ?4, ?5, ?5 \
         WHERE NOT EXISTS (SELECT 1 FROM users WHERE {})",
        matching.sql_predicate()
    );

    let result = sqlx::query(&sql)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(display_name)
        .bind(now)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// All users whose username matches under `matching`, lowest id first
pub async fn find_users_by_username(
    pool: &SqlitePool,
    username: &str,
    matching: UsernameMatching,
) -> Result<Vec<UserRecord>, sqlx::Error> {
    let sql = format!(
        "SELECT id, username, email, password_hash, display_name, created_at, updated_at \
         FROM users WHERE {} ORDER BY id",
        matching.sql_predicate()
    );

    sqlx::query_as::<_, UserRecord>(&sql)
        .bind(username)
        .fetch_all(pool)
        .await
}

/// Get user by ID
pub async fn get_user_by_id(
    pool: &SqlitePool,
    id: UserId,
) -> Result<Option<UserResponse>, sqlx::Error> {
    sqlx::query_as::<_, UserResponse>(
        r#"
        SELECT id, username, email, display_name, created_at, updated_at
        FROM users
        WHERE id = ?1
        "#
    )
    .bind(id.get())
    .fetch_optional(pool)
    .await
}

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<UserResponse>, sqlx::Error> {
    sqlx::query_as::<_, UserResponse>(
        r#"
        SELECT id, username, email, display_name, created_at, updated_at
        FROM users
        ORDER BY id
        "#
    )
    .fetch_all(pool)
    .await
}

pub async fn user_exists(pool: &SqlitePool, id: UserId) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?1")
        .bind(id.get())
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

/// Emails are stored with `COLLATE NOCASE`, so this ignores ASCII case
pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?1")
        .bind(email)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

/// Update the supplied fields, leaving `None` fields untouched
pub async fn update_user(
    pool: &SqlitePool,
    id: UserId,
    email: Option<&str>,
    display_name: Option<&str>,
    password_hash: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET email = COALESCE(?1, email),
            display_name = COALESCE(?2, display_name),
            password_hash = COALESCE(?3, password_hash),
            updated_at = ?4
        WHERE id = ?5
        "#
    )
    .bind(email)
    .bind(display_name)
    .bind(password_hash)
    .bind(Utc::now())
    .bind(id.get())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_user(pool: &SqlitePool, id: UserId) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(id.get())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
