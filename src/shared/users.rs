/**
 * User Account Types
 *
 * Request and response types for the `/api/users` endpoints, the validated
 * `UserId` identifier, and the field rules applied to new and updated
 * accounts.
 *
 * # Identifier Rule
 *
 * Every endpoint that takes a numeric user identifier goes through
 * `UserId::new`, which rejects zero and negative values. There is no
 * endpoint-specific exception to this rule.
 */

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Minimum password length accepted for new or changed passwords
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validated user identifier (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Validate a raw identifier
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` on `user_id` when `raw <= 0`.
    pub fn new(raw: i64) -> Result<Self, SharedError> {
        if raw <= 0 {
            return Err(SharedError::validation(
                "user_id",
                format!("User id must be a positive integer, got {}", raw),
            ));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = SharedError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login request
///
/// Accepted both as query parameters (`GET /api/users/login`) and as a JSON
/// body (`POST /api/users/login`).
#[derive(Deserialize, Serialize, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authenticated principal
///
/// Returned by the credential validator with `token: None`, and by a
/// successful login with the issued session token attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    /// Session token, present only after a successful login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// User response (without sensitive data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /api/users`
#[derive(Deserialize, Serialize, Clone)]
pub struct AddUserRequest {
    /// 3-30 chars, starts with a letter, alphanumeric + underscore
    pub username: String,
    pub email: String,
    /// Plain password, hashed before storage
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl fmt::Debug for AddUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddUserRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

impl AddUserRequest {
    /// Check every field against the account rules
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_username(&self.username)?;
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        Ok(())
    }
}

/// Request body for `PATCH /api/users`
///
/// Fields left as `None` are not touched.
#[derive(Deserialize, Serialize, Clone)]
pub struct UpdateUserRequest {
    pub id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl UpdateUserRequest {
    /// Validate the identifier and whichever fields are present
    pub fn validate(&self) -> Result<UserId, SharedError> {
        let id = UserId::new(self.id)?;
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(password) = &self.password {
            validate_password(password)?;
        }
        Ok(id)
    }
}

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub fn validate_username(username: &str) -> Result<(), SharedError> {
    let mut chars = username.chars();
    let well_formed = (3..=30).contains(&username.len())
        && matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !well_formed {
        return Err(SharedError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }
    Ok(())
}

/// Basic email check: one `@` with something on both sides
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(SharedError::validation("email", "Invalid email format")),
    }
}

pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}
