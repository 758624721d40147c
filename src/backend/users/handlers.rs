//! User Account HTTP Handlers
//!
//! Thin handlers over `UserService` and `PostService`. Every numeric
//! identifier goes through `UserId::new` before reaching a service, so a zero
//! or negative id is a 400 on every endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath, ApiQuery};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::PostService;
use crate::backend::users::service::UserService;
use crate::shared::{AddUserRequest, PostResponse, UpdateUserRequest, UserId, UserResponse};

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// GET /api/users/{id}
pub async fn get_user(
    State(users): State<Arc<dyn UserService>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<UserResponse>, BackendError> {
    let id = UserId::new(id)?;

    let user = users
        .get(id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("User {} not found", id)))?;

    Ok(Json(user))
}

/// GET /api/users (requires authentication)
pub async fn get_all_users(
    State(users): State<Arc<dyn UserService>>,
) -> Result<Json<Vec<UserResponse>>, BackendError> {
    Ok(Json(users.get_all().await?))
}

/// GET /api/users/{id}/posts
pub async fn get_posts(
    State(posts): State<Arc<dyn PostService>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Vec<PostResponse>>, BackendError> {
    let id = UserId::new(id)?;
    Ok(Json(posts.get_all_by_user_id(id).await?))
}

/// GET /api/users/{id}/edited-posts
pub async fn get_edited_posts(
    State(posts): State<Arc<dyn PostService>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Vec<PostResponse>>, BackendError> {
    let id = UserId::new(id)?;
    Ok(Json(posts.get_all_by_editor_id(id).await?))
}

/// GET /api/users/exists?user_id=
pub async fn user_exists(
    State(users): State<Arc<dyn UserService>>,
    ApiQuery(query): ApiQuery<UserIdQuery>,
) -> Result<Json<bool>, BackendError> {
    let id = UserId::new(query.user_id)?;
    Ok(Json(users.exists(id).await?))
}

/// GET /api/users/id-by-username?username=
pub async fn get_user_id_by_username(
    State(users): State<Arc<dyn UserService>>,
    ApiQuery(query): ApiQuery<UsernameQuery>,
) -> Result<Json<i64>, BackendError> {
    let id = users
        .get_user_id_by_username(&query.username)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("User '{}' not found", query.username)))?;

    Ok(Json(id))
}

/// GET /api/users/email-exists?email=
pub async fn email_exists(
    State(users): State<Arc<dyn UserService>>,
    ApiQuery(query): ApiQuery<EmailQuery>,
) -> Result<Json<bool>, BackendError> {
    Ok(Json(users.email_exists(&query.email).await?))
}

/// POST /api/users
pub async fn add_user(
    State(users): State<Arc<dyn UserService>>,
    ApiJson(request): ApiJson<AddUserRequest>,
) -> Result<Json<u64>, BackendError> {
    tracing::info!("Add user request for username: {}", request.username);
    Ok(Json(users.add(request).await?))
}

/// PATCH /api/users (requires authentication)
pub async fn update_user(
    State(users): State<Arc<dyn UserService>>,
    AuthUser(actor): AuthUser,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<u64>, BackendError> {
    tracing::info!("User {} updating account {}", actor.username, request.id);
    Ok(Json(users.update(request).await?))
}

/// DELETE /api/users?user_id= (requires authentication)
pub async fn delete_user(
    State(users): State<Arc<dyn UserService>>,
    AuthUser(actor): AuthUser,
    ApiQuery(query): ApiQuery<UserIdQuery>,
) -> Result<Json<u64>, BackendError> {
    let id = UserId::new(query.user_id)?;
    tracing::info!("User {} deleting account {}", actor.username, id);
    Ok(Json(users.delete(id).await?))
}
