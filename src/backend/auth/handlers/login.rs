/**
 * Login Handler
 *
 * This module implements `GET /api/users/login` (query parameters) and
 * `POST /api/users/login` (JSON body). Both run the same gateway login.
 *
 * # Responses
 *
 * - `200 OK` - Identity with `token` populated
 * - `404 Not Found` - Credentials do not match any user
 * - `500 Internal Server Error` - No token could be issued, or an
 *   infrastructure fault occurred
 *
 * A token is never part of a 404 or 500 body.
 */
use axum::{extract::State, response::Json};

use crate::backend::auth::credentials::Credentials;
use crate::backend::auth::gateway::AuthGateway;
use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiQuery};
use crate::shared::{Identity, LoginRequest};

/// Login with query parameters
///
/// # Example Request
///
/// ```http
/// GET /api/users/login?username=alice&password=correct HTTP/1.1
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": 1,
///   "username": "alice",
///   "email": "alice@example.com",
///   "display_name": null,
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(gateway): State<AuthGateway>,
    ApiQuery(request): ApiQuery<LoginRequest>,
) -> Result<Json<Identity>, BackendError> {
    authenticate(&gateway, request).await
}

/// Login with a JSON body
pub async fn login_json(
    State(gateway): State<AuthGateway>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<Identity>, BackendError> {
    authenticate(&gateway, request).await
}

async fn authenticate(gateway: &AuthGateway, request: LoginRequest) -> Result<Json<Identity>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let identity = gateway.login(&Credentials::from(request)).await?;
    Ok(Json(identity))
}
