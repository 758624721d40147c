//! `GET /api/users/validate`: credential check without issuing a token.

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials::{CredentialStore, Credentials};
use crate::backend::error::BackendError;
use crate::backend::extract::ApiQuery;
use crate::shared::{Identity, LoginRequest};

/// Returns the matching identity (without token), or `null`
pub async fn validate(
    State(store): State<Arc<dyn CredentialStore>>,
    ApiQuery(request): ApiQuery<LoginRequest>,
) -> Result<Json<Option<Identity>>, BackendError> {
    let identity = store.validate(&Credentials::from(request)).await?;
    Ok(Json(identity))
}
