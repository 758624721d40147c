/**
 * Authentication Gateway
 *
 * Sequences credential validation and session token issuance for a login.
 *
 * # Login Process
 *
 * 1. Validate credentials with the `CredentialStore`
 * 2. No identity => `LoginError::NotFound`; the issuer is not called
 * 3. Request a token for the identity's username from the `TokenIssuer`
 * 4. No token => `LoginError::TokenUnavailable` (fatal, never NotFound)
 * 5. Attach the token and return the identity
 *
 * Collaborator errors pass through unchanged as `LoginError::Backend`.
 * The gateway holds no mutable state; concurrent logins do not interact.
 */

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::credentials::{CredentialStore, Credentials};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::BackendError;
use crate::shared::Identity;

/// Outcome of a failed login
#[derive(Debug, Error)]
pub enum LoginError {
    /// The credentials did not match any identity
    #[error("No user matches the supplied credentials")]
    NotFound,

    /// A validated identity could not be given a token
    #[error("Token issuer returned no token for '{username}'")]
    TokenUnavailable { username: String },

    /// Collaborator infrastructure fault
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<LoginError> for BackendError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::NotFound => BackendError::not_found("User not found"),
            LoginError::TokenUnavailable { username } => {
                BackendError::fatal(format!("Token is null for user '{}'", username))
            }
            LoginError::Backend(err) => err,
        }
    }
}

/// Login orchestrator over a credential store and a token issuer
#[derive(Clone)]
pub struct AuthGateway {
    credentials: Arc<dyn CredentialStore>,
    issuer: Arc<dyn TokenIssuer>,
}

impl AuthGateway {
    pub fn new(credentials: Arc<dyn CredentialStore>, issuer: Arc<dyn TokenIssuer>) -> Self {
        Self { credentials, issuer }
    }

    /// Validate credentials and issue a session token
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, LoginError> {
        let Some(mut identity) = self.credentials.validate(credentials).await? else {
            tracing::warn!("Login rejected for: {}", credentials.username());
            return Err(LoginError::NotFound);
        };

        let Some(token) = self.issuer.issue(&identity.username).await? else {
            tracing::error!("Token issuer returned no token for: {}", identity.username);
            return Err(LoginError::TokenUnavailable {
                username: identity.username,
            });
        };

        identity.token = Some(token);
        tracing::info!("User logged in successfully: {}", identity.username);
        Ok(identity)
    }
}
