/**
 * Session Management and JWT Tokens
 *
 * This module handles session token issuance for successful logins and
 * verification of bearer tokens on protected routes.
 */

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;

/// Token expires in 30 days unless configured otherwise
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Longest accepted token lifetime (10 years)
pub const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Session token issuer port
///
/// `Ok(None)` means the issuer declined to produce a token. The gateway
/// treats that as a fatal inconsistency, never as a credential failure.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, username: &str) -> Result<Option<String>, BackendError>;
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token is bound to
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Unique token ID
    pub jti: String,
}

/// HS256 JWT sessions
#[derive(Clone)]
pub struct JwtSessions {
    secret: String,
    ttl_secs: u64,
}

impl JwtSessions {
    pub fn new(secret: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    /// Create a JWT token bound to `username`
    pub fn create_token(&self, username: &str) -> Result<String, BackendError> {
        let now = Utc::now().timestamp().max(0) as u64;
        let exp = now
            .checked_add(self.ttl_secs)
            .ok_or_else(|| BackendError::fatal(format!("Token lifetime of {}s overflows", self.ttl_secs)))?;

        let claims = Claims {
            sub: username.to_string(),
            exp,
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let key = EncodingKey::from_secret(self.secret.as_bytes());
        Ok(encode(&Header::default(), &claims, &key)?)
    }

    /// Verify and decode a JWT token
    pub fn verify(&self, token: &str) -> Result<Claims, BackendError> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        let token_data = decode::<Claims>(token, &key, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[async_trait]
impl TokenIssuer for JwtSessions {
    async fn issue(&self, username: &str) -> Result<Option<String>, BackendError> {
        if username.is_empty() {
            tracing::warn!("Refusing to issue a session token without a subject");
            return Ok(None);
        }
        self.create_token(username).map(Some)
    }
}
