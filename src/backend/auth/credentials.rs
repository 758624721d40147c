//! Login credentials and the credential store port.

use std::fmt;

use async_trait::async_trait;

use crate::backend::error::BackendError;
use crate::shared::{Identity, LoginRequest};

/// Username/secret pair submitted for authentication
///
/// Lives for a single validation call. `Debug` never prints the secret.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    secret: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Either half empty; such credentials can never match
    pub fn is_blank(&self) -> bool {
        self.username.is_empty() || self.secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Self::new(request.username, request.password)
    }
}

/// How usernames are compared when looking up an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsernameMatching {
    /// `Alice` and `alice` are different accounts
    #[default]
    CaseSensitive,
    /// ASCII case is ignored
    CaseInsensitive,
}

impl UsernameMatching {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::CaseSensitive
        } else {
            Self::CaseInsensitive
        }
    }

    pub fn matches(self, stored: &str, supplied: &str) -> bool {
        match self {
            Self::CaseSensitive => stored == supplied,
            Self::CaseInsensitive => stored.eq_ignore_ascii_case(supplied),
        }
    }

    /// SQL predicate on the `username` column, bound to `?1`
    pub fn sql_predicate(self) -> &'static str {
        match self {
            Self::CaseSensitive => "username = ?1",
            Self::CaseInsensitive => "username = ?1 COLLATE NOCASE",
        }
    }
}

/// Credential validator port
///
/// Routine mismatches (unknown user, wrong secret, blank input) are `Ok(None)`.
/// `Err` is reserved for infrastructure faults.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn validate(&self, credentials: &Credentials) -> Result<Option<Identity>, BackendError>;
}
