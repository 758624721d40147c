//! Test doubles for the login collaborators

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use blog_gateway::backend::auth::{CredentialStore, Credentials, TokenIssuer, UsernameMatching};
use blog_gateway::backend::BackendError;
use blog_gateway::shared::Identity;

pub fn identity(id: i64, username: &str) -> Identity {
    Identity {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        display_name: None,
        token: None,
    }
}

/// Credential store over a fixed username -> secret table
pub struct TableStore {
    accounts: HashMap<String, String>,
    matching: UsernameMatching,
}

impl TableStore {
    pub fn new(accounts: &[(&str, &str)], matching: UsernameMatching) -> Self {
        Self {
            accounts: accounts
                .iter()
                .map(|(user, secret)| (user.to_string(), secret.to_string()))
                .collect(),
            matching,
        }
    }
}

#[async_trait]
impl CredentialStore for TableStore {
    async fn validate(&self, credentials: &Credentials) -> Result<Option<Identity>, BackendError> {
        if credentials.is_blank() {
            return Ok(None);
        }
        let found = self
            .accounts
            .iter()
            .find(|(user, secret)| {
                self.matching.matches(user, credentials.username()) && secret.as_str() == credentials.secret()
            })
            .map(|(user, _)| identity(1, user));
        Ok(found)
    }
}

/// Accepts any credentials and confirms the supplied username
pub struct AcceptAll;

#[async_trait]
impl CredentialStore for AcceptAll {
    async fn validate(&self, credentials: &Credentials) -> Result<Option<Identity>, BackendError> {
        Ok(Some(identity(1, credentials.username())))
    }
}

/// Never confirms an identity
pub struct RejectAll;

#[async_trait]
impl CredentialStore for RejectAll {
    async fn validate(&self, _: &Credentials) -> Result<Option<Identity>, BackendError> {
        Ok(None)
    }
}

/// Fails the test if the gateway ever asks it for a token
pub struct PanickingIssuer;

#[async_trait]
impl TokenIssuer for PanickingIssuer {
    async fn issue(&self, username: &str) -> Result<Option<String>, BackendError> {
        panic!("token issuer must not be called (username: {})", username);
    }
}

/// Issues `tok-<username>-<n>` and counts calls
#[derive(Default)]
pub struct CountingIssuer {
    calls: AtomicUsize,
}

impl CountingIssuer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenIssuer for CountingIssuer {
    async fn issue(&self, username: &str) -> Result<Option<String>, BackendError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(format!("tok-{}-{}", username, n)))
    }
}

/// Always declines to issue a token
pub struct NoTokenIssuer;

#[async_trait]
impl TokenIssuer for NoTokenIssuer {
    async fn issue(&self, _: &str) -> Result<Option<String>, BackendError> {
        Ok(None)
    }
}
