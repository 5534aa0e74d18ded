//! # Admin Auth Service
//!
//! Credential verification and opaque token issuance for the admin surface.
//! Tokens are bearer credentials held in memory; restarting the server
//! invalidates them, which is acceptable for a single-admin deployment.

use std::collections::HashSet;
use std::sync::Mutex;

/// Port consumed by the admin REST handlers.
pub trait AuthService: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
    fn issue_token(&self, subject: &str) -> String;
    /// Returns the subject the token was issued for, if it is valid
    fn validate_token(&self, token: &str) -> Option<String>;
}

/// Auth service backed by the configured admin credentials.
pub struct ConfigAuthService {
    username: String,
    password: String,
    tokens: Mutex<HashSet<String>>,
}

impl ConfigAuthService {
    pub fn new(username: String, password: String) -> Self {
        Self {
            username,
            password,
            tokens: Mutex::new(HashSet::new()),
        }
    }
}

impl AuthService for ConfigAuthService {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }

    fn issue_token(&self, _subject: &str) -> String {
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.tokens.lock().unwrap().insert(token.clone());
        token
    }

    fn validate_token(&self, token: &str) -> Option<String> {
        if self.tokens.lock().unwrap().contains(token) {
            Some(self.username.clone())
        } else {
            None
        }
    }
}
