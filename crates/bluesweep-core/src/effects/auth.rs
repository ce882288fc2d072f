//! Authentication effects
//!
//! Email/password accounts. Provider failures carry a human readable
//! message that the login screen shows verbatim.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::AuthUser;

/// A rejected auth request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AuthError {
    /// Message suitable for display
    pub message: String,
}

impl AuthError {
    /// Error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Email/password authentication
#[async_trait]
pub trait AuthEffects: Send + Sync {
    /// The signed-in user, if any.
    async fn current_user(&self) -> Option<AuthUser>;

    /// Sign in an existing account.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    /// Create an account and sign it in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    /// Send a verification email to the signed-in user.
    async fn send_email_verification(&self) -> Result<(), AuthError>;

    /// Email a reset link to `email`.
    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;

    /// Forget the signed-in user.
    async fn sign_out(&self) -> Result<(), AuthError>;
}
