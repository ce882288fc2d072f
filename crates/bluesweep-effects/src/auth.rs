//! Local email/password auth provider
//!
//! Accounts live in a single storage document so a CLI session survives
//! restarts. Passwords are kept as blake3 digests salted with the account
//! uid. Outbound emails (verification, password reset) are only logged.

use async_lock::Mutex;
use async_trait::async_trait;
use bluesweep_core::{AuthEffects, AuthError, AuthUser, StorageEffects};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Storage key of the accounts document.
pub const AUTH_DOCUMENT_KEY: &str = "auth_accounts";

/// Provider-side minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AccountsDocument {
    #[serde(default)]
    accounts: BTreeMap<String, Account>,
    #[serde(default)]
    current: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Account {
    uid: String,
    password_digest: String,
    #[serde(default)]
    email_verified: bool,
}

impl Account {
    fn user(&self, email: &str) -> AuthUser {
        AuthUser {
            uid: self.uid.clone(),
            email: email.to_string(),
            email_verified: self.email_verified,
        }
    }
}

fn digest(uid: &str, password: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(uid.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hasher.finalize().to_hex().to_string()
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn is_well_formed(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Auth provider backed by a storage document.
pub struct LocalAuthHandler {
    storage: Arc<dyn StorageEffects>,
    lock: Mutex<()>,
}

impl LocalAuthHandler {
    /// Provider keeping its accounts in `storage`.
    pub fn new(storage: Arc<dyn StorageEffects>) -> Self {
        Self {
            storage,
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<AccountsDocument, AuthError> {
        let bytes = self
            .storage
            .retrieve(AUTH_DOCUMENT_KEY)
            .await
            .map_err(|e| AuthError::new(format!("Account storage unavailable: {e}")))?;
        match bytes {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                tracing::error!(error = %e, "Accounts document is unreadable");
                AuthError::new(format!("Account storage is corrupt: {e}"))
            }),
            None => Ok(AccountsDocument::default()),
        }
    }

    async fn save(&self, doc: &AccountsDocument) -> Result<(), AuthError> {
        let bytes = serde_json::to_vec_pretty(doc)
            .map_err(|e| AuthError::new(format!("Failed to encode accounts: {e}")))?;
        self.storage
            .store(AUTH_DOCUMENT_KEY, bytes)
            .await
            .map_err(|e| AuthError::new(format!("Account storage unavailable: {e}")))
    }
}

#[async_trait]
impl AuthEffects for LocalAuthHandler {
    async fn current_user(&self) -> Option<AuthUser> {
        let doc = match self.load().await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read current user");
                return None;
            }
        };
        let email = doc.current.as_deref()?;
        doc.accounts.get(email).map(|account| account.user(email))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let _guard = self.lock.lock().await;
        let email = normalize_email(email);
        if !is_well_formed(&email) {
            return Err(AuthError::new("The email address is badly formatted."));
        }

        let mut doc = self.load().await?;
        let account = doc.accounts.get(&email).ok_or_else(|| {
            AuthError::new("There is no user record corresponding to this identifier.")
        })?;
        if account.password_digest != digest(&account.uid, password) {
            return Err(AuthError::new("The password is invalid."));
        }

        let user = account.user(&email);
        doc.current = Some(email);
        self.save(&doc).await?;
        tracing::info!(uid = %user.uid, "Signed in");
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let _guard = self.lock.lock().await;
        let email = normalize_email(email);
        if !is_well_formed(&email) {
            return Err(AuthError::new("The email address is badly formatted."));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::new(
                "The given password is invalid. [ Password should be at least 6 characters ]",
            ));
        }

        let mut doc = self.load().await?;
        if doc.accounts.contains_key(&email) {
            return Err(AuthError::new(
                "The email address is already in use by another account.",
            ));
        }

        let uid = uuid::Uuid::new_v4().simple().to_string();
        let account = Account {
            password_digest: digest(&uid, password),
            uid,
            email_verified: false,
        };
        let user = account.user(&email);
        doc.accounts.insert(email.clone(), account);
        doc.current = Some(email);
        self.save(&doc).await?;
        tracing::info!(uid = %user.uid, "Created account");
        Ok(user)
    }

    async fn send_email_verification(&self) -> Result<(), AuthError> {
        let doc = self.load().await?;
        let email = doc
            .current
            .ok_or_else(|| AuthError::new("No user is signed in."))?;
        tracing::info!(to = %email, "Verification email queued");
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let email = normalize_email(email);
        if !is_well_formed(&email) {
            return Err(AuthError::new("The email address is badly formatted."));
        }
        let doc = self.load().await?;
        if !doc.accounts.contains_key(&email) {
            return Err(AuthError::new(
                "There is no user record corresponding to this identifier.",
            ));
        }
        tracing::info!(to = %email, "Password reset email queued");
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        if doc.current.take().is_some() {
            self.save(&doc).await?;
            tracing::info!("Signed out");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorageHandler;

    fn handler() -> (LocalAuthHandler, MemoryStorageHandler) {
        let storage = MemoryStorageHandler::new();
        (LocalAuthHandler::new(Arc::new(storage.clone())), storage)
    }

    #[tokio::test]
    async fn sign_up_then_sign_in() {
        let (auth, _) = handler();
        let created = auth.sign_up("Marina@BlueSweep.my", "seaturtle").await.unwrap();
        assert_eq!(created.email, "marina@bluesweep.my");
        assert_eq!(auth.current_user().await, Some(created.clone()));

        auth.sign_out().await.unwrap();
        assert_eq!(auth.current_user().await, None);

        let signed_in = auth.sign_in("marina@bluesweep.my", "seaturtle").await.unwrap();
        assert_eq!(signed_in.uid, created.uid);
    }

    #[tokio::test]
    async fn rejects_wrong_password_and_unknown_user() {
        let (auth, _) = handler();
        auth.sign_up("marina@bluesweep.my", "seaturtle").await.unwrap();

        let err = auth.sign_in("marina@bluesweep.my", "wrong-one").await.unwrap_err();
        assert_eq!(err.message, "The password is invalid.");

        let err = auth.sign_in("nobody@bluesweep.my", "seaturtle").await.unwrap_err();
        assert!(err.message.contains("no user record"));
    }

    #[tokio::test]
    async fn sign_up_enforces_password_length_and_uniqueness() {
        let (auth, _) = handler();
        let err = auth.sign_up("marina@bluesweep.my", "12345").await.unwrap_err();
        assert!(err.message.contains("at least 6 characters"));

        auth.sign_up("marina@bluesweep.my", "123456").await.unwrap();
        let err = auth.sign_up("marina@bluesweep.my", "abcdef").await.unwrap_err();
        assert!(err.message.contains("already in use"));
    }

    #[tokio::test]
    async fn password_is_not_stored_in_clear() {
        let (auth, storage) = handler();
        auth.sign_up("marina@bluesweep.my", "seaturtle").await.unwrap();
        let raw = storage.retrieve(AUTH_DOCUMENT_KEY).await.unwrap().unwrap();
        let text = String::from_utf8(raw).unwrap();
        assert!(!text.contains("seaturtle"));
    }

    #[tokio::test]
    async fn session_survives_new_handler() {
        let (auth, storage) = handler();
        auth.sign_up("marina@bluesweep.my", "seaturtle").await.unwrap();

        let reopened = LocalAuthHandler::new(Arc::new(storage));
        let user = reopened.current_user().await.unwrap();
        assert_eq!(user.email, "marina@bluesweep.my");
    }

    #[tokio::test]
    async fn password_reset_requires_known_account() {
        let (auth, _) = handler();
        assert!(auth.send_password_reset("marina@bluesweep.my").await.is_err());
        auth.sign_up("marina@bluesweep.my", "seaturtle").await.unwrap();
        auth.send_password_reset("marina@bluesweep.my").await.unwrap();
        auth.send_email_verification().await.unwrap();
    }

    #[tokio::test]
    async fn badly_formatted_email() {
        let (auth, _) = handler();
        let err = auth.sign_in("not-an-email", "seaturtle").await.unwrap_err();
        assert_eq!(err.message, "The email address is badly formatted.");
    }

    #[tokio::test]
    async fn corrupt_accounts_document_is_never_overwritten() {
        let (auth, storage) = handler();
        storage
            .store(AUTH_DOCUMENT_KEY, b"{not json".to_vec())
            .await
            .unwrap();

        let err = auth.sign_up("marina@bluesweep.my", "seaturtle").await.unwrap_err();
        assert!(err.message.contains("corrupt"));
        assert!(auth.sign_in("marina@bluesweep.my", "seaturtle").await.is_err());
        assert!(auth.sign_out().await.is_err());
        assert_eq!(auth.current_user().await, None);

        let raw = storage.retrieve(AUTH_DOCUMENT_KEY).await.unwrap().unwrap();
        assert_eq!(raw, b"{not json".to_vec());
    }
}
