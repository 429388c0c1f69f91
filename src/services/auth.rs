//! Authentication and permission checks for HTTP Basic credentials

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sha2::{Digest, Sha256};

use crate::{
    error::{AppError, AppResult},
    models::access::{self, Permission},
    repository::credentials::CredentialStore,
};

/// Login and plaintext password taken from the request
#[derive(Debug, Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Whether `login`/`password` are valid and grant `permission`.
    ///
    /// Fails closed: store errors, unknown logins, wrong passwords and
    /// missing permissions all yield `false`.
    pub async fn authorize(&self, login: &str, password: &str, permission: Permission) -> bool {
        let credentials = match self.store.fetch_all().await {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::error!("Cannot load credentials: {}", e);
                return false;
            }
        };

        let Some(stored) = credentials.get(login) else {
            tracing::warn!("No such login '{}'", login);
            return false;
        };

        if !verify_password(stored, password) {
            tracing::warn!("Wrong password for '{}'", login);
            return false;
        }

        if !access::is_granted(login, permission) {
            tracing::warn!("'{}' lacks {} permission", login, permission);
            return false;
        }

        tracing::debug!("'{}' granted {} access", login, permission);
        true
    }

    /// Require `permission` for the request credentials
    pub async fn require(&self, credentials: &Credentials, permission: Permission) -> AppResult<()> {
        if self
            .authorize(&credentials.login, &credentials.password, permission)
            .await
        {
            Ok(())
        } else {
            Err(AppError::Authorization(format!(
                "Insufficient rights: {} permission required",
                permission
            )))
        }
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Check `password` against a stored hash.
///
/// Argon2 PHC strings are the primary format. A bare 64-char hex SHA-256
/// digest is still accepted so credential tables written by the previous
/// service keep working; nothing new is stored that way.
pub fn verify_password(stored: &str, password: &str) -> bool {
    if let Ok(parsed) = PasswordHash::new(stored) {
        return Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok();
    }

    if is_legacy_digest(stored) {
        return legacy_digest(password).eq_ignore_ascii_case(stored);
    }

    false
}

fn is_legacy_digest(stored: &str) -> bool {
    stored.len() == 64 && stored.chars().all(|c| c.is_ascii_hexdigit())
}

fn legacy_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
