//! Credentials repository (login -> password hash)

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::AppResult;

/// Source of login/password-hash pairs consulted on every request
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Every known login mapped to its stored password hash
    async fn fetch_all(&self) -> AppResult<HashMap<String, String>>;
}

#[derive(Clone)]
pub struct CredentialsRepository {
    pool: SqlitePool,
}

impl CredentialsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM credentials")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert accounts, leaving existing logins untouched
    pub async fn insert_missing(&self, accounts: &[(&str, String)]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        for (login, password_hash) in accounts {
            sqlx::query(
                "INSERT INTO credentials (login, password_hash) VALUES (?, ?) \
                 ON CONFLICT (login) DO NOTHING",
            )
            .bind(*login)
            .bind(password_hash)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for CredentialsRepository {
    async fn fetch_all(&self) -> AppResult<HashMap<String, String>> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT login, password_hash FROM credentials",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
