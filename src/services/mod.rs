//! Business logic services

pub mod actors;
pub mod auth;
pub mod films;

use std::sync::Arc;

use crate::{
    config::AuthConfig,
    error::AppResult,
    models::access::{ADMIN_LOGIN, USER_LOGIN},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub actors: actors::ActorsService,
    pub films: films::FilmsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository, seeding the fixed
    /// accounts into an empty credentials table
    pub async fn new(repository: Repository, auth_config: AuthConfig) -> AppResult<Self> {
        seed_accounts(&repository, &auth_config).await?;

        Ok(Self {
            auth: auth::AuthService::new(Arc::new(repository.credentials.clone())),
            actors: actors::ActorsService::new(repository.clone()),
            films: films::FilmsService::new(repository.clone()),
            repository,
        })
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}

async fn seed_accounts(repository: &Repository, config: &AuthConfig) -> AppResult<()> {
    if repository.credentials.count().await? > 0 {
        return Ok(());
    }

    let accounts = [
        (ADMIN_LOGIN, auth::hash_password(&config.admin_password)?),
        (USER_LOGIN, auth::hash_password(&config.user_password)?),
    ];
    repository.credentials.insert_missing(&accounts).await?;

    tracing::info!("Seeded accounts '{}' and '{}'", ADMIN_LOGIN, USER_LOGIN);
    Ok(())
}
