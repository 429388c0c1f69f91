//! Actors service

use crate::{
    error::AppResult,
    models::actor::{Actor, NewActor},
    repository::Repository,
};

#[derive(Clone)]
pub struct ActorsService {
    repository: Repository,
}

impl ActorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Actor>> {
        self.repository.actors.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Actor> {
        self.repository.actors.get_by_id(id).await
    }

    /// Create an actor and return it as stored
    pub async fn create(&self, actor: &NewActor) -> AppResult<Actor> {
        let id = self.repository.actors.create(actor).await?;
        tracing::info!("Created actor {} '{}'", id, actor.name);
        self.repository.actors.get_by_id(id).await
    }

    /// Replace an actor and return it as stored
    pub async fn update(&self, id: i64, actor: &NewActor) -> AppResult<Actor> {
        self.repository.actors.update(id, actor).await?;
        tracing::info!("Updated actor {}", id);
        self.repository.actors.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.actors.delete(id).await?;
        tracing::info!("Deleted actor {}", id);
        Ok(())
    }
}
