//! Films service

use crate::{
    error::AppResult,
    models::film::{Film, NewFilm},
    repository::Repository,
};

#[derive(Clone)]
pub struct FilmsService {
    repository: Repository,
}

impl FilmsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Film>> {
        self.repository.films.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Film> {
        self.repository.films.get_by_id(id).await
    }

    /// Create a film and return it as stored
    pub async fn create(&self, film: &NewFilm) -> AppResult<Film> {
        let id = self.repository.films.create(film).await?;
        tracing::info!("Created film {} '{}'", id, film.title);
        self.repository.films.get_by_id(id).await
    }

    /// Replace a film and return it as stored
    pub async fn update(&self, id: i64, film: &NewFilm) -> AppResult<Film> {
        self.repository.films.update(id, film).await?;
        tracing::info!("Updated film {}", id);
        self.repository.films.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.films.delete(id).await?;
        tracing::info!("Deleted film {}", id);
        Ok(())
    }
}
