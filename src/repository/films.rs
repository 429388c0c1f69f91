//! Films repository

use sqlx::SqlitePool;

use super::memberships::{self, Side};
use crate::{
    error::{AppError, AppResult},
    models::film::{Film, FilmRow, NewFilm},
};

#[derive(Clone)]
pub struct FilmsRepository {
    pool: SqlitePool,
}

impl FilmsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all films with their actor names
    pub async fn list(&self) -> AppResult<Vec<Film>> {
        let rows = sqlx::query_as::<_, FilmRow>(
            "SELECT id, title, description, rating, release_date FROM films ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut films = Vec::with_capacity(rows.len());
        for row in rows {
            let actors = memberships::linked_keys(&self.pool, Side::Film, row.id).await?;
            films.push(row.with_actors(actors));
        }

        Ok(films)
    }

    /// Get film by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Film> {
        let row = sqlx::query_as::<_, FilmRow>(
            "SELECT id, title, description, rating, release_date FROM films WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Film {} not found", id)))?;

        let actors = memberships::linked_keys(&self.pool, Side::Film, row.id).await?;
        Ok(row.with_actors(actors))
    }

    /// Insert a film and link its actors, creating missing actors
    pub async fn create(&self, film: &NewFilm) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO films (title, description, rating, release_date)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&film.title)
        .bind(&film.description)
        .bind(film.rating)
        .bind(film.release_date_text())
        .fetch_one(&mut *tx)
        .await?;

        memberships::link_all(&mut tx, Side::Film, id, &film.actors).await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Replace a film's fields and cast
    pub async fn update(&self, id: i64, film: &NewFilm) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE films SET
                title = ?,
                description = ?,
                rating = ?,
                release_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&film.title)
        .bind(&film.description)
        .bind(film.rating)
        .bind(film.release_date_text())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Film {} not found", id)));
        }

        memberships::replace_links(&mut tx, Side::Film, id, &film.actors).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete a film and its memberships; its actors are kept
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        memberships::unlink_all(&mut tx, Side::Film, id).await?;

        let result = sqlx::query("DELETE FROM films WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Film {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
