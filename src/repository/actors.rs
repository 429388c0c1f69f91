//! Actors repository

use sqlx::SqlitePool;

use super::memberships::{self, Side};
use crate::{
    error::{AppError, AppResult},
    models::actor::{Actor, ActorRow, NewActor},
};

#[derive(Clone)]
pub struct ActorsRepository {
    pool: SqlitePool,
}

impl ActorsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all actors with their film titles
    pub async fn list(&self) -> AppResult<Vec<Actor>> {
        let rows = sqlx::query_as::<_, ActorRow>(
            "SELECT id, name, gender, birthdate FROM actors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut actors = Vec::with_capacity(rows.len());
        for row in rows {
            let films = memberships::linked_keys(&self.pool, Side::Actor, row.id).await?;
            actors.push(row.with_films(films));
        }

        Ok(actors)
    }

    /// Get actor by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Actor> {
        let row = sqlx::query_as::<_, ActorRow>(
            "SELECT id, name, gender, birthdate FROM actors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Actor {} not found", id)))?;

        let films = memberships::linked_keys(&self.pool, Side::Actor, row.id).await?;
        Ok(row.with_films(films))
    }

    /// Insert an actor and link its films, creating missing films
    pub async fn create(&self, actor: &NewActor) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO actors (name, gender, birthdate) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&actor.name)
        .bind(actor.gender.as_str())
        .bind(actor.birthdate_text())
        .fetch_one(&mut *tx)
        .await?;

        memberships::link_all(&mut tx, Side::Actor, id, &actor.films).await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Replace an actor's fields and film list
    pub async fn update(&self, id: i64, actor: &NewActor) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE actors SET name = ?, gender = ?, birthdate = ? WHERE id = ?",
        )
        .bind(&actor.name)
        .bind(actor.gender.as_str())
        .bind(actor.birthdate_text())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Actor {} not found", id)));
        }

        memberships::replace_links(&mut tx, Side::Actor, id, &actor.films).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete an actor and its memberships; its films are kept
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        memberships::unlink_all(&mut tx, Side::Actor, id).await?;

        let result = sqlx::query("DELETE FROM actors WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Actor {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
