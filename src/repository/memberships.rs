//! Actor/film membership maintenance (`actor_films` junction)
//!
//! Both entity sides write their associations through the same helpers: the
//! caller names its own [`Side`], and counterparts are looked up by natural
//! key (actor name, film title) on the opposite side, created as placeholder
//! rows when missing.

use sqlx::{SqliteConnection, SqlitePool};

use crate::error::AppResult;

/// Which entity table owns the association being written or read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Actor,
    Film,
}

impl Side {
    pub fn counterpart(self) -> Side {
        match self {
            Side::Actor => Side::Film,
            Side::Film => Side::Actor,
        }
    }

    fn select_id_by_key(self) -> &'static str {
        match self {
            Side::Actor => "SELECT id FROM actors WHERE name = ?",
            Side::Film => "SELECT id FROM films WHERE title = ?",
        }
    }

    fn insert_placeholder(self) -> &'static str {
        match self {
            Side::Actor => {
                "INSERT INTO actors (name, gender, birthdate) VALUES (?, '', '') RETURNING id"
            }
            Side::Film => {
                "INSERT INTO films (title, description, rating, release_date) \
                 VALUES (?, '', 0, '') RETURNING id"
            }
        }
    }

    fn delete_links(self) -> &'static str {
        match self {
            Side::Actor => "DELETE FROM actor_films WHERE actor_id = ?",
            Side::Film => "DELETE FROM actor_films WHERE film_id = ?",
        }
    }

    /// Natural keys of the counterparts linked to one row of this side
    fn select_linked_keys(self) -> &'static str {
        match self {
            Side::Actor => {
                "SELECT f.title FROM films f \
                 JOIN actor_films af ON af.film_id = f.id \
                 WHERE af.actor_id = ? ORDER BY af.rowid"
            }
            Side::Film => {
                "SELECT a.name FROM actors a \
                 JOIN actor_films af ON af.actor_id = a.id \
                 WHERE af.film_id = ? ORDER BY af.rowid"
            }
        }
    }
}

/// Id of the counterpart row named `key`, inserting a placeholder row if none exists
pub async fn resolve_or_create_counterpart(
    conn: &mut SqliteConnection,
    owner: Side,
    key: &str,
) -> AppResult<i64> {
    let side = owner.counterpart();

    let existing: Option<i64> = sqlx::query_scalar(side.select_id_by_key())
        .bind(key)
        .fetch_optional(&mut *conn)
        .await?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let id = sqlx::query_scalar::<_, i64>(side.insert_placeholder())
        .bind(key)
        .fetch_one(&mut *conn)
        .await?;

    tracing::debug!("Created placeholder {:?} '{}' with id {}", side, key, id);
    Ok(id)
}

/// Link `owner_id` to every counterpart in `keys`
pub async fn link_all(
    conn: &mut SqliteConnection,
    owner: Side,
    owner_id: i64,
    keys: &[String],
) -> AppResult<()> {
    for key in keys {
        let other_id = resolve_or_create_counterpart(conn, owner, key).await?;

        let (actor_id, film_id) = match owner {
            Side::Actor => (owner_id, other_id),
            Side::Film => (other_id, owner_id),
        };

        sqlx::query(
            "INSERT INTO actor_films (actor_id, film_id) VALUES (?, ?) ON CONFLICT DO NOTHING",
        )
        .bind(actor_id)
        .bind(film_id)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// Remove every membership of `owner_id`
pub async fn unlink_all(conn: &mut SqliteConnection, owner: Side, owner_id: i64) -> AppResult<()> {
    sqlx::query(owner.delete_links())
        .bind(owner_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Replace the full membership set of `owner_id` with `keys`
pub async fn replace_links(
    conn: &mut SqliteConnection,
    owner: Side,
    owner_id: i64,
    keys: &[String],
) -> AppResult<()> {
    unlink_all(conn, owner, owner_id).await?;
    link_all(conn, owner, owner_id, keys).await
}

/// Names or titles linked to `owner_id`, in insertion order
pub async fn linked_keys(pool: &SqlitePool, owner: Side, owner_id: i64) -> AppResult<Vec<String>> {
    let keys = sqlx::query_scalar::<_, String>(owner.select_linked_keys())
        .bind(owner_id)
        .fetch_all(pool)
        .await?;
    Ok(keys)
}
