//! Film model and request payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{format_date, parse_date, unique_keys};
use crate::error::{AppError, AppResult};

/// Film row as stored in the `films` table
#[derive(Debug, Clone, FromRow)]
pub struct FilmRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub rating: i32,
    pub release_date: String,
}

impl FilmRow {
    pub fn with_actors(self, actors: Vec<String>) -> Film {
        Film {
            id: self.id,
            title: self.title,
            description: self.description,
            rating: self.rating,
            release_date: self.release_date,
            actors,
        }
    }
}

/// Film with the names of its actors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// 0 to 10
    pub rating: i32,
    /// Release date (DD.MM.YYYY), empty for placeholder rows
    pub release_date: String,
    /// Actor names
    pub actors: Vec<String>,
}

/// Create / update film request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilmPayload {
    #[validate(length(min = 1, max = 150, message = "Title must be 1 to 150 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,
    #[validate(range(min = 0, max = 10, message = "Rating must be between 0 and 10"))]
    pub rating: i32,
    /// Release date (DD.MM.YYYY)
    pub release_date: String,
    /// Actor names; replaces the film's full cast
    #[serde(default)]
    pub actors: Vec<String>,
}

/// Field checks are reported in this order
const FIELD_ORDER: [&str; 3] = ["title", "description", "rating"];

/// Film payload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFilm {
    pub title: String,
    pub description: String,
    pub rating: i32,
    pub release_date: NaiveDate,
    pub actors: Vec<String>,
}

impl NewFilm {
    /// Release date in its stored form
    pub fn release_date_text(&self) -> String {
        format_date(self.release_date)
    }
}

impl FilmPayload {
    /// Check the payload field by field, reporting the first failure
    pub fn check(self) -> AppResult<NewFilm> {
        if let Err(errors) = Validate::validate(&self) {
            let field_errors = errors.field_errors();
            let first = FIELD_ORDER
                .iter()
                .find_map(|field| field_errors.get(*field).and_then(|errs| errs.first()));

            let message = first
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| errors.to_string());
            return Err(AppError::Validation(message));
        }

        let release_date = parse_date(&self.release_date)
            .map_err(|e| AppError::Validation(format!("Invalid releaseDate: {}", e)))?;

        Ok(NewFilm {
            title: self.title,
            description: self.description,
            rating: self.rating,
            release_date,
            actors: unique_keys(self.actors),
        })
    }
}
