//! Actor model and request payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{format_date, parse_date, unique_keys};
use crate::error::{AppError, AppResult};

/// Actor gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender '{}': expected 'male' or 'female'", s)),
        }
    }
}

/// Actor row as stored in the `actors` table
#[derive(Debug, Clone, FromRow)]
pub struct ActorRow {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub birthdate: String,
}

impl ActorRow {
    pub fn with_films(self, films: Vec<String>) -> Actor {
        Actor {
            id: self.id,
            name: self.name,
            gender: self.gender,
            birthdate: self.birthdate,
            films,
        }
    }
}

/// Actor with the titles of the films they appear in.
///
/// Actors created implicitly from a film payload carry empty `gender` and
/// `birthdate` until they are updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    /// "male", "female", or empty for placeholder rows
    pub gender: String,
    /// Birth date (DD.MM.YYYY)
    pub birthdate: String,
    /// Film titles
    pub films: Vec<String>,
}

/// Create / update actor request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ActorPayload {
    pub name: String,
    /// "male" or "female"
    pub gender: String,
    /// Birth date (DD.MM.YYYY)
    pub birthdate: String,
    /// Film titles; replaces the actor's full film list
    #[serde(default)]
    pub films: Vec<String>,
}

/// Actor payload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActor {
    pub name: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub films: Vec<String>,
}

impl NewActor {
    /// Birth date in its stored form
    pub fn birthdate_text(&self) -> String {
        format_date(self.birthdate)
    }
}

impl ActorPayload {
    /// Check the payload field by field, reporting the first failure
    pub fn check(self) -> AppResult<NewActor> {
        let gender = self.gender.parse::<Gender>().map_err(AppError::Validation)?;
        let birthdate = parse_date(&self.birthdate)
            .map_err(|e| AppError::Validation(format!("Invalid birthdate: {}", e)))?;

        Ok(NewActor {
            name: self.name,
            gender,
            birthdate,
            films: unique_keys(self.films),
        })
    }
}
