//! Data models for Filmoteka

pub mod access;
pub mod actor;
pub mod film;

// Re-export commonly used types
pub use access::{Permission, Role};
pub use actor::{Actor, ActorPayload, Gender, NewActor};
pub use film::{Film, FilmPayload, NewFilm};

use chrono::NaiveDate;

/// External date layout (DD.MM.YYYY)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a `DD.MM.YYYY` date. Chrono alone accepts single-digit fields,
/// short years and leading blanks, so the text must also format back to itself.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| e.to_string())?;

    if format_date(date) != s {
        return Err(format!("'{}' is not in DD.MM.YYYY form", s));
    }

    Ok(date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Drop repeated names/titles, keeping first-seen order
pub fn unique_keys(keys: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    keys.into_iter().filter(|k| seen.insert(k.clone())).collect()
}
