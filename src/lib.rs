//! Filmoteka
//!
//! A REST JSON API over a catalog of films and the actors appearing in them,
//! protected by HTTP Basic authentication with fixed read/write roles.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
