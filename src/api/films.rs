//! Film endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::film::{Film, FilmPayload},
};

use super::{CanRead, CanWrite};

/// List all films with their actors
#[utoipa::path(
    get,
    path = "/films",
    tag = "films",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "List of films", body = Vec<Film>),
        (status = 401, description = "Not authenticated or not allowed to read")
    )
)]
pub async fn list_films(
    State(state): State<crate::AppState>,
    _access: CanRead,
) -> AppResult<Json<Vec<Film>>> {
    let films = state.services.films.list().await?;
    Ok(Json(films))
}

/// Get film details by ID
#[utoipa::path(
    get,
    path = "/films/{id}",
    tag = "films",
    security(("basic_auth" = [])),
    params(
        ("id" = i64, Path, description = "Film ID")
    ),
    responses(
        (status = 200, description = "Film details", body = Film),
        (status = 400, description = "Invalid film ID"),
        (status = 401, description = "Not authenticated or not allowed to read"),
        (status = 404, description = "Film not found")
    )
)]
pub async fn get_film(
    State(state): State<crate::AppState>,
    _access: CanRead,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Json<Film>> {
    let film = state.services.films.get_by_id(id).await?;
    Ok(Json(film))
}

/// Create a film; unknown actor names are created as empty actors
#[utoipa::path(
    post,
    path = "/films",
    tag = "films",
    security(("basic_auth" = [])),
    request_body = FilmPayload,
    responses(
        (status = 201, description = "Film created", body = Film),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated or not allowed to write")
    )
)]
pub async fn create_film(
    State(state): State<crate::AppState>,
    _access: CanWrite,
    WithRejection(Json(payload), _): WithRejection<Json<FilmPayload>, AppError>,
) -> AppResult<(StatusCode, Json<Film>)> {
    let film = payload.check()?;
    let created = state.services.films.create(&film).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a film's fields and cast
#[utoipa::path(
    put,
    path = "/films/{id}",
    tag = "films",
    security(("basic_auth" = [])),
    params(
        ("id" = i64, Path, description = "Film ID")
    ),
    request_body = FilmPayload,
    responses(
        (status = 201, description = "Film updated", body = Film),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated or not allowed to write"),
        (status = 404, description = "Film not found")
    )
)]
pub async fn update_film(
    State(state): State<crate::AppState>,
    _access: CanWrite,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<FilmPayload>, AppError>,
) -> AppResult<(StatusCode, Json<Film>)> {
    let film = payload.check()?;
    let updated = state.services.films.update(id, &film).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

/// Delete a film; its actors are kept
#[utoipa::path(
    delete,
    path = "/films/{id}",
    tag = "films",
    security(("basic_auth" = [])),
    params(
        ("id" = i64, Path, description = "Film ID")
    ),
    responses(
        (status = 204, description = "Film deleted"),
        (status = 401, description = "Not authenticated or not allowed to write"),
        (status = 404, description = "Film not found")
    )
)]
pub async fn delete_film(
    State(state): State<crate::AppState>,
    _access: CanWrite,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<StatusCode> {
    state.services.films.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
