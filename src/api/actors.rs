//! Actor endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::actor::{Actor, ActorPayload},
};

use super::{CanRead, CanWrite};

/// List all actors with their films
#[utoipa::path(
    get,
    path = "/actors",
    tag = "actors",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "List of actors", body = Vec<Actor>),
        (status = 401, description = "Not authenticated or not allowed to read")
    )
)]
pub async fn list_actors(
    State(state): State<crate::AppState>,
    _access: CanRead,
) -> AppResult<Json<Vec<Actor>>> {
    let actors = state.services.actors.list().await?;
    Ok(Json(actors))
}

/// Get actor details by ID
#[utoipa::path(
    get,
    path = "/actors/{id}",
    tag = "actors",
    security(("basic_auth" = [])),
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor details", body = Actor),
        (status = 400, description = "Invalid actor ID"),
        (status = 401, description = "Not authenticated or not allowed to read"),
        (status = 404, description = "Actor not found")
    )
)]
pub async fn get_actor(
    State(state): State<crate::AppState>,
    _access: CanRead,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Json<Actor>> {
    let actor = state.services.actors.get_by_id(id).await?;
    Ok(Json(actor))
}

/// Create an actor; unknown film titles are created as empty films
#[utoipa::path(
    post,
    path = "/actors",
    tag = "actors",
    security(("basic_auth" = [])),
    request_body = ActorPayload,
    responses(
        (status = 201, description = "Actor created", body = Actor),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated or not allowed to write")
    )
)]
pub async fn create_actor(
    State(state): State<crate::AppState>,
    _access: CanWrite,
    WithRejection(Json(payload), _): WithRejection<Json<ActorPayload>, AppError>,
) -> AppResult<(StatusCode, Json<Actor>)> {
    let actor = payload.check()?;
    let created = state.services.actors.create(&actor).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an actor's fields and film list
#[utoipa::path(
    put,
    path = "/actors/{id}",
    tag = "actors",
    security(("basic_auth" = [])),
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    request_body = ActorPayload,
    responses(
        (status = 201, description = "Actor updated", body = Actor),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated or not allowed to write"),
        (status = 404, description = "Actor not found")
    )
)]
pub async fn update_actor(
    State(state): State<crate::AppState>,
    _access: CanWrite,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<ActorPayload>, AppError>,
) -> AppResult<(StatusCode, Json<Actor>)> {
    let actor = payload.check()?;
    let updated = state.services.actors.update(id, &actor).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

/// Delete an actor; their films are kept
#[utoipa::path(
    delete,
    path = "/actors/{id}",
    tag = "actors",
    security(("basic_auth" = [])),
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 204, description = "Actor deleted"),
        (status = 401, description = "Not authenticated or not allowed to write"),
        (status = 404, description = "Actor not found")
    )
)]
pub async fn delete_actor(
    State(state): State<crate::AppState>,
    _access: CanWrite,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<StatusCode> {
    state.services.actors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
