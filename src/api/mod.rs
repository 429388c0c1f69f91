//! API handlers for Filmoteka REST endpoints

pub mod actors;
pub mod films;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{delete, get, post, put},
    Router,
};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    models::access::Permission,
    services::auth::Credentials,
    AppState,
};

/// Extractor for the HTTP Basic credentials of a request
pub struct AuthenticatedUser(pub Credentials);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) =
            TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Authentication("Missing basic credentials".to_string()))?;

        Ok(AuthenticatedUser(Credentials {
            login: basic.username().to_string(),
            password: basic.password().to_string(),
        }))
    }
}

/// Caller holding the read permission
pub struct CanRead(pub Credentials);

/// Caller holding the write permission
pub struct CanWrite(pub Credentials);

// Access is settled while extracting request parts, so an unauthorized
// caller gets 401 before the body is even parsed.
async fn require(parts: &mut Parts, state: &AppState, permission: Permission) -> Result<Credentials, AppError> {
    let AuthenticatedUser(credentials) = AuthenticatedUser::from_request_parts(parts, state).await?;
    state.services.auth.require(&credentials, permission).await?;
    Ok(credentials)
}

#[async_trait]
impl FromRequestParts<AppState> for CanRead {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        require(parts, state, Permission::Read).await.map(CanRead)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CanWrite {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        require(parts, state, Permission::Write).await.map(CanWrite)
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Actors
        .route("/actors", get(actors::list_actors))
        .route("/actors", post(actors::create_actor))
        .route("/actors/:id", get(actors::get_actor))
        .route("/actors/:id", put(actors::update_actor))
        .route("/actors/:id", delete(actors::delete_actor))
        // Films
        .route("/films", get(films::list_films))
        .route("/films", post(films::create_film))
        .route("/films/:id", get(films::get_film))
        .route("/films/:id", put(films::update_film))
        .route("/films/:id", delete(films::delete_film))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
