//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{actors, films, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filmoteka API",
        version = "1.0.0",
        description = "Film and actor catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Actors
        actors::list_actors,
        actors::get_actor,
        actors::create_actor,
        actors::update_actor,
        actors::delete_actor,
        // Films
        films::list_films,
        films::get_film,
        films::create_film,
        films::update_film,
        films::delete_film,
    ),
    components(
        schemas(
            crate::models::actor::Actor,
            crate::models::actor::ActorPayload,
            crate::models::film::Film,
            crate::models::film::FilmPayload,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&BasicAuthAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "actors", description = "Actor management"),
        (name = "films", description = "Film management")
    )
)]
pub struct ApiDoc;

/// Registers the `basic_auth` scheme referenced by the endpoints
struct BasicAuthAddon;

impl Modify for BasicAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
