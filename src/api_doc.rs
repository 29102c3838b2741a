use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, MessageResponse, UnhealthyResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "games-store API",
        version = "1.0.0",
        description = "CRUD over a games collection persisted as a JSON document on disk"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            MessageResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "games", description = "Game collection operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_game_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| *p == "/games"));
        assert!(paths.iter().any(|p| *p == "/games/{id}"));
        assert!(paths.iter().any(|p| *p == "/health"));
    }
}
