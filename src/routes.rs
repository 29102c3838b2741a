// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const GAMES: &str = "/games";
pub const GAME_ITEM: &str = "/games/{id}";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
