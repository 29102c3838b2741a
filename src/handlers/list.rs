use crate::error::ApiError;
use crate::models::{Game, MessageResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /games handler - List every game in stored order
#[utoipa::path(
    get,
    path = routes::GAMES,
    responses(
        (status = 200, description = "All games", body = Vec<serde_json::Value>),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "games"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Game>>), ApiError> {
    let games = state.store.list().await?;

    tracing::info!("Listed {} games", games.len());
    Ok((StatusCode::OK, Json(games)))
}
