use crate::error::{parse_id, ApiError};
use crate::models::{Game, MessageResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /games/:id handler - Retrieve one game
#[utoipa::path(
    get,
    path = routes::GAME_ITEM,
    params(
        ("id" = u64, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "Game found", body = serde_json::Value),
        (status = 404, description = "Game not found", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "games"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let id = parse_id(&id_str)?;

    match state.store.get(id).await {
        Ok(game) => {
            tracing::info!("Retrieved game with id: {}", id);
            Ok((StatusCode::OK, Json(game)))
        }
        Err(StoreError::NotFound(_)) => {
            tracing::info!("Game not found with id: {}", id);
            Err(ApiError::GameNotFound)
        }
        Err(e) => Err(e.into()),
    }
}
