use crate::error::{parse_id, ApiError};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

pub const GAME_DELETED: &str = "Game deleted successfully";

/// DELETE /games/:id handler - Remove one game
#[utoipa::path(
    delete,
    path = routes::GAME_ITEM,
    params(
        ("id" = u64, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "Game deleted", body = MessageResponse),
        (status = 404, description = "Game not found", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "games"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = parse_id(&id_str)?;

    state.store.delete(id).await?;

    tracing::info!("Deleted game with id: {}", id);
    Ok((StatusCode::OK, Json(MessageResponse::new(GAME_DELETED))))
}
