use crate::error::{parse_fields, parse_id, ApiError};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::Path, extract::State, http::StatusCode, Json};

pub const GAME_UPDATED: &str = "Game updated successfully";

/// PUT /games/:id handler - Shallow-merge fields onto a game
///
/// Fields in the body overwrite same-named fields of the stored game; other
/// fields are kept. An integer `id` in the body moves the game to that id.
/// A missing body merges nothing. An unknown id is reported as 404 before any
/// problem with the body.
#[utoipa::path(
    put,
    path = routes::GAME_ITEM,
    params(
        ("id" = u64, Path, description = "Game id")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Game updated", body = MessageResponse),
        (status = 400, description = "Invalid JSON or non-integer id field", body = MessageResponse),
        (status = 404, description = "Game not found", body = MessageResponse),
        (status = 422, description = "Body is not a JSON object", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "games"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = parse_id(&id_str)?;

    let fields = match parse_fields(&body) {
        Ok(fields) => fields,
        Err(e) => {
            state.store.get(id).await?;
            return Err(e);
        }
    };

    state.store.update(id, fields).await?;

    tracing::info!("Updated game with id: {}", id);
    Ok((StatusCode::OK, Json(MessageResponse::new(GAME_UPDATED))))
}
