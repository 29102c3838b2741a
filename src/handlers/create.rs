use crate::error::{parse_fields, ApiError};
use crate::models::{Game, MessageResponse};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// POST /games handler - Create a game with a store-assigned id
///
/// The body may hold any fields. An `id` in the body is ignored: the new game
/// always gets one past the largest existing id. A missing body creates a game
/// with no fields besides its id.
#[utoipa::path(
    post,
    path = routes::GAMES,
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Game created", body = serde_json::Value),
        (status = 400, description = "Body is not valid JSON", body = MessageResponse),
        (status = 422, description = "Body is not a JSON object", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "games"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let fields = parse_fields(&body)?;
    let game = state.store.create(fields).await?;

    tracing::info!("Created game with id: {}", game.id);
    Ok((StatusCode::CREATED, Json(game)))
}
