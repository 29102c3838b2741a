use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{Fields, MessageResponse};
use crate::store::StoreError;
use serde_json::Value as JsonValue;

pub const GAME_NOT_FOUND: &str = "Game not found";

/// Custom error type for API endpoints
///
/// Maps store failures to HTTP status codes and renders every error as a
/// `{"message": ...}` JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// No game matches the requested id
    GameNotFound,
    /// An update tried to set a non-integer id
    InvalidId(String),
    /// The request body is not valid JSON
    MalformedBody(String),
    /// The request body is valid JSON but not an object
    BodyNotObject,
    /// The document could not be read, parsed or written
    Storage(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::GameNotFound => (StatusCode::NOT_FOUND, GAME_NOT_FOUND.to_string()),
            ApiError::InvalidId(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::MalformedBody(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON body: {}", msg),
            ),
            ApiError::BodyNotObject => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Request body must be a JSON object".to_string(),
            ),
            ApiError::Storage(err) => {
                tracing::error!("Storage failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Storage error: {}", err),
                )
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::GameNotFound,
            StoreError::InvalidId(_) => ApiError::InvalidId(err.to_string()),
            other => ApiError::Storage(other),
        }
    }
}

/// Parse a path id. Anything that is not a non-negative integer can never
/// match a stored game, so it is reported as not found.
pub fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>().map_err(|_| {
        tracing::info!("Unparseable game id: {:?}", raw);
        ApiError::GameNotFound
    })
}

/// Parse a request body into game fields.
///
/// An empty (or whitespace-only) body is an empty set of fields. The content
/// type is not checked.
pub fn parse_fields(body: &[u8]) -> Result<Fields, ApiError> {
    if body.trim_ascii().is_empty() {
        return Ok(Fields::new());
    }
    match serde_json::from_slice::<JsonValue>(body) {
        Ok(JsonValue::Object(fields)) => Ok(fields),
        Ok(_) => Err(ApiError::BodyNotObject),
        Err(e) => Err(ApiError::MalformedBody(e.to_string())),
    }
}
