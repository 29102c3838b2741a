use axum::Router;
use serde_json::Value as JsonValue;
use std::path::PathBuf;

use crate::app::build_router;
use crate::models::Fields;
use crate::state::AppState;
use crate::store::GameStore;

/// Fresh document path under the system temp dir
pub fn temp_db_path() -> PathBuf {
    std::env::temp_dir().join(format!("games_store_{}.json", uuid::Uuid::new_v4()))
}

pub fn fields(value: JsonValue) -> Fields {
    match value {
        JsonValue::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

/// Full router over a fresh, empty store. Returns the document path for cleanup.
pub async fn setup_test_app() -> (Router, PathBuf) {
    let path = temp_db_path();
    let store = GameStore::open(&path)
        .await
        .expect("Failed to open game store");
    (build_router(AppState { store }), path)
}
