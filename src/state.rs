use crate::store::GameStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: GameStore,
}
