use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::store::StoreError;

/// Caller-supplied fields of a game, kept in insertion order
pub type Fields = Map<String, JsonValue>;

/// Reserved key holding the store-assigned id
pub const ID_KEY: &str = "id";

/// A stored game: the reserved `id` plus arbitrary caller fields
///
/// The fields are flattened next to `id` on the wire and on disk, so a game
/// serializes as `{"id": 1, "name": "Chess", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Game {
    /// Build a new game. Any `id` among the fields is dropped; the store owns it.
    pub fn new(id: u64, fields: Fields) -> Self {
        let fields = fields
            .into_iter()
            .filter(|(key, _)| key != ID_KEY)
            .collect();
        Self { id, fields }
    }

    /// Shallow-merge `fields` onto this game.
    ///
    /// Existing keys are overwritten, new keys are appended, and keys not
    /// present in `fields` are left alone. An integer `id` replaces the
    /// game's id; a non-integer `id` rejects the whole merge.
    pub fn merge(&mut self, fields: Fields) -> Result<(), StoreError> {
        let new_id = match fields.get(ID_KEY) {
            Some(value) => Some(
                value
                    .as_u64()
                    .ok_or_else(|| StoreError::InvalidId(value.clone()))?,
            ),
            None => None,
        };

        if let Some(id) = new_id {
            self.id = id;
        }
        for (key, value) in fields {
            if key != ID_KEY {
                self.fields.insert(key, value);
            }
        }
        Ok(())
    }
}

/// The on-disk document: one ordered collection under `games`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub games: Vec<Game>,
}

impl Document {
    /// Next id to assign: one past the largest id, or 1 for an empty collection
    pub fn next_id(&self) -> Option<u64> {
        match self.games.iter().map(|game| game.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.games.iter().position(|game| game.id == id)
    }
}

/// Plain `{"message": ...}` body used for acknowledgements and errors
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fields;
    use serde_json::json;

    #[test]
    fn test_game_serializes_id_first() {
        let game = Game::new(7, fields(json!({"name": "Chess", "players": 2})));
        let text = serde_json::to_string(&game).unwrap();
        assert_eq!(text, r#"{"id":7,"name":"Chess","players":2}"#);
    }

    #[test]
    fn test_game_new_drops_caller_id() {
        let game = Game::new(3, fields(json!({"id": 99, "name": "Go"})));
        assert_eq!(game.id, 3);
        assert!(!game.fields.contains_key("id"));
        assert_eq!(game.fields["name"], "Go");
    }

    #[test]
    fn test_merge_overwrites_and_preserves() {
        let mut game = Game::new(1, fields(json!({"name": "A", "genre": "RPG"})));
        game.merge(fields(json!({"name": "X"}))).unwrap();
        assert_eq!(
            serde_json::to_value(&game).unwrap(),
            json!({"id": 1, "name": "X", "genre": "RPG"})
        );
    }

    #[test]
    fn test_merge_appends_new_keys_in_order() {
        let mut game = Game::new(1, fields(json!({"name": "A"})));
        game.merge(fields(json!({"year": 1990, "genre": "RPG"}))).unwrap();
        let keys: Vec<&String> = game.fields.keys().collect();
        assert_eq!(keys, ["name", "year", "genre"]);
    }

    #[test]
    fn test_merge_can_replace_id() {
        let mut game = Game::new(1, fields(json!({"name": "A"})));
        game.merge(fields(json!({"id": 42}))).unwrap();
        assert_eq!(game.id, 42);
        assert!(!game.fields.contains_key("id"));
    }

    #[test]
    fn test_merge_rejects_non_integer_id() {
        let mut game = Game::new(1, fields(json!({"name": "A"})));
        let err = game
            .merge(fields(json!({"id": "abc", "name": "B"})))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
        assert_eq!(game.id, 1);
        assert_eq!(game.fields["name"], "A");
    }

    #[test]
    fn test_document_round_trip_keeps_fields() {
        let text = r#"{"games":[{"id":1,"name":"Chess","tags":["board",2],"meta":{"x":null},"rating":4.5}]}"#;
        let doc: Document = serde_json::from_str(text).unwrap();
        assert_eq!(doc.games.len(), 1);
        assert_eq!(serde_json::to_string(&doc).unwrap(), text);
    }

    #[test]
    fn test_next_id() {
        let mut doc = Document::default();
        assert_eq!(doc.next_id(), Some(1));

        doc.games.push(Game::new(5, Fields::new()));
        doc.games.push(Game::new(2, Fields::new()));
        assert_eq!(doc.next_id(), Some(6));

        doc.games.push(Game::new(u64::MAX, Fields::new()));
        assert_eq!(doc.next_id(), None);
    }
}
