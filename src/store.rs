use serde_json::Value as JsonValue;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;

use crate::models::{Document, Fields, Game};

/// Errors raised by [`GameStore`] operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game {0} not found")]
    NotFound(u64),
    #[error("id must be a non-negative integer, got {0}")]
    InvalidId(JsonValue),
    #[error("no ids left to assign")]
    IdsExhausted,
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("malformed document {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// File-backed store for the games collection
///
/// Every operation reads the whole document from disk, and mutating
/// operations write the whole document back. Nothing is cached in memory.
///
/// No lock is held between the read and the write of a mutation, so two
/// concurrent mutations can interleave and the last writer wins.
#[derive(Clone, Debug)]
pub struct GameStore {
    path: Arc<PathBuf>,
}

impl GameStore {
    /// Open the store at `path`
    ///
    /// Creates missing parent directories and an empty `{"games": []}`
    /// document when the file does not exist yet. An existing file must parse.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let store = Self {
            path: Arc::new(path),
        };

        if fs::try_exists(store.path())
            .await
            .map_err(|source| store.read_error(source))?
        {
            let doc = store.load().await?;
            tracing::info!(
                "Opened game store at {} ({} games)",
                store.path().display(),
                doc.games.len()
            );
        } else {
            store.save(&Document::default()).await?;
            tracing::info!("Created empty game store at {}", store.path().display());
        }

        Ok(store)
    }

    /// Close the store. The document is already on disk after every mutation.
    pub async fn close(self) {
        tracing::info!("Closed game store at {}", self.path().display());
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All games in stored order
    pub async fn list(&self) -> Result<Vec<Game>> {
        let doc = self.load().await?;
        tracing::debug!("Listed {} games", doc.games.len());
        Ok(doc.games)
    }

    /// The first game whose id equals `id`
    pub async fn get(&self, id: u64) -> Result<Game> {
        let doc = self.load().await?;
        doc.games
            .into_iter()
            .find(|game| game.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new game with the next free id and persist it
    pub async fn create(&self, fields: Fields) -> Result<Game> {
        let mut doc = self.load().await?;
        let id = doc.next_id().ok_or(StoreError::IdsExhausted)?;
        let game = Game::new(id, fields);
        doc.games.push(game.clone());
        self.save(&doc).await?;

        tracing::debug!("Created game with id: {}", id);
        Ok(game)
    }

    /// Shallow-merge `fields` onto the game with `id` and persist it
    pub async fn update(&self, id: u64, fields: Fields) -> Result<()> {
        let mut doc = self.load().await?;
        let index = doc.position(id).ok_or(StoreError::NotFound(id))?;
        doc.games[index].merge(fields)?;
        self.save(&doc).await?;

        tracing::debug!("Updated game with id: {}", id);
        Ok(())
    }

    /// Remove the game with `id`, keeping the order of the rest
    pub async fn delete(&self, id: u64) -> Result<()> {
        let mut doc = self.load().await?;
        let index = doc.position(id).ok_or(StoreError::NotFound(id))?;
        doc.games.remove(index);
        self.save(&doc).await?;

        tracing::debug!("Deleted game with id: {}", id);
        Ok(())
    }

    /// Verify the document can still be read and parsed
    pub async fn health_check(&self) -> Result<()> {
        self.load().await.map(|_| ())
    }

    async fn load(&self) -> Result<Document> {
        let bytes = fs::read(self.path())
            .await
            .map_err(|source| self.read_error(source))?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.path().to_path_buf(),
            source,
        })
    }

    async fn save(&self, doc: &Document) -> Result<()> {
        let text = serde_json::to_string_pretty(doc).map_err(|source| StoreError::Malformed {
            path: self.path().to_path_buf(),
            source,
        })?;
        fs::write(self.path(), text)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path().to_path_buf(),
                source,
            })
    }

    fn read_error(&self, source: io::Error) -> StoreError {
        StoreError::Read {
            path: self.path().to_path_buf(),
            source,
        }
    }
}
