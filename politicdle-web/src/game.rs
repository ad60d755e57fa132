//! Web-specific engine wiring for Politicdle.
//!
//! This module provides browser implementations of the politicdle-game
//! traits and re-exports the core game logic types.

use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

// Re-export all types from politicdle-game
pub use politicdle_game::*;

/// `localStorage` key holding the serialized guess archive.
pub const GUESS_ARCHIVE_KEY: &str = "politicdle.guesses";

/// City loader backed by the embedded data asset.
pub struct WebCityLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CityLoader for WebCityLoader {
    type Error = WebDataError;

    fn load_cities(&self) -> Result<CityTable, Self::Error> {
        let json = include_str!("../static/assets/data/cities.json");
        CityTable::from_json(json).map_err(WebDataError::Json)
    }
}

/// Guess archive storage over browser `localStorage`.
pub struct WebGuessStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl GuessStorage for WebGuessStorage {
    type Error = WebStorageError;

    fn load_archive(&self) -> Result<GuessArchive, Self::Error> {
        match LocalStorage::get(GUESS_ARCHIVE_KEY) {
            Ok(archive) => Ok(archive),
            // A missing or unreadable entry starts a fresh archive.
            Err(StorageError::KeyNotFound(_) | StorageError::SerdeError(_)) => {
                Ok(GuessArchive::new())
            }
            Err(err) => Err(WebStorageError::Storage(format!("{err:?}"))),
        }
    }

    fn save_archive(&self, archive: &GuessArchive) -> Result<(), Self::Error> {
        LocalStorage::set(GUESS_ARCHIVE_KEY, archive)
            .map_err(|err| WebStorageError::Storage(format!("{err:?}")))
    }
}

/// Create a browser-backed game engine with `WebCityLoader` and
/// `WebGuessStorage`.
#[must_use]
pub fn create_web_game_engine() -> GameEngine<WebCityLoader, WebGuessStorage> {
    GameEngine::new(WebCityLoader, WebGuessStorage)
}
