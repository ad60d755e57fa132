//! Politicdle Game Engine
//!
//! Platform-agnostic core logic for Politicdle, the daily guess-the-city
//! game: deterministic puzzle selection from a day string, guess scoring
//! (distance, compass feedback, proximity), and the persisted guess
//! archive. This crate provides all game mechanics without UI or
//! platform-specific dependencies.

pub mod cities;
pub mod constants;
pub mod day;
pub mod geo;
pub mod guess;
pub mod numbers;
pub mod rng;
pub mod select;
pub mod session;
pub mod settings;
pub mod share;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cities::{CandidateResult, City, CityTable, sanitize_city_name};
pub use constants::MAX_GUESS_COUNT;
pub use day::{current_day_string, day_string_at};
pub use geo::{
    CompassDirection, compass_direction, distance_between, format_distance, proximity_percent,
};
pub use guess::{Guess, GuessArchive, GuessList, score_guess};
pub use select::{image_scale, random_angle, select_city};
pub use session::{GameSession, GameStatus};
pub use settings::{DistanceUnit, SettingsData, Theme};
pub use share::share_text;
pub use stats::PlayerStats;
pub use storage::MemoryStorage;

use thiserror::Error;

/// Trait for abstracting city reference data loading.
/// Platform-specific implementations should provide this.
pub trait CityLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the city reference table from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the city data cannot be loaded or parsed.
    fn load_cities(&self) -> Result<CityTable, Self::Error>;
}

/// Trait for abstracting guess archive persistence.
/// Platform-specific implementations should provide this.
pub trait GuessStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the full persisted archive.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_archive(&self) -> Result<GuessArchive, Self::Error>;

    /// Write the full archive back.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save_archive(&self, archive: &GuessArchive) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum EngineError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[error("failed to load city data")]
    Data(#[source] E),
    #[error("no city with an image is available for selection")]
    EmptyPool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Input matched no known city; nothing was recorded.
    #[error("no city matches guess `{input}`")]
    UnknownCity { input: String },
    /// The day's round already ended in a win or loss.
    #[error("the round for {day_string} is already over")]
    RoundOver { day_string: String },
}

/// Main game engine binding a city loader to a guess archive store.
pub struct GameEngine<L, S>
where
    L: CityLoader,
    S: GuessStorage,
{
    loader: L,
    storage: S,
}

impl<L, S> GameEngine<L, S>
where
    L: CityLoader,
    S: GuessStorage,
{
    pub const fn new(loader: L, storage: S) -> Self {
        Self { loader, storage }
    }

    /// Resolve the session for a day string: load the table, pick the
    /// day's target, and restore that day's guesses from the archive.
    /// Unreadable or corrupt storage degrades to a fresh archive; the
    /// session stays playable either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the city data cannot be loaded or the selection
    /// pool is empty.
    pub fn start_session(&self, day_string: &str) -> Result<GameSession, EngineError<L::Error>> {
        let table = self.loader.load_cities().map_err(EngineError::Data)?;
        let city = {
            let pool = table.selection_pool();
            select::select_city(day_string, &pool)
                .cloned()
                .ok_or(EngineError::EmptyPool)?
        };

        let archive = self.storage.load_archive().unwrap_or_default();
        let guesses: GuessList = archive.day(day_string).iter().cloned().collect();
        Ok(GameSession::new(day_string, city, guesses, archive, table))
    }

    /// Score raw input against the session's target, record the guess, and
    /// persist the updated archive. Write failures lose persistence, not
    /// the running session.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::RoundOver`] once the round is terminal and
    /// [`GuessError::UnknownCity`] when the input matches no city; neither
    /// mutates any state.
    pub fn submit_guess(
        &self,
        session: &mut GameSession,
        raw_input: &str,
    ) -> Result<Guess, GuessError> {
        if session.is_over() {
            return Err(GuessError::RoundOver {
                day_string: session.day_string().to_string(),
            });
        }
        let Some(guessed) = session.table().find_by_name(raw_input) else {
            return Err(GuessError::UnknownCity {
                input: raw_input.trim().to_string(),
            });
        };

        let guess = guess::score_guess(raw_input, guessed, session.city());
        session.record_guess(guess.clone());
        let _ = self.storage.save_archive(session.archive());
        Ok(guess)
    }
}
