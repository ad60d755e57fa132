//! Per-day session state and the end-state machine.

use serde::{Deserialize, Serialize};

use crate::cities::{City, CityTable};
use crate::constants::MAX_GUESS_COUNT;
use crate::guess::{Guess, GuessArchive, GuessList};
use crate::select;

/// Where the day's round stands. `Won` and `Lost` are terminal for that
/// day string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// State for one day string: target city, guess history, and the cosmetic
/// values derived from the day seed. Switching day strings is a fresh
/// session, never an incremental diff.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    day_string: String,
    city: City,
    guesses: GuessList,
    archive: GuessArchive,
    table: CityTable,
    random_angle: f64,
    image_scale: f64,
}

impl GameSession {
    pub(crate) fn new(
        day_string: &str,
        city: City,
        guesses: GuessList,
        archive: GuessArchive,
        table: CityTable,
    ) -> Self {
        let random_angle = select::random_angle(day_string);
        Self {
            day_string: day_string.to_string(),
            city,
            guesses,
            archive,
            table,
            random_angle,
            image_scale: select::image_scale(random_angle),
        }
    }

    #[must_use]
    pub fn day_string(&self) -> &str {
        &self.day_string
    }

    /// The day's target city.
    #[must_use]
    pub const fn city(&self) -> &City {
        &self.city
    }

    /// Guesses so far, in submission order.
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub const fn table(&self) -> &CityTable {
        &self.table
    }

    #[must_use]
    pub const fn archive(&self) -> &GuessArchive {
        &self.archive
    }

    /// Cosmetic rotation angle for the day's image, degrees `[0, 360)`.
    #[must_use]
    pub const fn random_angle(&self) -> f64 {
        self.random_angle
    }

    /// Scale factor keeping the rotated image covering its frame.
    #[must_use]
    pub const fn image_scale(&self) -> f64 {
        self.image_scale
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.guesses.iter().any(|guess| guess.distance == 0) {
            GameStatus::Won
        } else if self.guesses.len() >= MAX_GUESS_COUNT {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    #[must_use]
    pub fn remaining_tries(&self) -> usize {
        MAX_GUESS_COUNT.saturating_sub(self.guesses.len())
    }

    /// Append a scored guess and fold it into the archive under this
    /// session's day string.
    pub(crate) fn record_guess(&mut self, guess: Guess) {
        self.guesses.push(guess);
        self.archive.set_day(&self.day_string, self.guesses.clone());
    }
}
