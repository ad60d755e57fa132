//! Aggregate player statistics derived from the guess archive.

use crate::constants::MAX_GUESS_COUNT;
use crate::guess::{Guess, GuessArchive};
use crate::numbers;

/// Lifetime counters across finished rounds. A round is finished when it
/// was won or holds the full eight guesses; in-progress days neither extend
/// nor break a streak.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub played: u32,
    pub won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins indexed by the winning try (0 = first guess).
    pub guess_distribution: [u32; MAX_GUESS_COUNT],
}

impl PlayerStats {
    /// Fold the whole archive, visiting days in day-string order.
    #[must_use]
    pub fn from_archive(archive: &GuessArchive) -> Self {
        let mut stats = Self::default();
        let mut streak = 0u32;

        for (_, guesses) in archive.days() {
            match win_index(guesses) {
                Some(index) => {
                    stats.played += 1;
                    stats.won += 1;
                    streak += 1;
                    stats.max_streak = stats.max_streak.max(streak);
                    if let Some(slot) = stats.guess_distribution.get_mut(index) {
                        *slot += 1;
                    }
                }
                None if guesses.len() >= MAX_GUESS_COUNT => {
                    stats.played += 1;
                    streak = 0;
                }
                None => {}
            }
        }

        stats.current_streak = streak;
        stats
    }

    #[must_use]
    pub fn win_percent(&self) -> u8 {
        if self.played == 0 {
            return 0;
        }
        numbers::round_f64_to_u8(f64::from(self.won) * 100.0 / f64::from(self.played))
    }
}

fn win_index(guesses: &[Guess]) -> Option<usize> {
    guesses.iter().position(|guess| guess.distance == 0)
}
