//! Wordle-style share grid for a finished round.

use crate::constants::MAX_GUESS_COUNT;
use crate::geo::proximity_percent;
use crate::guess::Guess;

const SQUARES_PER_ROW: u8 = 5;
const GREEN: &str = "🟩";
const YELLOW: &str = "🟨";
const WHITE: &str = "⬜";

/// Spoiler-free result text: header plus one proximity row per guess.
/// A round without a hit renders `X` as its try count.
#[must_use]
pub fn share_text(day_string: &str, guesses: &[Guess]) -> String {
    let won = guesses.iter().any(|guess| guess.distance == 0);
    let tries = if won {
        guesses.len().to_string()
    } else {
        "X".to_string()
    };

    let mut out = format!("Politicdle {day_string} {tries}/{MAX_GUESS_COUNT}");
    for guess in guesses {
        out.push('\n');
        out.push_str(&square_row(proximity_percent(guess.distance)));
    }
    out
}

fn square_row(percent: u8) -> String {
    let green = percent / 20;
    let yellow = u8::from(percent - green * 20 >= 10);
    let mut row = String::new();
    for _ in 0..green {
        row.push_str(GREEN);
    }
    for _ in 0..yellow {
        row.push_str(YELLOW);
    }
    for _ in (green + yellow)..SQUARES_PER_ROW {
        row.push_str(WHITE);
    }
    row
}
