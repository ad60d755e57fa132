//! Guesses, per-day guess lists, and the persisted archive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cities::City;
use crate::constants::MAX_GUESS_COUNT;
use crate::geo::{self, CompassDirection};

/// One day's guesses in submission order; never longer than the try cap, so
/// the list stays inline.
pub type GuessList = SmallVec<[Guess; MAX_GUESS_COUNT]>;

/// A scored guess. Immutable once created; `name` keeps the raw user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub name: String,
    /// Metres to the target.
    pub distance: u32,
    /// `None` only for a zero-distance (winning) guess.
    #[serde(default)]
    pub direction: Option<CompassDirection>,
}

/// Score raw input against the target city.
#[must_use]
pub fn score_guess(raw_input: &str, guessed: &City, target: &City) -> Guess {
    let distance = geo::distance_between(guessed, target);
    Guess {
        name: raw_input.trim().to_string(),
        distance,
        direction: geo::compass_direction(guessed, target, distance),
    }
}

/// The entire persisted state: day string → guess sequence, round-tripped
/// as one JSON object. `set_day` overwrites a single key; every other day
/// is preserved by re-serializing the full map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuessArchive {
    #[serde(flatten)]
    days: BTreeMap<String, GuessList>,
}

impl GuessArchive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Guesses recorded for a day, empty when the day is unknown.
    #[must_use]
    pub fn day(&self, day_string: &str) -> &[Guess] {
        self.days.get(day_string).map_or(&[], |list| list.as_slice())
    }

    /// Replace one day's guess sequence, leaving all other days untouched.
    pub fn set_day(&mut self, day_string: &str, guesses: GuessList) {
        self.days.insert(day_string.to_string(), guesses);
    }

    /// Days in ascending day-string order.
    pub fn days(&self) -> impl Iterator<Item = (&str, &[Guess])> {
        self.days
            .iter()
            .map(|(day, list)| (day.as_str(), list.as_slice()))
    }

    /// Parse an archive from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a valid archive object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the whole archive to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn guess(name: &str, distance: u32, direction: Option<CompassDirection>) -> Guess {
        Guess {
            name: name.to_string(),
            distance,
            direction,
        }
    }

    #[test]
    fn archive_roundtrips_with_field_names_intact() {
        let mut archive = GuessArchive::new();
        archive.set_day(
            "2022-04-12-2",
            smallvec![
                guess("Amiens", 113_000, Some(CompassDirection::SouthWest)),
                guess("Poissy", 0, None),
            ],
        );

        let json = archive.to_json().unwrap();
        assert!(json.contains("\"2022-04-12-2\""));
        assert!(json.contains("\"name\":\"Amiens\""));
        assert!(json.contains("\"distance\":113000"));
        assert!(json.contains("\"direction\":\"SW\""));

        let reloaded = GuessArchive::from_json(&json).unwrap();
        assert_eq!(reloaded, archive);
        assert_eq!(reloaded.day("2022-04-12-2")[1].name, "Poissy");
    }

    #[test]
    fn set_day_overwrites_only_its_key() {
        let mut archive = GuessArchive::new();
        archive.set_day("2022-04-11-5", smallvec![guess("Lyon", 391_000, None)]);
        archive.set_day("2022-04-12-2", smallvec![guess("Lille", 203_000, None)]);

        archive.set_day(
            "2022-04-12-2",
            smallvec![
                guess("Lille", 203_000, None),
                guess("Reims", 129_000, None),
            ],
        );

        assert_eq!(archive.len(), 2);
        assert_eq!(archive.day("2022-04-11-5").len(), 1);
        assert_eq!(archive.day("2022-04-12-2").len(), 2);
    }

    #[test]
    fn unknown_day_reads_empty() {
        let archive = GuessArchive::new();
        assert!(archive.day("2022-04-12-2").is_empty());
    }

    #[test]
    fn days_iterate_in_day_string_order() {
        let mut archive = GuessArchive::new();
        archive.set_day("2022-04-13-0", GuessList::new());
        archive.set_day("2022-04-11-7", GuessList::new());
        archive.set_day("2022-04-12-2", GuessList::new());

        let order: Vec<&str> = archive.days().map(|(day, _)| day).collect();
        assert_eq!(order, ["2022-04-11-7", "2022-04-12-2", "2022-04-13-0"]);
    }

    #[test]
    fn missing_direction_field_deserializes_as_none() {
        let parsed: Guess =
            serde_json::from_str(r#"{"name":"Paris","distance":0}"#).unwrap();
        assert_eq!(parsed.direction, None);
    }
}
