//! City reference data: coordinates and election result tables.
//!
//! Loaded once from JSON at startup and never mutated. City identity is the
//! `code` field; display names may vary per locale.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One line of an election round table: candidate name and result percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "r")]
    pub percent: f64,
}

/// A guessable city. `round_one`/`round_two` keep the short `c`/`c2` keys
/// of the shipped data asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub code: String,
    pub name: String,
    /// Alternate display names keyed by locale (e.g. `en` → `Dunkirk`).
    #[serde(default)]
    pub names: HashMap<String, String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, rename = "c")]
    pub round_one: Vec<CandidateResult>,
    #[serde(default, rename = "c2")]
    pub round_two: Vec<CandidateResult>,
    #[serde(default)]
    pub has_image: bool,
}

impl City {
    /// Display name for a locale, falling back to the default name.
    #[must_use]
    pub fn name_for(&self, lang: &str) -> &str {
        self.names.get(lang).map_or(self.name.as_str(), String::as_str)
    }

    /// Whether any of the city's names sanitizes to `sanitized`.
    #[must_use]
    pub fn matches_name(&self, sanitized: &str) -> bool {
        sanitize_city_name(&self.name) == sanitized
            || self
                .names
                .values()
                .any(|name| sanitize_city_name(name) == sanitized)
    }
}

/// Ordered, immutable collection of all guessable cities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityTable {
    pub cities: Vec<City>,
}

impl CityTable {
    /// Create an empty table (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self { cities: Vec::new() }
    }

    /// Load the city table from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid city data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Find a city by its identity code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.code == code)
    }

    /// Cities eligible as daily targets, in table order.
    #[must_use]
    pub fn selection_pool(&self) -> Vec<&City> {
        self.cities.iter().filter(|city| city.has_image).collect()
    }

    /// Resolve raw user input to a city by sanitized-name comparison across
    /// the default and per-locale names.
    #[must_use]
    pub fn find_by_name(&self, raw: &str) -> Option<&City> {
        let wanted = sanitize_city_name(raw);
        if wanted.is_empty() {
            return None;
        }
        self.cities.iter().find(|city| city.matches_name(&wanted))
    }
}

/// Lowercase a name and fold the French diacritics guessers leave out.
#[must_use]
pub fn sanitize_city_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.trim().to_lowercase().chars() {
        match c {
            'à' | 'â' | 'ä' => out.push('a'),
            'é' | 'è' | 'ê' | 'ë' => out.push('e'),
            'î' | 'ï' => out.push('i'),
            'ô' | 'ö' => out.push('o'),
            'ù' | 'û' | 'ü' => out.push('u'),
            'ç' => out.push('c'),
            'ÿ' => out.push('y'),
            'œ' => out.push_str("oe"),
            'æ' => out.push_str("ae"),
            '’' => out.push('\''),
            _ => out.push(c),
        }
    }
    out
}
