//! Centralized tuning constants for the Politicdle core.
//!
//! These values define the deterministic math for puzzle selection and
//! guess feedback. Keeping them together ensures that gameplay can only be
//! adjusted via code changes reviewed in version control.

// Round shape ---------------------------------------------------------------
/// A round ends after this many guesses without a hit.
pub const MAX_GUESS_COUNT: usize = 8;

// Puzzle epoch --------------------------------------------------------------
pub(crate) const DAY_BUCKET_HOURS: u32 = 3;
pub(crate) const MAX_DAY_SHIFT: i64 = 7;
/// Fixed differentiator appended to the day string before city selection,
/// so the selection stream and the cosmetic stream never collide.
pub(crate) const CITY_SEED_SUFFIX: &str = "-politicdle";

// Geodesy -------------------------------------------------------------------
pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
pub(crate) const DIRECTION_SLACK_THRESHOLD_METERS: u32 = 100_000;
pub(crate) const DIRECTION_SLACK_FAR_DEGREES: f64 = 0.5;
pub(crate) const DIRECTION_SLACK_NEAR_DEGREES: f64 = 0.1;
/// Distance at which proximity bottoms out at 0%.
pub(crate) const PROXIMITY_SPAN_METERS: f64 = 1_800_000.0;
pub(crate) const MILES_PER_KM: f64 = 0.621_371;
