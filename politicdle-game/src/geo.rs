//! Great-circle distance, compass feedback, and proximity display math.

use serde::{Deserialize, Serialize};

use crate::cities::City;
use crate::constants::{
    DIRECTION_SLACK_FAR_DEGREES, DIRECTION_SLACK_NEAR_DEGREES, DIRECTION_SLACK_THRESHOLD_METERS,
    EARTH_RADIUS_METERS, MILES_PER_KM, PROXIMITY_SPAN_METERS,
};
use crate::numbers;
use crate::settings::DistanceUnit;

/// Feedback code pointing from a guess toward the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "NW")]
    NorthWest,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "SW")]
    SouthWest,
}

impl CompassDirection {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
            Self::NorthEast => "NE",
            Self::NorthWest => "NW",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
        }
    }

    /// Arrow glyph shown in guess rows and share grids.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::North => "⬆️",
            Self::South => "⬇️",
            Self::East => "➡️",
            Self::West => "⬅️",
            Self::NorthEast => "↗️",
            Self::NorthWest => "↖️",
            Self::SouthEast => "↘️",
            Self::SouthWest => "↙️",
        }
    }
}

impl std::fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Great-circle distance between two cities in metres, on a spherical
/// earth. Symmetric; zero iff the coordinates coincide.
#[must_use]
pub fn distance_between(a: &City, b: &City) -> u32 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    numbers::round_f64_to_u32(2.0 * EARTH_RADIUS_METERS * h.sqrt().asin())
}

#[derive(Clone, Copy)]
enum LonVote {
    North,
    South,
}

#[derive(Clone, Copy)]
enum LatVote {
    East,
    West,
}

/// Compass code for the target (`dest`) as seen from a guess (`origin`).
///
/// The east/west vote reads the latitude delta and the north/south vote the
/// longitude delta. This axis mapping is a fixed convention shared by every
/// consumer of the codes; it is not a geographic bearing and must not be
/// "corrected". Returns `None` only when both cities share coordinates, in
/// which case the guess is a win and direction is moot.
#[must_use]
pub fn compass_direction(origin: &City, dest: &City, distance_meters: u32) -> Option<CompassDirection> {
    let offset = if distance_meters >= DIRECTION_SLACK_THRESHOLD_METERS {
        DIRECTION_SLACK_FAR_DEGREES
    } else {
        DIRECTION_SLACK_NEAR_DEGREES
    };

    let lat_vote = if origin.latitude + offset < dest.latitude {
        Some(LatVote::East)
    } else if dest.latitude + offset < origin.latitude {
        Some(LatVote::West)
    } else {
        None
    };

    let lon_vote = if origin.longitude + offset < dest.longitude {
        Some(LonVote::North)
    } else if dest.longitude + offset < origin.longitude {
        Some(LonVote::South)
    } else {
        None
    };

    Some(match (lon_vote, lat_vote) {
        (Some(LonVote::North), Some(LatVote::East)) => CompassDirection::NorthEast,
        (Some(LonVote::North), Some(LatVote::West)) => CompassDirection::NorthWest,
        (Some(LonVote::South), Some(LatVote::East)) => CompassDirection::SouthEast,
        (Some(LonVote::South), Some(LatVote::West)) => CompassDirection::SouthWest,
        (Some(LonVote::North), None) => CompassDirection::North,
        (Some(LonVote::South), None) => CompassDirection::South,
        (None, Some(LatVote::East)) => CompassDirection::East,
        (None, Some(LatVote::West)) => CompassDirection::West,
        (None, None) => return axis_fallback(origin, dest),
    })
}

// Both votes landed inside the slack band: decide from whichever axis
// dominates in magnitude, with the same axis convention.
fn axis_fallback(origin: &City, dest: &City) -> Option<CompassDirection> {
    let lat_diff = (origin.latitude - dest.latitude).abs();
    let lon_diff = (origin.longitude - dest.longitude).abs();

    if lat_diff > lon_diff {
        if origin.latitude < dest.latitude {
            Some(CompassDirection::East)
        } else if dest.latitude < origin.latitude {
            Some(CompassDirection::West)
        } else {
            None
        }
    } else if origin.longitude < dest.longitude {
        Some(CompassDirection::North)
    } else if dest.longitude < origin.longitude {
        Some(CompassDirection::South)
    } else {
        None
    }
}

/// Display-only closeness percent: 100 at zero distance, 0 from
/// [`PROXIMITY_SPAN_METERS`] outward, floored to whole percents.
#[must_use]
pub fn proximity_percent(distance_meters: u32) -> u8 {
    let capped = f64::from(distance_meters).min(PROXIMITY_SPAN_METERS);
    numbers::floor_f64_to_u8((PROXIMITY_SPAN_METERS - capped) / PROXIMITY_SPAN_METERS * 100.0)
}

/// Render a metre distance in the player's preferred unit.
#[must_use]
pub fn format_distance(distance_meters: u32, unit: DistanceUnit) -> String {
    let km = f64::from(distance_meters) / 1_000.0;
    match unit {
        DistanceUnit::Km => format!("{}km", numbers::round_f64_to_u32(km)),
        DistanceUnit::Miles => format!("{}mi", numbers::round_f64_to_u32(km * MILES_PER_KM)),
    }
}
