//! Campus geometry: five buildings on a ring around a circular lake.
//!
//! Each building sits at a fixed polar angle on a circle of constant radius,
//! so the walk between two buildings is an arc along the lakeshore.
//!
//! ```text
//!                 B5 (π/2)
//!                   │
//!     B4 (3π/4) ╭───┴───╮
//!              ╱  lake   ╲
//!             │           ├── B1 (0)
//!              ╲         ╱
//!     B3 (5π/4) ╰───────╯ B2 (7π/4)
//! ```
//!
//! The defaults below are the canonical campus. A different layout can be
//! injected by building a [`CampusConfig`] by hand or deserializing one;
//! [`validate_config`] checks it before use.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CampusError;
use crate::room::Room;

/// One of the five campus buildings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Building {
    B1,
    B2,
    B3,
    B4,
    B5,
}

impl Building {
    pub const ALL: [Building; 5] = [Self::B1, Self::B2, Self::B3, Self::B4, Self::B5];

    pub fn code(self) -> &'static str {
        match self {
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::B3 => "B3",
            Self::B4 => "B4",
            Self::B5 => "B5",
        }
    }

    /// Polar angle of this building on the given campus, in radians.
    pub fn angle(self, campus: &CampusConfig) -> f64 {
        campus.building_angles.get(self)
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Building {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.code() == s)
            .ok_or_else(|| CampusError::UnknownBuilding(s.to_string()))
    }
}

/// Polar angle (radians) of every building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingAngles {
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub b4: f64,
    pub b5: f64,
}

impl Default for BuildingAngles {
    fn default() -> Self {
        Self {
            b1: 0.0,
            b2: PI * 7.0 / 4.0,
            b3: PI * 5.0 / 4.0,
            b4: PI * 3.0 / 4.0,
            b5: PI / 2.0,
        }
    }
}

impl BuildingAngles {
    pub fn get(&self, building: Building) -> f64 {
        match building {
            Building::B1 => self.b1,
            Building::B2 => self.b2,
            Building::B3 => self.b3,
            Building::B4 => self.b4,
            Building::B5 => self.b5,
        }
    }
}

/// Default lake radius in meters.
pub const LAKE_RADIUS: f64 = 150.0;

/// Default conference center room, where graduate students drop off evals.
pub const CONFERENCE_ROOM: &str = "B4-RM303";

/// Immutable campus layout shared by every routing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusConfig {
    /// Lake radius in meters. Building-to-building distance is radius × Δθ.
    pub lake_radius: f64,
    /// Polar angle of each building.
    pub building_angles: BuildingAngles,
    /// Mandatory stop for conference-routed students.
    pub conference_room: Room,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            lake_radius: LAKE_RADIUS,
            building_angles: BuildingAngles::default(),
            conference_room: Room::conference_default(),
        }
    }
}

/// Campus configuration validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Radius must be finite and strictly positive.
    #[error("lake radius {0} must be a positive, finite number of meters")]
    InvalidLakeRadius(f64),
    /// Angles are kept in [0, 2π) so the wraparound rule holds.
    #[error("building {0} angle {1} is outside [0, 2π)")]
    AngleOutOfRange(Building, f64),
}

/// Validate a campus configuration, returning all errors found.
pub fn validate_config(config: &CampusConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if !config.lake_radius.is_finite() || config.lake_radius <= 0.0 {
        errors.push(ConfigError::InvalidLakeRadius(config.lake_radius));
    }

    for building in Building::ALL {
        let theta = config.building_angles.get(building);
        if !(0.0..2.0 * PI).contains(&theta) {
            errors.push(ConfigError::AngleOutOfRange(building, theta));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let campus = CampusConfig::default();
        assert!((campus.lake_radius - 150.0).abs() < f64::EPSILON);
        assert_eq!(campus.conference_room.code(), "B4-RM303");
        assert!((Building::B5.angle(&campus) - PI / 2.0).abs() < 1e-12);
        assert!((Building::B2.angle(&campus) - PI * 7.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&CampusConfig::default()).is_empty());
    }

    #[test]
    fn building_codes_round_trip_through_from_str() {
        for b in Building::ALL {
            assert_eq!(b.code().parse::<Building>().unwrap(), b);
        }
    }

    #[test]
    fn unknown_building_rejected() {
        for bad in ["B0", "B6", "b1", "", "Library"] {
            let err = bad.parse::<Building>().unwrap_err();
            assert!(matches!(err, CampusError::UnknownBuilding(ref s) if s == bad));
        }
    }

    #[test]
    fn validation_collects_every_error() {
        let mut campus = CampusConfig::default();
        campus.lake_radius = -1.0;
        campus.building_angles.b3 = 2.0 * PI;
        campus.building_angles.b4 = -0.5;
        let errors = validate_config(&campus);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], ConfigError::InvalidLakeRadius(-1.0));
        assert!(matches!(errors[1], ConfigError::AngleOutOfRange(Building::B3, _)));
        assert!(matches!(errors[2], ConfigError::AngleOutOfRange(Building::B4, _)));
    }

    #[test]
    fn nan_radius_rejected() {
        let campus = CampusConfig {
            lake_radius: f64::NAN,
            ..CampusConfig::default()
        };
        assert_eq!(validate_config(&campus).len(), 1);
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{
            "lake_radius": 200.0,
            "building_angles": { "b1": 0.0, "b2": 1.0, "b3": 2.0, "b4": 3.0, "b5": 4.0 },
            "conference_room": "B2-RM110"
        }"#;
        let campus: CampusConfig = serde_json::from_str(json).unwrap();
        assert!((campus.lake_radius - 200.0).abs() < f64::EPSILON);
        assert_eq!(campus.conference_room.building(), Building::B2);
        assert!(validate_config(&campus).is_empty());
    }
}
