//! Error taxonomy for campus routing.
//!
//! Every failure is local and synchronous. The core never retries; it names
//! the failure and lets the caller decide whether to skip the student or
//! abort the batch.

use thiserror::Error;

/// Why a schedule lookup found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleLookup {
    /// The current location is not any scheduled class location.
    LocationNotScheduled,
    /// The current period is the last one on the schedule.
    NoNextPeriod,
}

impl std::fmt::Display for ScheduleLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationNotScheduled => f.write_str("location is not on the schedule"),
            Self::NoNextPeriod => f.write_str("no class follows the current period"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CampusError {
    /// Room code does not decode into building, floor and room number.
    #[error("malformed room code {code:?}: {reason}")]
    MalformedRoomCode { code: String, reason: &'static str },

    /// Building identifier outside B1..B5.
    #[error("unknown building {0:?}")]
    UnknownBuilding(String),

    #[error("schedule lookup from {location} failed: {reason}")]
    ScheduleLookupFailure {
        location: String,
        reason: ScheduleLookup,
    },

    /// Arrival text failed the "Walk" sanity check.
    #[error("instructions {0:?} do not contain \"Walk\"")]
    InvalidInstructions(String),

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("unknown student category {0:?}")]
    UnknownCategory(String),

    #[error("roster row {row}: {source}")]
    Roster {
        row: usize,
        #[source]
        source: Box<CampusError>,
    },
}

pub type Result<T> = std::result::Result<T, CampusError>;
