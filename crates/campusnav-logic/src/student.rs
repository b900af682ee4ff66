//! Students and how each category gets to class.
//!
//! Every student shares the same accessors, schedule lookup and arrival
//! bookkeeping. Categories differ only in how they assemble routing legs:
//! undergraduates walk straight to class, graduate students stop at the
//! conference room first to drop off course evals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::campus::CampusConfig;
use crate::error::{CampusError, Result};
use crate::room::Room;
use crate::routing::Route;
use crate::schedule::Schedule;

/// Sentence given at the conference room.
pub const COURSE_EVAL_NOTE: &str = "Drop off your course evals.";

/// Substring every valid set of instructions must contain.
const INSTRUCTION_MARKER: &str = "Walk";

/// Student category, mapped from the roster's `Type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentCategory {
    /// Walks directly to class.
    Undergrad,
    /// Routed through the conference room on every walk.
    Grad,
}

impl StudentCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Undergrad => "Undergrad",
            Self::Grad => "Grad",
        }
    }

    /// Whether this category must stop at the conference room.
    pub fn conference_routed(self) -> bool {
        matches!(self, Self::Grad)
    }

    /// Assemble the route this category takes from `origin` to `destination`.
    pub fn route(self, origin: &Room, destination: &Room, campus: &CampusConfig) -> Route {
        if self.conference_routed() {
            Route::via(
                origin,
                &campus.conference_room,
                COURSE_EVAL_NOTE,
                destination,
                campus,
            )
        } else {
            Route::direct(origin, destination, campus)
        }
    }
}

impl fmt::Display for StudentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StudentCategory {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Undergrad" => Ok(Self::Undergrad),
            "Grad" => Ok(Self::Grad),
            other => Err(CampusError::UnknownCategory(other.to_string())),
        }
    }
}

/// A student on campus. Location changes only through [`Student::arrive`].
#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    category: StudentCategory,
    location: Room,
    schedule: Schedule,
    meters_walked: f64,
    floors_climbed: u32,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        category: StudentCategory,
        location: Room,
        schedule: Schedule,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            location,
            schedule,
            meters_walked: 0.0,
            floors_climbed: 0,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_location(&self) -> &Room {
        &self.location
    }

    pub fn category(&self) -> StudentCategory {
        self.category
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Meters walked over every routed arrival so far.
    pub fn meters_walked(&self) -> f64 {
        self.meters_walked
    }

    /// Flights of stairs climbed over every routed arrival so far.
    pub fn floors_climbed(&self) -> u32 {
        self.floors_climbed
    }

    pub fn get_next_class_name(&self) -> Result<&str> {
        self.schedule
            .next_period_entry(&self.location)
            .map(|e| e.class_name.as_str())
    }

    pub fn get_next_class_location(&self) -> Result<&Room> {
        self.schedule
            .next_period_entry(&self.location)
            .map(|e| &e.class_location)
    }

    /// Route from the current location to `destination` for this category.
    pub fn directions_to(&self, destination: &Room, campus: &CampusConfig) -> Route {
        self.category.route(&self.location, destination, campus)
    }

    /// Instruction text from the current location to `destination`.
    pub fn get_directions_to(&self, destination: &Room, campus: &CampusConfig) -> String {
        self.directions_to(destination, campus).to_string()
    }

    /// Accept `instructions` and move to `destination`.
    ///
    /// The text must contain "Walk"; anything else (a bare room code, say)
    /// means the caller passed the wrong value, and the location is left
    /// untouched.
    pub fn arrive(&mut self, instructions: &str, destination: Room) -> Result<()> {
        validate_instructions(instructions).inspect_err(|_| {
            log::warn!(
                "{} rejected instructions {:?} for {}",
                self.name,
                instructions,
                destination
            );
        })?;

        log::info!(
            "{} has been told to: {} in order to arrive at: {}",
            self.name,
            instructions,
            destination
        );
        log::debug!("{}: {} -> {}", self.name, self.location, destination);
        self.location = destination;
        Ok(())
    }

    /// Arrive by following `route`, adding its distance and stairs to the
    /// student's totals. The route must end at `destination`.
    pub fn arrive_by(&mut self, route: &Route, destination: Room) -> Result<()> {
        let instructions = route.to_string();
        if route.destination() != Some(&destination) {
            log::warn!(
                "{} was given a route to {} but told to arrive at {}",
                self.name,
                route.destination().map_or("nowhere", Room::code),
                destination
            );
            return Err(CampusError::InvalidInstructions(instructions));
        }
        self.arrive(&instructions, destination)?;
        self.meters_walked += route.total_distance();
        self.floors_climbed += route.floors_climbed();
        Ok(())
    }
}

/// Sanity check on instruction text: it must contain "Walk".
pub fn validate_instructions(instructions: &str) -> Result<()> {
    if instructions.contains(INSTRUCTION_MARKER) {
        Ok(())
    } else {
        Err(CampusError::InvalidInstructions(instructions.to_string()))
    }
}
