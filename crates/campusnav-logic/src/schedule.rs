//! Class schedules.
//!
//! A schedule is a small period-ordered table. The student's current period
//! is never stored; it is derived from where the student is standing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CampusError, Result, ScheduleLookup};
use crate::room::Room;

/// One class slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub period: u32,
    pub class_name: String,
    pub class_location: Room,
}

impl ScheduleEntry {
    pub fn new(period: u32, class_name: impl Into<String>, class_location: Room) -> Self {
        Self {
            period,
            class_name: class_name.into(),
            class_location,
        }
    }
}

/// Period-ordered classes, unique by period.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    entries: BTreeMap<u32, ScheduleEntry>,
}

impl Schedule {
    /// Build a schedule, rejecting period 0 and duplicate periods.
    pub fn new(entries: impl IntoIterator<Item = ScheduleEntry>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for entry in entries {
            if entry.period == 0 {
                return Err(CampusError::InvalidSchedule(format!(
                    "{} has period 0; periods start at 1",
                    entry.class_name
                )));
            }
            let period = entry.period;
            if map.insert(period, entry).is_some() {
                return Err(CampusError::InvalidSchedule(format!(
                    "period {period} is scheduled twice"
                )));
            }
        }
        Ok(Self { entries: map })
    }

    /// Two-period schedule as supplied by a roster row. Periods are
    /// renumbered 1 and 2.
    pub fn from_pair(first: ScheduleEntry, second: ScheduleEntry) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(1, ScheduleEntry { period: 1, ..first });
        entries.insert(2, ScheduleEntry { period: 2, ..second });
        Self { entries }
    }

    /// Entries in period order.
    pub fn entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.values()
    }

    pub fn entry(&self, period: u32) -> Option<&ScheduleEntry> {
        self.entries.get(&period)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Period of the earliest class held at `location`.
    pub fn period_at(&self, location: &Room) -> Option<u32> {
        self.entries
            .values()
            .find(|e| &e.class_location == location)
            .map(|e| e.period)
    }

    /// The class following the one held at `current_location`.
    pub fn next_period_entry(&self, current_location: &Room) -> Result<&ScheduleEntry> {
        let lookup_failure = |reason| CampusError::ScheduleLookupFailure {
            location: current_location.to_string(),
            reason,
        };

        let period = self
            .period_at(current_location)
            .ok_or_else(|| lookup_failure(ScheduleLookup::LocationNotScheduled))?;
        period
            .checked_add(1)
            .and_then(|next| self.entry(next))
            .ok_or_else(|| lookup_failure(ScheduleLookup::NoNextPeriod))
    }
}

/// Free-function form of [`Schedule::next_period_entry`].
pub fn next_period_entry<'a>(
    schedule: &'a Schedule,
    current_location: &Room,
) -> Result<&'a ScheduleEntry> {
    schedule.next_period_entry(current_location)
}
