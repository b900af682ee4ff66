//! Roster rows to students.
//!
//! The roster is one row per student with a two-period schedule. Field names
//! follow the spreadsheet the registrar exports.

use serde::{Deserialize, Serialize};

use crate::error::{CampusError, Result};
use crate::room::Room;
use crate::schedule::{Schedule, ScheduleEntry};
use crate::student::{Student, StudentCategory};

/// One roster row, as exported by the registrar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub category: String,
    #[serde(rename = "First Period")]
    pub first_period: String,
    #[serde(rename = "Second Period")]
    pub second_period: String,
    #[serde(rename = "First Period Location")]
    pub first_period_location: String,
    #[serde(rename = "Second Period Location")]
    pub second_period_location: String,
}

impl RosterRow {
    /// Two-period schedule for this row.
    pub fn schedule(&self) -> Result<Schedule> {
        Ok(Schedule::from_pair(
            ScheduleEntry::new(1, &self.first_period, self.first_period_location.parse()?),
            ScheduleEntry::new(2, &self.second_period, self.second_period_location.parse()?),
        ))
    }
}

/// Build a student from a roster row. Everyone starts in their first-period
/// room.
pub fn build_student(row: &RosterRow) -> Result<Student> {
    let category: StudentCategory = row.category.parse()?;
    let location: Room = row.first_period_location.parse()?;
    let schedule = row.schedule()?;
    Ok(Student::new(&row.name, category, location, schedule))
}

/// Build every student, failing on the first bad row.
pub fn build_roster(rows: &[RosterRow]) -> Result<Vec<Student>> {
    let students = rows
        .iter()
        .enumerate()
        .map(|(row, r)| {
            build_student(r).map_err(|e| CampusError::Roster {
                row,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!("Built roster of {} students", students.len());
    Ok(students)
}
