//! Per-period dispatch.
//!
//! Each student runs the same fixed sequence: look up the next class, work
//! out the route, then arrive. Planning only reads; arrival is the single
//! mutation, so one student's failure never touches anyone else.

use crate::campus::CampusConfig;
use crate::error::Result;
use crate::room::Room;
use crate::routing::Route;
use crate::student::Student;

/// Where a student is going next and how.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub class_name: String,
    pub destination: Room,
    pub route: Route,
}

impl Itinerary {
    pub fn instructions(&self) -> String {
        self.route.to_string()
    }
}

/// Result of moving one student to their next class.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival {
    pub origin: Room,
    pub itinerary: Itinerary,
}

/// Outcome for one student in a period.
#[derive(Debug)]
pub struct PeriodOutcome {
    pub student: String,
    pub result: Result<Arrival>,
}

/// Next class and route for `student`, without moving them.
pub fn plan_next_move(student: &Student, campus: &CampusConfig) -> Result<Itinerary> {
    let entry = student.schedule().next_period_entry(student.get_location())?;
    let route = student.directions_to(&entry.class_location, campus);
    Ok(Itinerary {
        class_name: entry.class_name.clone(),
        destination: entry.class_location.clone(),
        route,
    })
}

/// Plan and apply one student's move.
pub fn advance(student: &mut Student, campus: &CampusConfig) -> Result<Arrival> {
    let origin = student.get_location().clone();
    let itinerary = plan_next_move(student, campus)?;
    student.arrive_by(&itinerary.route, itinerary.destination.clone())?;
    Ok(Arrival { origin, itinerary })
}

/// Move every student to their next class. Failures are reported per
/// student; the rest of the batch still runs.
pub fn run_period(students: &mut [Student], campus: &CampusConfig) -> Vec<PeriodOutcome> {
    students
        .iter_mut()
        .map(|student| {
            let result = advance(student, campus);
            if let Err(e) = &result {
                log::warn!("{} could not be routed: {}", student.get_name(), e);
            }
            PeriodOutcome {
                student: student.get_name().to_string(),
                result,
            }
        })
        .collect()
}
