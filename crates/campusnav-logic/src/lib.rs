//! Pure campus routing logic for CampusNav.
//!
//! The campus is a ring of five buildings around a circular lake. Every
//! student carries a short class schedule and a current room; this crate
//! works out where their next class is and how to walk there. Functions take
//! plain data and return results, so the headless harness and the tests
//! drive exactly the same code.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`campus`] | Building ring, lake radius, conference room, config validation |
//! | [`dispatch`] | Per-period pipeline: next class, directions, arrival |
//! | [`error`] | Error taxonomy shared by every module |
//! | [`room`] | `B<x>-RM<yyy>` room code parsing |
//! | [`roster`] | Roster rows to students |
//! | [`routing`] | Building legs, room legs, composed routes |
//! | [`schedule`] | Period-ordered schedules and next-period lookup |
//! | [`student`] | Student categories, directions, arrival state |
//!
//! # Usage
//!
//! ```
//! use campusnav_logic::campus::CampusConfig;
//! use campusnav_logic::room::Room;
//! use campusnav_logic::schedule::{Schedule, ScheduleEntry};
//! use campusnav_logic::student::{Student, StudentCategory};
//!
//! let schedule = Schedule::from_pair(
//!     ScheduleEntry::new(1, "Basket Weaving", "B5-RM210".parse().unwrap()),
//!     ScheduleEntry::new(2, "Calculus", "B1-RM101".parse().unwrap()),
//! );
//! let mut student = Student::new(
//!     "Ada",
//!     StudentCategory::Undergrad,
//!     "B5-RM210".parse().unwrap(),
//!     schedule,
//! );
//!
//! let campus = CampusConfig::default();
//! let destination: Room = student.get_next_class_location().unwrap().clone();
//! let directions = student.get_directions_to(&destination, &campus);
//! assert_eq!(
//!     directions,
//!     "Walk 235.62 meters clockwise around the lake, then Go up 0 floor(s), and turn left."
//! );
//! student.arrive(&directions, destination).unwrap();
//! assert_eq!(student.get_location().code(), "B1-RM101");
//! ```

pub mod campus;
pub mod dispatch;
pub mod error;
pub mod room;
pub mod roster;
pub mod routing;
pub mod schedule;
pub mod student;

pub use error::{CampusError, Result};
