//! Walking directions.
//!
//! A route is built from two kinds of leg:
//! - **Building leg**: an arc around the lake from one building to another.
//! - **Room leg**: stairs and a turn from a building entrance to a room.
//!
//! Legs are plain values with `Display` impls producing the instruction text;
//! [`Route`] strings them together and keeps the totals walked and climbed.

use std::f64::consts::PI;
use std::fmt;

use crate::campus::{Building, CampusConfig};
use crate::error::Result;
use crate::room::{parse_room_part, Room};

/// Which way to walk around the lake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clockwise => "clockwise",
            Self::CounterClockwise => "counter-clockwise",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// Which way to turn at the top of the stairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    /// Even room numbers are on the right, odd on the left. Parity comes
    /// from the last digit of `digits`.
    pub fn for_number(digits: &str) -> Self {
        let last = digits.as_bytes().last().copied().unwrap_or(b'0');
        if (last - b'0') % 2 == 0 {
            Self::Right
        } else {
            Self::Left
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Arc walk between two buildings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingLeg {
    pub from: Building,
    pub to: Building,
    /// Arc length in meters, always within [0, π × radius].
    pub distance_m: f64,
    pub direction: Direction,
}

impl fmt::Display for BuildingLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Walk {:3.2} meters {} around the lake",
            self.distance_m,
            self.direction.label()
        )
    }
}

/// Stairs and turn from a building entrance to a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomLeg {
    /// Flights climbed; 0 for ground-floor rooms.
    pub floors_up: u32,
    pub turn: Turn,
}

impl fmt::Display for RoomLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Go up {} floor(s), and turn {}",
            self.floors_up,
            self.turn.label()
        )
    }
}

/// Shortest arc from `start` to `end`.
///
/// When the raw angular gap exceeds π the walk goes the other way round, so
/// the gap becomes its 2π complement and the direction flips. Equal buildings
/// give a zero-length counter-clockwise leg.
pub fn building_leg(start: Building, end: Building, campus: &CampusConfig) -> BuildingLeg {
    let theta_start = start.angle(campus);
    let theta_end = end.angle(campus);

    let (delta_theta, direction) = if (theta_start - theta_end).abs() > PI {
        if theta_start < theta_end {
            (2.0 * PI + theta_start - theta_end, Direction::Clockwise)
        } else {
            (2.0 * PI + theta_end - theta_start, Direction::CounterClockwise)
        }
    } else if theta_start > theta_end {
        (theta_start - theta_end, Direction::Clockwise)
    } else {
        (theta_end - theta_start, Direction::CounterClockwise)
    };

    BuildingLeg {
        from: start,
        to: end,
        distance_m: campus.lake_radius * delta_theta,
        direction,
    }
}

/// Stairs and turn for a room. Floor 1 climbs zero flights.
pub fn room_leg(room: &Room) -> RoomLeg {
    leg_for(room.floor(), room.number())
}

fn leg_for(floor: u8, number: &str) -> RoomLeg {
    RoomLeg {
        floors_up: u32::from(floor) - 1,
        turn: Turn::for_number(number),
    }
}

/// Directions inside a building for a room part such as `RM405`.
pub fn directions_within_building(room_part: &str) -> Result<String> {
    let (floor, number) = parse_room_part(room_part)?;
    Ok(leg_for(floor, number).to_string())
}

/// Directions around the lake between two building codes such as `B5`, `B1`.
pub fn directions_between_buildings(
    start: &str,
    end: &str,
    campus: &CampusConfig,
) -> Result<String> {
    let start = start.parse::<Building>()?;
    let end = end.parse::<Building>()?;
    Ok(building_leg(start, end, campus).to_string())
}

/// One hop of a route: walk to a building, then up to a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub building: BuildingLeg,
    pub room: RoomLeg,
    pub destination: Room,
    /// Sentence spoken on reaching `destination` before the next segment.
    pub on_arrival: Option<&'static str>,
}

impl RouteSegment {
    pub fn between(origin: &Room, destination: &Room, campus: &CampusConfig) -> Self {
        Self {
            building: building_leg(origin.building(), destination.building(), campus),
            room: room_leg(destination),
            destination: destination.clone(),
            on_arrival: None,
        }
    }
}

/// A full walk from one room to another, possibly via intermediate stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    segments: Vec<RouteSegment>,
}

impl Route {
    /// Direct walk: building leg then room leg.
    pub fn direct(origin: &Room, destination: &Room, campus: &CampusConfig) -> Self {
        Self {
            segments: vec![RouteSegment::between(origin, destination, campus)],
        }
    }

    /// Walk via `waypoint`, saying `note` on arrival there.
    pub fn via(
        origin: &Room,
        waypoint: &Room,
        note: &'static str,
        destination: &Room,
        campus: &CampusConfig,
    ) -> Self {
        let mut first = RouteSegment::between(origin, waypoint, campus);
        first.on_arrival = Some(note);
        Self {
            segments: vec![first, RouteSegment::between(waypoint, destination, campus)],
        }
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Final room of the route.
    pub fn destination(&self) -> Option<&Room> {
        self.segments.last().map(|s| &s.destination)
    }

    /// Meters walked around the lake.
    pub fn total_distance(&self) -> f64 {
        self.segments.iter().map(|s| s.building.distance_m).sum()
    }

    /// Flights of stairs climbed.
    pub fn floors_climbed(&self) -> u32 {
        self.segments.iter().map(|s| s.room.floors_up).sum()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" Now ")?;
            }
            write!(f, "{}, then {}.", segment.building, segment.room)?;
            if let Some(note) = segment.on_arrival {
                write!(f, " {note}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CampusError;

    fn room(code: &str) -> Room {
        code.parse().unwrap()
    }

    #[test]
    fn room_leg_floor_and_turn() {
        assert_eq!(
            directions_within_building("RM101").unwrap(),
            "Go up 0 floor(s), and turn left"
        );
        assert_eq!(
            directions_within_building("RM210").unwrap(),
            "Go up 1 floor(s), and turn right"
        );
        assert_eq!(
            directions_within_building("RM405").unwrap(),
            "Go up 3 floor(s), and turn left"
        );
        assert_eq!(
            directions_within_building("RM912").unwrap(),
            "Go up 8 floor(s), and turn right"
        );
    }

    #[test]
    fn room_leg_sweep_matches_floor_and_parity() {
        for floor in 1..=9u8 {
            for n in 0..20u32 {
                let code = format!("B1-RM{floor}{n:02}");
                let leg = room_leg(&room(&code));
                assert_eq!(leg.floors_up, u32::from(floor) - 1, "{code}");
                assert_eq!(leg.turn == Turn::Right, n % 2 == 0, "{code}");
            }
        }
    }

    #[test]
    fn room_leg_malformed() {
        assert!(matches!(
            directions_within_building("RM"),
            Err(CampusError::MalformedRoomCode { .. })
        ));
        assert!(matches!(
            directions_within_building("B2-RM210"),
            Err(CampusError::MalformedRoomCode { .. })
        ));
    }

    #[test]
    fn building_leg_short_way() {
        let campus = CampusConfig::default();
        assert_eq!(
            directions_between_buildings("B5", "B1", &campus).unwrap(),
            "Walk 235.62 meters clockwise around the lake"
        );
        assert_eq!(
            directions_between_buildings("B5", "B4", &campus).unwrap(),
            "Walk 117.81 meters counter-clockwise around the lake"
        );
    }

    #[test]
    fn building_leg_wraps_around() {
        let campus = CampusConfig::default();
        // B1 at 0, B2 at 7π/4: raw gap 7π/4 > π, so walk π/4 the other way.
        let leg = building_leg(Building::B1, Building::B2, &campus);
        assert_eq!(leg.direction, Direction::Clockwise);
        assert!((leg.distance_m - 150.0 * PI / 4.0).abs() < 1e-9);
        assert_eq!(
            leg.to_string(),
            "Walk 117.81 meters clockwise around the lake"
        );

        let back = building_leg(Building::B2, Building::B1, &campus);
        assert_eq!(back.direction, Direction::CounterClockwise);
    }

    #[test]
    fn building_leg_symmetric_for_all_pairs() {
        let campus = CampusConfig::default();
        for a in Building::ALL {
            for b in Building::ALL {
                if a == b {
                    continue;
                }
                let there = building_leg(a, b, &campus);
                let back = building_leg(b, a, &campus);
                assert!(
                    (there.distance_m - back.distance_m).abs() < 1e-9,
                    "{a}->{b}"
                );
                assert_eq!(there.direction, back.direction.reversed(), "{a}->{b}");
                assert!(there.distance_m > 0.0, "{a}->{b}");
                assert!(there.distance_m <= PI * campus.lake_radius + 1e-9, "{a}->{b}");
            }
        }
    }

    #[test]
    fn building_leg_same_building_is_zero() {
        let campus = CampusConfig::default();
        for b in Building::ALL {
            let leg = building_leg(b, b, &campus);
            assert_eq!(leg.distance_m, 0.0);
            assert!(leg.to_string().starts_with("Walk 0.00 meters "));
        }
    }

    #[test]
    fn building_leg_unknown_building() {
        let campus = CampusConfig::default();
        assert!(matches!(
            directions_between_buildings("B5", "B7", &campus),
            Err(CampusError::UnknownBuilding(ref b)) if b == "B7"
        ));
        assert!(matches!(
            directions_between_buildings("Gym", "B1", &campus),
            Err(CampusError::UnknownBuilding(_))
        ));
    }

    #[test]
    fn building_leg_scales_with_radius() {
        let campus = CampusConfig {
            lake_radius: 300.0,
            ..CampusConfig::default()
        };
        let leg = building_leg(Building::B5, Building::B1, &campus);
        assert!((leg.distance_m - 300.0 * PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn direct_route_text_and_totals() {
        let campus = CampusConfig::default();
        let route = Route::direct(&room("B5-RM210"), &room("B1-RM101"), &campus);
        assert_eq!(
            route.to_string(),
            "Walk 235.62 meters clockwise around the lake, then Go up 0 floor(s), and turn left."
        );
        assert_eq!(route.segments().len(), 1);
        assert_eq!(route.floors_climbed(), 0);
        assert!((route.total_distance() - 75.0 * PI).abs() < 1e-9);
        assert_eq!(route.destination().unwrap().code(), "B1-RM101");
    }

    #[test]
    fn via_route_text_and_totals() {
        let campus = CampusConfig::default();
        let route = Route::via(
            &room("B5-RM210"),
            &room("B4-RM303"),
            "Stop here.",
            &room("B3-RM405"),
            &campus,
        );
        assert_eq!(
            route.to_string(),
            "Walk 117.81 meters counter-clockwise around the lake, then Go up 2 floor(s), \
             and turn left. Stop here. Now Walk 235.62 meters counter-clockwise around the \
             lake, then Go up 3 floor(s), and turn left."
        );
        assert_eq!(route.floors_climbed(), 5);
        assert_eq!(route.destination().unwrap().code(), "B3-RM405");
    }
}
