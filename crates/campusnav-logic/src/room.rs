//! Room codes.
//!
//! All rooms are named `B<x>-RM<f><n>`: `B<x>` is the building, `f` is the
//! floor (1 = ground) and `n` is the rest of the room number. Buildings share
//! one floor plan, so the code alone tells you how to reach the room from the
//! entrance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::campus::Building;
use crate::error::{CampusError, Result};

/// A parsed room code such as `B4-RM303`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Room {
    code: String,
    building: Building,
    floor: u8,
    number: String,
}

impl Room {
    pub fn building(&self) -> Building {
        self.building
    }

    /// Floor number, 1-indexed (1 is the ground floor).
    pub fn floor(&self) -> u8 {
        self.floor
    }

    /// Room number digits with the floor digit removed: `RM405` → `"05"`.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The room part of the code, e.g. `RM405`.
    pub fn room_part(&self) -> &str {
        let split = self.building.code().len() + 1;
        &self.code[split..]
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub(crate) fn conference_default() -> Self {
        Self {
            code: crate::campus::CONFERENCE_ROOM.to_string(),
            building: Building::B4,
            floor: 3,
            number: "03".to_string(),
        }
    }
}

/// Decode the `RM<f><n>` part of a room code into `(floor, number digits)`.
/// The number can be any length; only its parity is ever used.
pub fn parse_room_part(part: &str) -> Result<(u8, &str)> {
    let malformed = |reason| CampusError::MalformedRoomCode {
        code: part.to_string(),
        reason,
    };

    let digits = part
        .strip_prefix("RM")
        .ok_or_else(|| malformed("missing RM prefix"))?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("room number is not all digits"));
    }
    if digits.len() < 2 {
        return Err(malformed("room number needs a floor digit and a number"));
    }

    let floor = digits.as_bytes()[0] - b'0';
    if floor == 0 {
        return Err(malformed("floor must be 1 or higher"));
    }
    Ok((floor, &digits[1..]))
}

impl FromStr for Room {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self> {
        let (building, part) = s.split_once('-').ok_or_else(|| CampusError::MalformedRoomCode {
            code: s.to_string(),
            reason: "missing '-' between building and room",
        })?;
        let building = building.parse::<Building>()?;
        let (floor, number) = parse_room_part(part).map_err(|e| match e {
            CampusError::MalformedRoomCode { reason, .. } => CampusError::MalformedRoomCode {
                code: s.to_string(),
                reason,
            },
            other => other,
        })?;

        Ok(Self {
            code: s.to_string(),
            building,
            floor,
            number: number.to_string(),
        })
    }
}

impl TryFrom<String> for Room {
    type Error = CampusError;

    fn try_from(code: String) -> Result<Self> {
        code.parse()
    }
}

impl From<Room> for String {
    fn from(room: Room) -> Self {
        room.code
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
