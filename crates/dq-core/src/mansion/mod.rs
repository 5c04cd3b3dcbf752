//! Mansion layout: a fixed binary tree of rooms
//!
//! Rooms live in an arena and refer to their left/right neighbors by
//! [`RoomId`]. The mansion is validated once at construction and never
//! changes afterwards.

mod layout;

use std::ops::Index;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub use layout::{MansionError, MansionLayout, RoomSpec};

/// Which way the player walks out of a room
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Index of a room inside its [`Mansion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

/// Clue planted in a room together with the suspect it points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueSpec {
    pub clue: String,
    pub suspect: String,
}

impl ClueSpec {
    pub fn new(clue: impl Into<String>, suspect: impl Into<String>) -> Self {
        Self {
            clue: clue.into(),
            suspect: suspect.into(),
        }
    }
}

/// A single room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
    pub clue: Option<ClueSpec>,
}

impl Room {
    /// Neighbor reached by walking out on `side`
    pub fn exit(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// True when no path leads further
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Validated room tree
#[derive(Debug, Clone)]
pub struct Mansion {
    rooms: Vec<Room>,
    entrance: RoomId,
}

impl Mansion {
    /// Build and validate a mansion from its layout description
    pub fn from_layout(layout: &MansionLayout) -> Result<Self, MansionError> {
        let (rooms, entrance) = layout.resolve()?;
        Ok(Self { rooms, entrance })
    }

    pub fn entrance(&self) -> RoomId {
        self.entrance
    }

    /// Look up a room. Ids handed out by this mansion are always valid.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn neighbor(&self, id: RoomId, side: Side) -> Option<RoomId> {
        self.room(id).and_then(|room| room.exit(side))
    }

    pub fn is_dead_end(&self, id: RoomId) -> bool {
        self.room(id).is_none_or(Room::is_dead_end)
    }

    /// Find a room by its exact name
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|room| room.name == name)
            .map(RoomId)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All rooms with their ids, in layout order
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (RoomId(i), room))
    }
}

impl Index<RoomId> for Mansion {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }
}
