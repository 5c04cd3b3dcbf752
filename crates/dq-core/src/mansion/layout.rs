//! Mansion layout description and validation
//!
//! A layout names its rooms and links them by name. Resolving it checks that
//! the links form a single tree rooted at the entrance.

use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ClueSpec, Room, RoomId};

/// Problems found while loading or validating a layout
#[derive(Debug, Error)]
pub enum MansionError {
    #[error("Could not read layout file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid layout file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The mansion has no rooms")]
    Empty,

    #[error("Room '{0}' is defined more than once")]
    DuplicateRoom(String),

    #[error("Entrance '{0}' is not one of the rooms")]
    MissingEntrance(String),

    #[error("Room '{room}' links to unknown room '{target}'")]
    UnknownRoom { room: String, target: String },

    #[error("Room '{room}' is reachable from both '{first}' and '{second}'")]
    MultipleParents {
        room: String,
        first: String,
        second: String,
    },

    #[error("Room '{from}' links back to the entrance '{entrance}'")]
    EntranceLinked { from: String, entrance: String },

    #[error("Room '{0}' cannot be reached from the entrance")]
    Unreachable(String),
}

/// One room in a layout file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<ClueSpec>,
}

impl RoomSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
            clue: None,
        }
    }

    pub fn left(mut self, room: impl Into<String>) -> Self {
        self.left = Some(room.into());
        self
    }

    pub fn right(mut self, room: impl Into<String>) -> Self {
        self.right = Some(room.into());
        self
    }

    pub fn with_clue(mut self, clue: ClueSpec) -> Self {
        self.clue = Some(clue);
        self
    }
}

/// Serializable description of a mansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MansionLayout {
    /// Name of the room the player starts in
    pub entrance: String,
    pub rooms: Vec<RoomSpec>,
}

impl MansionLayout {
    pub fn new(entrance: impl Into<String>) -> Self {
        Self {
            entrance: entrance.into(),
            rooms: Vec::new(),
        }
    }

    pub fn with_room(mut self, room: RoomSpec) -> Self {
        self.rooms.push(room);
        self
    }

    /// Parse a layout from JSON text
    pub fn from_json(contents: &str) -> Result<Self, MansionError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load a layout from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, MansionError> {
        let contents = std::fs::read_to_string(path).map_err(|source| MansionError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn to_json(&self) -> Result<String, MansionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Turn names into ids and check the rooms form one tree
    pub(super) fn resolve(&self) -> Result<(Vec<Room>, RoomId), MansionError> {
        if self.rooms.is_empty() {
            return Err(MansionError::Empty);
        }

        let mut ids: HashMap<&str, RoomId> = HashMap::with_capacity(self.rooms.len());
        for (i, spec) in self.rooms.iter().enumerate() {
            if ids.insert(spec.name.as_str(), RoomId(i)).is_some() {
                return Err(MansionError::DuplicateRoom(spec.name.clone()));
            }
        }

        let entrance = *ids
            .get(self.entrance.as_str())
            .ok_or_else(|| MansionError::MissingEntrance(self.entrance.clone()))?;

        let mut parents: Vec<Option<RoomId>> = vec![None; self.rooms.len()];
        let mut rooms = Vec::with_capacity(self.rooms.len());

        for (i, spec) in self.rooms.iter().enumerate() {
            let mut link = |target: &Option<String>| -> Result<Option<RoomId>, MansionError> {
                let Some(target) = target else {
                    return Ok(None);
                };
                let id = *ids.get(target.as_str()).ok_or_else(|| MansionError::UnknownRoom {
                    room: spec.name.clone(),
                    target: target.clone(),
                })?;

                if id == entrance {
                    return Err(MansionError::EntranceLinked {
                        from: spec.name.clone(),
                        entrance: self.entrance.clone(),
                    });
                }
                if let Some(first) = parents[id.0] {
                    return Err(MansionError::MultipleParents {
                        room: target.clone(),
                        first: self.rooms[first.0].name.clone(),
                        second: spec.name.clone(),
                    });
                }
                parents[id.0] = Some(RoomId(i));
                Ok(Some(id))
            };

            let left = link(&spec.left)?;
            let right = link(&spec.right)?;

            rooms.push(Room {
                name: spec.name.clone(),
                left,
                right,
                clue: spec.clue.clone(),
            });
        }

        let mut reached = vec![false; rooms.len()];
        let mut pending = vec![entrance];
        while let Some(id) = pending.pop() {
            reached[id.0] = true;
            let room: &Room = &rooms[id.0];
            pending.extend(room.left);
            pending.extend(room.right);
        }

        if let Some(lost) = reached.iter().position(|&r| !r) {
            return Err(MansionError::Unreachable(rooms[lost].name.clone()));
        }

        Ok((rooms, entrance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mansion::Mansion;

    fn expect_err(layout: MansionLayout) -> MansionError {
        match Mansion::from_layout(&layout) {
            Ok(_) => panic!("layout should have been rejected"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_empty_layout() {
        assert!(matches!(expect_err(MansionLayout::new("Hall")), MansionError::Empty));
    }

    #[test]
    fn test_duplicate_room() {
        let layout = MansionLayout::new("Hall")
            .with_room(RoomSpec::new("Hall"))
            .with_room(RoomSpec::new("Hall"));
        assert!(matches!(
            expect_err(layout),
            MansionError::DuplicateRoom(name) if name == "Hall"
        ));
    }

    #[test]
    fn test_missing_entrance() {
        let layout = MansionLayout::new("Foyer").with_room(RoomSpec::new("Hall"));
        assert!(matches!(expect_err(layout), MansionError::MissingEntrance(_)));
    }

    #[test]
    fn test_unknown_link() {
        let layout = MansionLayout::new("Hall")
            .with_room(RoomSpec::new("Hall").left("Attic"));
        let err = expect_err(layout);
        assert!(matches!(
            &err,
            MansionError::UnknownRoom { target, .. } if target == "Attic"
        ));
        assert_eq!(err.to_string(), "Room 'Hall' links to unknown room 'Attic'");
    }

    #[test]
    fn test_shared_child_rejected() {
        let layout = MansionLayout::new("Hall")
            .with_room(RoomSpec::new("Hall").left("A").right("B"))
            .with_room(RoomSpec::new("A").left("C"))
            .with_room(RoomSpec::new("B").right("C"))
            .with_room(RoomSpec::new("C"));
        assert!(matches!(
            expect_err(layout),
            MansionError::MultipleParents { room, first, second }
                if room == "C" && first == "A" && second == "B"
        ));
    }

    #[test]
    fn test_both_sides_to_same_room_rejected() {
        let layout = MansionLayout::new("Hall")
            .with_room(RoomSpec::new("Hall").left("A").right("A"))
            .with_room(RoomSpec::new("A"));
        assert!(matches!(expect_err(layout), MansionError::MultipleParents { .. }));
    }

    #[test]
    fn test_link_back_to_entrance_rejected() {
        let layout = MansionLayout::new("Hall")
            .with_room(RoomSpec::new("Hall").left("A"))
            .with_room(RoomSpec::new("A").left("Hall"));
        assert!(matches!(expect_err(layout), MansionError::EntranceLinked { .. }));
    }

    #[test]
    fn test_detached_cycle_is_unreachable() {
        let layout = MansionLayout::new("Hall")
            .with_room(RoomSpec::new("Hall"))
            .with_room(RoomSpec::new("A").left("B"))
            .with_room(RoomSpec::new("B").left("A"));
        assert!(matches!(
            expect_err(layout),
            MansionError::Unreachable(name) if name == "A"
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "entrance": "Hall",
            "rooms": [
                { "name": "Hall", "left": "Library" },
                { "name": "Library", "clue": { "clue": "Torn Diary", "suspect": "Mr. Blackwood" } }
            ]
        }"#;

        let layout = MansionLayout::from_json(json).unwrap();
        assert_eq!(layout.rooms.len(), 2);
        assert_eq!(layout.rooms[0].right, None);

        let again = MansionLayout::from_json(&layout.to_json().unwrap()).unwrap();
        assert_eq!(again, layout);
        assert!(Mansion::from_layout(&again).is_ok());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            MansionLayout::from_json("{ not json"),
            Err(MansionError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/definitely/not/here.json");
        let err = MansionLayout::load_from_file(path).unwrap_err();
        assert!(matches!(err, MansionError::Io { .. }));
    }
}
