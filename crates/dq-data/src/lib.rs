//! dq-data: Static game data for Detective Quest
//!
//! Contains the default mansion: its rooms, the clues hidden in them and the
//! suspect each clue points to.

pub mod rooms;

pub use rooms::{
    ENTRANCE, PlantedClue, ROOMS, RoomData, default_layout, find_room, room_with_clue, suspects,
};
