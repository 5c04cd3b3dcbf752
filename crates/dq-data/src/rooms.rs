//! Room definitions for the default mansion
//!
//! Five rooms hand-wired as a binary tree. Four of them hide a clue, each
//! pointing at a fixed suspect.

use dq_core::mansion::{ClueSpec, MansionLayout, RoomSpec};

/// Clue planted in a room
#[derive(Debug, Clone, Copy)]
pub struct PlantedClue {
    pub clue: &'static str,
    pub suspect: &'static str,
}

impl PlantedClue {
    pub const fn new(clue: &'static str, suspect: &'static str) -> Self {
        Self { clue, suspect }
    }
}

/// A room definition
#[derive(Debug, Clone, Copy)]
pub struct RoomData {
    pub name: &'static str,
    pub left: Option<&'static str>,
    pub right: Option<&'static str>,
    pub clue: Option<PlantedClue>,
}

impl RoomData {
    pub const fn new(
        name: &'static str,
        left: Option<&'static str>,
        right: Option<&'static str>,
        clue: Option<PlantedClue>,
    ) -> Self {
        Self {
            name,
            left,
            right,
            clue,
        }
    }

    fn to_spec(self) -> RoomSpec {
        RoomSpec {
            name: self.name.to_string(),
            left: self.left.map(str::to_string),
            right: self.right.map(str::to_string),
            clue: self.clue.map(|c| ClueSpec::new(c.clue, c.suspect)),
        }
    }
}

pub const HALL: &str = "Hall de Entrada";
pub const LIBRARY: &str = "Biblioteca Misteriosa";
pub const KITCHEN: &str = "Cozinha Antiga";
pub const GARDEN: &str = "Jardim Abandonado";
pub const CELLAR: &str = "Porão Escuro";

/// Room the player starts in
pub const ENTRANCE: &str = HALL;

pub const ROOMS: &[RoomData] = &[
    RoomData::new(HALL, Some(LIBRARY), Some(KITCHEN), None),
    RoomData::new(
        LIBRARY,
        Some(GARDEN),
        Some(CELLAR),
        Some(PlantedClue::new("Diário Rasgado", "Sr. Blackwood")),
    ),
    RoomData::new(
        KITCHEN,
        None,
        None,
        Some(PlantedClue::new("Receita Queimada", "Sr. Blackwood")),
    ),
    RoomData::new(
        GARDEN,
        None,
        None,
        Some(PlantedClue::new("Chave Enferrujada", "Sra. Violet")),
    ),
    RoomData::new(
        CELLAR,
        None,
        None,
        Some(PlantedClue::new("Fotografia Antiga", "Sr. Graves")),
    ),
];

/// Find a room by name
pub fn find_room(name: &str) -> Option<&'static RoomData> {
    ROOMS.iter().find(|r| r.name == name)
}

/// Find the room hiding a clue
pub fn room_with_clue(clue: &str) -> Option<&'static RoomData> {
    ROOMS.iter().find(|r| r.clue.is_some_and(|c| c.clue == clue))
}

/// Every distinct suspect named by a planted clue, in table order
pub fn suspects() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for clue in ROOMS.iter().filter_map(|r| r.clue) {
        if !names.contains(&clue.suspect) {
            names.push(clue.suspect);
        }
    }
    names
}

/// The default mansion as a layout
pub fn default_layout() -> MansionLayout {
    MansionLayout {
        entrance: ENTRANCE.to_string(),
        rooms: ROOMS.iter().map(|r| r.to_spec()).collect(),
    }
}
