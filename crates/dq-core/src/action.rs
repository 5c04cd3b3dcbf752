//! Player commands

use std::fmt;

use crate::mansion::Side;

/// A single player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Walk through the door on one side of the current room
    Go(Side),
    /// List the clues found so far
    ShowClues,
    /// List clue → suspect relations
    ShowAssociations,
    /// Stop exploring
    Quit,
}

impl Command {
    /// Whether the command can move the player
    pub fn is_movement(&self) -> bool {
        matches!(self, Command::Go(_))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Go(side) => write!(f, "go {}", side),
            Command::ShowClues => f.write_str("clues"),
            Command::ShowAssociations => f.write_str("relations"),
            Command::Quit => f.write_str("quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        assert_eq!(Command::Go(Side::Left).to_string(), "go left");
        assert_eq!(Command::ShowAssociations.to_string(), "relations");
        assert!(Command::Go(Side::Right).is_movement());
        assert!(!Command::Quit.is_movement());
    }
}
