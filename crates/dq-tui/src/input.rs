//! Input handling - convert key events to commands
//!
//! Keys follow the classic Detective Quest prompt: `e` left, `d` right,
//! `p` relations, `s` leave. Arrows and `c`/`q` are added for the terminal UI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dq_core::action::Command;
use dq_core::mansion::Side;

/// Convert a key event to a game command.
///
/// Keys that only change what the UI shows (help, closing popups) are
/// handled in app.rs.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Left => Some(Command::Go(Side::Left)),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Command::Go(Side::Right)),

        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::ShowClues),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::ShowAssociations),

        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('q') => Some(Command::Quit),

        _ => None,
    }
}
