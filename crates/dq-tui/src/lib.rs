//! dq-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for exploring the mansion.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{App, UiMode};
pub use theme::Theme;
