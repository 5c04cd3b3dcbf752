//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use dq_core::GameState;

use crate::theme::Theme;

/// Widget for rendering the status line
pub struct StatusWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Text shown on the status line
    pub fn status_line(state: &GameState) -> String {
        let clues = state.casebook.clues().len();
        let relations = state.casebook.suspects().len();
        format!(
            "Room: {}  Clues: {}  Relations: {}  T:{}",
            state.current_room().name,
            clues,
            relations,
            state.turns,
        )
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let line1 = Self::status_line(self.state);
        buf.set_string(area.x, area.y, &line1, Style::default().fg(self.theme.text));

        if area.height > 1 {
            let line2 = "e/d: walk  c: clues  p: relations  s: leave  ?: help";
            buf.set_string(
                area.x,
                area.y + 1,
                line2,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}
