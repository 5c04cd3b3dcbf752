//! Current room panel

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use strum::IntoEnumIterator;

use dq_core::GameState;
use dq_core::mansion::Side;

use crate::theme::Theme;

/// Widget describing the room the player stands in and its doors
pub struct RoomWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> RoomWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let state = self.state;
        let room = state.current_room();
        let mut lines = vec![
            Line::from(vec![
                Span::raw("You are in: "),
                Span::styled(
                    room.name.as_str(),
                    Style::default().fg(self.theme.header).bold(),
                ),
            ]),
            Line::from(""),
        ];

        match &room.clue {
            Some(spec) => lines.push(Line::from(vec![
                Span::raw("Clue here: "),
                Span::styled(spec.clue.as_str(), Style::default().fg(self.theme.clue)),
            ])),
            None => lines.push(Line::from(Span::styled(
                "Nothing of interest here.",
                Style::default().fg(self.theme.text_muted),
            ))),
        }
        lines.push(Line::from(""));

        for side in Side::iter() {
            let exit = room
                .exit(side)
                .and_then(|id| state.mansion.room(id))
                .map(|next| next.name.as_str());
            let line = match exit {
                Some(name) => Line::from(vec![
                    Span::raw(format!("  {:<5} -> ", side.to_string())),
                    Span::styled(name, Style::default().fg(self.theme.good)),
                ]),
                None => Line::from(vec![
                    Span::raw(format!("  {:<5} -> ", side.to_string())),
                    Span::styled("wall", Style::default().fg(self.theme.bad)),
                ]),
            };
            lines.push(line);
        }

        if room.is_dead_end() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "This is the end of the path.",
                Style::default().fg(self.theme.accent),
            )));
        }

        lines
    }
}

impl Widget for RoomWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Mansion ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
