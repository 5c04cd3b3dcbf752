//! Message panel widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Widget showing the messages of the current turn
pub struct MessagesWidget<'a> {
    messages: &'a [String],
    theme: &'a Theme,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(messages: &'a [String], theme: &'a Theme) -> Self {
        Self { messages, theme }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.border));

        // Newest messages win when the panel is too short
        let visible = area.height.saturating_sub(1) as usize;
        let skip = self.messages.len().saturating_sub(visible);
        let lines: Vec<Line> = self.messages[skip..]
            .iter()
            .map(|msg| Line::from(msg.as_str()))
            .collect();

        Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(self.theme.text))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
