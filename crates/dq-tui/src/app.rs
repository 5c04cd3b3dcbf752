//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use dq_core::action::Command;
use dq_core::casebook::CaseReport;
use dq_core::{GameLoop, GameLoopResult, GameState};

use crate::input::key_to_command;
use crate::theme::Theme;
use crate::widgets::{MessagesWidget, RoomWidget, StatusWidget};

/// Message shown for keys with no binding
pub const INVALID_OPTION: &str = "Invalid option!";

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Normal exploration
    Normal,
    /// Alphabetical clue list popup
    Clues,
    /// Clue → suspect popup
    Relations,
    /// Showing help
    Help,
    /// Final screen with the clue dump and prime suspect
    CaseClosed { report: CaseReport },
}

/// Application state
pub struct App {
    /// Game loop controller
    game_loop: GameLoop,

    /// Should quit
    should_quit: bool,

    /// Current UI mode
    mode: UiMode,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,
}

impl App {
    pub fn new(state: GameState, theme: Theme) -> Self {
        Self {
            game_loop: GameLoop::new(state),
            should_quit: false,
            mode: UiMode::Normal,
            theme,
        }
    }

    /// Get game state
    pub fn state(&self) -> &GameState {
        self.game_loop.state()
    }

    /// Get mutable game state
    pub fn state_mut(&mut self) -> &mut GameState {
        self.game_loop.state_mut()
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Report for the closed case, once the exploration has ended
    pub fn case_report(&self) -> Option<&CaseReport> {
        match &self.mode {
            UiMode::CaseClosed { report } => Some(report),
            _ => None,
        }
    }

    /// Handle input event - returns a command if one should be executed
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };
        // Windows reports releases too
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match &self.mode {
            UiMode::Normal => self.handle_normal_input(key),
            UiMode::Clues | UiMode::Relations => {
                self.handle_popup_input(key);
                None
            }
            UiMode::Help => {
                self.handle_help_input(key);
                None
            }
            UiMode::CaseClosed { .. } => {
                self.should_quit = true;
                None
            }
        }
    }

    /// Handle input in normal exploration mode
    fn handle_normal_input(&mut self, key: KeyEvent) -> Option<Command> {
        if key.code == KeyCode::Char('?') {
            self.mode = UiMode::Help;
            return None;
        }

        let command = key_to_command(key);
        if command.is_none() {
            let state = self.game_loop.state_mut();
            state.clear_messages();
            state.message(INVALID_OPTION);
        }
        command
    }

    /// Clue and relation popups close on any dismiss key
    fn handle_popup_input(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc
                | KeyCode::Enter
                | KeyCode::Char(' ')
                | KeyCode::Char('c')
                | KeyCode::Char('p')
        ) {
            self.mode = UiMode::Normal;
        }
    }

    /// Handle input when viewing help
    fn handle_help_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('?') => {
                self.mode = UiMode::Normal;
            }
            _ => {}
        }
    }

    /// Execute a command and update state
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        self.game_loop.state_mut().clear_messages();

        let result = self.game_loop.tick(command);

        match &result {
            GameLoopResult::Continue => match command {
                Command::ShowClues => self.mode = UiMode::Clues,
                Command::ShowAssociations => self.mode = UiMode::Relations,
                _ => {}
            },
            GameLoopResult::DeadEnd(_) | GameLoopResult::PlayerQuit => {
                self.mode = UiMode::CaseClosed {
                    report: self.game_loop.state().close_case(),
                };
            }
        }

        result
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Layout: room at top, status in middle, messages at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(9),    // Room panel
                Constraint::Length(2), // Status lines
                Constraint::Length(6), // Messages
            ])
            .split(frame.area());

        let state = self.game_loop.state();
        frame.render_widget(RoomWidget::new(state, &self.theme), chunks[0]);
        frame.render_widget(StatusWidget::new(state, &self.theme), chunks[1]);
        let messages = MessagesWidget::new(&state.messages, &self.theme);
        frame.render_widget(messages, chunks[2]);

        match &self.mode {
            UiMode::Normal => {}
            UiMode::Clues => self.render_clues(frame),
            UiMode::Relations => self.render_relations(frame),
            UiMode::Help => self.render_help(frame),
            UiMode::CaseClosed { report } => self.render_case_closed(frame, report),
        }
    }

    /// Render the alphabetical clue list
    fn render_clues(&self, frame: &mut Frame) {
        let lines: Vec<Line> = self
            .game_loop
            .state()
            .clue_lines()
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(self.theme.clue))))
            .collect();
        self.render_list_popup(frame, " Clues ", lines);
    }

    /// Render every clue → suspect relation
    fn render_relations(&self, frame: &mut Frame) {
        let state = self.game_loop.state();
        let lines: Vec<Line> = if state.casebook.suspects().is_empty() {
            state
                .association_lines()
                .into_iter()
                .map(|line| {
                    Line::from(Span::styled(line, Style::default().fg(self.theme.text_muted)))
                })
                .collect()
        } else {
            state
                .casebook
                .suspects()
                .iter()
                .map(|a| {
                    Line::from(vec![
                        Span::styled(a.clue.as_str(), Style::default().fg(self.theme.clue)),
                        Span::raw(" -> "),
                        Span::styled(a.suspect.as_str(), Style::default().fg(self.theme.suspect)),
                    ])
                })
                .collect()
        };
        self.render_list_popup(frame, " Relations ", lines);
    }

    fn render_list_popup(&self, frame: &mut Frame, title: &str, mut lines: Vec<Line>) {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ESC to close",
            Style::default().fg(self.theme.text_dim),
        )));

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Render help overlay
    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);

        let help_text = r#"Movement:
  e  or  Left     Go to the left room
  d  or  Right    Go to the right room

Investigation:
  c               Clues collected so far
  p               Clue and suspect relations

Meta:
  s  or  q        Stop exploring and close the case
  ?               This help

Press ESC or SPACE to close"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .style(Style::default().fg(self.theme.text));

        frame.render_widget(paragraph, area);
    }

    /// Render the final case summary
    fn render_case_closed(&self, frame: &mut Frame, report: &CaseReport) {
        let area = centered_rect(70, 80, frame.area());
        frame.render_widget(Clear, area);

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                "  Case closed  ",
                Style::default().fg(self.theme.header).bold(),
            )),
            Line::from(""),
        ];

        for message in &self.game_loop.state().messages {
            lines.push(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(self.theme.text_dim),
            )));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            "── Clues ──",
            Style::default().fg(self.theme.accent),
        )));
        if report.clues.is_empty() {
            lines.push(Line::from(Span::styled(
                "No clues were found",
                Style::default().fg(self.theme.text_muted),
            )));
        }
        for clue in &report.clues {
            lines.push(Line::from(Span::styled(
                clue.as_str(),
                Style::default().fg(self.theme.clue),
            )));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            "── Prime suspect ──",
            Style::default().fg(self.theme.accent),
        )));
        match &report.prime_suspect {
            Some(suspect) => lines.push(Line::from(vec![
                Span::styled(
                    suspect.name.as_str(),
                    Style::default().fg(self.theme.suspect).bold(),
                ),
                Span::raw(format!(
                    " ({} {})",
                    suspect.mentions,
                    if suspect.mentions == 1 { "mention" } else { "mentions" }
                )),
            ])),
            None => lines.push(Line::from(Span::styled(
                "No suspect was tied to any clue",
                Style::default().fg(self.theme.text_muted),
            ))),
        }

        lines.push(Line::from(""));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press any key to exit",
            Style::default().fg(self.theme.text_dim),
        )));

        let block = Block::default()
            .title(" Detective Quest ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_danger));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use dq_core::mansion::{ClueSpec, Mansion, MansionLayout, RoomSpec, Side};
    use dq_core::options::GameOptions;

    fn test_app() -> App {
        let stain = ClueSpec::new("Ink Stain", "Butler");
        let layout = MansionLayout::new("Hall")
            .with_room(RoomSpec::new("Hall").left("Study"))
            .with_room(RoomSpec::new("Study").with_clue(stain));
        let mansion = Mansion::from_layout(&layout).unwrap();
        let state = GameState::new(mansion, GameOptions::default());
        App::new(state, Theme::dark())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press(c: char) -> Event {
        key(KeyCode::Char(c))
    }

    #[test]
    fn test_unknown_key_is_invalid_option() {
        let mut app = test_app();
        assert_eq!(app.handle_event(press('x')), None);
        assert_eq!(app.state().messages, vec![INVALID_OPTION]);
        assert_eq!(app.mode(), &UiMode::Normal);
    }

    #[test]
    fn test_help_toggles() {
        let mut app = test_app();
        assert_eq!(app.handle_event(press('?')), None);
        assert_eq!(app.mode(), &UiMode::Help);
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.mode(), &UiMode::Normal);
    }

    #[test]
    fn test_clue_popup_opens_and_closes() {
        let mut app = test_app();
        let command = app.handle_event(press('c')).unwrap();
        assert_eq!(app.execute(command), GameLoopResult::Continue);
        assert_eq!(app.mode(), &UiMode::Clues);

        // Popup swallows keys until dismissed
        assert_eq!(app.handle_event(press('e')), None);
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.mode(), &UiMode::Normal);
    }

    #[test]
    fn test_dead_end_closes_case() {
        let mut app = test_app();
        let command = app.handle_event(press('e')).unwrap();
        assert_eq!(command, Command::Go(Side::Left));
        assert_eq!(
            app.execute(command),
            GameLoopResult::DeadEnd("Study".to_string())
        );

        let report = app.case_report().unwrap();
        assert_eq!(report.clues, vec!["Ink Stain"]);
        assert_eq!(report.prime_suspect.as_ref().unwrap().name, "Butler");

        assert!(!app.should_quit());
        app.handle_event(press('z'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_quit_closes_case() {
        let mut app = test_app();
        let command = app.handle_event(press('s')).unwrap();
        assert_eq!(app.execute(command), GameLoopResult::PlayerQuit);
        let report = app.case_report().unwrap();
        assert!(report.clues.is_empty());
        assert_eq!(report.prime_suspect, None);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 60, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 30);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 10);
    }
}
