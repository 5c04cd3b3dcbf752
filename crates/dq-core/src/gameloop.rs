//! Main exploration loop
//!
//! The player starts in the entrance hall and walks left or right through the
//! mansion. Entering a room that holds a clue files it in the casebook. The
//! walk ends when the player quits or, unless disabled, reaches a room with no
//! way forward.

use hashbrown::HashSet;
use tracing::{debug, info};

use crate::action::Command;
use crate::casebook::{CaseReport, Casebook, InsertOutcome, NO_ASSOCIATIONS_YET};
use crate::mansion::{Mansion, Room, RoomId, Side};
use crate::options::GameOptions;

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Keep exploring
    Continue,
    /// Walked into a room with no exits (room name)
    DeadEnd(String),
    /// Player stopped exploring
    PlayerQuit,
}

impl GameLoopResult {
    /// Whether the session is over
    pub fn is_over(&self) -> bool {
        !matches!(self, GameLoopResult::Continue)
    }
}

/// Main game state
#[derive(Debug)]
pub struct GameState {
    /// Room layout being explored
    pub mansion: Mansion,

    /// Room the player stands in
    pub current: RoomId,

    /// Clues found and the suspects they implicate
    pub casebook: Casebook,

    /// Active options
    pub options: GameOptions,

    /// Moves made so far
    pub turns: u32,

    /// Rooms whose clue has already been collected
    searched: HashSet<RoomId>,

    /// Set once the walk has ended at a dead end
    finished: bool,

    /// Messages for the current turn
    pub messages: Vec<String>,

    /// Scrollback, capped at `options.msghistory`
    pub message_history: Vec<String>,
}

impl GameState {
    /// Start a session in the mansion's entrance.
    ///
    /// A clue planted in the entrance itself is found right away.
    pub fn new(mansion: Mansion, options: GameOptions) -> Self {
        let entrance = mansion.entrance();
        let mut state = Self {
            casebook: Casebook::with_bucket_count(options.bucket_count),
            mansion,
            current: entrance,
            options,
            turns: 0,
            searched: HashSet::new(),
            finished: false,
            messages: Vec::new(),
            message_history: Vec::new(),
        };

        info!(
            rooms = state.mansion.len(),
            buckets = state.options.bucket_count.get(),
            "exploration started"
        );
        state.search_current_room();
        state
    }

    /// Add a message for this turn
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg_str = msg.into();
        self.messages.push(msg_str.clone());
        self.message_history.push(msg_str);

        let limit = self.options.msghistory;
        if self.message_history.len() > limit {
            let excess = self.message_history.len() - limit;
            self.message_history.drain(..excess);
        }
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn current_room(&self) -> &Room {
        &self.mansion[self.current]
    }

    /// Whether the current room has no exits
    pub fn at_dead_end(&self) -> bool {
        self.current_room().is_dead_end()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the clue of `room` has been collected
    pub fn is_searched(&self, room: RoomId) -> bool {
        self.searched.contains(&room)
    }

    /// Collect the current room's clue if it has one and it is still there
    fn search_current_room(&mut self) {
        if !self.searched.insert(self.current) {
            return;
        }
        let Some(spec) = self.current_room().clue.clone() else {
            return;
        };

        self.message(format!("You found a clue: '{}'", spec.clue));
        let outcome = self.casebook.record_discovery(&spec.clue, &spec.suspect);
        if outcome == InsertOutcome::AlreadyPresent {
            self.message(format!("'{}' was already found earlier!", spec.clue));
        }
    }

    /// Lines listing every clue in alphabetical order
    pub fn clue_lines(&self) -> Vec<String> {
        self.casebook.clue_listing().lines()
    }

    /// Lines listing every clue → suspect relation
    pub fn association_lines(&self) -> Vec<String> {
        let lines: Vec<String> = self.casebook.association_lines().collect();
        if lines.is_empty() {
            vec![NO_ASSOCIATIONS_YET.to_string()]
        } else {
            lines
        }
    }

    /// Final clue dump and prime suspect
    pub fn close_case(&self) -> CaseReport {
        self.casebook.close_case()
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Execute one player command
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        debug!(%command, turn = self.state.turns, "tick");

        match command {
            Command::Go(side) => self.walk(side),
            Command::ShowClues => {
                self.state.message("Clues collected so far:");
                for line in self.state.clue_lines() {
                    self.state.message(line);
                }
                GameLoopResult::Continue
            }
            Command::ShowAssociations => {
                self.state.message("Clue and suspect relations:");
                for line in self.state.association_lines() {
                    self.state.message(line);
                }
                GameLoopResult::Continue
            }
            Command::Quit => {
                self.state.message("You decided to stop exploring. Until next time, detective!");
                info!(turns = self.state.turns, "exploration abandoned");
                GameLoopResult::PlayerQuit
            }
        }
    }

    fn walk(&mut self, side: Side) -> GameLoopResult {
        if self.state.finished {
            self.state.message("The exploration is over.");
            return GameLoopResult::DeadEnd(self.state.current_room().name.clone());
        }

        let Some(next) = self.state.mansion.neighbor(self.state.current, side) else {
            self.state.message(format!("There is no path to the {}.", side));
            return GameLoopResult::Continue;
        };

        self.state.current = next;
        self.state.turns += 1;
        let name = self.state.current_room().name.clone();
        debug!(room = %name, %side, "entered room");
        self.state.message(format!("You are in: {}", name));
        self.state.search_current_room();

        if self.state.at_dead_end() && self.state.options.stop_at_dead_end {
            self.state.finished = true;
            self.state.message(format!("You reached the end of the path in: {}", name));
            info!(room = %name, turns = self.state.turns, "dead end reached");
            return GameLoopResult::DeadEnd(name);
        }

        GameLoopResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mansion::{ClueSpec, MansionLayout, RoomSpec};

    fn test_state(options: GameOptions) -> GameState {
        let diary = ClueSpec::new("Torn Diary", "Mr. Blackwood");
        let key = ClueSpec::new("Rusty Key", "Mrs. Violet");
        let recipe = ClueSpec::new("Burnt Recipe", "Mr. Blackwood");
        let layout = MansionLayout::new("Hall")
            .with_room(RoomSpec::new("Hall").left("Library").right("Kitchen"))
            .with_room(RoomSpec::new("Library").left("Garden").with_clue(diary))
            .with_room(RoomSpec::new("Garden").with_clue(key))
            .with_room(RoomSpec::new("Kitchen").with_clue(recipe));
        GameState::new(Mansion::from_layout(&layout).unwrap(), options)
    }

    #[test]
    fn test_starts_in_entrance() {
        let state = test_state(GameOptions::default());
        assert_eq!(state.current_room().name, "Hall");
        assert_eq!(state.turns, 0);
        assert!(state.casebook.clues().is_empty());
        assert!(state.is_searched(state.current));
    }

    #[test]
    fn test_walk_collects_clue() {
        let mut game = GameLoop::new(test_state(GameOptions::default()));

        assert_eq!(game.tick(Command::Go(Side::Left)), GameLoopResult::Continue);
        let state = game.state();
        assert_eq!(state.current_room().name, "Library");
        assert_eq!(state.turns, 1);
        assert!(state.casebook.clues().contains("Torn Diary"));
        let found = "You found a clue: 'Torn Diary'".to_string();
        assert!(state.messages.contains(&found));
    }

    #[test]
    fn test_no_path_keeps_position() {
        let mut game = GameLoop::new(test_state(GameOptions::default()));
        game.tick(Command::Go(Side::Left));
        game.state_mut().clear_messages();

        assert_eq!(game.tick(Command::Go(Side::Right)), GameLoopResult::Continue);
        assert_eq!(game.state().current_room().name, "Library");
        assert_eq!(game.state().turns, 1);
        assert_eq!(
            game.state().messages,
            vec!["There is no path to the right."]
        );
    }

    #[test]
    fn test_dead_end_ends_walk() {
        let mut game = GameLoop::new(test_state(GameOptions::default()));
        game.tick(Command::Go(Side::Left));

        let result = game.tick(Command::Go(Side::Left));
        assert_eq!(result, GameLoopResult::DeadEnd("Garden".to_string()));
        assert!(result.is_over());
        assert!(game.state().is_finished());

        // Further walking is refused
        assert!(game.tick(Command::Go(Side::Left)).is_over());
        assert_eq!(game.state().turns, 2);

        let report = game.state().close_case();
        assert_eq!(report.clues, vec!["Rusty Key", "Torn Diary"]);
        let suspect = report.prime_suspect.unwrap();
        // One mention each: "Rusty Key" sits in slot 0, before "Torn Diary" in slot 6
        assert_eq!(suspect.name, "Mrs. Violet");
        assert_eq!(suspect.mentions, 1);
    }

    #[test]
    fn test_dead_end_can_be_disabled() {
        let options = GameOptions {
            stop_at_dead_end: false,
            ..GameOptions::default()
        };
        let mut game = GameLoop::new(test_state(options));
        assert_eq!(game.tick(Command::Go(Side::Right)), GameLoopResult::Continue);
        assert!(game.state().at_dead_end());
        assert!(!game.state().is_finished());
    }

    #[test]
    fn test_show_commands() {
        let mut game = GameLoop::new(test_state(GameOptions::default()));
        game.tick(Command::ShowClues);
        assert_eq!(
            game.state().messages,
            vec!["Clues collected so far:", "(no clues found yet)"]
        );

        game.state_mut().clear_messages();
        game.tick(Command::Go(Side::Left));
        game.state_mut().clear_messages();
        game.tick(Command::ShowAssociations);
        assert_eq!(
            game.state().messages,
            vec!["Clue and suspect relations:", "Torn Diary -> Mr. Blackwood"]
        );
    }

    #[test]
    fn test_quit() {
        let mut game = GameLoop::new(test_state(GameOptions::default()));
        assert_eq!(game.tick(Command::Quit), GameLoopResult::PlayerQuit);
    }

    #[test]
    fn test_entrance_clue_found_at_start() {
        let boot = ClueSpec::new("Muddy Boot", "Gardener");
        let layout = MansionLayout::new("Hall")
            .with_room(RoomSpec::new("Hall").with_clue(boot));
        let mansion = Mansion::from_layout(&layout).unwrap();
        let state = GameState::new(mansion, GameOptions::default());
        assert!(state.casebook.clues().contains("Muddy Boot"));
        assert!(state.at_dead_end());
    }

    #[test]
    fn test_message_history_is_capped() {
        let options = GameOptions {
            msghistory: 3,
            ..GameOptions::default()
        };
        let mut state = test_state(options);
        for i in 0..5 {
            state.message(format!("msg {}", i));
        }
        assert_eq!(state.message_history, vec!["msg 2", "msg 3", "msg 4"]);
        assert_eq!(state.messages.len(), 5);
    }
}
