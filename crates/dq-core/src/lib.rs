//! dq-core: Core game logic for Detective Quest
//!
//! This crate contains all game logic with no terminal dependencies:
//! the clue index (an unbalanced binary search tree), the suspect table
//! (a chained hash table), the mansion room tree and the exploration loop.

pub mod action;
pub mod casebook;
pub mod mansion;
pub mod options;

mod consts;
mod gameloop;

pub use consts::*;
pub use gameloop::{GameLoop, GameLoopResult, GameState};
