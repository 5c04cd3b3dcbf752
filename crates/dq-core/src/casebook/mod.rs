//! The detective's casebook
//!
//! Pairs the ordered clue index with the clue → suspect table and renders the
//! listings the exploration loop shows to the player.

mod clues;
mod suspects;

use std::fmt;
use std::num::NonZeroUsize;

use tracing::debug;

pub use clues::{ClueIndex, InOrder, InsertOutcome};
pub use suspects::{Association, Iter, SuspectTable, SuspectTally, char_sum_slot};

/// Placeholder line shown when no clue has been found yet
pub const NO_CLUES_YET: &str = "(no clues found yet)";

/// Placeholder line shown when no clue has been tied to a suspect yet
pub const NO_ASSOCIATIONS_YET: &str = "(no clue has been tied to a suspect yet)";

/// Clues found so far and the suspects they point to
#[derive(Debug, Default)]
pub struct Casebook {
    clues: ClueIndex,
    suspects: SuspectTable,
}

impl Casebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket_count(buckets: NonZeroUsize) -> Self {
        Self {
            clues: ClueIndex::new(),
            suspects: SuspectTable::with_bucket_count(buckets),
        }
    }

    /// Record a discovered clue and the suspect it implicates.
    ///
    /// The pair always lands in the suspect table, even when the clue itself
    /// was already indexed.
    pub fn record_discovery(&mut self, clue: &str, suspect: &str) -> InsertOutcome {
        let outcome = self.clues.insert(clue);
        self.suspects.insert(clue, suspect);
        debug!(clue, suspect, ?outcome, "clue recorded");
        outcome
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn suspects(&self) -> &SuspectTable {
        &self.suspects
    }

    /// Clue names in alphabetical order
    pub fn clue_listing(&self) -> ClueListing<'_> {
        if self.clues.is_empty() {
            ClueListing::NoneYet
        } else {
            ClueListing::Clues(self.clues.in_order())
        }
    }

    /// Every association rendered as `"<clue> -> <suspect>"`
    pub fn association_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.suspects.iter().map(Association::to_string)
    }

    /// Final summary: every clue in order plus the prime suspect
    pub fn close_case(&self) -> CaseReport {
        let leader = self.suspects.most_mentioned_suspect();
        CaseReport {
            clues: self.clues.in_order().map(str::to_owned).collect(),
            prime_suspect: leader.map(|(name, mentions)| PrimeSuspect {
                name: name.to_owned(),
                mentions,
            }),
        }
    }
}

/// What to show when the player asks for the clue list
pub enum ClueListing<'a> {
    /// Nothing has been found yet
    NoneYet,
    /// Clue names in ascending order
    Clues(InOrder<'a>),
}

impl ClueListing<'_> {
    /// One display line per clue, or the "none yet" placeholder
    pub fn lines(self) -> Vec<String> {
        match self {
            ClueListing::NoneYet => vec![NO_CLUES_YET.to_string()],
            ClueListing::Clues(names) => names.map(|name| format!("- {}", name)).collect(),
        }
    }
}

/// The suspect named by most clues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSuspect {
    pub name: String,
    pub mentions: usize,
}

/// End-of-session summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub clues: Vec<String>,
    pub prime_suspect: Option<PrimeSuspect>,
}

impl CaseReport {
    /// Display lines, headers included
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec!["Final clues discovered:".to_string()];
        if self.clues.is_empty() {
            lines.push(NO_CLUES_YET.to_string());
        } else {
            lines.extend(self.clues.iter().map(|clue| format!("- {}", clue)));
        }

        lines.push(String::new());
        match &self.prime_suspect {
            Some(suspect) => lines.push(format!(
                "Most mentioned suspect: {} ({} {})",
                suspect.name,
                suspect.mentions,
                if suspect.mentions == 1 { "mention" } else { "mentions" },
            )),
            None => lines.push("No suspect was tied to any clue.".to_string()),
        }
        lines
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
