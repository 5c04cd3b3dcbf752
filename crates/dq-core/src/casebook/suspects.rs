//! Suspect table: clue → suspect associations in a chained hash table
//!
//! Slots are chosen by summing the character codes of the clue name, so
//! anagrams always share a chain. Chains keep insertion order and the table
//! never deduplicates: recording the same pair twice stores it twice.

use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use hashbrown::HashMap;

use crate::DEFAULT_BUCKET_COUNT;

/// Compute the slot for a key: sum of Unicode scalar values modulo `buckets`.
pub fn char_sum_slot(key: &str, buckets: NonZeroUsize) -> usize {
    let sum = key
        .chars()
        .fold(0u64, |acc, c| acc.wrapping_add(u64::from(u32::from(c))));
    (sum % buckets.get() as u64) as usize
}

/// A single clue → suspect pairing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Association {
    pub clue: String,
    pub suspect: String,
}

impl Association {
    pub fn new(clue: impl Into<String>, suspect: impl Into<String>) -> Self {
        Self {
            clue: clue.into(),
            suspect: suspect.into(),
        }
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.clue, self.suspect)
    }
}

/// Hash table of associations keyed by clue name
#[derive(Debug, Clone)]
pub struct SuspectTable {
    buckets: Vec<Vec<Association>>,
    len: usize,
}

impl Default for SuspectTable {
    fn default() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }
}

impl SuspectTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket_count(count: NonZeroUsize) -> Self {
        Self {
            buckets: vec![Vec::new(); count.get()],
            len: 0,
        }
    }

    pub fn bucket_count(&self) -> NonZeroUsize {
        // The constructor never builds an empty bucket array.
        NonZeroUsize::new(self.buckets.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Slot a clue name hashes to in this table
    pub fn slot_of(&self, clue: &str) -> usize {
        char_sum_slot(clue, self.bucket_count())
    }

    /// Append a pair to the end of its slot's chain
    pub fn insert(&mut self, clue: impl Into<String>, suspect: impl Into<String>) {
        let association = Association::new(clue, suspect);
        let slot = self.slot_of(&association.clue);
        self.buckets[slot].push(association);
        self.len += 1;
    }

    /// Suspects recorded against a clue, in insertion order
    pub fn suspects_for<'a>(&'a self, clue: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.buckets[self.slot_of(clue)]
            .iter()
            .filter(move |a| a.clue == clue)
            .map(|a| a.suspect.as_str())
    }

    /// Number of stored associations (duplicates included)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the chain in `slot`, or `None` past the last bucket
    pub fn chain_len(&self, slot: usize) -> Option<usize> {
        self.buckets.get(slot).map(Vec::len)
    }

    /// Every association, by slot and then insertion order within the slot
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            remaining: self.len,
        }
    }

    /// Count mentions per suspect in enumeration order
    pub fn tally(&self) -> SuspectTally<'_> {
        let mut tally = SuspectTally::default();
        for association in self.iter() {
            tally.record(&association.suspect);
        }
        tally
    }

    /// The suspect with the strictly highest mention count.
    ///
    /// Ties go to whichever suspect was enumerated first. `None` when the
    /// table is empty.
    pub fn most_mentioned_suspect(&self) -> Option<(&str, usize)> {
        self.tally().leader()
    }

    /// Drop every association, keeping the bucket count
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }
}

impl<'a> IntoIterator for &'a SuspectTable {
    type Item = &'a Association;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walk over every association in a [`SuspectTable`]
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Vec<Association>>,
    chain: std::slice::Iter<'a, Association>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Association;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(association) = self.chain.next() {
                self.remaining -= 1;
                return Some(association);
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Mention counts per suspect, remembering first-seen order
#[derive(Debug, Clone, Default)]
pub struct SuspectTally<'a> {
    order: Vec<(&'a str, usize)>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> SuspectTally<'a> {
    fn record(&mut self, suspect: &'a str) {
        match self.positions.get(suspect) {
            Some(&pos) => self.order[pos].1 += 1,
            None => {
                self.positions.insert(suspect, self.order.len());
                self.order.push((suspect, 1));
            }
        }
    }

    /// Mentions of one suspect (0 if never seen)
    pub fn count(&self, suspect: &str) -> usize {
        self.positions
            .get(suspect)
            .map_or(0, |&pos| self.order[pos].1)
    }

    /// Number of distinct suspects
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// (suspect, count) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.order.iter().copied()
    }

    /// First suspect reaching the highest count
    pub fn leader(&self) -> Option<(&'a str, usize)> {
        let mut best: Option<(&'a str, usize)> = None;
        for &(suspect, count) in &self.order {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((suspect, count));
            }
        }
        best
    }
}
