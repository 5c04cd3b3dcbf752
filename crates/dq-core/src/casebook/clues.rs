//! Clue index: an unbalanced binary search tree of clue names
//!
//! Clues are kept in lexicographic order without duplicates. The tree is never
//! rebalanced, so inserting names in sorted order degrades it to a list. All
//! walks use an explicit cursor or stack so a degenerate tree cannot exhaust
//! the call stack.

use std::cmp::Ordering;
use std::iter::FusedIterator;

/// Result of inserting a clue into the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The clue was new and is now stored
    Inserted,
    /// The clue was already known; the index is unchanged
    AlreadyPresent,
}

#[derive(Debug)]
struct ClueNode {
    name: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(name: String) -> Self {
        Self {
            name,
            left: None,
            right: None,
        }
    }
}

/// Ordered set of discovered clue names
#[derive(Debug, Default)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue name.
    ///
    /// Descends from the root comparing byte-wise; an equal key stops the
    /// descent and leaves the tree untouched.
    pub fn insert(&mut self, name: impl Into<String>) -> InsertOutcome {
        let name = name.into();
        let mut link = &mut self.root;

        while let Some(node) = link {
            match name.as_str().cmp(node.name.as_str()) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return InsertOutcome::AlreadyPresent,
            }
        }

        *link = Some(Box::new(ClueNode::new(name)));
        self.len += 1;
        InsertOutcome::Inserted
    }

    /// Check whether a clue has been recorded
    pub fn contains(&self, name: &str) -> bool {
        let mut cursor = self.root.as_deref();

        while let Some(node) = cursor {
            cursor = match name.cmp(node.name.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Number of distinct clues
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut pending: Vec<(&ClueNode, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 1));
        }

        while let Some((node, depth)) = pending.pop() {
            tallest = tallest.max(depth);
            if let Some(left) = node.left.as_deref() {
                pending.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, depth + 1));
            }
        }

        tallest
    }

    /// Ascending traversal of every clue name.
    ///
    /// Each call starts a fresh walk.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref(), self.len)
    }

    /// Alias for [`ClueIndex::in_order`]
    pub fn iter(&self) -> InOrder<'_> {
        self.in_order()
    }

    /// Release every node, leaving an empty index
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<ClueNode>> = self.root.take().into_iter().collect();

        // Children are detached before their parent drops, so no drop recurses.
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }

        self.len = 0;
    }
}

impl Drop for ClueIndex {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<S: Into<String>> Extend<S> for ClueIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ClueIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = ClueIndex::new();
        index.extend(iter);
        index
    }
}

/// In-order walk over a [`ClueIndex`]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
    remaining: usize,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a ClueNode>, len: usize) -> Self {
        let mut walk = Self {
            stack: Vec::new(),
            remaining: len,
        };
        walk.push_left_spine(root);
        walk
    }

    fn push_left_spine(&mut self, mut cursor: Option<&'a ClueNode>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(node.name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrder<'_> {}

impl FusedIterator for InOrder<'_> {}
