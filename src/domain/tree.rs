//! Arena-backed AVL tree keyed by word.
//!
//! Nodes live in a generational arena and reference their children by index,
//! so rotations are plain index reassignment. Each node exclusively owns its
//! children: no parent links, no sharing.

use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use tracing::{instrument, trace};

use crate::domain::entities::WordCount;
use crate::domain::error::DomainError;

/// Tree node holding one entry, its child slots and the cached subtree height.
#[derive(Debug)]
pub struct WordNode {
    pub entry: WordCount,
    /// Index of left child in the arena
    pub left: Option<Index>,
    /// Index of right child in the arena
    pub right: Option<Index>,
    /// Height of the subtree rooted here, 1 for a leaf
    pub height: usize,
}

impl WordNode {
    fn leaf(entry: WordCount) -> Self {
        Self {
            entry,
            left: None,
            right: None,
            height: 1,
        }
    }
}

/// Self-balancing ordered container of word counts.
///
/// Insert overwrites the count of an existing key instead of adding to it:
/// input is expected to be aggregated already, so the last write wins.
#[derive(Debug)]
pub struct WordTree {
    arena: Arena<WordNode>,
    root: Option<Index>,
}

impl Default for WordTree {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Build a tree from `(word, freq)` pairs, e.g. an aggregated `FrequencyMap`.
    #[instrument(level = "debug", skip(freqs))]
    pub fn from_frequencies<I>(freqs: I) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut tree = Self::new();
        for (word, freq) in freqs {
            tree.insert(&word, freq);
        }
        trace!("from_frequencies: {} nodes, height {}", tree.len(), tree.height());
        tree
    }

    /// Insert `word` with `freq`, or overwrite the freq if `word` is already present.
    pub fn insert(&mut self, word: &str, freq: u64) {
        let root = self.root;
        self.root = Some(self.insert_at(root, word, freq));
    }

    fn insert_at(&mut self, slot: Option<Index>, word: &str, freq: u64) -> Index {
        let Some(idx) = slot else {
            return self.arena.insert(WordNode::leaf(WordCount::new(word, freq)));
        };

        match word.cmp(self.arena[idx].entry.word.as_str()) {
            Ordering::Less => {
                let left = self.arena[idx].left;
                let new_left = self.insert_at(left, word, freq);
                self.arena[idx].left = Some(new_left);
            }
            Ordering::Greater => {
                let right = self.arena[idx].right;
                let new_right = self.insert_at(right, word, freq);
                self.arena[idx].right = Some(new_right);
            }
            Ordering::Equal => {
                trace!("insert: overwrite '{}' -> {}", word, freq);
                self.arena[idx].entry.freq = freq;
                return idx;
            }
        }

        self.update_height(idx);
        self.rebalance(idx, word)
    }

    /// Restore balance at `idx` after `word` was inserted below it.
    fn rebalance(&mut self, idx: Index, word: &str) -> Index {
        let balance = self.balance_factor(idx);

        if balance > 1 {
            if let Some(left) = self.arena[idx].left {
                // left-right: straighten the left child first
                if word > self.arena[left].entry.word.as_str() {
                    let new_left = self.rotate_left(left);
                    self.arena[idx].left = Some(new_left);
                }
                return self.rotate_right(idx);
            }
        } else if balance < -1 {
            if let Some(right) = self.arena[idx].right {
                // right-left
                if word < self.arena[right].entry.word.as_str() {
                    let new_right = self.rotate_right(right);
                    self.arena[idx].right = Some(new_right);
                }
                return self.rotate_left(idx);
            }
        }
        idx
    }

    /// Promote the left child of `y`. Returns the new subtree root.
    fn rotate_right(&mut self, y: Index) -> Index {
        let Some(x) = self.arena[y].left else {
            return y;
        };
        trace!("rotate_right at '{}'", self.arena[y].entry.word);
        let t2 = self.arena[x].right;

        self.arena[x].right = Some(y);
        self.arena[y].left = t2;

        // lowered node first, then the promoted one
        self.update_height(y);
        self.update_height(x);
        x
    }

    /// Promote the right child of `x`. Returns the new subtree root.
    fn rotate_left(&mut self, x: Index) -> Index {
        let Some(y) = self.arena[x].right else {
            return x;
        };
        trace!("rotate_left at '{}'", self.arena[x].entry.word);
        let t2 = self.arena[y].left;

        self.arena[y].left = Some(x);
        self.arena[x].right = t2;

        self.update_height(x);
        self.update_height(y);
        y
    }

    fn height_of(&self, slot: Option<Index>) -> usize {
        slot.and_then(|idx| self.arena.get(idx))
            .map_or(0, |node| node.height)
    }

    fn update_height(&mut self, idx: Index) {
        let node = &self.arena[idx];
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.arena[idx].height = height;
    }

    fn balance_factor(&self, idx: Index) -> i64 {
        let node = &self.arena[idx];
        self.height_of(node.left) as i64 - self.height_of(node.right) as i64
    }

    /// Look up the count stored for `word`.
    pub fn get(&self, word: &str) -> Option<u64> {
        let mut current = self.root;
        while let Some(node) = current.and_then(|idx| self.arena.get(idx)) {
            current = match word.cmp(node.entry.word.as_str()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(node.entry.freq),
            };
        }
        None
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&WordNode> {
        self.arena.get(idx)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Entries in ascending key order. Lazy; can be called again for a fresh pass.
    pub fn in_order(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    /// Eager in-order traversal.
    pub fn entries(&self) -> Vec<WordCount> {
        self.in_order().cloned().collect()
    }

    /// Check BST order, AVL balance and cached heights for every node.
    #[instrument(level = "debug", skip(self))]
    pub fn verify(&self) -> Result<(), DomainError> {
        self.verify_at(self.root, None, None).map(|_| ())
    }

    fn verify_at<'a>(
        &'a self,
        slot: Option<Index>,
        lower: Option<&'a str>,
        upper: Option<&'a str>,
    ) -> Result<usize, DomainError> {
        let Some(node) = slot.and_then(|idx| self.arena.get(idx)) else {
            return Ok(0);
        };
        let word = node.entry.word.as_str();

        if lower.is_some_and(|lo| word <= lo) || upper.is_some_and(|hi| word >= hi) {
            return Err(DomainError::OutOfOrder {
                word: word.to_string(),
            });
        }

        let left = self.verify_at(node.left, lower, Some(word))?;
        let right = self.verify_at(node.right, Some(word), upper)?;

        let balance = left as i64 - right as i64;
        if balance.abs() > 1 {
            return Err(DomainError::Unbalanced {
                word: word.to_string(),
                balance,
            });
        }

        let actual = 1 + left.max(right);
        if node.height != actual {
            return Err(DomainError::StaleHeight {
                word: word.to_string(),
                cached: node.height,
                actual,
            });
        }
        Ok(actual)
    }
}

/// Stack-based in-order iterator.
pub struct InOrderIterator<'a> {
    tree: &'a WordTree,
    stack: Vec<Index>,
    current: Option<Index>,
}

impl<'a> InOrderIterator<'a> {
    fn new(tree: &'a WordTree) -> Self {
        Self {
            tree,
            stack: Vec::with_capacity(tree.height()),
            current: tree.root,
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = &'a WordCount;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.current {
            self.stack.push(idx);
            self.current = self.tree.arena.get(idx).and_then(|node| node.left);
        }
        let idx = self.stack.pop()?;
        let node = self.tree.arena.get(idx)?;
        self.current = node.right;
        Some(&node.entry)
    }
}
