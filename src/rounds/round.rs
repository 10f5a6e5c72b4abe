//! A single guess-the-number round.

use im::OrdSet;
use serde::Serialize;

/// One round: a target, the answer options and what has been counted.
///
/// Rounds are replaced wholesale; only `counted_indices` changes while a
/// round is on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Round {
    target: u8,
    options: Vec<u8>,
    counted_indices: OrdSet<usize>,
}

impl Round {
    /// Create a round with nothing counted yet.
    ///
    /// Callers are responsible for `options` containing `target`; use
    /// [`generate_round`](super::generate_round) for random rounds.
    #[must_use]
    pub fn new(target: u8, options: Vec<u8>) -> Self {
        Self {
            target,
            options,
            counted_indices: OrdSet::new(),
        }
    }

    /// Number of items to count.
    #[must_use]
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Answer options in display order.
    #[must_use]
    pub fn options(&self) -> &[u8] {
        &self.options
    }

    /// Indices of items tapped so far.
    #[must_use]
    pub fn counted_indices(&self) -> &OrdSet<usize> {
        &self.counted_indices
    }

    /// How many distinct items have been tapped.
    #[must_use]
    pub fn counted(&self) -> usize {
        self.counted_indices.len()
    }

    /// Check if an item has been tapped.
    #[must_use]
    pub fn is_counted(&self, index: usize) -> bool {
        self.counted_indices.contains(&index)
    }

    /// Mark an item as counted.
    ///
    /// Returns the new count, or `None` if the item was already counted.
    pub fn mark_counted(&mut self, index: usize) -> Option<usize> {
        if self.counted_indices.insert(index).is_some() {
            return None;
        }
        Some(self.counted_indices.len())
    }
}
