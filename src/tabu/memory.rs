//! Short-term tabu memory.

use std::collections::VecDeque;

/// FIFO memory of recently rebuilt skills.
///
/// Pushing onto a full memory evicts the oldest entry. Duplicates are
/// allowed and each occupies a slot.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    entries: VecDeque<usize>,
    capacity: usize,
}

impl TabuMemory {
    /// Creates an empty memory holding at most `capacity` entries (at least 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records `skill`, evicting the oldest entry when full.
    pub fn push(&mut self, skill: usize) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(skill);
    }

    pub fn contains(&self, skill: usize) -> bool {
        self.entries.contains(&skill)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
