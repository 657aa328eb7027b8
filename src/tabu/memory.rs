//! Short-term tabu memory with tenure-based decay.

use std::collections::HashMap;

use super::types::{Move, MoveKey};

/// Forbidden moves and the number of iterations each stays forbidden.
///
/// Every stored counter is positive; entries are dropped as soon as their
/// counter reaches zero.
#[derive(Debug, Clone, Default)]
pub struct TabuMemory {
    entries: HashMap<MoveKey, usize>,
}

impl TabuMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tabu(&self, mv: &Move) -> bool {
        self.entries.contains_key(&mv.key())
    }

    /// Remaining tenure of `mv`, if it is tabu.
    pub fn remaining(&self, mv: &Move) -> Option<usize> {
        self.entries.get(&mv.key()).copied()
    }

    /// Forbids `mv` for `tenure` iterations, overwriting any existing entry.
    /// A zero tenure removes the entry instead.
    pub fn insert(&mut self, mv: Move, tenure: usize) {
        if tenure == 0 {
            self.entries.remove(&mv.key());
        } else {
            self.entries.insert(mv.key(), tenure);
        }
    }

    /// Decrements every counter by one and drops expired entries.
    pub fn decay(&mut self) {
        self.entries.retain(|_, remaining| {
            *remaining -= 1;
            *remaining > 0
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut memory = TabuMemory::new();
        let mv = Move::new(0, -1.0);
        assert!(!memory.is_tabu(&mv));

        memory.insert(mv, 3);
        assert!(memory.is_tabu(&mv));
        assert!(!memory.is_tabu(&mv.inverse()));
        assert_eq!(memory.remaining(&mv), Some(3));
    }

    #[test]
    fn test_insert_overwrites_counter() {
        let mut memory = TabuMemory::new();
        let mv = Move::new(2, 0.5);
        memory.insert(mv, 2);
        memory.decay();
        assert_eq!(memory.remaining(&mv), Some(1));

        memory.insert(mv, 4);
        assert_eq!(memory.remaining(&mv), Some(4));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_decay_drops_expired_entries() {
        let mut memory = TabuMemory::new();
        memory.insert(Move::new(0, 1.0), 1);
        memory.insert(Move::new(1, 1.0), 2);

        memory.decay();
        assert_eq!(memory.len(), 1);
        assert!(memory.is_tabu(&Move::new(1, 1.0)));

        memory.decay();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_zero_tenure_is_not_stored() {
        let mut memory = TabuMemory::new();
        memory.insert(Move::new(0, 1.0), 0);
        assert!(memory.is_empty());
    }

    proptest! {
        #[test]
        fn prop_entry_expires_after_exactly_tenure_decays(tenure in 1usize..50) {
            let mut memory = TabuMemory::new();
            let mv = Move::new(0, 1.0);
            memory.insert(mv, tenure);

            for _ in 0..tenure - 1 {
                memory.decay();
                prop_assert!(memory.is_tabu(&mv));
            }
            memory.decay();
            prop_assert!(!memory.is_tabu(&mv));
            prop_assert!(memory.is_empty());
        }
    }
}
