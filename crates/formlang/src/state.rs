//! State ids and bit-set state sets.

use fixedbitset::FixedBitSet;
use std::fmt;

/// A state identifier represented as a u32.
pub type StateId = u32;

/// A set of automaton states drawn from a fixed universe `0..universe`.
///
/// Backed by a bit set whose length is always the universe size, so two sets
/// over the same automaton compare and hash by content alone. This is the
/// canonical, order-independent identity used to deduplicate DFA states
/// during subset construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create an empty set over a universe of `universe` states.
    pub fn empty(universe: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(universe),
        }
    }

    /// Create a set containing only `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is outside the universe.
    pub fn singleton(state: StateId, universe: usize) -> Self {
        let mut set = Self::empty(universe);
        set.insert(state);
        set
    }

    /// The number of states the universe holds.
    pub fn universe(&self) -> usize {
        self.bits.len()
    }

    /// Insert a state into the set.
    ///
    /// # Panics
    ///
    /// Panics if `state` is outside the universe.
    pub fn insert(&mut self, state: StateId) {
        self.bits.insert(state as usize);
    }

    /// Check if the set contains a state.
    pub fn contains(&self, state: StateId) -> bool {
        self.bits.contains(state as usize)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// The number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over the states in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Union another set into this one. Both must share a universe.
    pub fn union_with(&mut self, other: &StateSet) {
        debug_assert_eq!(self.bits.len(), other.bits.len());
        self.bits.union_with(&other.bits);
    }

    /// Check if this set shares any state with another.
    pub fn intersects(&self, other: &StateSet) -> bool {
        self.bits.intersection(&other.bits).next().is_some()
    }

    /// The states as an ascending vector.
    pub fn to_vec(&self) -> Vec<StateId> {
        self.iter().collect()
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(set: &StateSet) -> u64 {
        let mut hasher = DefaultHasher::new();
        set.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_state_set_basic() {
        let mut set = StateSet::empty(10);
        assert!(set.is_empty());

        set.insert(3);
        set.insert(7);
        assert!(!set.is_empty());
        assert_eq!(set.len(), 2);
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(!set.contains(5));
    }

    #[test]
    fn test_state_set_union() {
        let mut set1 = StateSet::empty(10);
        set1.insert(1);
        set1.insert(3);

        let mut set2 = StateSet::empty(10);
        set2.insert(2);
        set2.insert(3);

        set1.union_with(&set2);
        assert_eq!(set1.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_state_set_intersects() {
        let mut set1 = StateSet::empty(6);
        set1.insert(0);
        set1.insert(4);

        assert!(set1.intersects(&StateSet::singleton(4, 6)));
        assert!(!set1.intersects(&StateSet::singleton(5, 6)));
        assert!(!set1.intersects(&StateSet::empty(6)));
    }

    #[test]
    fn test_identity_ignores_insertion_order() {
        let mut forward = StateSet::empty(8);
        forward.insert(1);
        forward.insert(5);
        forward.insert(6);

        let mut backward = StateSet::empty(8);
        backward.insert(6);
        backward.insert(5);
        backward.insert(1);

        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn test_same_content_same_universe_is_equal() {
        let a = StateSet::singleton(2, 5);
        let b = StateSet::singleton(2, 5);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, StateSet::singleton(3, 5));
    }

    #[test]
    fn test_to_vec_ascending() {
        let mut set = StateSet::empty(16);
        for state in [9, 0, 12, 4] {
            set.insert(state);
        }
        assert_eq!(set.to_vec(), vec![0, 4, 9, 12]);
    }
}
