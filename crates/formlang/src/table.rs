//! The epsilon-expanded transition table, and set-at-a-time NFA simulation.

use crate::nfa::Nfa;
use crate::state::{StateId, StateSet};
use crate::symbol::SymbolId;
use log::trace;
use std::collections::HashMap;

/// Precomputed adjacency for an NFA: for every (state, non-epsilon symbol)
/// pair, the destinations reachable directly or through trailing epsilon
/// moves.
///
/// The table carries everything the stages after it read (the sorted
/// alphabet, the closed start set, the accept set, the state count), so
/// epsilon transitions are invisible past this point.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    state_count: StateId,
    /// Ascending symbol ids; the DFA inherits this order.
    alphabet: Vec<SymbolId>,
    /// (state, symbol) -> epsilon-expanded destinations. Pairs with no
    /// destinations are absent.
    moves: HashMap<(StateId, SymbolId), StateSet>,
    /// Epsilon closure of the start state.
    start_closure: StateSet,
    accept_states: StateSet,
}

impl TransitionTable {
    /// Build the table from an NFA.
    ///
    /// Every destination set already includes the epsilon closure of each
    /// directly reached state. A union of such sets is itself closed, so
    /// consumers never re-expand after a move.
    pub fn build(nfa: &Nfa) -> Self {
        let universe = nfa.state_count() as usize;
        let mut alphabet: Vec<SymbolId> = nfa.alphabet().collect();
        alphabet.sort_unstable();

        // One closure per state, shared by every transition into it.
        let closures: Vec<StateSet> = (0..nfa.state_count())
            .map(|s| nfa.epsilon_closure(s))
            .collect();

        let mut moves: HashMap<(StateId, SymbolId), StateSet> = HashMap::new();
        for state in 0..nfa.state_count() {
            for &symbol in &alphabet {
                if let Some(directs) = nfa.direct_destinations(state, symbol) {
                    let entry = moves
                        .entry((state, symbol))
                        .or_insert_with(|| StateSet::empty(universe));
                    for dest in directs.iter() {
                        entry.union_with(&closures[dest as usize]);
                    }
                }
            }
        }

        trace!(
            "transition table: {} states, {} symbols, {} populated cells",
            nfa.state_count(),
            alphabet.len(),
            moves.len()
        );

        Self {
            state_count: nfa.state_count(),
            alphabet,
            moves,
            start_closure: closures[0].clone(),
            accept_states: nfa.accept_states().clone(),
        }
    }

    /// The number of NFA states.
    pub fn state_count(&self) -> StateId {
        self.state_count
    }

    /// The alphabet in ascending id order.
    pub fn alphabet(&self) -> &[SymbolId] {
        &self.alphabet
    }

    /// The epsilon closure of the start state.
    pub fn start_closure(&self) -> &StateSet {
        &self.start_closure
    }

    /// The accepting NFA states.
    pub fn accept_states(&self) -> &StateSet {
        &self.accept_states
    }

    /// The epsilon-expanded destinations of (state, symbol), if any.
    pub fn destinations(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.moves.get(&(state, symbol))
    }

    /// Run the NFA over a word, one state set at a time.
    ///
    /// Starts from the closed start set; each symbol replaces the running
    /// set with the union of the live states' destination rows. A symbol
    /// with no populated cell for any live state (one outside the alphabet
    /// included) empties the set, and nothing is reachable from an empty
    /// set. Accepts iff the final set contains an accept state.
    pub fn simulate(&self, word: &[SymbolId]) -> bool {
        let mut current = self.start_closure.clone();
        for &symbol in word {
            let mut next = StateSet::empty(self.state_count as usize);
            for state in current.iter() {
                if let Some(dests) = self.destinations(state, symbol) {
                    next.union_with(dests);
                }
            }
            current = next;
            if current.is_empty() {
                break;
            }
        }
        current.intersects(&self.accept_states)
    }
}
