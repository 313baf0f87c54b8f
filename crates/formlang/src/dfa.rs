//! The total DFA produced by subset construction, and its complementation.

use crate::error::{Error, Result};
use crate::state::{StateId, StateSet};
use crate::symbol::SymbolId;

/// One deterministic state: the set of NFA states it stands for, its
/// transition row, and its flags.
///
/// Two states are the same iff their underlying sets are equal; the arena in
/// [`Dfa`] never holds two states with the same set.
#[derive(Debug, Clone)]
pub struct DfaState {
    pub(crate) state_set: StateSet,
    /// Destination ids, parallel to the DFA's sorted alphabet.
    pub(crate) transitions: Vec<StateId>,
    pub(crate) is_accept: bool,
    pub(crate) is_sink: bool,
}

impl DfaState {
    /// The NFA states this DFA state stands for, ascending.
    pub fn nfa_states(&self) -> Vec<StateId> {
        self.state_set.to_vec()
    }

    pub fn is_accept(&self) -> bool {
        self.is_accept
    }

    /// True iff the underlying set is empty.
    pub fn is_sink(&self) -> bool {
        self.is_sink
    }
}

/// A deterministic finite automaton with a defined transition for every
/// (state, symbol) pair.
///
/// States live in an arena; a state's id is its index, which equals its
/// discovery order during subset construction. State 0 is the start state.
/// Transitions refer to states by id, never by reference.
#[derive(Debug, Clone)]
pub struct Dfa {
    /// Ascending symbol ids; every transition row is parallel to this.
    alphabet: Vec<SymbolId>,
    states: Vec<DfaState>,
}

impl Dfa {
    pub(crate) fn from_parts(alphabet: Vec<SymbolId>, states: Vec<DfaState>) -> Self {
        debug_assert!(!states.is_empty());
        debug_assert!(
            states
                .iter()
                .all(|s| s.transitions.len() == alphabet.len())
        );
        Self { alphabet, states }
    }

    /// The number of states.
    pub fn state_count(&self) -> StateId {
        self.states.len() as StateId
    }

    /// The start state. Subset construction always discovers it first.
    pub fn start_state(&self) -> StateId {
        0
    }

    /// The alphabet in ascending id order.
    pub fn alphabet(&self) -> &[SymbolId] {
        &self.alphabet
    }

    /// All states in id order.
    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    /// The state with the given id, if it exists.
    pub fn state(&self, id: StateId) -> Option<&DfaState> {
        self.states.get(id as usize)
    }

    fn symbol_index(&self, symbol: SymbolId) -> Result<usize> {
        self.alphabet
            .binary_search(&symbol)
            .map_err(|_| Error::UndefinedTransition(symbol))
    }

    /// The destination of (state, symbol).
    ///
    /// Asking for a symbol the machine has no column for is a caller bug,
    /// reported as [`Error::UndefinedTransition`]; for alphabet symbols the
    /// lookup always resolves, the automaton being total.
    pub fn transition(&self, state: StateId, symbol: SymbolId) -> Result<StateId> {
        let index = self.symbol_index(symbol)?;
        let from = self.state(state).ok_or(Error::StateOutOfRange {
            state,
            state_count: self.state_count(),
        })?;
        Ok(from.transitions[index])
    }

    /// Ids of all accepting states, ascending.
    pub fn accept_states(&self) -> Vec<StateId> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_accept)
            .map(|(id, _)| id as StateId)
            .collect()
    }

    /// Every (from, symbol, to) triple: states in id order, symbols in
    /// alphabet order within a state. Exactly `state_count * |alphabet|`
    /// triples.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        self.states.iter().enumerate().flat_map(move |(from, state)| {
            self.alphabet
                .iter()
                .zip(&state.transitions)
                .map(move |(&symbol, &to)| (from as StateId, symbol, to))
        })
    }

    /// Run the DFA over a word from the start state.
    pub fn accepts(&self, word: &[SymbolId]) -> Result<bool> {
        let mut state = self.start_state();
        for &symbol in word {
            state = self.transition(state, symbol)?;
        }
        Ok(self.states[state as usize].is_accept)
    }

    /// Complement the machine: flip every state's accept flag, the sink
    /// included.
    ///
    /// The automaton is total, so no new state and no structural edit is
    /// needed, and the ids (discovery order) stay put.
    pub fn complement(mut self) -> Dfa {
        for state in &mut self.states {
            state.is_accept = !state.is_accept;
        }
        self
    }
}
