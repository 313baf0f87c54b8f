//! Nondeterministic finite automata with epsilon transitions, and the
//! epsilon-closure engine.

use crate::error::{Error, Result};
use crate::state::{StateId, StateSet};
use crate::symbol::{EPSILON, SymbolId, is_epsilon};
use indexmap::IndexSet;
use std::collections::HashMap;

/// A nondeterministic finite automaton with epsilon transitions.
///
/// States are dense integers `0..state_count`; state 0 is the start state.
/// Every state id crossing the boundary is validated against `state_count`,
/// so the engines downstream never re-check.
#[derive(Debug, Clone)]
pub struct Nfa {
    /// Number of states.
    state_count: StateId,
    /// Transitions: (source, symbol) -> set of destination states.
    /// For epsilon transitions, symbol == EPSILON.
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    /// Accepting states.
    accept_states: StateSet,
    /// All symbols used, in first-seen order, epsilon excluded.
    alphabet: IndexSet<SymbolId>,
}

impl Nfa {
    /// Create an NFA with `state_count` states and no transitions.
    pub fn new(state_count: StateId) -> Result<Self> {
        if state_count == 0 {
            return Err(Error::NoStates);
        }
        Ok(Self {
            state_count,
            transitions: HashMap::new(),
            accept_states: StateSet::empty(state_count as usize),
            alphabet: IndexSet::new(),
        })
    }

    fn check_state(&self, state: StateId) -> Result<()> {
        if state < self.state_count {
            Ok(())
        } else {
            Err(Error::StateOutOfRange {
                state,
                state_count: self.state_count,
            })
        }
    }

    /// Add a transition from source to destination on the given symbol,
    /// which may be `EPSILON`.
    pub fn add_transition(
        &mut self,
        source: StateId,
        symbol: SymbolId,
        destination: StateId,
    ) -> Result<()> {
        self.check_state(source)?;
        self.check_state(destination)?;

        if !is_epsilon(symbol) {
            self.alphabet.insert(symbol);
        }

        self.transitions
            .entry((source, symbol))
            .or_insert_with(|| StateSet::empty(self.state_count as usize))
            .insert(destination);
        Ok(())
    }

    /// Add an epsilon transition from source to destination.
    pub fn add_epsilon_transition(&mut self, source: StateId, destination: StateId) -> Result<()> {
        self.add_transition(source, EPSILON, destination)
    }

    /// Mark a state as accepting.
    pub fn add_accept_state(&mut self, state: StateId) -> Result<()> {
        self.check_state(state)?;
        self.accept_states.insert(state);
        Ok(())
    }

    /// The number of states.
    pub fn state_count(&self) -> StateId {
        self.state_count
    }

    /// The accepting states.
    pub fn accept_states(&self) -> &StateSet {
        &self.accept_states
    }

    /// The alphabet in first-seen order, epsilon excluded.
    pub fn alphabet(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.alphabet.iter().copied()
    }

    /// Destinations reachable from `state` on exactly `symbol`, without any
    /// epsilon expansion. `None` when no such transition exists.
    pub fn direct_destinations(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    /// Compute the epsilon closure of a state: every state reachable through
    /// epsilon moves alone, the state itself included.
    ///
    /// Worklist fixed point. A state enters the closure at most once, so
    /// epsilon self-loops and longer cycles terminate like any other shape,
    /// and the result does not depend on visit order.
    ///
    /// # Panics
    ///
    /// Panics if `state` is not a state of this automaton.
    pub fn epsilon_closure(&self, state: StateId) -> StateSet {
        let mut closure = StateSet::empty(self.state_count as usize);
        let mut stack = vec![state];

        while let Some(s) = stack.pop() {
            if closure.contains(s) {
                continue;
            }
            closure.insert(s);

            if let Some(destinations) = self.transitions.get(&(s, EPSILON)) {
                for dest in destinations.iter() {
                    if !closure.contains(dest) {
                        stack.push(dest);
                    }
                }
            }
        }

        closure
    }

    /// Epsilon closure of a whole set: the union of its members' closures.
    pub fn epsilon_closure_set(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::empty(self.state_count as usize);
        for state in states.iter() {
            closure.union_with(&self.epsilon_closure(state));
        }
        closure
    }
}
