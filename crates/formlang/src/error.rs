//! Error taxonomy for the automata kernel.
//!
//! Every operation here is a pure function of its input, so there is nothing
//! to retry: errors are surfaced immediately and never produce partial
//! output.

use crate::state::StateId;
use crate::symbol::SymbolId;
use std::io;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A transition or accept declaration references a state outside the
    /// automaton.
    #[error("state {state} is out of range for an automaton with {state_count} states")]
    StateOutOfRange { state: StateId, state_count: StateId },

    /// State 0 is the start state, so an automaton needs at least one state.
    #[error("an automaton needs at least one state")]
    NoStates,

    /// The textual machine description could not be parsed.
    #[error("malformed machine description: {0}")]
    Malformed(String),

    /// Subset construction discovered more state sets than the powerset of
    /// the NFA state space holds. This is always an internal defect (a
    /// non-idempotent closure, a corrupted table), never a property of the
    /// input.
    #[error(
        "subset construction discovered {discovered} states, more than the 2^{nfa_states} possible subsets"
    )]
    TooManySubsets { discovered: usize, nfa_states: StateId },

    /// A transition was looked up for a symbol outside the automaton's
    /// alphabet. A caller bug, not a reachable runtime condition.
    #[error("symbol id {0} is not part of the automaton's alphabet")]
    UndefinedTransition(SymbolId),

    /// The interner ran out of ids below the epsilon sentinel.
    #[error("symbol table exhausted")]
    SymbolTableFull,

    #[error(transparent)]
    Io(#[from] io::Error),
}
