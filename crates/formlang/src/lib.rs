//! Formal-language automata: ε-NFA modelling, epsilon closures, subset
//! construction, and DFA complementation.
//!
//! The pipeline runs
//!
//! ```text
//! raw transitions -> epsilon closures -> expanded transition table
//!                 -> subset construction -> complementation -> serialization
//! ```
//!
//! Subset construction always yields a *total* DFA (undefined moves resolve
//! to a lazily materialized sink state), so complementing is a pure
//! accept-flag flip:
//!
//! ```
//! use formlang::{Nfa, TransitionTable, subset_construction};
//!
//! let mut nfa = Nfa::new(3)?;
//! nfa.add_epsilon_transition(0, 1)?;
//! nfa.add_transition(1, 'a' as u32, 2)?;
//! nfa.add_accept_state(2)?;
//!
//! let table = TransitionTable::build(&nfa);
//! let dfa = subset_construction(&table)?;
//! assert_eq!(dfa.state_count(), 3); // {0,1}, {2}, and the sink {}
//! assert_eq!(dfa.accept_states(), vec![1]);
//!
//! let complemented = dfa.complement();
//! assert_eq!(complemented.accept_states(), vec![0, 2]);
//! # Ok::<(), formlang::Error>(())
//! ```

mod dfa;
mod error;
mod io;
mod nfa;
mod state;
mod subset;
mod symbol;
mod table;

pub use dfa::{Dfa, DfaState};
pub use error::{Error, Result};
pub use io::{DfaDescription, TransitionRecord, read_nfa, write_dfa};
pub use nfa::Nfa;
pub use state::{StateId, StateSet};
pub use subset::subset_construction;
pub use symbol::{EPSILON, EPSILON_TOKEN, SymbolId, SymbolTable, is_epsilon};
pub use table::TransitionTable;
