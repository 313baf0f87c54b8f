//! Subset construction: conversion of an ε-NFA into an equivalent total DFA.

use crate::dfa::{Dfa, DfaState};
use crate::error::{Error, Result};
use crate::state::{StateId, StateSet};
use crate::table::TransitionTable;
use indexmap::IndexMap;
use log::{debug, trace};
use std::collections::VecDeque;

/// Convert an NFA, through its epsilon-expanded transition table, into an
/// equivalent total DFA.
///
/// Each DFA state is a set of NFA states. Discovery runs breadth-first from
/// the closed start set; candidates are deduplicated by set value through an
/// ordered map whose insertion order is the discovery order, and therefore
/// the final state ids, start = 0. The empty set is the sink: it enters the
/// map the first time some move comes up empty, keeps every transition
/// pointing at itself, and is never created speculatively. Because every
/// (state, symbol) pair resolves to some discovered state, the result is
/// total.
///
/// At most `2^state_count` distinct sets exist, so discovering more is a
/// defect in table construction and reported as a fatal error rather than
/// allowed to diverge.
pub fn subset_construction(table: &TransitionTable) -> Result<Dfa> {
    let universe = table.state_count() as usize;
    let ceiling = 1usize
        .checked_shl(table.state_count())
        .unwrap_or(usize::MAX);

    let mut discovered: IndexMap<StateSet, StateId> = IndexMap::new();
    let mut rows: Vec<Vec<StateId>> = Vec::new();
    let mut queue: VecDeque<StateSet> = VecDeque::new();

    let start = table.start_closure().clone();
    trace!("state 0: {start:?}");
    discovered.insert(start.clone(), 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let mut row = Vec::with_capacity(table.alphabet().len());

        for &symbol in table.alphabet() {
            // Union of pre-expanded destinations; already epsilon-closed.
            let mut next = StateSet::empty(universe);
            for state in current.iter() {
                if let Some(dests) = table.destinations(state, symbol) {
                    next.union_with(dests);
                }
            }

            let id = if let Some(&existing) = discovered.get(&next) {
                existing
            } else {
                let id = discovered.len() as StateId;
                trace!("state {id}: {next:?}");
                discovered.insert(next.clone(), id);
                queue.push_back(next);
                if discovered.len() > ceiling {
                    return Err(Error::TooManySubsets {
                        discovered: discovered.len(),
                        nfa_states: table.state_count(),
                    });
                }
                id
            };
            row.push(id);
        }

        rows.push(row);
    }

    debug!(
        "subset construction: {} NFA states -> {} DFA states over {} symbols",
        table.state_count(),
        discovered.len(),
        table.alphabet().len()
    );

    let states = discovered
        .into_keys()
        .zip(rows)
        .map(|(state_set, transitions)| DfaState {
            is_accept: state_set.intersects(table.accept_states()),
            is_sink: state_set.is_empty(),
            state_set,
            transitions,
        })
        .collect();

    Ok(Dfa::from_parts(table.alphabet().to_vec(), states))
}
