//! Reading NFA descriptions and serializing complemented DFAs.
//!
//! The textual wire shape is the same in both directions, one item per
//! line: state count, transition count, that many `from symbol to` triples
//! (`eps` marks an epsilon move on input), accept-state count, that many
//! accept-state ids. Serialized DFAs use their own dense 0-based ids in
//! discovery order and cover the full state × alphabet grid.

use crate::dfa::Dfa;
use crate::error::{Error, Result};
use crate::nfa::Nfa;
use crate::state::StateId;
use crate::symbol::SymbolTable;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

fn next_line<R: BufRead>(reader: &mut R, expected: &str) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::Malformed(format!(
            "unexpected end of input, expected {expected}"
        )));
    }
    Ok(line.trim().to_string())
}

fn parse_id(token: &str, expected: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| Error::Malformed(format!("expected {expected}, got `{token}`")))
}

/// Read an NFA description.
///
/// Returns the automaton and the symbol table its alphabet tokens were
/// interned into. Out-of-range state ids and unparsable lines are rejected
/// immediately.
pub fn read_nfa<R: BufRead>(reader: &mut R) -> Result<(Nfa, SymbolTable)> {
    let state_count = parse_id(&next_line(reader, "a state count")?, "a state count")?;
    let mut nfa = Nfa::new(state_count)?;
    let mut symbols = SymbolTable::new();

    let transition_count = parse_id(
        &next_line(reader, "a transition count")?,
        "a transition count",
    )?;
    for _ in 0..transition_count {
        let line = next_line(reader, "a `from symbol to` transition")?;
        let mut parts = line.split_whitespace();
        let (Some(from), Some(symbol), Some(to), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::Malformed(format!(
                "expected `from symbol to`, got `{line}`"
            )));
        };
        let from = parse_id(from, "a source state id")?;
        let to = parse_id(to, "a destination state id")?;
        let symbol = symbols.intern(symbol)?;
        nfa.add_transition(from, symbol, to)?;
    }

    let accept_count = parse_id(
        &next_line(reader, "an accept-state count")?,
        "an accept-state count",
    )?;
    for _ in 0..accept_count {
        let line = next_line(reader, "an accept-state id")?;
        nfa.add_accept_state(parse_id(&line, "an accept-state id")?)?;
    }

    Ok((nfa, symbols))
}

/// One `from symbol to` edge of a serialized DFA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: StateId,
    pub symbol: String,
    pub to: StateId,
}

/// A flat, self-contained snapshot of a DFA in discovery-order ids, with
/// symbol ids rendered back to their tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaDescription {
    pub state_count: StateId,
    pub transitions: Vec<TransitionRecord>,
    pub accept_states: Vec<StateId>,
}

impl DfaDescription {
    /// Snapshot a DFA, rendering its symbols through `symbols`.
    pub fn from_dfa(dfa: &Dfa, symbols: &SymbolTable) -> Result<Self> {
        let mut transitions =
            Vec::with_capacity(dfa.state_count() as usize * dfa.alphabet().len());
        for (from, symbol, to) in dfa.transitions() {
            let symbol = symbols
                .resolve(symbol)
                .ok_or(Error::UndefinedTransition(symbol))?
                .to_string();
            transitions.push(TransitionRecord { from, symbol, to });
        }
        Ok(Self {
            state_count: dfa.state_count(),
            transitions,
            accept_states: dfa.accept_states(),
        })
    }

    /// Write the textual form.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", self.state_count)?;
        writeln!(writer, "{}", self.transitions.len())?;
        for transition in &self.transitions {
            writeln!(
                writer,
                "{} {} {}",
                transition.from, transition.symbol, transition.to
            )?;
        }
        writeln!(writer, "{}", self.accept_states.len())?;
        for state in &self.accept_states {
            writeln!(writer, "{state}")?;
        }
        Ok(())
    }
}

/// Serialize a DFA in the textual wire shape.
pub fn write_dfa<W: Write>(writer: &mut W, dfa: &Dfa, symbols: &SymbolTable) -> Result<()> {
    DfaDescription::from_dfa(dfa, symbols)?.write_text(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subset::subset_construction;
    use crate::table::TransitionTable;

    const INPUT: &str = "3\n2\n0 eps 1\n1 a 2\n1\n2\n";

    #[test]
    fn test_read_nfa() {
        let (nfa, symbols) = read_nfa(&mut INPUT.as_bytes()).unwrap();
        assert_eq!(nfa.state_count(), 3);
        assert_eq!(nfa.alphabet().collect::<Vec<_>>(), vec![0]);
        assert_eq!(symbols.resolve(0), Some("a"));
        assert!(nfa.accept_states().contains(2));
        // The eps edge went in as an epsilon move, not an alphabet symbol.
        assert_eq!(nfa.epsilon_closure(0).to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_read_rejects_out_of_range_state() {
        let input = "2\n1\n0 a 5\n0\n";
        assert!(matches!(
            read_nfa(&mut input.as_bytes()),
            Err(Error::StateOutOfRange { state: 5, state_count: 2 })
        ));
    }

    #[test]
    fn test_read_rejects_out_of_range_accept_state() {
        let input = "2\n1\n0 a 1\n1\n7\n";
        assert!(matches!(
            read_nfa(&mut input.as_bytes()),
            Err(Error::StateOutOfRange { state: 7, .. })
        ));
    }

    #[test]
    fn test_read_rejects_garbage() {
        for input in ["x\n", "2\n1\n0 a\n0\n", "2\n1\n0 a 1 9\n0\n", "2\n3\n0 a 1\n"] {
            assert!(matches!(
                read_nfa(&mut input.as_bytes()),
                Err(Error::Malformed(_))
            ));
        }
    }

    #[test]
    fn test_write_complemented_dfa() {
        let (nfa, symbols) = read_nfa(&mut INPUT.as_bytes()).unwrap();
        let dfa = subset_construction(&TransitionTable::build(&nfa))
            .unwrap()
            .complement();

        let mut out = Vec::new();
        write_dfa(&mut out, &dfa, &symbols).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "3\n3\n0 a 1\n1 a 2\n2 a 2\n2\n0\n2\n"
        );
    }

    #[test]
    fn test_description_json_round_trip() {
        let (nfa, symbols) = read_nfa(&mut INPUT.as_bytes()).unwrap();
        let dfa = subset_construction(&TransitionTable::build(&nfa))
            .unwrap()
            .complement();

        let description = DfaDescription::from_dfa(&dfa, &symbols).unwrap();
        let json = serde_json::to_string(&description).unwrap();
        let parsed: DfaDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, description);
    }
}
