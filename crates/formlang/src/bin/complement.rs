//! Read an ε-NFA description on stdin, write the complemented DFA on stdout.

use formlang::{TransitionTable, read_nfa, subset_construction, write_dfa};
use std::io;
use std::process::ExitCode;

fn run() -> formlang::Result<()> {
    let (nfa, symbols) = read_nfa(&mut io::stdin().lock())?;
    let table = TransitionTable::build(&nfa);
    let dfa = subset_construction(&table)?.complement();
    write_dfa(&mut io::stdout().lock(), &dfa, &symbols)
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
