//! Stepwise and one-shot simulation of an [`Nfa`].

use crate::nfa::Nfa;
use std::collections::BTreeSet;

/// Walks an [`Nfa`] one input symbol at a time, tracking the current set
/// of live states (always epsilon-closed) rather than a single state.
pub struct NfaEvaluator<'a> {
    nfa: &'a Nfa,
    current: BTreeSet<usize>,
}

impl<'a> NfaEvaluator<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        let current = nfa.epsilon_closure(&BTreeSet::from([nfa.start()]));
        NfaEvaluator { nfa, current }
    }

    /// The live state set, already epsilon-closed.
    pub fn current_states(&self) -> &BTreeSet<usize> {
        &self.current
    }

    pub fn is_accepting(&self) -> bool {
        self.current.iter().any(|&s| self.nfa.is_final(s))
    }

    /// Consumes one symbol, advancing the live state set via `move` then
    /// its epsilon-closure. Once the live set is empty it stays empty —
    /// there is no way back in an NFA without epsilon loops to nowhere.
    pub fn step(&mut self, symbol: char) {
        let moved = self.nfa.move_on(&self.current, symbol);
        self.current = self.nfa.epsilon_closure(&moved);
    }

    pub fn step_all(&mut self, input: &str) {
        for c in input.chars() {
            self.step(c);
        }
    }
}

impl<'a> From<&'a Nfa> for NfaEvaluator<'a> {
    fn from(nfa: &'a Nfa) -> Self {
        NfaEvaluator::new(nfa)
    }
}

/// Runs `input` against `nfa` from its start state and reports whether any
/// resulting live state is accepting.
pub fn simulate_nfa(nfa: &Nfa, input: &str) -> bool {
    let mut evaluator = NfaEvaluator::new(nfa);
    evaluator.step_all(input);
    evaluator.is_accepting()
}
