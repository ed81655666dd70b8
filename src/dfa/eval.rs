//! Stepwise and one-shot simulation of a [`Dfa`].

use crate::dfa::Dfa;

/// Walks a [`Dfa`] one input symbol at a time, tracking a single current
/// state (or none, once an unrecognized symbol has been seen).
pub struct DfaEvaluator<'a> {
    dfa: &'a Dfa,
    current: Option<usize>,
}

impl<'a> DfaEvaluator<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        DfaEvaluator { dfa, current: Some(dfa.start()) }
    }

    /// The current state, or `None` once the walk has fallen off the
    /// automaton onto the implicit dead state.
    pub fn current_state(&self) -> Option<usize> {
        self.current
    }

    pub fn is_accepting(&self) -> bool {
        self.current.is_some_and(|s| self.dfa.is_final(s))
    }

    /// Consumes one symbol. Once `current` is `None` it stays `None` — a
    /// DFA has no way back from the dead state.
    pub fn step(&mut self, symbol: char) {
        self.current = self.current.and_then(|s| self.dfa.transition(s, symbol));
    }

    pub fn step_all(&mut self, input: &str) {
        for c in input.chars() {
            self.step(c);
            if self.current.is_none() {
                break;
            }
        }
    }
}

impl<'a> From<&'a Dfa> for DfaEvaluator<'a> {
    fn from(dfa: &'a Dfa) -> Self {
        DfaEvaluator::new(dfa)
    }
}

/// Runs `input` against `dfa` from its start state, rejecting immediately
/// on the first symbol with no outgoing transition.
pub fn simulate_dfa(dfa: &Dfa, input: &str) -> bool {
    let mut evaluator = DfaEvaluator::new(dfa);
    evaluator.step_all(input);
    evaluator.is_accepting()
}
