//! Thompson construction: turns a postfix token string into an [`Nfa`].

use crate::error::NfaBuildError;
use crate::nfa::{Nfa, NfaState, Transition};

/// A single entry, end pair produced while reducing the postfix
/// expression. Every combinator below consumes one or two fragments from
/// the operand stack and produces exactly one.
#[derive(Clone, Copy)]
struct Fragment {
    start: usize,
    end: usize,
}

/// Builds an [`Nfa`] from a postfix regular expression, one token at a
/// time, over a single shared state arena.
///
/// The builder *is* the arena: each combinator pushes new [`NfaState`]s
/// onto `self.states` and works with `(start, end)` index pairs rather
/// than owned sub-graphs, so there is nothing to splice or re-parent when
/// two fragments are joined — only new epsilon edges to add. State ids
/// are simply positions in this builder's own `Vec`, so two builders used
/// from different threads can never collide on an id.
pub struct NfaBuilder {
    states: Vec<NfaState>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        NfaBuilder { states: Vec::new() }
    }

    fn push_state(&mut self) -> usize {
        let id = self.states.len();
        self.states.push(NfaState {
            id,
            transitions: Vec::new(),
            is_final: false,
        });
        id
    }

    fn add_transition(&mut self, from: usize, symbol: Option<char>, to: usize) {
        self.states[from].transitions.push(Transition { symbol, target: to });
    }

    fn atomic(&mut self, symbol: Option<char>) -> Fragment {
        let start = self.push_state();
        let end = self.push_state();
        self.add_transition(start, symbol, end);
        Fragment { start, end }
    }

    fn concat(&mut self, a: Fragment, b: Fragment) -> Fragment {
        self.add_transition(a.end, None, b.start);
        Fragment { start: a.start, end: b.end }
    }

    fn union(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let start = self.push_state();
        let end = self.push_state();
        self.add_transition(start, None, a.start);
        self.add_transition(start, None, b.start);
        self.add_transition(a.end, None, end);
        self.add_transition(b.end, None, end);
        Fragment { start, end }
    }

    fn star(&mut self, a: Fragment) -> Fragment {
        let start = self.push_state();
        let end = self.push_state();
        self.add_transition(start, None, a.start);
        self.add_transition(start, None, end);
        self.add_transition(a.end, None, a.start);
        self.add_transition(a.end, None, end);
        Fragment { start, end }
    }

    fn plus(&mut self, a: Fragment) -> Fragment {
        let start = self.push_state();
        let end = self.push_state();
        self.add_transition(start, None, a.start);
        self.add_transition(a.end, None, a.start);
        self.add_transition(a.end, None, end);
        Fragment { start, end }
    }

    fn optional(&mut self, a: Fragment) -> Fragment {
        let start = self.push_state();
        let end = self.push_state();
        self.add_transition(start, None, a.start);
        self.add_transition(start, None, end);
        self.add_transition(a.end, None, end);
        Fragment { start, end }
    }

    /// Consumes the builder, finalizing a single fragment into an [`Nfa`]
    /// by marking its end state accepting.
    fn finish(mut self, fragment: Fragment) -> Nfa {
        self.states[fragment.end].is_final = true;
        Nfa::new(self.states, fragment.start, fragment.end)
    }

    /// Builds an [`Nfa`] from a postfix token string (as produced by
    /// [`crate::shunting_yard::to_postfix`]).
    ///
    /// An empty postfix string is a valid input, per the resolved
    /// Open Question on empty patterns: it produces an NFA accepting only
    /// the empty string rather than an error.
    pub fn build(postfix: &str) -> Result<Nfa, NfaBuildError> {
        let mut builder = NfaBuilder::new();

        if postfix.is_empty() {
            let fragment = builder.atomic(None);
            return Ok(builder.finish(fragment));
        }

        let mut stack: Vec<Fragment> = Vec::new();

        for (position, c) in postfix.chars().enumerate() {
            match c {
                '(' | ')' => {
                    return Err(NfaBuildError::UnbalancedParenInPostfix { paren: c, position })
                }
                '*' | '+' | '?' => {
                    let a = stack
                        .pop()
                        .ok_or(NfaBuildError::MissingOperand { operator: c, position })?;
                    let fragment = match c {
                        '*' => builder.star(a),
                        '+' => builder.plus(a),
                        '?' => builder.optional(a),
                        _ => unreachable!(),
                    };
                    stack.push(fragment);
                }
                '·' | '|' => {
                    let b = stack
                        .pop()
                        .ok_or(NfaBuildError::MissingOperand { operator: c, position })?;
                    let a = stack
                        .pop()
                        .ok_or(NfaBuildError::MissingOperand { operator: c, position })?;
                    let fragment = if c == '·' {
                        builder.concat(a, b)
                    } else {
                        builder.union(a, b)
                    };
                    stack.push(fragment);
                }
                symbol => stack.push(builder.atomic(Some(symbol))),
            }
        }

        if stack.len() != 1 {
            return Err(NfaBuildError::InvalidStackSize { size: stack.len() });
        }

        Ok(builder.finish(stack.pop().unwrap()))
    }
}

impl Default for NfaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::eval::simulate_nfa;

    #[test]
    fn single_symbol_accepts_only_itself() {
        let nfa = NfaBuilder::build("a").unwrap();
        assert!(simulate_nfa(&nfa, "a"));
        assert!(!simulate_nfa(&nfa, ""));
        assert!(!simulate_nfa(&nfa, "aa"));
    }

    #[test]
    fn concatenation() {
        let nfa = NfaBuilder::build("ab·").unwrap();
        assert!(simulate_nfa(&nfa, "ab"));
        assert!(!simulate_nfa(&nfa, "a"));
        assert!(!simulate_nfa(&nfa, "ba"));
    }

    #[test]
    fn union() {
        let nfa = NfaBuilder::build("ab|").unwrap();
        assert!(simulate_nfa(&nfa, "a"));
        assert!(simulate_nfa(&nfa, "b"));
        assert!(!simulate_nfa(&nfa, "ab"));
    }

    #[test]
    fn star_accepts_empty_and_repetition() {
        let nfa = NfaBuilder::build("a*").unwrap();
        assert!(simulate_nfa(&nfa, ""));
        assert!(simulate_nfa(&nfa, "aaaa"));
        assert!(!simulate_nfa(&nfa, "aab"));
    }

    #[test]
    fn plus_requires_at_least_one() {
        let nfa = NfaBuilder::build("a+").unwrap();
        assert!(!simulate_nfa(&nfa, ""));
        assert!(simulate_nfa(&nfa, "a"));
        assert!(simulate_nfa(&nfa, "aaa"));
    }

    #[test]
    fn optional_accepts_zero_or_one() {
        let nfa = NfaBuilder::build("a?").unwrap();
        assert!(simulate_nfa(&nfa, ""));
        assert!(simulate_nfa(&nfa, "a"));
        assert!(!simulate_nfa(&nfa, "aa"));
    }

    #[test]
    fn empty_postfix_accepts_only_empty_string() {
        let nfa = NfaBuilder::build("").unwrap();
        assert!(simulate_nfa(&nfa, ""));
        assert!(!simulate_nfa(&nfa, "a"));
    }

    #[test]
    fn epsilon_and_empty_set_characters_are_ordinary_operands() {
        let nfa = NfaBuilder::build("ε").unwrap();
        assert!(simulate_nfa(&nfa, "ε"));
        assert!(!simulate_nfa(&nfa, ""));
        assert!(!simulate_nfa(&nfa, "a"));

        let nfa = NfaBuilder::build("∅").unwrap();
        assert!(simulate_nfa(&nfa, "∅"));
        assert!(!simulate_nfa(&nfa, ""));
    }

    #[test]
    fn missing_operand_is_reported() {
        assert_eq!(
            NfaBuilder::build("*"),
            Err(NfaBuildError::MissingOperand { operator: '*', position: 0 })
        );
        assert_eq!(
            NfaBuilder::build("a|"),
            Err(NfaBuildError::MissingOperand { operator: '|', position: 1 })
        );
    }

    #[test]
    fn invalid_stack_size_is_reported() {
        assert_eq!(
            NfaBuilder::build("ab"),
            Err(NfaBuildError::InvalidStackSize { size: 2 })
        );
    }
}
