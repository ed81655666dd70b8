//! The NFA data model produced by Thompson construction ([`builder`]) and
//! consumed by subset construction ([`crate::dfa::convert`]) and direct
//! simulation ([`eval`]).

pub mod builder;
pub mod eval;

use std::collections::BTreeSet;

/// An outgoing edge from an [`NfaState`]. `symbol == None` is an
/// epsilon-transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub symbol: Option<char>,
    pub target: usize,
}

/// A single state in an [`Nfa`]'s arena. `id` is the state's index into
/// [`Nfa::states`] — it is not derived, it *is* the position, so two
/// states are never accidentally considered interchangeable just because
/// they look alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaState {
    pub id: usize,
    pub transitions: Vec<Transition>,
    pub is_final: bool,
}

/// A nondeterministic finite automaton built by [`builder::NfaBuilder`].
///
/// States live in a flat arena; transitions reference each other purely by
/// index, so an `Nfa` can be cloned, compared or dropped without chasing
/// pointers, and converting it to a [`crate::dfa::Dfa`] never needs to
/// mutate or consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<NfaState>,
    start: usize,
    end: usize,
}

impl Nfa {
    pub(crate) fn new(states: Vec<NfaState>, start: usize, end: usize) -> Self {
        Nfa { states, start, end }
    }

    pub fn states(&self) -> &[NfaState] {
        &self.states
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_final(&self, state: usize) -> bool {
        self.states[state].is_final
    }

    /// The input alphabet Σ_R actually referenced by this NFA's
    /// transitions: every distinct non-epsilon symbol, sorted by
    /// character code.
    pub fn alphabet(&self) -> Vec<char> {
        let mut symbols: BTreeSet<char> = BTreeSet::new();
        for state in &self.states {
            for t in &state.transitions {
                if let Some(c) = t.symbol {
                    symbols.insert(c);
                }
            }
        }
        symbols.into_iter().collect()
    }

    /// The epsilon-closure of a set of states: every state reachable from
    /// `from` by zero or more epsilon-transitions, including `from`
    /// itself. Computed as a worklist fixed point, not recursively, so it
    /// cannot blow the stack on a long epsilon chain or a cyclic one.
    pub fn epsilon_closure(&self, from: &BTreeSet<usize>) -> BTreeSet<usize> {
        let mut closure: BTreeSet<usize> = from.clone();
        let mut worklist: Vec<usize> = from.iter().copied().collect();

        while let Some(state) = worklist.pop() {
            for t in &self.states[state].transitions {
                if t.symbol.is_none() && closure.insert(t.target) {
                    worklist.push(t.target);
                }
            }
        }

        closure
    }

    /// `move(S, c)`: the set of states directly reachable from some state
    /// in `from` by consuming a single `symbol`. Does not follow
    /// epsilon-transitions — callers take the epsilon-closure of the
    /// result themselves (subset construction needs the un-closed set to
    /// detect an empty move before bothering to close it).
    pub fn move_on(&self, from: &BTreeSet<usize>, symbol: char) -> BTreeSet<usize> {
        let mut reached = BTreeSet::new();
        for &state in from {
            for t in &self.states[state].transitions {
                if t.symbol == Some(symbol) {
                    reached.insert(t.target);
                }
            }
        }
        reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_nfa() -> Nfa {
        // 0 --a--> 1 --eps--> 2 --b--> 3
        let states = vec![
            NfaState {
                id: 0,
                transitions: vec![Transition { symbol: Some('a'), target: 1 }],
                is_final: false,
            },
            NfaState {
                id: 1,
                transitions: vec![Transition { symbol: None, target: 2 }],
                is_final: false,
            },
            NfaState {
                id: 2,
                transitions: vec![Transition { symbol: Some('b'), target: 3 }],
                is_final: false,
            },
            NfaState {
                id: 3,
                transitions: vec![],
                is_final: true,
            },
        ];
        Nfa::new(states, 0, 3)
    }

    #[test]
    fn epsilon_closure_follows_chains_and_includes_self() {
        let nfa = linear_nfa();
        let closure = nfa.epsilon_closure(&BTreeSet::from([1]));
        assert_eq!(closure, BTreeSet::from([1, 2]));
    }

    #[test]
    fn move_on_does_not_follow_epsilon() {
        let nfa = linear_nfa();
        let moved = nfa.move_on(&BTreeSet::from([0]), 'a');
        assert_eq!(moved, BTreeSet::from([1]));
        assert!(nfa.move_on(&BTreeSet::from([1]), 'b').is_empty());
    }

    #[test]
    fn alphabet_is_sorted_and_deduplicated() {
        let nfa = linear_nfa();
        assert_eq!(nfa.alphabet(), vec!['a', 'b']);
    }
}
