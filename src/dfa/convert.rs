//! Subset construction: determinizes an [`Nfa`] into a [`Dfa`].

use crate::dfa::{Dfa, DfaState};
use crate::nfa::Nfa;
use std::collections::{BTreeSet, HashMap};

/// Converts an [`Nfa`] into an equivalent [`Dfa`] via the subset
/// construction, over a caller-supplied alphabet.
///
/// The converter only ever borrows the [`Nfa`]: a [`Dfa`] it produces
/// references no NFA state directly (each `DfaState`'s `subset` is a
/// plain set of indices), so the `Nfa` and any `Dfa` built from it have
/// independent lifetimes — dropping one never invalidates the other.
pub struct NfaToDfaConverter<'a> {
    nfa: &'a Nfa,
    alphabet: Vec<char>,
}

impl<'a> NfaToDfaConverter<'a> {
    /// Builds a converter over an explicit alphabet. `alphabet` is sorted
    /// and deduplicated so that discovery order — and therefore the
    /// resulting `DfaState` ids — depends only on (NFA graph, alphabet
    /// set), never on the order the caller happened to list symbols in.
    pub fn new(nfa: &'a Nfa, alphabet: impl IntoIterator<Item = char>) -> Self {
        let mut alphabet: Vec<char> = alphabet.into_iter().collect();
        alphabet.sort_unstable();
        alphabet.dedup();
        NfaToDfaConverter { nfa, alphabet }
    }

    /// Builds a converter whose alphabet is exactly Σ_R, the NFA's own
    /// referenced symbols (spec.md §6's definition of the default
    /// alphabet for a pattern with no caller-supplied Σ).
    pub fn from_nfa_alphabet(nfa: &'a Nfa) -> Self {
        NfaToDfaConverter { alphabet: nfa.alphabet(), nfa }
    }

    /// Runs the subset construction: a breadth-first exploration of
    /// epsilon-closed NFA-state subsets, each becoming one `DfaState`.
    pub fn convert(&self) -> Dfa {
        let start_subset = self.nfa.epsilon_closure(&BTreeSet::from([self.nfa.start()]));

        let mut subset_to_id: HashMap<BTreeSet<usize>, usize> = HashMap::new();
        subset_to_id.insert(start_subset.clone(), 0);
        let mut subsets: Vec<BTreeSet<usize>> = vec![start_subset];
        let mut queue: Vec<usize> = vec![0];

        // transitions[id][i] is the successor DfaState id for alphabet[i],
        // discovered lazily as the queue drains.
        let mut transitions: Vec<Vec<Option<usize>>> =
            vec![vec![None; self.alphabet.len()]];

        while let Some(id) = queue.pop() {
            for (symbol_index, &symbol) in self.alphabet.iter().enumerate() {
                let moved = self.nfa.move_on(&subsets[id], symbol);
                if moved.is_empty() {
                    continue;
                }
                let closed = self.nfa.epsilon_closure(&moved);

                let target_id = *subset_to_id.entry(closed.clone()).or_insert_with(|| {
                    let new_id = subsets.len();
                    subsets.push(closed);
                    transitions.push(vec![None; self.alphabet.len()]);
                    queue.push(new_id);
                    new_id
                });

                transitions[id][symbol_index] = Some(target_id);
            }
        }

        let states = subsets
            .into_iter()
            .zip(transitions)
            .enumerate()
            .map(|(id, (subset, transitions))| {
                let is_final = subset.iter().any(|&s| self.nfa.is_final(s));
                DfaState { id, subset, transitions, is_final }
            })
            .collect();

        Dfa::new(states, 0, self.alphabet.clone())
    }
}
