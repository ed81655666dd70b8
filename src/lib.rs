//! # finity
//!
//! `finity` compiles a regular expression over a finite character alphabet
//! into a deterministic finite automaton, and simulates both the
//! intermediate nondeterministic automaton and the final DFA against
//! input strings.
//!
//! The pipeline is four stages, leaf-first:
//!
//! 1. [`shunting_yard`] rewrites an infix pattern into postfix form,
//!    inserting the explicit concatenation operator `·` and applying the
//!    classic Shunting Yard algorithm over a five-operator precedence
//!    table (`*` `+` `?` `·` `|`).
//! 2. [`nfa::builder`] lifts that postfix form to an [`nfa::Nfa`] via
//!    Thompson construction — one combinator per operator, each gluing
//!    together NFA fragments with epsilon-transitions.
//! 3. [`dfa::convert`] determinizes the NFA into a [`dfa::Dfa`] via the
//!    subset construction: epsilon-closure, `move`, and canonical subset
//!    identity.
//! 4. [`nfa::eval`] and [`dfa::eval`] simulate the NFA and DFA directly
//!    against an input string.
//!
//! ```
//! use finity::{parse, dfa::convert::NfaToDfaConverter, nfa::eval::simulate_nfa, dfa::eval::simulate_dfa};
//!
//! let nfa = parse("(a|b)*(c)+").unwrap();
//! assert!(simulate_nfa(&nfa, "ababababac"));
//!
//! let dfa = NfaToDfaConverter::from_nfa_alphabet(&nfa).convert();
//! assert!(simulate_dfa(&dfa, "ababababac"));
//! assert!(!simulate_dfa(&dfa, "ab"));
//! ```
//!
//! ## Surface syntax
//!
//! Operands are any character other than the reserved set `( ) | * + ?
//! ·`. This includes `ε` and `∅`: they are ordinary operands here, each
//! matching only the one-character string containing that character,
//! not the empty string or the empty language. There are no escape
//! sequences, character classes, anchors, capture groups, or bounded
//! repetition — see `SPEC_FULL.md` for the full non-goal list. The
//! concatenation marker `·` is reserved internally and can never be
//! matched literally.
//!
//! An empty pattern (`""`) is accepted and denotes the language
//! containing only the empty string, rather than being an error.

pub mod dfa;
pub mod error;
pub mod nfa;
pub mod shunting_yard;

use error::RegexError;
use nfa::builder::NfaBuilder;
use nfa::Nfa;

/// Compiles an infix regular expression into an [`Nfa`], composing
/// [`shunting_yard::to_postfix`] and [`NfaBuilder::build`].
///
/// This is the crate's top-level entry point; callers who need a DFA
/// should follow it with [`dfa::convert::NfaToDfaConverter`].
pub fn parse(infix: &str) -> Result<Nfa, RegexError> {
    let postfix = shunting_yard::to_postfix(infix)?;
    Ok(NfaBuilder::build(&postfix)?)
}
