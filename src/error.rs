use thiserror::Error;

/// Errors produced while translating an infix regular expression into
/// postfix form.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ShuntingYardError {
    #[error("unmatched ')' at position {position}")]
    UnmatchedCloseParen { position: usize },
    #[error("unmatched '(': {count} paren(s) never closed")]
    UnmatchedOpenParen { count: usize },
}

/// Errors produced while building an NFA from a postfix token string.
///
/// There is no separate "unknown operator" variant: every character is
/// classified as either one of the five recognized operators, a raw
/// parenthesis (rejected by [`NfaBuildError::UnbalancedParenInPostfix`]),
/// or an operand — so no third, unclassifiable case reaches the builder.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NfaBuildError {
    #[error("operator '{operator}' at postfix position {position} has no preceding operand")]
    MissingOperand { operator: char, position: usize },
    #[error("'{paren}' at postfix position {position} is not valid in postfix form")]
    UnbalancedParenInPostfix { paren: char, position: usize },
    #[error("postfix expression did not reduce to a single NFA fragment, stack held {size} fragment(s)")]
    InvalidStackSize { size: usize },
}

/// Top-level error for [`crate::parse`], covering both pipeline stages.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RegexError {
    #[error(transparent)]
    ShuntingYard(#[from] ShuntingYardError),
    #[error(transparent)]
    NfaBuild(#[from] NfaBuildError),
}
