use crate::canonicalize::CanonicalizeError;
use crate::pattern::TokenType;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern '{pattern}' ends with a lone escape character at index {index}")]
    LoneEscapeCharacter { pattern: String, index: usize },
    #[error("pattern '{pattern}' has a ':' without a valid group name at index {index}")]
    ParameterMissingName { pattern: String, index: usize },
    #[error("regexp group at index {index} in pattern '{pattern}' is invalid: {reason}")]
    InvalidRegexpGroup {
        pattern: String,
        index: usize,
        reason: &'static str,
    },
    #[error("regexp group at index {index} in pattern '{pattern}' is not terminated")]
    UnterminatedRegexpGroup { pattern: String, index: usize },
    #[error("regexp group at index {index} in pattern '{pattern}' is empty")]
    EmptyRegexpGroup { pattern: String, index: usize },
    #[error(
        "expected {expected:?} token at index {index} in pattern '{pattern}' (found {found:?})"
    )]
    MissingToken {
        pattern: String,
        index: usize,
        expected: TokenType,
        found: TokenType,
    },
    #[error("group name '{name}' appears more than once in pattern '{pattern}'")]
    DuplicateName { pattern: String, name: String },
    #[error(transparent)]
    Encoding(#[from] CanonicalizeError),
}

pub type PatternResult<T> = Result<T, PatternError>;
