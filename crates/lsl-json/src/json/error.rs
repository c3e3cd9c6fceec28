//! JSON codec error types.

use thiserror::Error;

use crate::number::NumberError;

/// Reasons JSON text was rejected. Offsets are byte positions in the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token at byte {0}")]
    UnexpectedToken(usize),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unterminated string starting at byte {0}")]
    UnterminatedString(usize),
    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),
    #[error("truncated number at byte {0}")]
    TruncatedNumber(usize),
    #[error("trailing data at byte {0}")]
    TrailingData(usize),
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error(transparent)]
    Number(#[from] NumberError),
}

/// Caller contract violations when framing a list as JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializeError {
    #[error("object framing needs an even element count, got {0}")]
    OddElementCount(usize),
    #[error("invalid container kind {0:?}")]
    InvalidContainerKind(String),
}
