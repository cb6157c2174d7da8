//! Error types for constructors and the expression evaluator.

use thiserror::Error;

/// Invalid input to a geometric constructor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// The argument is outside the constructor's domain (zero direction,
    /// non-positive denominator, non-finite value, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GeomError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GeomError::InvalidArgument(msg.into())
    }
}

/// Failure to evaluate a typed arithmetic expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character {ch:?} at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("trailing input at byte {0}")]
    Trailing(usize),

    #[error("malformed number {0:?}")]
    BadNumber(String),

    #[error("unknown identifier {0:?}")]
    UnknownIdent(String),

    #[error("division by zero")]
    DivisionByZero,

    /// Result overflowed to infinity or became NaN.
    #[error("result is not finite")]
    NotFinite,
}
