//! Error types and handling for the glyphcalc crate.
//!
//! Every failure the evaluator can detect has its own variant. All of them are
//! recoverable: the caller shows a message and lets the user edit the input.

use core::fmt;
use core::result;

use crate::types::Lexeme;

/// Result type used throughout the crate.
pub type Result<T> = result::Result<T, EvalError>;

/// Error type for expression evaluation.
///
/// A `NaN` result (for example `<sqrt>(0-1)`) is a successful evaluation and
/// never appears here.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An opening parenthesis has no closing parenthesis after it.
    UnmatchedOpenParen,

    /// A closing parenthesis has no opening parenthesis before it.
    UnmatchedCloseParen,

    /// A function marker is the last token of its expression.
    MissingFunctionArgument,

    /// A function marker is followed by something that is not a number.
    InvalidFunctionArgument,

    /// A bracketed marker names a function outside the supported set.
    UnknownFunction {
        /// Text between `<` and `>`
        name: Lexeme,
    },

    /// A binary operator lacks a numeric operand on one of its sides.
    MissingOperand,

    /// The expression contains a character that is neither a number, an
    /// operator, a parenthesis nor a recognised glyph.
    InvalidOperator {
        /// The offending text
        symbol: Lexeme,
    },

    /// The right operand of `/` is exactly zero.
    DivisionByZero,

    /// Values remain side by side with nothing to combine them, e.g. `1 2`.
    NotEnoughOperators,

    /// Reduction finished on a single token that is not a number.
    InvalidResult,

    /// Parentheses are nested deeper than the context allows.
    NestingTooDeep {
        /// Deepest nesting found in the expression
        depth: usize,
        /// Limit configured on the evaluation context
        limit: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnmatchedOpenParen => write!(f, "Missing closing parenthesis ')'"),
            EvalError::UnmatchedCloseParen => write!(f, "Missing opening parenthesis '('"),
            EvalError::MissingFunctionArgument => write!(f, "Function is missing its argument"),
            EvalError::InvalidFunctionArgument => write!(f, "Function argument is not a number"),
            EvalError::UnknownFunction { name } => write!(f, "Unknown function: '{}'", name),
            EvalError::MissingOperand => write!(f, "Operator is missing an operand"),
            EvalError::InvalidOperator { symbol } => write!(f, "Invalid symbol: '{}'", symbol),
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::NotEnoughOperators => write!(f, "Not enough operators"),
            EvalError::InvalidResult => write!(f, "Expression does not reduce to a number"),
            EvalError::NestingTooDeep { depth, limit } => write!(
                f,
                "Parentheses nested {} deep (maximum is {})",
                depth, limit
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EvalError {}
