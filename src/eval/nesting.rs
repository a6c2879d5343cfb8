//! Parenthesis nesting limit.
//!
//! Groups are reduced innermost first, so evaluation never recurses more than
//! one level. Deeply nested input still costs a full pass per group, and the
//! limit keeps hostile input bounded before any reduction work starts.

use tracing::debug;

use crate::error::{EvalError, Result};
use crate::types::Token;

/// Deepest parenthesis nesting in `tokens`. Unbalanced closers never push the
/// depth below zero.
pub fn nesting_depth(tokens: &[Token]) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    for token in tokens {
        match token {
            Token::OpenParen => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            Token::CloseParen => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Fails with [`EvalError::NestingTooDeep`] when `tokens` nest deeper than `limit`.
pub fn check_nesting_depth(tokens: &[Token], limit: usize) -> Result<()> {
    let depth = nesting_depth(tokens);
    if depth > limit {
        debug!(depth, limit, "rejecting deeply nested expression");
        return Err(EvalError::NestingTooDeep { depth, limit });
    }
    Ok(())
}
