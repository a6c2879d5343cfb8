//! Phase-ordered reduction of a token sequence.
//!
//! Every pass of the outer loop applies the first phase that finds work, once,
//! and starts over:
//!
//! 1. innermost parenthesized group (evaluated recursively),
//! 2. rightmost function application,
//! 3. rightmost unary minus in front of a number,
//! 4. first `^`, else first `*`/`/`, else first `+`/`-`.
//!
//! Each step removes at least one token, so the loop terminates. The search
//! order is observable: `2^3^2` is `(2^3)^2`, and `()` disappears instead of
//! standing for zero.

use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;
use tracing::trace;

use crate::Real;
use crate::error::{EvalError, Result};
use crate::functions::neg;
use crate::types::{Operator, Token};

/// Reduces `tokens` to a single number.
///
/// An empty sequence evaluates to `0`.
pub fn reduce<'bump>(mut tokens: BumpVec<'bump, Token>, bump: &'bump Bump) -> Result<Real> {
    while tokens.len() > 1 {
        trace!(remaining = tokens.len(), "reduction step");

        let progressed = resolve_group(&mut tokens, bump)?
            || apply_function(&mut tokens)?
            || fold_negation(&mut tokens)
            || apply_operator(&mut tokens)?;

        if !progressed {
            return Err(stuck_error(&tokens));
        }
    }

    match tokens.first() {
        None => Ok(0.0),
        Some(Token::Number(value)) => Ok(*value),
        Some(_) => Err(EvalError::InvalidResult),
    }
}

/// A `-` at `index` is unary when nothing that ends an operand precedes it.
fn is_unary_minus(tokens: &[Token], index: usize) -> bool {
    tokens[index].is_operator(Operator::Subtract)
        && (index == 0 || !tokens[index - 1].is_value())
}

/// Phase 1: replaces the innermost group with its value.
fn resolve_group<'bump>(tokens: &mut BumpVec<'bump, Token>, bump: &'bump Bump) -> Result<bool> {
    let Some(open) = tokens.iter().rposition(|t| *t == Token::OpenParen) else {
        if tokens.contains(&Token::CloseParen) {
            return Err(EvalError::UnmatchedCloseParen);
        }
        return Ok(false);
    };

    let close = tokens[open + 1..]
        .iter()
        .position(|t| *t == Token::CloseParen)
        .map(|offset| open + 1 + offset)
        .ok_or(EvalError::UnmatchedOpenParen)?;

    if close == open + 1 {
        tokens.drain(open..=close);
        return Ok(true);
    }

    // innermost group: the slice holds no parentheses, so this recursion is one level deep
    let inner = BumpVec::from_iter_in(tokens[open + 1..close].iter().cloned(), bump);
    let value = reduce(inner, bump)?;

    tokens.drain(open + 1..=close);
    if open > 0 && is_unary_minus(tokens, open - 1) {
        tokens.remove(open);
        tokens[open - 1] = Token::Number(neg(value));
    } else {
        tokens[open] = Token::Number(value);
    }
    Ok(true)
}

/// Phase 2: applies the rightmost function to the number after it.
fn apply_function(tokens: &mut BumpVec<'_, Token>) -> Result<bool> {
    let Some(index) = tokens.iter().rposition(Token::is_function) else {
        return Ok(false);
    };

    let func = match &tokens[index] {
        Token::Function(func) => *func,
        Token::UnknownFunction(name) => {
            return Err(EvalError::UnknownFunction { name: name.clone() });
        }
        _ => return Ok(false),
    };

    // a `-` right after a function can only be unary
    let (arg, consumed) = match (tokens.get(index + 1), tokens.get(index + 2)) {
        (None, _) => return Err(EvalError::MissingFunctionArgument),
        (Some(Token::Number(value)), _) => (*value, 1),
        (Some(Token::Operator(Operator::Subtract)), Some(Token::Number(value))) => {
            (neg(*value), 2)
        }
        (Some(Token::Operator(Operator::Subtract)), None) => {
            return Err(EvalError::MissingFunctionArgument);
        }
        _ => return Err(EvalError::InvalidFunctionArgument),
    };

    tokens.drain(index + 1..=index + consumed);
    tokens[index] = Token::Number(func.apply(arg));
    Ok(true)
}

/// Phase 3: folds the rightmost unary `-` into the number that follows it.
fn fold_negation(tokens: &mut BumpVec<'_, Token>) -> bool {
    let view: &[Token] = tokens;
    let found = (0..view.len().saturating_sub(1))
        .rev()
        .find(|&i| is_unary_minus(view, i) && view[i + 1].as_number().is_some());

    let Some(index) = found else {
        return false;
    };
    let Some(value) = tokens[index + 1].as_number() else {
        return false;
    };

    tokens[index + 1] = Token::Number(neg(value));
    tokens.remove(index);
    true
}

/// Phase 4: applies the binary operator with the highest precedence tier,
/// leftmost within its tier.
fn apply_operator(tokens: &mut BumpVec<'_, Token>) -> Result<bool> {
    let index = tokens
        .iter()
        .position(|t| t.is_operator(Operator::Power))
        .or_else(|| {
            tokens
                .iter()
                .position(|t| t.is_operator(Operator::Multiply) || t.is_operator(Operator::Divide))
        })
        .or_else(|| tokens.iter().position(|t| matches!(t, Token::Operator(_))));

    let Some(index) = index else {
        return Ok(false);
    };
    let Token::Operator(op) = tokens[index] else {
        return Ok(false);
    };

    let left = index.checked_sub(1).and_then(|i| tokens[i].as_number());
    let right = tokens.get(index + 1).and_then(Token::as_number);
    let (Some(left), Some(right)) = (left, right) else {
        return Err(EvalError::MissingOperand);
    };

    let value = op.apply(left, right)?;
    tokens.drain(index..=index + 1);
    tokens[index - 1] = Token::Number(value);
    Ok(true)
}

/// Phase 5: nothing applies but several tokens remain.
fn stuck_error(tokens: &[Token]) -> EvalError {
    let stray = tokens.iter().find_map(|t| match t {
        Token::Invalid(text) => Some(text.clone()),
        _ => None,
    });
    match stray {
        Some(symbol) => EvalError::InvalidOperator { symbol },
        None => EvalError::NotEnoughOperators,
    }
}
