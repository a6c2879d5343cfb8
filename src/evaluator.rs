//! Arena-managed expression evaluator
//!
//! This module provides a reusable evaluator that keeps one memory arena
//! across evaluations instead of allocating a fresh one per call.

use alloc::string::String;

use bumpalo::Bump;

use crate::context::EvalContext;
use crate::engine::{evaluate_in, format_result};
use crate::error::Result;
use crate::Real;

/// An expression evaluator that manages its own memory arena.
///
/// Token sequences are allocated in the arena and stay there until
/// [`reset`](Self::reset) is called, so a long-running caller should reset
/// between batches.
///
/// # Examples
///
/// ```
/// use glyphcalc::context::EvalContext;
/// use glyphcalc::evaluator::Evaluator;
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(evaluator.eval("2 + 3 * 4").unwrap(), "14");
///
/// let ctx = EvalContext::new().with_x(5.0);
/// assert_eq!(evaluator.eval_value("x * 2", &ctx).unwrap(), 10.0);
///
/// evaluator.reset();
/// ```
pub struct Evaluator {
    arena: Bump,
}

impl Evaluator {
    /// Creates a new evaluator with a fresh arena.
    pub fn new() -> Self {
        Self { arena: Bump::new() }
    }

    /// Creates a new evaluator with a pre-allocated arena capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Bump::with_capacity(capacity),
        }
    }

    /// Evaluates an expression using the default context.
    pub fn eval(&self, expression: &str) -> Result<String> {
        self.eval_with_context(expression, &EvalContext::new())
    }

    /// Evaluates an expression with a custom context.
    pub fn eval_with_context(&self, expression: &str, ctx: &EvalContext) -> Result<String> {
        self.eval_value(expression, ctx).map(format_result)
    }

    pub fn eval_value(&self, expression: &str, ctx: &EvalContext) -> Result<Real> {
        evaluate_in(expression, ctx, &self.arena)
    }

    /// Resets the arena, freeing all allocated memory.
    pub fn reset(&mut self) {
        self.arena.reset();
    }

    /// Returns the current memory usage of the arena in bytes.
    pub fn allocated_bytes(&self) -> usize {
        self.arena.allocated_bytes()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
