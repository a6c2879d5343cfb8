//! Per-call evaluation settings.

use crate::Real;
use crate::history::History;

/// Default limit on how deeply parentheses may nest.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Evaluation context for expressions.
///
/// Holds everything the tokenizer reads from outside the expression string:
/// the value substituted for `x`, the snapshot of the previous answer used for
/// `Ⓐ`, and the nesting limit. A context is a plain value: building one copies
/// the answer out of the history, so later history changes do not affect
/// evaluations already configured.
///
/// # Examples
///
/// ```
/// use glyphcalc::context::EvalContext;
/// use glyphcalc::engine::evaluate;
///
/// let ctx = EvalContext::new().with_x(3.0);
/// assert_eq!(evaluate("x^2", &ctx).unwrap(), "9");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalContext {
    /// Value substituted for `x`; `None` turns `x` into `NaN`.
    pub x: Option<Real>,
    /// Value substituted for `Ⓐ`.
    pub answer: Real,
    /// Deepest parenthesis nesting accepted before evaluation starts.
    pub max_nesting_depth: usize,
}

impl EvalContext {
    /// Creates a context with no `x`, a previous answer of `0` and the
    /// default nesting limit.
    pub fn new() -> Self {
        Self {
            x: None,
            answer: 0.0,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    pub fn with_x(mut self, x: Real) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_answer(mut self, answer: Real) -> Self {
        self.answer = answer;
        self
    }

    /// Takes the previous answer from the most recent history entry.
    pub fn with_history(mut self, history: &History) -> Self {
        self.answer = history.answer();
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// The value the tokenizer substitutes for `x`.
    pub fn x_value(&self) -> Real {
        self.x.unwrap_or(Real::NAN)
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
