#![cfg_attr(not(feature = "std"), no_std)]
#![doc = r#"
# glyphcalc

The evaluation core of a keypad calculator: a glyph-aware tokenizer and a
phase-ordered reduction evaluator for flat arithmetic strings.

## Overview

Expressions are what a calculator keypad produces: decimal numbers, the binary
operators `+ - * / ^`, parentheses, unary minus, bracketed function markers
(`<sqrt>`, `<sin>`, `<cos>`, `<tan>`, `<csc>`, `<sec>`, `<cot>`) and four
placeholder glyphs:

| Glyph | Meaning                                   |
|-------|-------------------------------------------|
| `π`   | pi                                        |
| `ℯ`   | Euler's number                            |
| `Ⓐ`   | the previous answer (history snapshot)    |
| `x`   | the free variable used for graphing       |

A glyph directly after a value multiplies implicitly, so `2π` is `2 * π`.

## Quick Start

```rust
use glyphcalc::context::EvalContext;
use glyphcalc::engine::evaluate;

let ctx = EvalContext::new();
assert_eq!(evaluate("1 + 2 * 3", &ctx).unwrap(), "7");
assert_eq!(evaluate("<sqrt>(5+<sqrt>16)", &ctx).unwrap(), "3");
assert_eq!(evaluate("", &ctx).unwrap(), "0");
```

## Previous Answer and Graphing

```rust
use glyphcalc::context::EvalContext;
use glyphcalc::engine::evaluate;
use glyphcalc::history::History;

let mut history = History::new();
history.record("6*7", "42");

let ctx = EvalContext::new().with_history(&history).with_x(2.0);
assert_eq!(evaluate("Ⓐ+x", &ctx).unwrap(), "44");
```

## Error Handling

Every failure is a typed [`error::EvalError`]. A `NaN` result is *not* an
error: it is returned as the string `"NaN"` and the caller decides how to show
it.

```rust
use glyphcalc::context::EvalContext;
use glyphcalc::engine::evaluate;
use glyphcalc::error::EvalError;

let ctx = EvalContext::new();
assert_eq!(evaluate("5/0", &ctx), Err(EvalError::DivisionByZero));
assert_eq!(evaluate("(1+2", &ctx), Err(EvalError::UnmatchedOpenParen));
assert_eq!(evaluate("<sqrt>(0-1)", &ctx).unwrap(), "NaN");
```

## Operator Precedence

| Tier | Operators | Order                                   |
|------|-----------|-----------------------------------------|
| 1    | `^`       | first occurrence first (`2^3^2` = `64`) |
| 2    | `*` `/`   | left to right                           |
| 3    | `+` `-`   | left to right                           |

Parenthesized groups, function applications and unary minus are resolved
before any binary operator.

## Feature Flags

- `std` (default): links `std`; without it the crate is `no_std + alloc`.
- `cli`: builds the `calc` line-oriented front end.
"#]

extern crate alloc;

pub mod context;
pub mod engine;
pub mod error;
pub mod eval;
pub mod evaluator;
pub mod functions;
pub mod graph;
pub mod history;
pub mod lexer;
pub mod types;

pub use context::EvalContext;
pub use engine::{evaluate, evaluate_value};
pub use error::{EvalError, Result};
pub use evaluator::Evaluator;
pub use history::History;
pub use types::{Function, Operator, Token};

/// The floating-point type every computation uses.
pub type Real = f64;

pub mod constants {
    use super::Real;

    pub const PI: Real = core::f64::consts::PI;
    pub const E: Real = core::f64::consts::E;
    pub const TEST_PRECISION: Real = 1e-10;
}

/// Utility macro to check if two floating point values are approximately equal
/// within a specified epsilon. Supports optional format arguments like assert_eq!.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::constants::TEST_PRECISION)
    };
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps: $crate::Real = $epsilon;

        if left_val.is_nan() && right_val.is_nan() {
            // NaN == NaN for our purposes
        } else if left_val.is_infinite()
            && right_val.is_infinite()
            && left_val.signum() == right_val.signum()
        {
            // Same-signed infinities are equal
        } else {
            assert!(
                (left_val - right_val).abs() < eps,
                "assertion failed: `(left ≈ right)` (left: `{}`, right: `{}`, epsilon: `{}`)",
                left_val,
                right_val,
                eps
            );
        }
    }};
    ($left:expr, $right:expr, $epsilon:expr, $($arg:tt)+) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps: $crate::Real = $epsilon;

        if left_val.is_nan() && right_val.is_nan() {
            // NaN == NaN for our purposes
        } else if left_val.is_infinite()
            && right_val.is_infinite()
            && left_val.signum() == right_val.signum()
        {
            // Same-signed infinities are equal
        } else {
            assert!((left_val - right_val).abs() < eps, $($arg)+);
        }
    }};
}
