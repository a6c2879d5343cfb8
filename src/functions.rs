//! Numeric kernels for the elementary functions and binary operators.
//!
//! All transcendental functions come from the `libm` crate so the core keeps
//! working without `std`. Non-finite results (`NaN`, infinities) are returned
//! as values; the only arithmetic failure is division by exactly zero.

use libm::{cos as libm_cos, pow as libm_pow, sin as libm_sin, sqrt as libm_sqrt, tan as libm_tan};

use crate::Real;
use crate::error::{EvalError, Result};
use crate::types::{Function, Operator};

pub fn add(a: Real, b: Real) -> Real {
    a + b
}

pub fn sub(a: Real, b: Real) -> Real {
    a - b
}

pub fn mul(a: Real, b: Real) -> Real {
    a * b
}

/// Divides `a` by `b`.
///
/// Unlike IEEE division, a zero divisor (either sign) is an error rather than
/// an infinity: a calculator reports "division by zero" instead of showing `inf`.
pub fn div(a: Real, b: Real) -> Result<Real> {
    if b == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raises `a` to the power `b`.
///
/// A negative base with a fractional exponent yields `NaN`, which is passed
/// through as a result.
pub fn pow(a: Real, b: Real) -> Real {
    libm_pow(a, b)
}

pub fn neg(a: Real) -> Real {
    -a
}

/// Square root; negative arguments yield `NaN`.
pub fn sqrt(a: Real) -> Real {
    libm_sqrt(a)
}

pub fn sin(a: Real) -> Real {
    libm_sin(a)
}

pub fn cos(a: Real) -> Real {
    libm_cos(a)
}

pub fn tan(a: Real) -> Real {
    libm_tan(a)
}

/// Cosecant. `csc(0)` is infinity, not an error.
pub fn csc(a: Real) -> Real {
    1.0 / libm_sin(a)
}

/// Secant.
pub fn sec(a: Real) -> Real {
    1.0 / libm_cos(a)
}

/// Cotangent. `cot(0)` is infinity, not an error.
pub fn cot(a: Real) -> Real {
    1.0 / libm_tan(a)
}

impl Function {
    /// Applies the function to its single argument.
    pub fn apply(self, arg: Real) -> Real {
        match self {
            Function::Sqrt => sqrt(arg),
            Function::Sin => sin(arg),
            Function::Cos => cos(arg),
            Function::Tan => tan(arg),
            Function::Csc => csc(arg),
            Function::Sec => sec(arg),
            Function::Cot => cot(arg),
        }
    }
}

impl Operator {
    /// Applies the operator to its two operands.
    pub fn apply(self, left: Real, right: Real) -> Result<Real> {
        match self {
            Operator::Add => Ok(add(left, right)),
            Operator::Subtract => Ok(sub(left, right)),
            Operator::Multiply => Ok(mul(left, right)),
            Operator::Divide => div(left, right),
            Operator::Power => Ok(pow(left, right)),
        }
    }
}
