//! Graph sampling.
//!
//! A graph is one expression template evaluated for evenly spaced values of
//! `x`. Each point carries its own outcome, so a single failing point (say a
//! division by zero at `x = 0`) does not abort the plot.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Real;
use crate::context::EvalContext;
use crate::error::EvalError;
use crate::evaluator::Evaluator;
use crate::history::History;

/// Number of steps across the domain; the samples include both endpoints.
pub const DEFAULT_RESOLUTION: usize = 100;

/// A closed interval of `x` values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub start: Real,
    pub end: Real,
}

impl Domain {
    pub fn new(start: Real, end: Real) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> Real {
        self.end - self.start
    }

    /// Whether `value` lies inside the interval, endpoints included.
    pub fn contains(&self, value: Real) -> bool {
        let (low, high) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        low <= value && value <= high
    }
}

impl Default for Domain {
    /// `[-10, 10]`
    fn default() -> Self {
        Self::new(-10.0, 10.0)
    }
}

/// One evaluated point of a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub x: Real,
    pub y: Result<Real, EvalError>,
}

/// The `x` values a graph over `domain` is sampled at.
///
/// `resolution` steps give `resolution + 1` values, the last one exactly
/// `domain.end`. A resolution of zero samples only `domain.start`.
pub fn x_values(domain: Domain, resolution: usize) -> Vec<Real> {
    if resolution == 0 {
        return alloc::vec![domain.start];
    }
    let step = domain.width() / resolution as Real;
    (0..=resolution)
        .map(|i| {
            if i == resolution {
                domain.end
            } else {
                domain.start + step * i as Real
            }
        })
        .collect()
}

/// Evaluates `expression` at every `x` of the domain.
///
/// `Ⓐ` resolves to the most recent entry of `history` for every point. One
/// arena is reused for the whole graph and reset between points.
///
/// # Examples
///
/// ```
/// use glyphcalc::graph::{sample, Domain};
/// use glyphcalc::history::History;
///
/// let samples = sample("x^2", Domain::new(0.0, 2.0), 2, &History::new());
/// let ys: Vec<f64> = samples.iter().map(|s| s.y.clone().unwrap()).collect();
/// assert_eq!(ys, [0.0, 1.0, 4.0]);
/// ```
pub fn sample(expression: &str, domain: Domain, resolution: usize, history: &History) -> Vec<Sample> {
    let base = EvalContext::new().with_history(history);
    let mut evaluator = Evaluator::new();

    let samples: Vec<Sample> = x_values(domain, resolution)
        .into_iter()
        .map(|x| {
            let y = evaluator.eval_value(expression, &base.with_x(x));
            evaluator.reset();
            Sample { x, y }
        })
        .collect();

    let failed = samples.iter().filter(|s| s.y.is_err()).count();
    debug!(
        expression,
        points = samples.len(),
        failed,
        "sampled graph"
    );
    samples
}
