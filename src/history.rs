//! Calculation history.
//!
//! The history belongs to the caller (a keypad UI, the `calc` binary). The
//! evaluation core only ever sees a number copied out of it through
//! [`EvalContext::with_history`](crate::context::EvalContext::with_history).

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::Real;

/// One finished calculation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
}

/// Append-only list of calculations, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Appends an `(expression, result)` pair.
    pub fn record(&mut self, expression: impl Into<String>, result: impl Into<String>) {
        self.push(HistoryEntry {
            expression: expression.into(),
            result: result.into(),
        });
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Text of the most recent result, or `"0"` when nothing was calculated yet.
    pub fn last_result(&self) -> &str {
        self.last().map_or("0", |entry| entry.result.as_str())
    }

    /// The most recent result as a number.
    ///
    /// Results are stored as the evaluator printed them, so they parse back
    /// exactly; text that does not parse counts as `0`.
    pub fn answer(&self) -> Real {
        self.last_result().trim().parse::<Real>().unwrap_or(0.0)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
