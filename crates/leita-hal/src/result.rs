//! Execution results and measurement outcome tables.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Measurement outcome table: bitstring to observed count.
///
/// Bitstrings use the convention that classical bit 0 is the leftmost
/// character. Counts over a completed job always sum to the shot count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    inner: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty outcome table.
    pub fn new() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }

    /// Add `count` observations of `bitstring`, accumulating with any
    /// existing entry.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.inner.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a bitstring (0 if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.inner.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of observations across all bitstrings.
    pub fn total_shots(&self) -> u64 {
        self.inner.values().sum()
    }

    /// The most frequently observed bitstring, if any.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.inner
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(s, &c)| (s.as_str(), c))
    }

    /// Outcomes sorted by descending count (ties broken by bitstring).
    pub fn sorted_desc(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.inner.iter().map(|(s, &c)| (s.as_str(), c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.inner.iter().map(|(s, &c)| (s.as_str(), c))
    }

    /// Number of distinct observed bitstrings.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Result of executing a circuit on a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement outcome table.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}
