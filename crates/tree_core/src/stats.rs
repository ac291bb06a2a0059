//! Search statistics.

use std::time::{Duration, Instant};

/// Running counters, updated only by the engine.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    nodes_visited: u64,
    nodes_pruned: u64,
    max_depth: usize,
    started: Option<Instant>,
    finished: Option<Instant>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every counter and starts the clock.
    pub fn reset(&mut self) {
        *self = Self {
            started: Some(Instant::now()),
            ..Self::default()
        };
    }

    /// Counts one `step()` against a node at `depth`.
    ///
    /// A node that goes through several phases is counted once per phase.
    #[inline]
    pub fn record_visit(&mut self, depth: usize) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Counts children skipped by a cut-off.
    pub fn record_pruned(&mut self, count: usize) {
        self.nodes_pruned += count as u64;
    }

    /// Stops the clock. Later calls keep the first finish time.
    pub fn finish(&mut self) {
        if self.finished.is_none() {
            self.finished = Some(Instant::now());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Wall-clock time since `reset()`, frozen once finished.
    pub fn elapsed(&self) -> Duration {
        match (self.started, self.finished) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let pruning_efficiency = if self.nodes_visited == 0 {
            0.0
        } else {
            self.nodes_pruned as f64 / self.nodes_visited as f64
        };
        StatsSnapshot {
            nodes_visited: self.nodes_visited,
            nodes_pruned: self.nodes_pruned,
            max_depth: self.max_depth,
            elapsed: self.elapsed(),
            pruning_efficiency,
        }
    }
}

/// Read-only copy of the statistics at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub nodes_visited: u64,
    /// Direct children skipped by cut-offs (not whole subtree sizes).
    pub nodes_pruned: u64,
    pub max_depth: usize,
    pub elapsed: Duration,
    /// `nodes_pruned / nodes_visited`, or 0 when nothing was visited.
    pub pruning_efficiency: f64,
}

impl StatsSnapshot {
    pub fn efficiency_percent(&self) -> f64 {
        self.pruning_efficiency * 100.0
    }

    /// Same counters, ignoring timing.
    pub fn same_counts(&self, other: &StatsSnapshot) -> bool {
        self.nodes_visited == other.nodes_visited
            && self.nodes_pruned == other.nodes_pruned
            && self.max_depth == other.max_depth
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
