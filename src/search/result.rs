//! Search result types and statistics

use crate::search::config::Strategy;
use std::time::Duration;

/// Result of a single-target search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Index of a matching element, `None` when the target is absent
    pub index: Option<usize>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchResult {
    pub fn new(index: Option<usize>, statistics: SearchStatistics) -> Self {
        Self { index, statistics }
    }

    pub fn found(&self) -> bool {
        self.index.is_some()
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Strategy that produced the result
    pub strategy: Strategy,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of worker threads spawned
    pub workers_spawned: u64,
    /// Number of segments (or pieces) whose bounds were tested
    pub segments_probed: u64,
    /// Number of segments that ran a full binary search
    pub segments_searched: u64,
    /// Number of narrowing rounds (narrowing strategy only)
    pub rounds: u64,
}

impl SearchStatistics {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    /// Fraction of probed segments that went on to a full search (0.0 to 1.0)
    pub fn search_rate(&self) -> f64 {
        if self.segments_probed == 0 {
            0.0
        } else {
            self.segments_searched as f64 / self.segments_probed as f64
        }
    }

    /// Fold another run's counters into this one.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.elapsed_time += other.elapsed_time;
        self.workers_spawned += other.workers_spawned;
        self.segments_probed += other.segments_probed;
        self.segments_searched += other.segments_searched;
        self.rounds += other.rounds;
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Strategy: {}\n", self.strategy));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Workers spawned: {}\n", self.workers_spawned));

        if self.segments_probed > 0 {
            s.push_str(&format!("Segments probed: {}\n", self.segments_probed));
            s.push_str(&format!(
                "Segments searched: {} ({:.2}%)\n",
                self.segments_searched,
                self.search_rate() * 100.0
            ));
        }

        if self.strategy == Strategy::Narrowing && self.rounds > 0 {
            s.push_str(&format!("Rounds: {}\n", self.rounds));
        }

        s
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => writeln!(f, "Found at index: {}", index),
            None => writeln!(f, "Not found."),
        }
    }
}
