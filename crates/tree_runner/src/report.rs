//! Search statistics reporting

use serde::{Deserialize, Serialize};
use tree_core::SearchAlgorithm;

/// Statistics of one finished (or paused) search, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub algorithm: String,
    /// Root value from the maximizing player's point of view
    pub value: String,
    pub nodes_visited: u64,
    pub nodes_pruned: u64,
    pub max_depth: usize,
    pub elapsed_ms: f64,
    /// Pruned / visited, in percent
    pub pruning_efficiency: f64,
}

impl StatsReport {
    pub fn from_engine(engine: &dyn SearchAlgorithm) -> Self {
        let stats = engine.statistics();
        Self {
            algorithm: engine.name().to_string(),
            value: engine
                .minimax_value()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            nodes_visited: stats.nodes_visited,
            nodes_pruned: stats.nodes_pruned,
            max_depth: stats.max_depth,
            elapsed_ms: stats.elapsed.as_secs_f64() * 1000.0,
            pruning_efficiency: stats.efficiency_percent(),
        }
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} ===\n", self.algorithm));
        report.push_str(&format!("Root value:    {}\n", self.value));
        report.push_str(&format!("Nodes visited: {}\n", self.nodes_visited));
        report.push_str(&format!("Nodes pruned:  {}\n", self.nodes_pruned));
        report.push_str(&format!("Efficiency:    {:.1}%\n", self.pruning_efficiency));
        report.push_str(&format!("Max depth:     {}\n", self.max_depth));
        report.push_str(&format!("Time:          {:.2} ms\n", self.elapsed_ms));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// Side-by-side table of several reports.
pub fn comparison_table(reports: &[StatsReport]) -> String {
    let mut table = String::new();
    table.push_str(&format!(
        "{:<26} {:>6} {:>8} {:>7} {:>8} {:>6}\n",
        "Engine", "Value", "Visited", "Pruned", "Eff.", "Depth"
    ));
    table.push_str(&"-".repeat(66));
    table.push('\n');
    for r in reports {
        table.push_str(&format!(
            "{:<26} {:>6} {:>8} {:>7} {:>7.1}% {:>6}\n",
            r.algorithm, r.value, r.nodes_visited, r.nodes_pruned, r.pruning_efficiency, r.max_depth
        ));
    }
    table
}
