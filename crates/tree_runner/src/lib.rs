//! Tree Runner
//!
//! Everything around the search engines that is not the search itself:
//! - Loading and saving trees as JSON
//! - Generating sample and random trees
//! - Picking an engine by name
//! - Timed playback of a stepped search
//! - Text rendering of the tree state and statistics reports
//!
//! # Usage
//!
//! ```bash
//! # Run alpha-beta on a tree file and print the statistics
//! cargo run -p tree_runner -- run --tree tree.json --algorithm alphabeta
//!
//! # Watch negamax step through the built-in sample tree
//! cargo run -p tree_runner -- step --algorithm negamax --speed 8
//!
//! # Run all three engines side by side
//! cargo run -p tree_runner -- compare --tree tree.json
//! ```

mod config;
mod engines;
mod generate;
mod playback;
mod render;
mod report;
mod tree_file;

pub use config::*;
pub use engines::*;
pub use generate::*;
pub use playback::*;
pub use render::*;
pub use report::*;
pub use tree_file::*;
