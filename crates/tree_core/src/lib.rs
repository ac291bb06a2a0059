//! Tree Core
//!
//! Arena game tree, value type, statistics, and the resumable search
//! skeleton shared by every engine. Engines plug in through
//! [`StepStrategy`]; drivers talk to them through [`SearchAlgorithm`].

pub mod eval;
pub mod search;
pub mod stats;
pub mod tree;

pub use eval::Eval;
pub use search::*;
pub use stats::{SearchStats, StatsSnapshot};
pub use tree::*;

// =============================================================================
// SearchAlgorithm trait, implemented by every stepped engine
// =============================================================================

/// Contract between a search engine and whoever drives it.
///
/// The driver calls [`initialize`](SearchAlgorithm::initialize) once, then
/// [`step`](SearchAlgorithm::step) until it returns `None`. Between steps the
/// tree can be inspected through [`tree`](SearchAlgorithm::tree) and the
/// node about to be processed through [`current`](SearchAlgorithm::current).
pub trait SearchAlgorithm {
    /// Human-readable engine name.
    fn name(&self) -> &str;

    /// Reset statistics and all transient node state, and put the cursor on
    /// the root.
    fn initialize(&mut self);

    /// Perform exactly one state transition.
    ///
    /// # Returns
    /// The node the next call will operate on, or `None` once the search has
    /// retreated past the root. Stepping an uninitialized or finished search
    /// is a no-op returning `None`.
    fn step(&mut self) -> Option<NodeId>;

    /// Initialize, then step until the search completes.
    ///
    /// # Returns
    /// The root's computed value.
    fn run(&mut self) -> Option<Eval> {
        self.initialize();
        while self.step().is_some() {}
        self.root_value()
    }

    /// Snapshot of the run statistics so far.
    fn statistics(&self) -> StatsSnapshot;

    /// Node under the cursor (`None` before initialize and after the end).
    fn current(&self) -> Option<NodeId>;

    /// True once the final step has retreated past the root.
    fn is_finished(&self) -> bool;

    /// The tree being searched.
    fn tree(&self) -> &GameTree;

    /// Root value in the engine's own convention.
    fn root_value(&self) -> Option<Eval> {
        let tree = self.tree();
        tree[tree.root()].value()
    }

    /// Root value from the maximizing player's point of view, comparable
    /// across engines.
    fn minimax_value(&self) -> Option<Eval> {
        self.root_value()
    }
}
