//! Resumable search skeleton.
//!
//! A recursive depth-first search keeps its progress on the call stack. Here
//! that progress lives in each node's [`Phase`] and child cursor instead, and
//! a single cursor names the node the next step operates on. Finishing a node
//! hands its value to the parent's `pending_return` and moves the cursor up
//! the parent link; retreating past the root ends the search.

use tracing::{debug, trace, warn};

use crate::eval::Eval;
use crate::stats::{SearchStats, StatsSnapshot};
use crate::tree::{GameTree, NodeId, Phase};
use crate::SearchAlgorithm;

/// Outcome of one transition on a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Keep the cursor on this node; its phase has moved on.
    Stay,
    /// Move the cursor into this child.
    Descend(NodeId),
    /// This node is done: hand the value to the parent and retreat.
    Return(Eval),
}

/// Per-algorithm transition rules.
///
/// `transition` looks at the node's phase and transient fields, updates
/// them, and says where the cursor goes next. Moving the cursor, the parent
/// hand-off, and statistics bookkeeping are left to [`SteppedSearch`].
pub trait StepStrategy {
    fn name(&self) -> &str;

    /// Strategy-specific seeding after the generic transient reset.
    fn prepare(&self, _tree: &mut GameTree) {}

    fn transition(&self, tree: &mut GameTree, id: NodeId, stats: &mut SearchStats) -> Transition;

    /// Root value from the maximizing player's point of view.
    fn minimax_value(&self, tree: &GameTree) -> Option<Eval> {
        tree[tree.root()].value()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Idle,
    At(NodeId),
    Done,
}

/// A search that advances one transition per [`step`](SearchAlgorithm::step).
///
/// Owns the tree for as long as it searches, so the tree cannot change shape
/// mid-run and no second engine can touch the same transient state.
#[derive(Debug, Clone)]
pub struct SteppedSearch<S> {
    tree: GameTree,
    strategy: S,
    cursor: Cursor,
    stats: SearchStats,
}

impl<S: StepStrategy> SteppedSearch<S> {
    pub fn new(tree: GameTree, strategy: S) -> Self {
        Self {
            tree,
            strategy,
            cursor: Cursor::Idle,
            stats: SearchStats::new(),
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Gives the tree back, with whatever search state the last step left.
    pub fn into_tree(self) -> GameTree {
        self.tree
    }
}

impl<S: StepStrategy> SearchAlgorithm for SteppedSearch<S> {
    fn name(&self) -> &str {
        self.strategy.name()
    }

    fn initialize(&mut self) {
        self.stats.reset();
        self.tree.reset_transient();
        self.strategy.prepare(&mut self.tree);
        self.cursor = Cursor::At(self.tree.root());
        debug!(
            engine = self.strategy.name(),
            nodes = self.tree.node_count(),
            "search initialized"
        );
    }

    fn step(&mut self) -> Option<NodeId> {
        let id = match self.cursor {
            Cursor::At(id) => id,
            Cursor::Idle => {
                warn!(engine = self.strategy.name(), "step() before initialize(), ignoring");
                return None;
            }
            Cursor::Done => return None,
        };

        self.stats.record_visit(self.tree[id].depth());
        let phase = self.tree[id].phase;
        let transition = self.strategy.transition(&mut self.tree, id, &mut self.stats);
        trace!(node = %id, ?phase, ?transition, "step");

        let next = match transition {
            Transition::Stay => Some(id),
            Transition::Descend(child) => Some(child),
            Transition::Return(value) => {
                let parent = self.tree[id].parent();
                if let Some(parent) = parent {
                    self.tree[parent].pending_return = Some(value);
                }
                parent
            }
        };

        self.cursor = match next {
            Some(node) => Cursor::At(node),
            None => {
                self.stats.finish();
                debug!(
                    engine = self.strategy.name(),
                    value = ?self.root_value(),
                    visited = self.stats.snapshot().nodes_visited,
                    "search finished"
                );
                Cursor::Done
            }
        };
        next
    }

    fn statistics(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    fn current(&self) -> Option<NodeId> {
        match self.cursor {
            Cursor::At(id) => Some(id),
            Cursor::Idle | Cursor::Done => None,
        }
    }

    fn is_finished(&self) -> bool {
        self.cursor == Cursor::Done
    }

    fn tree(&self) -> &GameTree {
        &self.tree
    }

    fn minimax_value(&self) -> Option<Eval> {
        self.strategy.minimax_value(&self.tree)
    }
}

// =============================================================================
// Transition building blocks shared by the engines
// =============================================================================

/// INIT on an internal node: seed its value, rewind the cursor, go to DESCEND.
pub fn seed_node(tree: &mut GameTree, id: NodeId, seed: Eval) {
    let node = &mut tree[id];
    node.computed = Some(seed);
    node.child_cursor = 0;
    node.phase = Phase::Descend;
}

/// DESCEND: if a child is left, switch to AWAIT and return that child.
pub fn enter_next_child(tree: &mut GameTree, id: NodeId) -> Option<NodeId> {
    let node = &mut tree[id];
    let child = node.next_child()?;
    node.phase = Phase::Await;
    Some(child)
}

/// AWAIT: fold the returned child value into the node's value, advance the
/// cursor, and go back to DESCEND.
///
/// Returns the child value that was consumed.
pub fn absorb_child(
    tree: &mut GameTree,
    id: NodeId,
    combine: impl FnOnce(Eval, Eval) -> Eval,
) -> Option<Eval> {
    let node = &mut tree[id];
    let returned = node.pending_return.take();
    debug_assert!(returned.is_some(), "node {id} awaited a child that never returned");
    if let Some(value) = returned {
        node.computed = Some(match node.computed {
            Some(current) => combine(current, value),
            None => value,
        });
    }
    node.child_cursor += 1;
    node.phase = Phase::Descend;
    returned
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
