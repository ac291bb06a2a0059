//! Alpha-Beta Engine
//!
//! Minimax with a propagated `[alpha, beta]` window. Each child receives a
//! copy of its parent's window as it stands at the moment of descent, so a
//! later tightening by a sibling never leaks into a subtree that is already
//! being searched. Once a node's window closes (`beta <= alpha`) its
//! remaining children are skipped and flagged as pruned.

use tracing::debug;
use tree_core::{
    absorb_child, enter_next_child, seed_node, Eval, GameTree, NodeId, Phase, SearchStats,
    StepStrategy, SteppedSearch, Transition, Window,
};

/// Alpha-beta transition rules.
#[derive(Debug, Clone, Copy)]
pub struct AlphaBeta {
    pruning: bool,
}

/// Stepped alpha-beta search over an owned tree.
pub type AlphaBetaEngine = SteppedSearch<AlphaBeta>;

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaBeta {
    /// Alpha-beta with cut-offs enabled.
    pub fn new() -> Self {
        Self { pruning: true }
    }

    /// Windows are still propagated and tightened, but a closed window never
    /// stops the search, so every node is visited.
    pub fn without_pruning() -> Self {
        Self { pruning: false }
    }

    pub fn pruning_enabled(&self) -> bool {
        self.pruning
    }

    pub fn engine(self, tree: GameTree) -> AlphaBetaEngine {
        SteppedSearch::new(tree, self)
    }

    /// DESCEND after a cut-off: flag every unexplored child subtree and
    /// count the skipped children (not their descendants).
    fn prune_remaining(tree: &mut GameTree, id: NodeId, stats: &mut SearchStats) {
        let skipped = tree[id].remaining_children().to_vec();
        if skipped.is_empty() {
            return;
        }
        for &child in &skipped {
            tree.prune_subtree(child);
        }
        stats.record_pruned(skipped.len());

        let node = &mut tree[id];
        node.child_cursor = node.children().len();
        debug!(
            node = %id,
            window = ?node.window,
            skipped = skipped.len(),
            "cut-off, pruning remaining children"
        );
    }
}

impl StepStrategy for AlphaBeta {
    fn name(&self) -> &str {
        if self.pruning {
            "Alpha-Beta"
        } else {
            "Alpha-Beta (no pruning)"
        }
    }

    fn prepare(&self, tree: &mut GameTree) {
        let root = tree.root();
        tree[root].window = Some(Window::FULL);
    }

    fn transition(&self, tree: &mut GameTree, id: NodeId, stats: &mut SearchStats) -> Transition {
        match tree[id].phase {
            Phase::Init => {
                let node = &mut tree[id];
                node.pruned = false;
                node.child_search_done = false;
                if node.is_leaf() {
                    return Transition::Return(Eval::Finite(node.static_value()));
                }
                let seed = Eval::worst_for(node.is_maximizing());
                seed_node(tree, id, seed);
                Transition::Stay
            }
            Phase::Descend => {
                if tree[id].child_search_done {
                    Self::prune_remaining(tree, id, stats);
                }
                let window = tree[id].window;
                match enter_next_child(tree, id) {
                    Some(child) => {
                        tree[child].window = window;
                        Transition::Descend(child)
                    }
                    None => {
                        let node = &tree[id];
                        let seed = Eval::worst_for(node.is_maximizing());
                        Transition::Return(node.computed.unwrap_or(seed))
                    }
                }
            }
            Phase::Await => {
                let maximizing = tree[id].is_maximizing();
                let returned = if maximizing {
                    absorb_child(tree, id, Eval::max)
                } else {
                    absorb_child(tree, id, Eval::min)
                };

                let node = &mut tree[id];
                if let (Some(value), Some(window)) = (returned, node.window.as_mut()) {
                    if maximizing {
                        window.alpha = window.alpha.max(value);
                    } else {
                        window.beta = window.beta.min(value);
                    }
                    if self.pruning && window.is_closed() {
                        node.child_search_done = true;
                    }
                }
                Transition::Stay
            }
        }
    }
}
