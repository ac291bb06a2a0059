//! Minimax Engine
//!
//! Exhaustive depth-first minimax with no pruning. Every node is visited;
//! this is the baseline the other engines are checked against.

use tree_core::{
    absorb_child, enter_next_child, seed_node, Eval, GameTree, NodeId, Phase, SearchStats,
    StepStrategy, SteppedSearch, Transition,
};

/// Plain minimax transition rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

/// Stepped minimax search over an owned tree.
pub type MinimaxEngine = SteppedSearch<Minimax>;

impl Minimax {
    pub fn engine(tree: GameTree) -> MinimaxEngine {
        SteppedSearch::new(tree, Minimax)
    }
}

impl StepStrategy for Minimax {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn transition(&self, tree: &mut GameTree, id: NodeId, _stats: &mut SearchStats) -> Transition {
        match tree[id].phase {
            Phase::Init => {
                let node = &tree[id];
                if node.is_leaf() {
                    return Transition::Return(Eval::Finite(node.static_value()));
                }
                let seed = Eval::worst_for(node.is_maximizing());
                seed_node(tree, id, seed);
                Transition::Stay
            }
            Phase::Descend => match enter_next_child(tree, id) {
                Some(child) => Transition::Descend(child),
                None => {
                    let node = &tree[id];
                    let seed = Eval::worst_for(node.is_maximizing());
                    Transition::Return(node.computed.unwrap_or(seed))
                }
            },
            Phase::Await => {
                if tree[id].is_maximizing() {
                    absorb_child(tree, id, Eval::max);
                } else {
                    absorb_child(tree, id, Eval::min);
                }
                Transition::Stay
            }
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
