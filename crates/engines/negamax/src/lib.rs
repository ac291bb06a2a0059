//! Negamax Engine
//!
//! Minimax rewritten so every node maximizes: a node's value is the largest
//! negated child value, and leaves are scored from the point of view of the
//! player to move there (`static_value * color_sign`). This only agrees with
//! minimax when roles alternate between parent and child.

use tree_core::{
    absorb_child, enter_next_child, seed_node, Eval, GameTree, NodeId, Phase, SearchStats,
    StepStrategy, SteppedSearch, Transition,
};

/// Negamax transition rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Negamax;

/// Stepped negamax search over an owned tree.
pub type NegamaxEngine = SteppedSearch<Negamax>;

impl Negamax {
    pub fn engine(tree: GameTree) -> NegamaxEngine {
        SteppedSearch::new(tree, Negamax)
    }
}

/// +1 for the maximizing player, -1 for the minimizing one.
pub fn color_sign(maximizing: bool) -> i32 {
    if maximizing {
        1
    } else {
        -1
    }
}

impl StepStrategy for Negamax {
    fn name(&self) -> &str {
        "Negamax"
    }

    fn prepare(&self, tree: &mut GameTree) {
        for id in tree.preorder() {
            let node = &mut tree[id];
            node.color_sign = Some(color_sign(node.is_maximizing()));
        }
    }

    fn transition(&self, tree: &mut GameTree, id: NodeId, _stats: &mut SearchStats) -> Transition {
        let node = &tree[id];
        let sign = node
            .color_sign
            .unwrap_or_else(|| color_sign(node.is_maximizing()));
        match tree[id].phase {
            Phase::Init => {
                let node = &mut tree[id];
                if node.is_leaf() {
                    let value = Eval::Finite(node.static_value());
                    node.display_value = Some(value);
                    return Transition::Return(value.signed(sign));
                }
                seed_node(tree, id, Eval::NegInf);
                Transition::Stay
            }
            Phase::Descend => match enter_next_child(tree, id) {
                Some(child) => Transition::Descend(child),
                None => {
                    let node = &mut tree[id];
                    let value = node.computed.unwrap_or(Eval::NegInf);
                    node.display_value = Some(value.signed(sign));
                    Transition::Return(value)
                }
            },
            Phase::Await => {
                absorb_child(tree, id, |best, child| best.max(-child));
                Transition::Stay
            }
        }
    }

    fn minimax_value(&self, tree: &GameTree) -> Option<Eval> {
        tree[tree.root()].display_value
    }
}
