//! Plain-text rendering of the tree and search state.

use std::fmt::Write;

use tree_core::{GameTree, Node, NodeId, Phase};

/// Renders the tree one node per line, indented by depth.
///
/// Each line shows the node's role and value; internal nodes add their
/// alpha-beta window when one is set, pruned nodes are flagged, and the node
/// under `current` is marked with `>`.
pub fn render_tree(tree: &GameTree, current: Option<NodeId>) -> String {
    let mut out = String::new();
    for id in tree.preorder() {
        let node = &tree[id];
        let marker = if Some(id) == current { ">" } else { " " };
        let _ = write!(
            out,
            "{marker} {}{} {}",
            "  ".repeat(node.depth()),
            if node.is_maximizing() { "MAX" } else { "MIN" },
            value_label(node),
        );
        if let Some(display) = node.display_value {
            if Some(display) != node.value() {
                let _ = write!(out, " (max view {display})");
            }
        }
        if !node.is_leaf() {
            if let Some(window) = node.window {
                let _ = write!(out, "  α: {} β: {}", window.alpha, window.beta);
            }
            if node.phase != Phase::Init {
                let _ = write!(out, "  [{}/{}]", node.child_cursor, node.children().len());
            }
        }
        if node.pruned {
            out.push_str("  pruned");
        }
        out.push('\n');
    }
    out
}

fn value_label(node: &Node) -> String {
    match node.value() {
        Some(value) if !value.is_infinite() => value.to_string(),
        _ => "·".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphabeta_engine::AlphaBeta;
    use tree_core::SearchAlgorithm;

    #[test]
    fn test_render_after_alpha_beta() {
        let mut tree = GameTree::new(true);
        let root = tree.root();
        let left = tree.add_child(root).unwrap();
        let right = tree.add_child(root).unwrap();
        tree.add_leaf(left, 3).unwrap();
        tree.add_leaf(left, 5).unwrap();
        tree.add_leaf(right, 2).unwrap();
        tree.add_leaf(right, 9).unwrap();

        let mut engine = AlphaBeta::new().engine(tree);
        engine.run();
        let text = render_tree(engine.tree(), engine.current());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("  MAX 3"));
        assert!(lines[0].contains("α: 3 β: ∞"));
        assert!(lines[6].contains("MAX 9"));
        assert!(lines[6].ends_with("pruned"));
        assert!(!lines[5].contains("pruned"));
    }

    #[test]
    fn test_render_marks_cursor_and_hides_infinite_seed() {
        let mut tree = GameTree::new(false);
        let root = tree.root();
        tree.add_leaf(root, 1).unwrap();

        let mut engine = AlphaBeta::new().engine(tree);
        engine.initialize();
        engine.step();
        let text = render_tree(engine.tree(), engine.current());
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("> MIN ·"));
        assert!(first.contains("[0/1]"));
    }
}
