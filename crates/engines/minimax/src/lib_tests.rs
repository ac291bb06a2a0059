use super::*;
use tree_core::SearchAlgorithm;

/// Root MAX with two MIN children over leaves [3, 5] and [2, 9].
fn example_tree() -> (GameTree, NodeId, NodeId) {
    let mut tree = GameTree::new(true);
    let root = tree.root();
    let left = tree.add_child(root).unwrap();
    let right = tree.add_child(root).unwrap();
    for v in [3, 5] {
        tree.add_leaf(left, v).unwrap();
    }
    for v in [2, 9] {
        tree.add_leaf(right, v).unwrap();
    }
    (tree, left, right)
}

#[test]
fn test_minimax_example_tree() {
    let (tree, left, right) = example_tree();
    let mut engine = Minimax::engine(tree);
    assert_eq!(engine.run(), Some(Eval::Finite(3)));

    let tree = engine.tree();
    assert_eq!(tree[left].computed, Some(Eval::Finite(3)));
    assert_eq!(tree[right].computed, Some(Eval::Finite(2)));
    assert!(tree.iter().all(|(_, n)| !n.pruned));
}

#[test]
fn test_minimax_visits_every_phase_of_every_node() {
    let (tree, _, _) = example_tree();
    let mut engine = Minimax::engine(tree);
    engine.run();

    // 7 nodes, 3 internal: 3N + I - 2.
    let stats = engine.statistics();
    assert_eq!(stats.nodes_visited, 22);
    assert_eq!(stats.nodes_pruned, 0);
    assert_eq!(stats.max_depth, 2);
    assert_eq!(stats.pruning_efficiency, 0.0);
}

#[test]
fn test_minimizing_root() {
    let mut tree = GameTree::new(false);
    let root = tree.root();
    let a = tree.add_child(root).unwrap();
    let b = tree.add_child(root).unwrap();
    tree.add_leaf(a, -4).unwrap();
    tree.add_leaf(a, 8).unwrap();
    tree.add_leaf(b, 6).unwrap();
    tree.add_leaf(root, 10).unwrap();

    let mut engine = Minimax::engine(tree);
    // min(max(-4, 8), max(6), 10)
    assert_eq!(engine.run(), Some(Eval::Finite(6)));
}

#[test]
fn test_same_role_children_are_allowed() {
    let mut tree = GameTree::new(true);
    let root = tree.root();
    let inner = tree.add_child_with(root, true).unwrap();
    tree.add_leaf(inner, 1).unwrap();
    tree.add_leaf(inner, 4).unwrap();
    tree.add_leaf(root, 2).unwrap();

    let mut engine = Minimax::engine(tree);
    assert_eq!(engine.run(), Some(Eval::Finite(4)));
}

#[test]
fn test_leaf_values_are_never_written() {
    let (tree, _, _) = example_tree();
    let before: Vec<i32> = tree.iter().map(|(_, n)| n.static_value()).collect();
    let mut engine = Minimax::engine(tree);
    engine.run();
    let after: Vec<i32> = engine.tree().iter().map(|(_, n)| n.static_value()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_internal_values_stay_empty_until_children_return() {
    let (tree, left, _) = example_tree();
    let mut engine = Minimax::engine(tree);
    engine.initialize();
    assert_eq!(engine.tree()[left].computed, None);

    // Step until the cursor first lands on `left`, then once more for INIT.
    while engine.current() != Some(left) {
        engine.step();
    }
    engine.step();
    assert_eq!(engine.tree()[left].computed, Some(Eval::PosInf));
}

#[test]
fn test_rerun_gives_identical_results() {
    let (tree, _, _) = example_tree();
    let mut engine = Minimax::engine(tree);
    let first = engine.run();
    let first_stats = engine.statistics();
    let second = engine.run();
    assert_eq!(first, second);
    assert!(engine.statistics().same_counts(&first_stats));
}
