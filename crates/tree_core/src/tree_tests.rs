use super::*;

fn small_tree() -> (GameTree, NodeId, NodeId) {
    let mut tree = GameTree::new(true);
    let root = tree.root();
    let left = tree.add_child(root).unwrap();
    let right = tree.add_child(root).unwrap();
    tree.add_leaf(left, 3).unwrap();
    tree.add_leaf(left, 5).unwrap();
    tree.add_leaf(right, 2).unwrap();
    tree.add_leaf(right, 9).unwrap();
    (tree, left, right)
}

#[test]
fn test_new_tree_is_single_leaf() {
    let tree = GameTree::new(true);
    let root = &tree[tree.root()];
    assert!(root.is_leaf());
    assert!(root.is_maximizing());
    assert_eq!(root.parent(), None);
    assert_eq!(root.value(), Some(Eval::Finite(0)));
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_add_child_alternates_roles_and_depth() {
    let (tree, left, _) = small_tree();
    assert!(!tree[left].is_maximizing());
    assert_eq!(tree[left].depth(), 1);
    let grandchild = tree[left].children()[0];
    assert!(tree[grandchild].is_maximizing());
    assert_eq!(tree[grandchild].depth(), 2);
    assert_eq!(tree[grandchild].parent(), Some(left));
    assert_eq!(tree.node_count(), 7);
    assert_eq!(tree.leaf_count(), 4);
    assert_eq!(tree.height(), 2);
}

#[test]
fn test_add_child_with_explicit_role() {
    let mut tree = GameTree::new(true);
    let child = tree.add_child_with(tree.root(), true).unwrap();
    assert!(tree[child].is_maximizing());
}

#[test]
fn test_static_value_is_clamped() {
    let mut tree = GameTree::new(true);
    let leaf = tree.add_child(tree.root()).unwrap();
    assert_eq!(tree.set_static_value(leaf, 250), Ok(99));
    assert_eq!(tree.set_static_value(leaf, -1000), Ok(-99));
    assert_eq!(tree.set_static_value(leaf, 42), Ok(42));
    assert_eq!(tree[leaf].static_value(), 42);
}

#[test]
fn test_remove_subtree() {
    let (mut tree, left, right) = small_tree();
    let removed = tree.remove_subtree(left).unwrap();
    assert_eq!(removed, 3);
    assert_eq!(tree.node_count(), 4);
    assert!(!tree.contains(left));
    assert_eq!(tree[tree.root()].children(), &[right]);
    assert_eq!(tree.remove_subtree(left), Err(TreeError::UnknownNode(left)));
}

#[test]
fn test_remove_last_child_turns_parent_into_zero_leaf() {
    let mut tree = GameTree::new(true);
    let root = tree.root();
    let child = tree.add_leaf(root, 7).unwrap();
    tree.remove_subtree(child).unwrap();
    assert!(tree[root].is_leaf());
    assert_eq!(tree[root].value(), Some(Eval::Finite(0)));
}

#[test]
fn test_root_cannot_be_removed() {
    let mut tree = GameTree::new(false);
    assert_eq!(tree.remove_subtree(tree.root()), Err(TreeError::RemoveRoot));
}

#[test]
fn test_preorder_and_layers() {
    let (tree, left, right) = small_tree();
    let order = tree.preorder();
    assert_eq!(order.len(), 7);
    assert_eq!(order[0], tree.root());
    assert_eq!(order[1], left);
    assert_eq!(order[4], right);

    let layers = tree.layers();
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[1], vec![left, right]);
    let values: Vec<i32> = layers[2].iter().map(|&id| tree[id].static_value()).collect();
    assert_eq!(values, vec![3, 5, 2, 9]);
}

#[test]
fn test_prune_subtree_marks_descendants_only() {
    let (mut tree, left, right) = small_tree();
    tree.prune_subtree(right);
    for id in tree.preorder_from(right) {
        assert!(tree[id].pruned);
    }
    for id in tree.preorder_from(left) {
        assert!(!tree[id].pruned);
    }
    assert!(!tree[tree.root()].pruned);
}

#[test]
fn test_reset_transient_keeps_static_values() {
    let (mut tree, left, _) = small_tree();
    let leaf = tree[left].children()[0];
    tree[left].computed = Some(Eval::Finite(3));
    tree[left].window = Some(Window::FULL);
    tree[left].phase = Phase::Await;
    tree[left].child_cursor = 2;
    tree[leaf].pruned = true;
    tree[leaf].pending_return = Some(Eval::Finite(1));

    tree.reset_transient();

    assert_eq!(tree[left].computed, None);
    assert_eq!(tree[left].window, None);
    assert_eq!(tree[left].phase, Phase::Init);
    assert_eq!(tree[left].child_cursor, 0);
    assert!(!tree[leaf].pruned);
    assert_eq!(tree[leaf].pending_return, None);
    assert_eq!(tree[leaf].value(), Some(Eval::Finite(3)));
}

#[test]
fn test_window_closed() {
    let w = Window {
        alpha: Eval::Finite(3),
        beta: Eval::Finite(3),
    };
    assert!(w.is_closed());
    assert!(!Window::FULL.is_closed());
}
