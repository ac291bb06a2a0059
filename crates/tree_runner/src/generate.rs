//! Sample and random trees

use rand::Rng;
use std::ops::RangeInclusive;
use tree_core::{GameTree, STATIC_VALUE_RANGE};

/// The start-up tree: a MAX root with three MIN children, each holding two
/// leaves with random values.
pub fn sample_tree<R: Rng>(rng: &mut R) -> GameTree {
    let mut tree = GameTree::new(true);
    let root = tree.root();
    for _ in 0..3 {
        if let Ok(child) = tree.add_child(root) {
            for _ in 0..2 {
                let _ = tree.add_leaf(child, rng.gen_range(STATIC_VALUE_RANGE));
            }
        }
    }
    tree
}

/// Random tree with alternating roles.
///
/// Every node above `depth` gets a child count drawn from `branching`; a
/// draw of zero ends that branch early. Leaves get uniform values from
/// [`STATIC_VALUE_RANGE`].
pub fn random_tree<R: Rng>(
    rng: &mut R,
    depth: usize,
    branching: RangeInclusive<usize>,
    root_maximizing: bool,
) -> GameTree {
    let mut tree = GameTree::new(root_maximizing);
    let mut frontier = vec![tree.root()];
    for _ in 0..depth {
        let mut next = Vec::new();
        for parent in frontier {
            let count = if branching.is_empty() {
                0
            } else {
                rng.gen_range(branching.clone())
            };
            for _ in 0..count {
                if let Ok(child) = tree.add_child(parent) {
                    next.push(child);
                }
            }
        }
        frontier = next;
    }

    let leaves: Vec<_> = tree
        .iter()
        .filter(|(_, node)| node.is_leaf())
        .map(|(id, _)| id)
        .collect();
    for leaf in leaves {
        let _ = tree.set_static_value(leaf, rng.gen_range(STATIC_VALUE_RANGE));
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_tree_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let tree = sample_tree(&mut rng);
        assert_eq!(tree.node_count(), 10);
        assert_eq!(tree.leaf_count(), 6);
        assert_eq!(tree.height(), 2);
        assert!(tree
            .iter()
            .filter(|(_, n)| n.is_leaf())
            .all(|(_, n)| STATIC_VALUE_RANGE.contains(&n.static_value())));
    }

    #[test]
    fn test_random_tree_full_branching() {
        let mut rng = StdRng::seed_from_u64(1);
        let tree = random_tree(&mut rng, 3, 2..=2, false);
        assert_eq!(tree.node_count(), 15);
        assert_eq!(tree.leaf_count(), 8);
        assert!(!tree[tree.root()].is_maximizing());
    }

    #[test]
    fn test_random_tree_is_reproducible() {
        let a = random_tree(&mut StdRng::seed_from_u64(42), 4, 0..=3, true);
        let b = random_tree(&mut StdRng::seed_from_u64(42), 4, 0..=3, true);
        let values = |t: &GameTree| -> Vec<(usize, i32)> {
            t.preorder()
                .into_iter()
                .map(|id| (t[id].depth(), t[id].static_value()))
                .collect()
        };
        assert_eq!(values(&a), values(&b));
    }
}
