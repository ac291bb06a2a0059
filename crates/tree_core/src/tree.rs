//! Game tree arena.
//!
//! Nodes live in a flat arena and refer to each other through [`NodeId`]s.
//! Parent links are plain ids, so walking back up the tree during a stepped
//! search costs nothing and owns nothing. Removed nodes leave a tombstone
//! behind so ids handed out earlier never alias a different node.

use std::fmt;
use std::ops::{Index, IndexMut, RangeInclusive};

use thiserror::Error;

use crate::eval::Eval;

/// Range that static leaf values are clamped into by the editor.
pub const STATIC_VALUE_RANGE: RangeInclusive<i32> = -99..=99;

/// Stable handle to a node in a [`GameTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena slot of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors raised by tree editing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {0} does not exist or was removed")]
    UnknownNode(NodeId),
    #[error("the root node cannot be removed")]
    RemoveRoot,
}

/// Progress of a node through its multi-step evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Not yet entered during this run.
    #[default]
    Init,
    /// Deciding whether to descend into the next child or finish.
    Descend,
    /// Waiting for the child under the cursor to hand back its value.
    Await,
}

/// Alpha-beta search window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub alpha: Eval,
    pub beta: Eval,
}

impl Window {
    /// The root window, `[-∞, +∞]`.
    pub const FULL: Window = Window {
        alpha: Eval::NegInf,
        beta: Eval::PosInf,
    };

    /// True once `beta <= alpha`, the cut-off condition.
    pub fn is_closed(&self) -> bool {
        self.beta <= self.alpha
    }
}

/// A single node of the game tree.
///
/// Structural fields are owned by the tree and only readable from outside.
/// The public fields are the transient search state that engines mutate and
/// renderers observe; [`GameTree::reset_transient`] clears them.
#[derive(Debug, Clone)]
pub struct Node {
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    depth: usize,
    maximizing: bool,
    static_value: i32,

    /// Search result for an internal node. Unused on leaves.
    pub computed: Option<Eval>,
    /// Set when this node's subtree was skipped by a cut-off.
    pub pruned: bool,
    pub phase: Phase,
    /// Index of the next unexplored child.
    pub child_cursor: usize,
    /// Value handed up by the most recently finished child.
    pub pending_return: Option<Eval>,
    /// Alpha-beta window, copied from the parent on descent.
    pub window: Option<Window>,
    /// Alpha-beta cut-off latch.
    pub child_search_done: bool,
    /// Negamax color: +1 when maximizing, -1 otherwise.
    pub color_sign: Option<i32>,
    /// Negamax value from the maximizing player's point of view.
    pub display_value: Option<Eval>,
}

impl Node {
    fn new(parent: Option<NodeId>, depth: usize, maximizing: bool) -> Self {
        Self {
            children: Vec::new(),
            parent,
            depth,
            maximizing,
            static_value: 0,
            computed: None,
            pruned: false,
            phase: Phase::Init,
            child_cursor: 0,
            pending_return: None,
            window: None,
            child_search_done: false,
            color_sign: None,
            display_value: None,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_maximizing(&self) -> bool {
        self.maximizing
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn static_value(&self) -> i32 {
        self.static_value
    }

    /// The node's current value: the static value for a leaf, the computed
    /// value (if any yet) for an internal node.
    pub fn value(&self) -> Option<Eval> {
        if self.is_leaf() {
            Some(Eval::Finite(self.static_value))
        } else {
            self.computed
        }
    }

    /// Child under the cursor, if the cursor has not run off the end.
    pub fn next_child(&self) -> Option<NodeId> {
        self.children.get(self.child_cursor).copied()
    }

    /// Children not yet explored in this run.
    pub fn remaining_children(&self) -> &[NodeId] {
        let from = self.child_cursor.min(self.children.len());
        &self.children[from..]
    }

    fn reset_transient(&mut self) {
        if !self.is_leaf() {
            self.computed = None;
        }
        self.pruned = false;
        self.phase = Phase::Init;
        self.child_cursor = 0;
        self.pending_return = None;
        self.window = None;
        self.child_search_done = false;
        self.color_sign = None;
        self.display_value = None;
    }
}

/// Arena-backed game tree with a fixed root.
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<Option<Node>>,
    root: NodeId,
    live: usize,
}

impl GameTree {
    /// Creates a tree holding only a root leaf with static value 0.
    pub fn new(root_maximizing: bool) -> Self {
        Self {
            nodes: vec![Some(Node::new(None, 0, root_maximizing))],
            root: NodeId(0),
            live: 1,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.live
    }

    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|(_, n)| n.is_leaf()).count()
    }

    /// Depth of the deepest node (0 for a lone root).
    pub fn height(&self) -> usize {
        self.iter().map(|(_, n)| n.depth).max().unwrap_or(0)
    }

    /// Iterates live nodes in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|n| (NodeId(i), n)))
    }

    /// Appends a child with the opposite role of its parent.
    pub fn add_child(&mut self, parent: NodeId) -> Result<NodeId, TreeError> {
        let maximizing = !self
            .get(parent)
            .ok_or(TreeError::UnknownNode(parent))?
            .maximizing;
        self.add_child_with(parent, maximizing)
    }

    /// Appends a child with an explicit role.
    pub fn add_child_with(
        &mut self,
        parent: NodeId,
        maximizing: bool,
    ) -> Result<NodeId, TreeError> {
        let depth = self
            .get(parent)
            .ok_or(TreeError::UnknownNode(parent))?
            .depth
            + 1;

        let id = NodeId(self.nodes.len());
        self.nodes
            .push(Some(Node::new(Some(parent), depth, maximizing)));
        self.live += 1;

        let parent_node = &mut self[parent];
        if parent_node.children.is_empty() {
            // No longer a leaf; its static value is meaningless from here on.
            parent_node.static_value = 0;
        }
        parent_node.children.push(id);
        Ok(id)
    }

    /// Appends a leaf child (opposite role) holding `value`.
    pub fn add_leaf(&mut self, parent: NodeId, value: i32) -> Result<NodeId, TreeError> {
        let id = self.add_child(parent)?;
        self.set_static_value(id, value)?;
        Ok(id)
    }

    /// Stores a static value, clamped into [`STATIC_VALUE_RANGE`].
    ///
    /// Returns the value actually stored.
    pub fn set_static_value(&mut self, id: NodeId, value: i32) -> Result<i32, TreeError> {
        let node = self.get_mut(id).ok_or(TreeError::UnknownNode(id))?;
        let clamped = value.clamp(*STATIC_VALUE_RANGE.start(), *STATIC_VALUE_RANGE.end());
        node.static_value = clamped;
        Ok(clamped)
    }

    /// Removes a node and its whole subtree.
    ///
    /// A parent left without children becomes a leaf with static value 0.
    /// Returns the number of nodes removed.
    pub fn remove_subtree(&mut self, id: NodeId) -> Result<usize, TreeError> {
        if id == self.root {
            return Err(TreeError::RemoveRoot);
        }
        let parent = self
            .get(id)
            .ok_or(TreeError::UnknownNode(id))?
            .parent;

        let doomed = self.preorder_from(id);
        for d in &doomed {
            self.nodes[d.0] = None;
        }
        self.live -= doomed.len();

        if let Some(parent) = parent {
            let parent_node = &mut self[parent];
            parent_node.children.retain(|&c| c != id);
            if parent_node.children.is_empty() {
                parent_node.static_value = 0;
                parent_node.computed = None;
            }
        }
        Ok(doomed.len())
    }

    /// Depth-first, left-to-right order of the whole tree.
    pub fn preorder(&self) -> Vec<NodeId> {
        self.preorder_from(self.root)
    }

    /// Depth-first, left-to-right order of the subtree rooted at `id`.
    ///
    /// Empty if `id` is stale.
    pub fn preorder_from(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        if !self.contains(id) {
            return order;
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            order.push(next);
            stack.extend(self[next].children.iter().rev().copied());
        }
        order
    }

    pub fn subtree_size(&self, id: NodeId) -> usize {
        self.preorder_from(id).len()
    }

    /// Nodes grouped by depth, each layer in left-to-right order.
    pub fn layers(&self) -> Vec<Vec<NodeId>> {
        let mut layers: Vec<Vec<NodeId>> = Vec::new();
        let mut frontier = vec![self.root];
        while !frontier.is_empty() {
            let next: Vec<NodeId> = frontier
                .iter()
                .flat_map(|&id| self[id].children.iter().copied())
                .collect();
            layers.push(frontier);
            frontier = next;
        }
        layers
    }

    /// Clears all transient search state. Static values are untouched.
    pub fn reset_transient(&mut self) {
        for node in self.nodes.iter_mut().flatten() {
            node.reset_transient();
        }
    }

    /// Marks `id` and every descendant as pruned.
    ///
    /// Values and statistics are left alone; the caller accounts for the cut.
    pub fn prune_subtree(&mut self, id: NodeId) {
        for node in self.preorder_from(id) {
            self[node].pruned = true;
        }
    }
}

impl Index<NodeId> for GameTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node id {id}"),
        }
    }
}

impl IndexMut<NodeId> for GameTree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node id {id}"),
        }
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
