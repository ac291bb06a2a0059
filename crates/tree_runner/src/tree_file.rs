//! JSON tree files
//!
//! A tree is stored as nested objects:
//!
//! ```json
//! { "max": true, "children": [ { "children": [ { "value": 3 }, { "value": 5 } ] } ] }
//! ```
//!
//! `max` defaults to `true` at the root and to the opposite of the parent
//! below it. `value` is only meaningful on leaves and is clamped into the
//! editor's range when the tree is built.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tree_core::{GameTree, NodeId, TreeError};

/// Serializable description of a tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSpec>,
}

impl TreeSpec {
    pub fn leaf(value: i32) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn node(children: Vec<TreeSpec>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// Materializes the description into an arena tree.
    pub fn build(&self) -> Result<GameTree, TreeError> {
        let mut tree = GameTree::new(self.max.unwrap_or(true));
        let root = tree.root();
        let mut stack: Vec<(NodeId, &TreeSpec)> = vec![(root, self)];
        while let Some((id, spec)) = stack.pop() {
            tree.set_static_value(id, spec.value.unwrap_or(0))?;
            let maximizing = tree[id].is_maximizing();
            for child in &spec.children {
                let child_id = tree.add_child_with(id, child.max.unwrap_or(!maximizing))?;
                stack.push((child_id, child));
            }
        }
        Ok(tree)
    }

    /// Describes an existing tree, writing every role explicitly.
    pub fn from_tree(tree: &GameTree) -> Self {
        Self::describe(tree, tree.root())
    }

    fn describe(tree: &GameTree, id: NodeId) -> Self {
        let node = &tree[id];
        Self {
            max: Some(node.is_maximizing()),
            value: node.is_leaf().then(|| node.static_value()),
            children: node
                .children()
                .iter()
                .map(|&child| Self::describe(tree, child))
                .collect(),
        }
    }

    /// Load a tree description from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tree file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse tree file {}", path.display()))
    }

    /// Save the tree description to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize tree")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write tree file {}", path.display()))
    }
}

#[cfg(test)]
#[path = "tree_file_tests.rs"]
mod tree_file_tests;
