//! # Novel Tree
//!
//! Ordered parent -> children relation over element ids. The tree carries
//! the display order of every element collection; the element maps in
//! [`Novel`](crate::novel::Novel) carry the data.
//!
//! ```text
//! CH ── ch1 ── sc1, sc2
//! AC ── ac1 ── tp1, tp2
//! LC ── lc1, lc2
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root node holding the chapters
pub const CH_ROOT: &str = "CH";

/// Root node holding the story arcs
pub const AC_ROOT: &str = "AC";

/// Root node holding the locations
pub const LC_ROOT: &str = "LC";

/// Ordered children per parent id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NovelTree {
    children: HashMap<String, Vec<String>>,
}

impl NovelTree {
    /// Create a tree with the empty root nodes.
    pub fn new() -> Self {
        let mut tree = NovelTree::default();
        for root in [CH_ROOT, AC_ROOT, LC_ROOT] {
            tree.children.insert(root.to_string(), Vec::new());
        }
        tree
    }

    /// Children of `parent` in display order. Unknown parents have none.
    pub fn get_children(&self, parent: &str) -> &[String] {
        self.children.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: &str, child: impl Into<String>) {
        self.children
            .entry(parent.to_string())
            .or_default()
            .push(child.into());
    }

    /// Detach `node` from its parent and drop its own child list.
    ///
    /// Returns the node's former children.
    pub fn delete(&mut self, node: &str) -> Vec<String> {
        for siblings in self.children.values_mut() {
            siblings.retain(|id| id != node);
        }
        self.children.remove(node).unwrap_or_default()
    }

    /// Parent of `node`, if it is attached.
    pub fn parent(&self, node: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|(_, kids)| kids.iter().any(|id| id == node))
            .map(|(parent, _)| parent.as_str())
    }
}
