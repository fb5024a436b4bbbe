//! Snapshots
//!
//! The whole tree serializes to JSON. Imports are validated against the
//! tree invariants before they replace the current state.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::path::join;
use super::types::{validate_name, FsError, FsNode, NodeId};
use super::virtual_fs::VirtualFs;

/// Node mapping, root id and current directory id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsTree {
    pub(crate) nodes: IndexMap<NodeId, FsNode>,
    pub(crate) root: NodeId,
    pub(crate) cwd: NodeId,
}

impl VirtualFs {
    /// Serialize the full tree.
    pub fn export_snapshot(&self) -> Result<String, FsError> {
        serde_json::to_string(&self.tree).map_err(|e| FsError::malformed(e.to_string()))
    }

    /// Replace the tree with a previously exported one. On any error the
    /// current tree is kept.
    pub fn import_snapshot(&mut self, blob: &str) -> Result<(), FsError> {
        let tree: FsTree = serde_json::from_str(blob).map_err(|e| {
            tracing::warn!(error = %e, "rejected snapshot that does not parse");
            FsError::malformed(e.to_string())
        })?;
        self.import_tree(tree)
    }

    /// The tree as it would be exported.
    pub fn tree(&self) -> &FsTree {
        &self.tree
    }

    /// Replace the tree with an already decoded one, after validating it.
    pub fn import_tree(&mut self, tree: FsTree) -> Result<(), FsError> {
        if let Err(e) = validate_tree(&tree) {
            tracing::warn!(error = %e, "rejected inconsistent snapshot");
            return Err(e);
        }
        tracing::info!(nodes = tree.nodes.len(), "imported filesystem snapshot");
        self.tree = tree;
        Ok(())
    }

    /// Build a file system from a snapshot blob.
    pub fn from_snapshot(blob: &str) -> Result<Self, FsError> {
        let mut fs = VirtualFs::empty();
        fs.import_snapshot(blob)?;
        Ok(fs)
    }
}

/// Check referential integrity, unique sibling names, cached paths and the
/// current directory of a decoded tree.
pub fn validate_tree(tree: &FsTree) -> Result<(), FsError> {
    for (key, node) in &tree.nodes {
        if key != &node.id {
            return Err(FsError::malformed(format!("node keyed as {} has id {}", key, node.id)));
        }
    }

    let root = tree
        .nodes
        .get(&tree.root)
        .ok_or_else(|| FsError::malformed("root id does not name a node"))?;
    if root.parent.is_some() || root.path != "/" || !root.is_directory() {
        return Err(FsError::malformed("root must be a parentless directory at /"));
    }

    for node in tree.nodes.values() {
        let Some(parent_id) = &node.parent else {
            if node.id != tree.root {
                return Err(FsError::malformed(format!("{} has no parent", node.path)));
            }
            continue;
        };
        let parent = tree
            .nodes
            .get(parent_id)
            .ok_or_else(|| FsError::malformed(format!("{} has a dangling parent", node.path)))?;
        if !parent.is_directory() {
            return Err(FsError::malformed(format!("parent of {} is not a directory", node.path)));
        }
        validate_name(&node.name).map_err(|e| FsError::malformed(e.to_string()))?;
        if node.path != join(&parent.path, &node.name) {
            return Err(FsError::malformed(format!("stale path {}", node.path)));
        }
        let links = parent.child_ids().iter().filter(|c| *c == &node.id).count();
        if links != 1 {
            return Err(FsError::malformed(format!(
                "{} is listed {} times by its parent",
                node.path, links
            )));
        }
    }

    for node in tree.nodes.values() {
        let mut names = HashSet::new();
        for child_id in node.child_ids() {
            let child = tree.nodes.get(child_id).ok_or_else(|| {
                FsError::malformed(format!("{} lists a missing child {}", node.path, child_id))
            })?;
            if child.parent.as_ref() != Some(&node.id) {
                return Err(FsError::malformed(format!(
                    "{} lists {} which belongs elsewhere",
                    node.path, child.path
                )));
            }
            if !names.insert(child.name.as_str()) {
                return Err(FsError::malformed(format!("duplicate name {}", child.path)));
            }
        }
    }

    // Parent links plus consistent paths rule out cycles, but an unreachable
    // island would still slip through without this count.
    let mut reached = 0;
    let mut stack = vec![&tree.root];
    while let Some(id) = stack.pop() {
        reached += 1;
        if let Some(node) = tree.nodes.get(id) {
            stack.extend(node.child_ids());
        }
    }
    if reached != tree.nodes.len() {
        return Err(FsError::malformed("tree contains unreachable nodes"));
    }

    match tree.nodes.get(&tree.cwd) {
        Some(cwd) if cwd.is_directory() => Ok(()),
        _ => Err(FsError::malformed("current directory is not a directory")),
    }
}
