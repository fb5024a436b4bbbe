//! Virtual File System
//!
//! An arena of nodes keyed by [`NodeId`]. Parent/child relationships are
//! stored as id pairs on both sides, and every structural mutation in this
//! module updates both sides together. Each public operation validates
//! first and mutates afterwards, so a rejected call leaves the tree as it
//! was.

use chrono::Utc;
use indexmap::IndexMap;

use super::path::{dirname, is_within, join, resolve_path};
use super::snapshot::FsTree;
use super::types::*;

/// Home directory of the simulated user.
pub const HOME_DIR: &str = "/home/user";

/// In-memory virtual file system.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    pub(crate) tree: FsTree,
}

impl VirtualFs {
    /// Create a file system containing the starter layout.
    pub fn new() -> Self {
        let mut fs = Self::empty();
        fs.reset_to_seed();
        fs
    }

    /// Create a file system holding only the root directory.
    pub fn empty() -> Self {
        let root_id = NodeId::generate();
        let root = FsNode {
            id: root_id.clone(),
            name: String::new(),
            path: "/".to_string(),
            parent: None,
            kind: NodeKind::Directory { children: Vec::new() },
            metadata: NodeMetadata::for_directory(Utc::now()),
            read_only: false,
        };
        let mut nodes = IndexMap::new();
        nodes.insert(root_id.clone(), root);
        Self {
            tree: FsTree {
                nodes,
                root: root_id.clone(),
                cwd: root_id,
            },
        }
    }

    pub fn home_dir(&self) -> &str {
        HOME_DIR
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.tree.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.nodes.is_empty()
    }

    pub fn root_id(&self) -> &NodeId {
        &self.tree.root
    }

    pub fn cwd_id(&self) -> &NodeId {
        &self.tree.cwd
    }

    /// Absolute path of the current working directory.
    pub fn current_directory(&self) -> &str {
        self.tree
            .nodes
            .get(&self.tree.cwd)
            .map(|n| n.path.as_str())
            .unwrap_or("/")
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&FsNode> {
        self.tree.nodes.get(id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &FsNode> {
        self.tree.nodes.values()
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Resolve user input to a normalized absolute path.
    pub fn resolve_path(&self, input: &str) -> String {
        resolve_path(self.current_directory(), HOME_DIR, input)
    }

    pub fn get_node_by_path(&self, path: &str) -> Option<&FsNode> {
        let resolved = self.resolve_path(path);
        self.lookup(&resolved)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.get_node_by_path(path).is_some()
    }

    /// Children of a directory in insertion order; empty for files.
    pub fn get_children(&self, id: &NodeId) -> Vec<&FsNode> {
        self.tree
            .nodes
            .get(id)
            .map(|node| {
                node.child_ids()
                    .iter()
                    .filter_map(|child| self.tree.nodes.get(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Children of the directory at `path`.
    pub fn list_directory(&self, path: &str) -> Result<Vec<&FsNode>, FsError> {
        let resolved = self.resolve_path(path);
        let node = self.lookup(&resolved).ok_or_else(|| FsError::not_found(&resolved))?;
        if !node.is_directory() {
            return Err(FsError::NotADirectory { path: resolved });
        }
        Ok(self.get_children(&node.id))
    }

    pub fn read_file(&self, path: &str) -> Result<String, FsError> {
        let resolved = self.resolve_path(path);
        match self.lookup(&resolved) {
            Some(node) => match &node.kind {
                NodeKind::File { content } => Ok(content.clone()),
                NodeKind::Directory { .. } => Err(FsError::NotAFile { path: resolved }),
            },
            None => Err(FsError::not_found(&resolved)),
        }
    }

    fn lookup(&self, resolved: &str) -> Option<&FsNode> {
        self.tree.nodes.values().find(|n| n.path == resolved)
    }

    /// Ids of `id` and all of its descendants, parents before children.
    fn subtree_ids(&self, id: &NodeId) -> Vec<NodeId> {
        let mut collected = Vec::new();
        let mut stack = vec![id.clone()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.tree.nodes.get(&current) {
                stack.extend(node.child_ids().iter().rev().cloned());
                collected.push(current);
            }
        }
        collected
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub fn set_current_directory(&mut self, path: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(path);
        let node = self.lookup(&resolved).ok_or_else(|| FsError::not_found(&resolved))?;
        if !node.is_directory() {
            return Err(FsError::NotADirectory { path: resolved });
        }
        self.tree.cwd = node.id.clone();
        Ok(())
    }

    pub fn create_file(
        &mut self,
        name: &str,
        parent_path: &str,
        content: &str,
    ) -> Result<&FsNode, FsError> {
        self.create_entry(
            name,
            parent_path,
            NodeKind::File { content: content.to_string() },
        )
    }

    pub fn create_directory(&mut self, name: &str, parent_path: &str) -> Result<&FsNode, FsError> {
        self.create_entry(name, parent_path, NodeKind::Directory { children: Vec::new() })
    }

    /// Create `path` and any missing parents. Existing directories are kept.
    pub fn create_dir_all(&mut self, path: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(path);
        let parts: Vec<&str> = resolved.split('/').filter(|p| !p.is_empty()).collect();

        let mut current = "/".to_string();
        let mut missing = Vec::new();
        for part in &parts {
            let next = join(&current, part);
            if missing.is_empty() {
                match self.lookup(&next) {
                    Some(node) if node.is_directory() => {}
                    Some(_) => return Err(FsError::NotADirectory { path: next }),
                    None => missing.push((current.clone(), *part)),
                }
            } else {
                missing.push((current.clone(), *part));
            }
            current = next;
        }

        for (parent, name) in missing {
            self.create_directory(name, &parent)?;
        }
        Ok(())
    }

    /// Remove the node at `path` and its whole subtree. Returns the number
    /// of nodes removed.
    pub fn delete_node(&mut self, path: &str) -> Result<usize, FsError> {
        let resolved = self.resolve_path(path);
        let node = self.lookup(&resolved).ok_or_else(|| FsError::not_found(&resolved))?;
        let Some(parent_id) = node.parent.clone() else {
            return Err(FsError::InvalidRoot { operation: "delete".to_string() });
        };
        let id = node.id.clone();

        let doomed = self.subtree_ids(&id);
        if let Some(locked) = doomed
            .iter()
            .filter_map(|d| self.tree.nodes.get(d))
            .find(|n| n.read_only)
        {
            return Err(FsError::ReadOnly { path: locked.path.clone() });
        }

        if doomed.contains(&self.tree.cwd) {
            self.tree.cwd = parent_id.clone();
        }
        for d in &doomed {
            self.tree.nodes.shift_remove(d);
        }
        if let Some(children) = self.tree.nodes.get_mut(&parent_id).and_then(FsNode::children_mut) {
            children.retain(|c| c != &id);
        }
        tracing::debug!(path = %resolved, removed = doomed.len(), "deleted subtree");
        Ok(doomed.len())
    }

    pub fn rename_node(&mut self, path: &str, new_name: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(path);
        self.move_node_as(&resolved, &dirname(&resolved), new_name)
    }

    /// Move a node into another directory, keeping its name.
    pub fn move_node(&mut self, source_path: &str, dest_path: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(source_path);
        let node = self.lookup(&resolved).ok_or_else(|| FsError::not_found(&resolved))?;
        if node.parent.is_none() {
            return Err(FsError::InvalidRoot { operation: "move".to_string() });
        }
        let name = node.name.clone();
        self.move_node_as(&resolved, dest_path, &name)
    }

    /// Relocate a node under `dest_path` with the name `new_name`. Rename
    /// and move are both expressed through this.
    pub fn move_node_as(
        &mut self,
        source_path: &str,
        dest_path: &str,
        new_name: &str,
    ) -> Result<(), FsError> {
        let src = self.resolve_path(source_path);
        let dest = self.resolve_path(dest_path);

        let node = self.lookup(&src).ok_or_else(|| FsError::not_found(&src))?;
        let Some(old_parent) = node.parent.clone() else {
            return Err(FsError::InvalidRoot { operation: "move".to_string() });
        };
        if node.read_only {
            return Err(FsError::ReadOnly { path: src });
        }
        let id = node.id.clone();
        validate_name(new_name)?;

        let dest_node = self.lookup(&dest).ok_or_else(|| FsError::not_found(&dest))?;
        if !dest_node.is_directory() {
            return Err(FsError::NotADirectory { path: dest });
        }
        if is_within(&dest, &src) {
            return Err(FsError::InvalidMove { source_path: src, dest });
        }
        let dest_id = dest_node.id.clone();
        let new_path = join(&dest, new_name);
        if self.lookup(&new_path).is_some() {
            return Err(FsError::AlreadyExists { path: new_path });
        }

        if old_parent != dest_id {
            if let Some(children) = self.tree.nodes.get_mut(&old_parent).and_then(FsNode::children_mut) {
                children.retain(|c| c != &id);
            }
            if let Some(children) = self.tree.nodes.get_mut(&dest_id).and_then(FsNode::children_mut) {
                children.push(id.clone());
            }
        }

        let subtree = self.subtree_ids(&id);
        if let Some(node) = self.tree.nodes.get_mut(&id) {
            node.parent = Some(dest_id);
            node.name = new_name.to_string();
            node.metadata.modified = Utc::now();
        }
        for d in &subtree {
            if let Some(n) = self.tree.nodes.get_mut(d) {
                if let Some(rest) = n.path.strip_prefix(src.as_str()) {
                    n.path = format!("{}{}", new_path, rest);
                }
            }
        }
        tracing::debug!(from = %src, to = %new_path, nodes = subtree.len(), "relocated node");
        Ok(())
    }

    pub fn update_file_content(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(path);
        let id = match self.lookup(&resolved) {
            None => return Err(FsError::not_found(&resolved)),
            Some(node) if !node.is_file() => return Err(FsError::NotAFile { path: resolved }),
            Some(node) if node.read_only => return Err(FsError::ReadOnly { path: resolved }),
            Some(node) => node.id.clone(),
        };
        if let Some(node) = self.tree.nodes.get_mut(&id) {
            node.kind = NodeKind::File { content: content.to_string() };
            node.metadata.size = content.len() as u64;
            node.metadata.modified = Utc::now();
        }
        Ok(())
    }

    /// Bump the modification time of an existing node.
    pub fn touch(&mut self, path: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(path);
        let id = match self.lookup(&resolved) {
            None => return Err(FsError::not_found(&resolved)),
            Some(node) if node.read_only => return Err(FsError::ReadOnly { path: resolved }),
            Some(node) => node.id.clone(),
        };
        if let Some(node) = self.tree.nodes.get_mut(&id) {
            node.metadata.modified = Utc::now();
        }
        Ok(())
    }

    fn create_entry(
        &mut self,
        name: &str,
        parent_path: &str,
        kind: NodeKind,
    ) -> Result<&FsNode, FsError> {
        validate_name(name)?;
        let parent_path = self.resolve_path(parent_path);
        let parent = self
            .lookup(&parent_path)
            .ok_or_else(|| FsError::not_found(&parent_path))?;
        if !parent.is_directory() {
            return Err(FsError::NotADirectory { path: parent_path });
        }
        let path = join(&parent_path, name);
        if self.lookup(&path).is_some() {
            return Err(FsError::AlreadyExists { path });
        }
        let parent_id = parent.id.clone();
        Ok(self.attach(&parent_id, &parent_path, name, kind, false))
    }

    /// Insert a new node under a directory that is known to exist. Callers
    /// validate the parent and the name first.
    pub(crate) fn attach(
        &mut self,
        parent_id: &NodeId,
        parent_path: &str,
        name: &str,
        kind: NodeKind,
        read_only: bool,
    ) -> &FsNode {
        let id = self.fresh_id();
        let now = Utc::now();
        let metadata = match &kind {
            NodeKind::File { content } => NodeMetadata::for_file(content, now),
            NodeKind::Directory { .. } => NodeMetadata::for_directory(now),
        };
        if let Some(children) = self.tree.nodes.get_mut(parent_id).and_then(FsNode::children_mut) {
            children.push(id.clone());
        }
        let node = FsNode {
            id: id.clone(),
            name: name.to_string(),
            path: join(parent_path, name),
            parent: Some(parent_id.clone()),
            kind,
            metadata,
            read_only,
        };
        self.tree.nodes.entry(id).or_insert(node)
    }

    fn fresh_id(&self) -> NodeId {
        loop {
            let id = NodeId::generate();
            if !self.tree.nodes.contains_key(&id) {
                return id;
            }
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Check invariants 1-4 and 6 on the whole tree.
    fn assert_consistent(fs: &VirtualFs) {
        let roots: Vec<_> = fs.nodes().filter(|n| n.parent().is_none()).collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].path(), "/");

        for node in fs.nodes() {
            if let Some(parent_id) = node.parent() {
                let parent = fs.get_node(parent_id).expect("dangling parent");
                assert!(parent.is_directory());
                assert_eq!(
                    parent.child_ids().iter().filter(|c| *c == node.id()).count(),
                    1
                );
                assert_eq!(node.path(), join(parent.path(), node.name()));
            }
            let mut names = std::collections::HashSet::new();
            for child in node.child_ids() {
                let child = fs.get_node(child).expect("dangling child");
                assert_eq!(child.parent(), Some(node.id()));
                assert!(names.insert(child.name().to_string()));
            }
        }
        assert!(fs.get_node(fs.cwd_id()).is_some_and(|n| n.is_directory()));
    }

    #[test]
    fn test_seed_layout() {
        let fs = VirtualFs::new();
        assert_consistent(&fs);
        assert_eq!(fs.current_directory(), "/home/user");
        for path in [
            "/system", "/home/user/readme.txt", "/home/user/.profile", "/missions",
            "/data/logs/system.log", "/snapshots", "/tmp",
        ] {
            assert!(fs.exists(path), "missing {}", path);
        }
        assert!(fs.get_node_by_path("/system").unwrap().is_read_only());
    }

    #[test]
    fn test_set_current_directory() {
        let mut fs = VirtualFs::new();
        fs.set_current_directory("/data/logs").unwrap();
        assert_eq!(fs.current_directory(), "/data/logs");
        fs.set_current_directory("..").unwrap();
        assert_eq!(fs.current_directory(), "/data");

        let err = fs.set_current_directory("/nonexistent").unwrap_err();
        assert!(matches!(err, FsError::NotFound { .. }));
        let err = fs.set_current_directory("/data/logs/system.log").unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { .. }));
        assert_eq!(fs.current_directory(), "/data");
    }

    #[test]
    fn test_every_directory_can_become_cwd() {
        let mut fs = VirtualFs::new();
        let dirs: Vec<String> = fs
            .nodes()
            .filter(|n| n.is_directory())
            .map(|n| n.path().to_string())
            .collect();
        for dir in dirs {
            fs.set_current_directory(&dir).unwrap();
            assert_eq!(fs.current_directory(), dir);
        }
    }

    #[test]
    fn test_create_file_and_directory() {
        let mut fs = VirtualFs::new();
        let dir = fs.create_directory("projects", "~").unwrap();
        assert_eq!(dir.path(), "/home/user/projects");
        assert_eq!(dir.metadata().size, 0);

        let file = fs.create_file("main.txt", "projects", "hello").unwrap();
        assert_eq!(file.path(), "/home/user/projects/main.txt");
        assert_eq!(file.metadata().size, 5);
        assert_eq!(fs.read_file("~/projects/main.txt").unwrap(), "hello");
        assert_consistent(&fs);
    }

    #[test]
    fn test_create_rejections_leave_tree_untouched() {
        let mut fs = VirtualFs::new();
        let before = fs.len();
        assert!(matches!(
            fs.create_file("x", "/missing", ""),
            Err(FsError::NotFound { .. })
        ));
        assert!(matches!(
            fs.create_file("x", "/data/logs/system.log", ""),
            Err(FsError::NotADirectory { .. })
        ));
        assert!(matches!(
            fs.create_directory("logs", "/data"),
            Err(FsError::AlreadyExists { .. })
        ));
        assert!(matches!(
            fs.create_file("a/b", "/tmp", ""),
            Err(FsError::InvalidName { .. })
        ));
        assert_eq!(fs.len(), before);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut fs = VirtualFs::new();
        fs.create_file("zeta", "/tmp", "").unwrap();
        fs.create_file("alpha", "/tmp", "").unwrap();
        fs.create_directory("mid", "/tmp").unwrap();
        let tmp = fs.get_node_by_path("/tmp").unwrap().id().clone();
        let names: Vec<&str> = fs.get_children(&tmp).iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);

        let file = fs.get_node_by_path("/tmp/zeta").unwrap().id().clone();
        assert!(fs.get_children(&file).is_empty());
    }

    #[test]
    fn test_create_dir_all() {
        let mut fs = VirtualFs::new();
        fs.create_dir_all("/home/user/projects/app").unwrap();
        assert!(fs.get_node_by_path("/home/user/projects/app").unwrap().is_directory());
        fs.create_dir_all("/home/user/projects/app").unwrap();

        let before = fs.len();
        let err = fs.create_dir_all("/data/logs/system.log/deeper/still").unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { .. }));
        assert_eq!(fs.len(), before);
        assert_consistent(&fs);
    }

    #[test]
    fn test_delete_subtree_counts() {
        let mut fs = VirtualFs::new();
        fs.create_dir_all("/tmp/a/b").unwrap();
        fs.create_file("one", "/tmp/a", "1").unwrap();
        fs.create_file("two", "/tmp/a/b", "2").unwrap();
        let before = fs.len();
        let tmp_id = fs.get_node_by_path("/tmp").unwrap().id().clone();

        // a, b, one, two + a itself
        let removed = fs.delete_node("/tmp/a").unwrap();
        assert_eq!(removed, 4);
        assert_eq!(fs.len(), before - 4);
        assert!(fs.get_node(&tmp_id).unwrap().child_ids().is_empty());
        assert!(!fs.exists("/tmp/a/b/two"));
        assert_consistent(&fs);
    }

    #[test]
    fn test_delete_rejections() {
        let mut fs = VirtualFs::new();
        let before = fs.len();
        assert!(matches!(fs.delete_node("/nope"), Err(FsError::NotFound { .. })));
        assert!(matches!(fs.delete_node("/"), Err(FsError::InvalidRoot { .. })));
        assert!(matches!(fs.delete_node("/system"), Err(FsError::ReadOnly { .. })));
        assert_eq!(fs.len(), before);
    }

    #[test]
    fn test_delete_rejects_read_only_descendant() {
        let mut fs = VirtualFs::new();
        fs.create_directory("wrapper", "/tmp").unwrap();
        let wrapper_id = fs.get_node_by_path("/tmp/wrapper").unwrap().id().clone();
        fs.attach(
            &wrapper_id,
            "/tmp/wrapper",
            "locked",
            NodeKind::File { content: String::new() },
            true,
        );
        let before = fs.len();
        let err = fs.delete_node("/tmp").unwrap_err();
        assert_eq!(err, FsError::ReadOnly { path: "/tmp/wrapper/locked".to_string() });
        assert_eq!(fs.len(), before);
    }

    #[test]
    fn test_delete_cwd_moves_to_parent() {
        let mut fs = VirtualFs::new();
        fs.create_dir_all("/tmp/work/inner").unwrap();
        fs.set_current_directory("/tmp/work/inner").unwrap();
        fs.delete_node("/tmp/work").unwrap();
        assert_eq!(fs.current_directory(), "/tmp");
        assert_consistent(&fs);
    }

    #[test]
    fn test_rename_cascades_paths() {
        let mut fs = VirtualFs::new();
        let log = fs.get_node_by_path("/data/logs/system.log").unwrap().clone();

        fs.rename_node("/data/logs", "log").unwrap();

        assert!(!fs.exists("/data/logs/system.log"));
        let moved = fs.get_node_by_path("/data/log/system.log").unwrap();
        assert_eq!(moved.id(), log.id());
        assert_eq!(moved.content(), log.content());
        assert_eq!(moved.name(), "system.log");
        assert_consistent(&fs);
    }

    #[test]
    fn test_rename_rejections() {
        let mut fs = VirtualFs::new();
        fs.create_file("a", "/tmp", "").unwrap();
        fs.create_file("b", "/tmp", "").unwrap();
        assert!(matches!(fs.rename_node("/tmp/a", "b"), Err(FsError::AlreadyExists { .. })));
        assert!(matches!(fs.rename_node("/tmp/zz", "c"), Err(FsError::NotFound { .. })));
        assert!(matches!(fs.rename_node("/system", "sys"), Err(FsError::ReadOnly { .. })));
        assert!(matches!(fs.rename_node("/", "top"), Err(FsError::InvalidRoot { .. })));
        assert!(fs.exists("/tmp/a"));
    }

    #[test]
    fn test_move_cascades_descendant_paths() {
        let mut fs = VirtualFs::new();
        fs.create_dir_all("/tmp/src/nested").unwrap();
        fs.create_file("deep.txt", "/tmp/src/nested", "deep").unwrap();
        let deep_id = fs.get_node_by_path("/tmp/src/nested/deep.txt").unwrap().id().clone();

        fs.move_node("/tmp/src", "/missions").unwrap();

        let deep = fs.get_node(&deep_id).unwrap();
        assert_eq!(deep.path(), "/missions/src/nested/deep.txt");
        assert!(fs.exists("/missions/src/nested"));
        assert!(!fs.exists("/tmp/src"));
        assert_consistent(&fs);
    }

    #[test]
    fn test_move_rejections() {
        let mut fs = VirtualFs::new();
        fs.create_dir_all("/tmp/a/b").unwrap();
        fs.create_directory("a", "/missions").unwrap();
        let snapshot = fs.tree.clone();

        assert!(matches!(fs.move_node("/tmp/a", "/tmp/a/b"), Err(FsError::InvalidMove { .. })));
        assert!(matches!(fs.move_node("/tmp/a", "/tmp/a"), Err(FsError::InvalidMove { .. })));
        assert!(matches!(fs.move_node("/tmp/a", "/missions"), Err(FsError::AlreadyExists { .. })));
        assert!(matches!(fs.move_node("/tmp/a", "/nowhere"), Err(FsError::NotFound { .. })));
        assert!(matches!(
            fs.move_node("/tmp/a", "/data/logs/system.log"),
            Err(FsError::NotADirectory { .. })
        ));
        assert!(matches!(fs.move_node("/system/boot.cfg", "/tmp"), Err(FsError::ReadOnly { .. })));
        assert!(matches!(fs.move_node("/", "/tmp"), Err(FsError::InvalidRoot { .. })));
        assert_eq!(fs.tree, snapshot);
    }

    #[test]
    fn test_move_node_as_renames_across_directories() {
        let mut fs = VirtualFs::new();
        fs.create_file("draft.txt", "/tmp", "text").unwrap();
        fs.move_node_as("/tmp/draft.txt", "~", "final.txt").unwrap();
        assert_eq!(fs.read_file("~/final.txt").unwrap(), "text");
        assert!(!fs.exists("/tmp/draft.txt"));
        assert_consistent(&fs);
    }

    #[test]
    fn test_update_file_content() {
        let mut fs = VirtualFs::new();
        fs.create_file("notes", "/tmp", "").unwrap();
        let created = fs.get_node_by_path("/tmp/notes").unwrap().metadata().modified;
        fs.update_file_content("/tmp/notes", "updated text").unwrap();
        let node = fs.get_node_by_path("/tmp/notes").unwrap();
        assert_eq!(node.content(), Some("updated text"));
        assert_eq!(node.metadata().size, 12);
        assert!(node.metadata().modified >= created);

        assert!(matches!(
            fs.update_file_content("/tmp", "x"),
            Err(FsError::NotAFile { .. })
        ));
        assert!(matches!(
            fs.update_file_content("/system/boot.cfg", "x"),
            Err(FsError::ReadOnly { .. })
        ));
        assert!(matches!(
            fs.update_file_content("/tmp/none", "x"),
            Err(FsError::NotFound { .. })
        ));
    }

    #[test]
    fn test_read_file_errors() {
        let fs = VirtualFs::new();
        assert!(matches!(fs.read_file("/tmp"), Err(FsError::NotAFile { .. })));
        assert!(matches!(fs.read_file("/tmp/none"), Err(FsError::NotFound { .. })));
    }

    #[test]
    fn test_touch() {
        let mut fs = VirtualFs::new();
        fs.touch("~/readme.txt").unwrap();
        assert!(matches!(fs.touch("/system/boot.cfg"), Err(FsError::ReadOnly { .. })));
        assert!(matches!(fs.touch("/tmp/none"), Err(FsError::NotFound { .. })));
    }
}
