//! File System Types
//!
//! Node model for the virtual file system: ids, kinds, metadata and errors.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{path}: No such file or directory")]
    NotFound { path: String },

    #[error("{path}: File exists")]
    AlreadyExists { path: String },

    #[error("{path}: Not a directory")]
    NotADirectory { path: String },

    #[error("{path}: Is a directory")]
    NotAFile { path: String },

    #[error("{path}: Read-only file system")]
    ReadOnly { path: String },

    #[error("cannot {operation} the root directory")]
    InvalidRoot { operation: String },

    #[error("'{name}': Invalid file name")]
    InvalidName { name: String },

    #[error("cannot move '{source_path}' to a subdirectory of itself, '{dest}'")]
    InvalidMove { source_path: String, dest: String },

    #[error("malformed snapshot: {reason}")]
    MalformedSnapshot { reason: String },
}

impl FsError {
    pub(crate) fn not_found(path: &str) -> Self {
        FsError::NotFound { path: path.to_string() }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        FsError::MalformedSnapshot { reason: reason.into() }
    }

    /// The message without the path, for callers that name the operand
    /// themselves.
    pub fn reason(&self) -> String {
        match self {
            FsError::NotFound { .. } => "No such file or directory".to_string(),
            FsError::AlreadyExists { .. } => "File exists".to_string(),
            FsError::NotADirectory { .. } => "Not a directory".to_string(),
            FsError::NotAFile { .. } => "Is a directory".to_string(),
            FsError::ReadOnly { .. } => "Read-only file system".to_string(),
            FsError::InvalidName { .. } => "Invalid file name".to_string(),
            FsError::InvalidRoot { .. }
            | FsError::InvalidMove { .. }
            | FsError::MalformedSnapshot { .. } => self.to_string(),
        }
    }
}

/// Opaque node identifier, stable for the lifetime of the node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Generate a fresh id from the current time and a random suffix.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let suffix: u32 = rand::thread_rng().gen();
        NodeId(format!("{:x}-{:08x}", millis, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

/// Structural kind of a node. Only directories have children, only files
/// have content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    File { content: String },
    Directory { children: Vec<NodeId> },
}

/// Display-only ownership and timing information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetadata {
    pub permissions: String,
    pub owner: String,
    pub group: String,
    pub size: u64,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl NodeMetadata {
    pub(crate) fn for_file(content: &str, now: DateTime<Utc>) -> Self {
        Self {
            permissions: "-rw-r--r--".to_string(),
            owner: "user".to_string(),
            group: "user".to_string(),
            size: content.len() as u64,
            created: now,
            modified: now,
        }
    }

    pub(crate) fn for_directory(now: DateTime<Utc>) -> Self {
        Self {
            permissions: "drwxr-xr-x".to_string(),
            owner: "user".to_string(),
            group: "user".to_string(),
            size: 0,
            created: now,
            modified: now,
        }
    }
}

/// A file or directory in the tree.
///
/// `path` is a cache derived from the parent chain. It is only written by
/// [`crate::fs::VirtualFs`], which keeps it consistent on every structural
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsNode {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) path: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
    pub(crate) metadata: NodeMetadata,
    #[serde(default)]
    pub(crate) read_only: bool,
}

impl FsNode {
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parent(&self) -> Option<&NodeId> {
        self.parent.as_ref()
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn metadata(&self) -> &NodeMetadata {
        &self.metadata
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Child ids in insertion order, empty for files.
    pub fn child_ids(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }
}

/// Check that `name` can be used as a single path component.
pub fn validate_name(name: &str) -> Result<(), FsError> {
    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(FsError::InvalidName { name: name.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = NodeId::generate();
        let b = NodeId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().contains('-'));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("notes.txt").is_ok());
        assert!(validate_name(".profile").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(".").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name("a/b").is_err());
    }

    #[test]
    fn test_node_kind_accessors() {
        let now = Utc::now();
        let file = FsNode {
            id: NodeId::from("f"),
            name: ".hidden".to_string(),
            path: "/.hidden".to_string(),
            parent: Some(NodeId::from("root")),
            kind: NodeKind::File { content: "abc".to_string() },
            metadata: NodeMetadata::for_file("abc", now),
            read_only: false,
        };
        assert!(file.is_file());
        assert!(file.is_hidden());
        assert_eq!(file.content(), Some("abc"));
        assert!(file.child_ids().is_empty());
        assert_eq!(file.metadata().size, 3);
    }

    #[test]
    fn test_error_messages() {
        let err = FsError::not_found("/nope");
        assert_eq!(err.to_string(), "/nope: No such file or directory");
        assert_eq!(err.reason(), "No such file or directory");
        let err = FsError::InvalidRoot { operation: "delete".to_string() };
        assert_eq!(err.to_string(), "cannot delete the root directory");
        assert_eq!(err.reason(), err.to_string());
    }
}
