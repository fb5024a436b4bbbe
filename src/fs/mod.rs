//! File System Module
//!
//! The virtual file system the shell operates on:
//! - `types`: node model and errors
//! - `path`: pure path resolution helpers
//! - `virtual_fs`: the node arena and every mutation on it
//! - `snapshot`: export/import of the whole tree
//! - `seed`: the starter layout

pub mod path;
pub mod seed;
pub mod snapshot;
pub mod types;
pub mod virtual_fs;

pub use snapshot::FsTree;
pub use types::*;
pub use virtual_fs::{VirtualFs, HOME_DIR};
