//! sim-terminal - A simulated terminal over an in-memory file system
//!
//! This library provides a virtual file system with a fixed starter layout
//! and a small POSIX-like shell that runs built-in commands against it. No
//! command ever touches the host.
//!
//! ```
//! use sim_terminal::{Terminal, TerminalOptions};
//!
//! let mut terminal = Terminal::new(TerminalOptions::default());
//! let result = terminal.exec("pwd");
//! assert_eq!(result.text(), "/home/user\n");
//! ```

pub mod commands;
pub mod fs;
pub mod interpreter;
pub mod persistence;
pub mod terminal;

pub use commands::{Command, CommandOutput, CommandRegistry, CommandResult};
pub use fs::{FsError, FsNode, NodeId, NodeKind, VirtualFs};
pub use interpreter::{
    DestructiveActionReporter, ExecResult, Shell, ShellError, ShellOptions, ShellState,
    UsageStatsRecorder,
};
pub use persistence::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore, StoreError};
pub use terminal::{SharedTerminal, StateError, Terminal, TerminalOptions};
