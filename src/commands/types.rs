// src/commands/types.rs
use std::fmt;

use super::registry::CommandRegistry;
use crate::fs::{FsError, VirtualFs};
use crate::interpreter::collaborators::DestructiveActionReporter;
use crate::interpreter::errors::ShellError;
use crate::interpreter::types::{ShellOptions, ShellState};

/// What a command hands back to the session: text to display, or a
/// session-level control signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Display(String),
    ClearScreen,
    RequestExit,
}

impl CommandOutput {
    /// Displayed text, empty for control signals.
    pub fn text(&self) -> &str {
        match self {
            CommandOutput::Display(text) => text,
            CommandOutput::ClearScreen | CommandOutput::RequestExit => "",
        }
    }

    pub fn is_control(&self) -> bool {
        !matches!(self, CommandOutput::Display(_))
    }
}

impl Default for CommandOutput {
    fn default() -> Self {
        CommandOutput::Display(String::new())
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Result of a single command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub output: CommandOutput,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(text: String) -> Self {
        Self { output: CommandOutput::Display(text), exit_code: 0 }
    }

    pub fn error(text: String) -> Self {
        Self { output: CommandOutput::Display(text), exit_code: 1 }
    }

    pub fn with_exit_code(text: String, exit_code: i32) -> Self {
        Self { output: CommandOutput::Display(text), exit_code }
    }

    /// `<cmd>: <error>` with the exit code the error maps to.
    pub fn failure(cmd: &str, err: impl Into<ShellError>) -> Self {
        let err = err.into();
        Self::with_exit_code(format!("{}: {}\n", cmd, err), err.exit_code())
    }

    /// `<cmd>: <operand>: <reason>` for a file system error, naming the
    /// operand the way the user typed it.
    pub fn fs_error(cmd: &str, operand: &str, err: &FsError) -> Self {
        Self::error(format!("{}: {}: {}\n", cmd, operand, err.reason()))
    }

    pub fn clear_screen() -> Self {
        Self { output: CommandOutput::ClearScreen, exit_code: 0 }
    }

    pub fn request_exit() -> Self {
        Self { output: CommandOutput::RequestExit, exit_code: 0 }
    }

    pub fn text(&self) -> &str {
        self.output.text()
    }
}

/// Everything a handler may read or change while it runs.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub fs: &'a mut VirtualFs,
    pub state: &'a mut ShellState,
    pub options: &'a ShellOptions,
    pub reporter: &'a dyn DestructiveActionReporter,
    /// The dispatch table, for `man` and `help`.
    pub registry: &'a CommandRegistry,
}

/// A built-in command.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// One-line description shown by `help`.
    fn summary(&self) -> &'static str;

    /// Usage text shown by `man`.
    fn usage(&self) -> &'static str;

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_outputs_have_no_text() {
        assert_eq!(CommandResult::clear_screen().text(), "");
        assert!(CommandResult::request_exit().output.is_control());
        assert!(!CommandResult::success("__CLEAR__".to_string()).output.is_control());
    }

    #[test]
    fn test_failure_uses_error_exit_code() {
        let result = CommandResult::failure("cat", FsError::NotFound { path: "/x".to_string() });
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.text(), "cat: /x: No such file or directory\n");
    }

    #[test]
    fn test_fs_error_names_operand() {
        let err = FsError::NotAFile { path: "/home/user/docs".to_string() };
        let result = CommandResult::fs_error("cat", "docs", &err);
        assert_eq!(result.text(), "cat: docs: Is a directory\n");
        assert_eq!(result.exit_code, 1);
    }
}
