//! Shell Errors
//!
//! Failures a command can report, each mapped to the exit code the shell
//! hands back to its caller:
//! - unknown command: 127
//! - malformed pattern or argument: 2
//! - file system failure: 1

use thiserror::Error;

use crate::fs::FsError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("{0}: command not found")]
    UnknownCommand(String),

    #[error("invalid pattern '{pattern}': {reason}")]
    MalformedPattern { pattern: String, reason: String },

    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Fs(#[from] FsError),
}

impl ShellError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::UnknownCommand(_) => 127,
            ShellError::MalformedPattern { .. } | ShellError::InvalidArgument(_) => 2,
            ShellError::Fs(_) => 1,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ShellError::InvalidArgument(msg.into())
    }
}
