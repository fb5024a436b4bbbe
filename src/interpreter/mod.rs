//! Interpreter module
//!
//! The shell interpreter: tokenizing, alias expansion, dispatch to built-in
//! commands, history and prompt.

pub mod alias_expansion;
pub mod collaborators;
pub mod errors;
pub mod history;
#[allow(clippy::module_inception)]
pub mod interpreter;
pub mod prompt;
pub mod tokenizer;
pub mod types;

pub use alias_expansion::{expand_alias, expand_and_tokenize};
pub use collaborators::{DestructiveActionReporter, NoopReporter, NoopStats, UsageStatsRecorder};
pub use errors::ShellError;
pub use interpreter::{Shell, CATASTROPHIC_DELTA, CATASTROPHIC_INPUT};
pub use prompt::build_prompt;
pub use tokenizer::tokenize;
pub use types::{ExecResult, ShellOptions, ShellState, DEFAULT_MAX_HISTORY};
