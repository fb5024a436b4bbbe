// src/commands/mod.rs
pub mod alias_cmd;
pub mod cat;
pub mod cd;
pub mod clear_cmd;
pub mod date;
pub mod echo;
pub mod env;
pub mod exit_cmd;
pub mod grep;
pub mod head;
pub mod help_cmd;
pub mod history_cmd;
pub mod hostname_cmd;
pub mod ls;
pub mod man_cmd;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod tail;
pub mod touch;
pub mod types;
pub mod uname_cmd;
pub mod uptime_cmd;
pub mod utils;
pub mod wc;
pub mod whoami_cmd;

#[cfg(test)]
pub(crate) mod test_support;

pub use registry::{create_builtin_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandOutput, CommandResult};
