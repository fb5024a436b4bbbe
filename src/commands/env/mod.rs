// src/commands/env/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct EnvCommand;

impl Command for EnvCommand {
    fn name(&self) -> &'static str {
        "env"
    }

    fn summary(&self) -> &'static str {
        "print the environment"
    }

    fn usage(&self) -> &'static str {
        "env\n    Print every environment variable as NAME=VALUE."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if let Some(arg) = ctx.args.first() {
            return CommandResult::failure(
                "env",
                ShellError::invalid_argument(format!("'{}': running commands is not supported", arg)),
            );
        }
        let mut out = String::new();
        for (name, value) in &ctx.state.env {
            out.push_str(&format!("{}={}\n", name, value));
        }
        CommandResult::success(out)
    }
}

pub struct ExportCommand;

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

impl Command for ExportCommand {
    fn name(&self) -> &'static str {
        "export"
    }

    fn summary(&self) -> &'static str {
        "set environment variables"
    }

    fn usage(&self) -> &'static str {
        "export [NAME[=VALUE] ...]\n    Without arguments, print all variables."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            let mut out = String::new();
            for (name, value) in &ctx.state.env {
                out.push_str(&format!("declare -x {}=\"{}\"\n", name, value));
            }
            return CommandResult::success(out);
        }

        for arg in &ctx.args {
            let (name, value) = match arg.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (arg.as_str(), None),
            };
            if !is_valid_identifier(name) {
                return CommandResult::failure(
                    "export",
                    ShellError::invalid_argument(format!("`{}': not a valid identifier", arg)),
                );
            }
            match value {
                Some(v) => {
                    ctx.state.env.insert(name.to_string(), v.to_string());
                }
                None => {
                    ctx.state.env.entry(name.to_string()).or_default();
                }
            }
        }
        CommandResult::success(String::new())
    }
}
