// src/commands/touch/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::path::{basename, dirname};
use crate::interpreter::errors::ShellError;

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn summary(&self) -> &'static str {
        "create empty files or update timestamps"
    }

    fn usage(&self) -> &'static str {
        "touch FILE...\n    Create each FILE that does not exist; otherwise update its modification time."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::failure("touch", ShellError::invalid_argument("missing file operand"));
        }

        let mut out = String::new();
        let mut exit_code = 0;

        for file in &ctx.args {
            let path = ctx.fs.resolve_path(file);
            let outcome = if ctx.fs.exists(&path) {
                ctx.fs.touch(&path)
            } else {
                ctx.fs
                    .create_file(&basename(&path), &dirname(&path), "")
                    .map(|_| ())
            };
            if let Err(err) = outcome {
                out.push_str(&format!("touch: cannot touch '{}': {}\n", file, err.reason()));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(out, exit_code)
    }
}
