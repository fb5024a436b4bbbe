// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::path::{basename, dirname};
use crate::interpreter::errors::ShellError;

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn summary(&self) -> &'static str {
        "make directories"
    }

    fn usage(&self) -> &'static str {
        "mkdir [-p] DIRECTORY...\n    -p  no error if existing, make parent directories as needed"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let mut recursive = false;
        let mut dirs: Vec<&str> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "-p" | "--parents" => recursive = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return CommandResult::failure(
                        "mkdir",
                        ShellError::invalid_argument(format!("invalid option -- '{}'", &flag[1..])),
                    );
                }
                dir => dirs.push(dir),
            }
        }

        if dirs.is_empty() {
            return CommandResult::failure("mkdir", ShellError::invalid_argument("missing operand"));
        }

        let mut out = String::new();
        let mut exit_code = 0;

        for dir in dirs {
            let path = ctx.fs.resolve_path(dir);
            let outcome = if recursive {
                ctx.fs.create_dir_all(&path)
            } else {
                ctx.fs
                    .create_directory(&basename(&path), &dirname(&path))
                    .map(|_| ())
            };
            if let Err(err) = outcome {
                out.push_str(&format!(
                    "mkdir: cannot create directory '{}': {}\n",
                    dir,
                    err.reason()
                ));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(out, exit_code)
    }
}
