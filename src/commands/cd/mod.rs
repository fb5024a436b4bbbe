// src/commands/cd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn summary(&self) -> &'static str {
        "change the working directory"
    }

    fn usage(&self) -> &'static str {
        "cd [DIR]\n    With no DIR, change to the home directory. `cd -` returns to the previous directory."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.len() > 1 {
            return CommandResult::failure("cd", ShellError::invalid_argument("too many arguments"));
        }

        let mut print_path = false;
        let target = match ctx.args.first().map(String::as_str) {
            None | Some("") => ctx.fs.home_dir().to_string(),
            Some("-") => match &ctx.state.previous_dir {
                Some(prev) => {
                    print_path = true;
                    prev.clone()
                }
                None => return CommandResult::error("cd: OLDPWD not set\n".to_string()),
            },
            Some(dir) => dir.to_string(),
        };

        if let Err(err) = ctx.fs.set_current_directory(&target) {
            let shown = ctx.args.first().map(String::as_str).unwrap_or(&target);
            return CommandResult::fs_error("cd", shown, &err);
        }

        let new_dir = ctx.fs.current_directory().to_string();
        ctx.state.set_cwd(&new_dir);
        if print_path {
            CommandResult::success(format!("{}\n", new_dir))
        } else {
            CommandResult::success(String::new())
        }
    }
}
