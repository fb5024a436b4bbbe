// src/commands/mv/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::path::{basename, dirname};
use crate::interpreter::errors::ShellError;

pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn summary(&self) -> &'static str {
        "move or rename files"
    }

    fn usage(&self) -> &'static str {
        "mv SOURCE DEST\nmv SOURCE... DIRECTORY\n    Rename SOURCE to DEST, or move SOURCE(s) into DIRECTORY."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let mut paths: Vec<&str> = ctx.args.iter().map(String::as_str).collect();
        if paths.len() < 2 {
            let msg = match paths.first() {
                Some(src) => format!("missing destination file operand after '{}'", src),
                None => "missing file operand".to_string(),
            };
            return CommandResult::failure("mv", ShellError::invalid_argument(msg));
        }

        let Some(dest) = paths.pop() else {
            return CommandResult::failure("mv", ShellError::invalid_argument("missing file operand"));
        };
        let dest_path = ctx.fs.resolve_path(dest);
        let dest_is_dir = ctx
            .fs
            .get_node_by_path(&dest_path)
            .is_some_and(|n| n.is_directory());

        if paths.len() > 1 && !dest_is_dir {
            return CommandResult::error(format!("mv: target '{}' is not a directory\n", dest));
        }

        let mut out = String::new();
        let mut exit_code = 0;

        for src in paths {
            let outcome = if dest_is_dir {
                ctx.fs.move_node(src, &dest_path)
            } else {
                ctx.fs
                    .move_node_as(src, &dirname(&dest_path), &basename(&dest_path))
            };
            if let Err(err) = outcome {
                out.push_str(&format!(
                    "mv: cannot move '{}' to '{}': {}\n",
                    src,
                    dest,
                    err.reason()
                ));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(out, exit_code)
    }
}
