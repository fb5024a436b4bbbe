// src/commands/head/mod.rs
use crate::commands::utils::{get_head, parse_head_tail_args, process_head_tail_files};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn summary(&self) -> &'static str {
        "output the first part of files"
    }

    fn usage(&self) -> &'static str {
        "head [-N | -n N] FILE...\n    Print the first N lines (default 10) of each FILE."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let opts = match parse_head_tail_args(&ctx.args) {
            Ok(o) => o,
            Err(err) => return CommandResult::failure("head", err),
        };
        let lines = opts.lines;
        process_head_tail_files(ctx, &opts, "head", |content| get_head(content, lines))
    }
}
