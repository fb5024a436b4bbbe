// src/commands/tail/mod.rs
use crate::commands::utils::{get_tail, parse_head_tail_args, process_head_tail_files};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct TailCommand;

impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn summary(&self) -> &'static str {
        "output the last part of files"
    }

    fn usage(&self) -> &'static str {
        "tail [-N | -n N] FILE...\n    Print the last N lines (default 10) of each FILE."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let opts = match parse_head_tail_args(&ctx.args) {
            Ok(o) => o,
            Err(err) => return CommandResult::failure("tail", err),
        };
        let lines = opts.lines;
        process_head_tail_files(ctx, &opts, "tail", |content| get_tail(content, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;

    #[test]
    fn test_tail_lines() {
        let mut env = TestEnv::new().with_file("/tmp/f", "1\n2\n3\n4\n");
        assert_eq!(env.run(&TailCommand, &["-2", "/tmp/f"]).text(), "3\n4\n");
        assert_eq!(env.run(&TailCommand, &["-n", "1", "/tmp/f"]).text(), "4\n");
        assert_eq!(env.run(&TailCommand, &["/tmp/f"]).text(), "1\n2\n3\n4\n");
    }

    #[test]
    fn test_tail_seeded_log() {
        let mut env = TestEnv::new();
        let result = env.run(&TailCommand, &["-1", "/data/logs/system.log"]);
        assert_eq!(result.text(), "[info] user session opened\n");
    }

    #[test]
    fn test_tail_directory() {
        let mut env = TestEnv::new();
        let result = env.run(&TailCommand, &["/tmp"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.text(), "tail: /tmp: Is a directory\n");
    }
}
