use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn summary(&self) -> &'static str {
        "display or clear the command history"
    }

    fn usage(&self) -> &'static str {
        "history [N]\nhistory -c\n    N   show only the last N entries\n    -c  clear the history list"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.len() > 1 {
            return CommandResult::failure("history", ShellError::invalid_argument("too many arguments"));
        }

        if ctx.args.first().is_some_and(|a| a == "-c") {
            ctx.state.clear_history();
            return CommandResult::success(String::new());
        }

        let history = &ctx.state.history;
        let count = match ctx.args.first().map(String::as_str) {
            Some(n) => match n.parse::<usize>() {
                Ok(n) => n.min(history.len()),
                Err(_) => {
                    return CommandResult::failure(
                        "history",
                        ShellError::invalid_argument(format!("{}: numeric argument required", n)),
                    )
                }
            },
            None => history.len(),
        };

        let start = history.len() - count;
        let mut out = String::new();
        for (i, cmd) in history.iter().enumerate().skip(start) {
            out.push_str(&format!("{:5}  {}\n", i + 1, cmd));
        }
        CommandResult::success(out)
    }
}
