use crate::commands::{Command, CommandContext, CommandResult};

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn summary(&self) -> &'static str {
        "end the terminal session"
    }

    fn usage(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> CommandResult {
        CommandResult::request_exit()
    }
}
