use crate::commands::{Command, CommandContext, CommandResult};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn summary(&self) -> &'static str {
        "clear the terminal screen"
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> CommandResult {
        CommandResult::clear_screen()
    }
}
