use crate::commands::{Command, CommandContext, CommandResult};

pub struct HostnameCommand;

impl Command for HostnameCommand {
    fn name(&self) -> &'static str {
        "hostname"
    }

    fn summary(&self) -> &'static str {
        "show the system's host name"
    }

    fn usage(&self) -> &'static str {
        "hostname"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        CommandResult::success(format!("{}\n", ctx.options.hostname))
    }
}
