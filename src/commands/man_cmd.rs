use crate::commands::{Command, CommandContext, CommandResult};

pub struct ManCommand;

impl Command for ManCommand {
    fn name(&self) -> &'static str {
        "man"
    }

    fn summary(&self) -> &'static str {
        "show the manual page of a command"
    }

    fn usage(&self) -> &'static str {
        "man COMMAND"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let Some(topic) = ctx.args.first() else {
            return CommandResult::error("What manual page do you want?\n".to_string());
        };
        let Some(cmd) = ctx.registry.get(topic) else {
            return CommandResult::error(format!("No manual entry for {}\n", topic));
        };

        let mut page = format!("NAME\n    {} - {}\n\nSYNOPSIS\n", cmd.name(), cmd.summary());
        for line in cmd.usage().lines() {
            page.push_str(&format!("    {}\n", line));
        }
        CommandResult::success(page)
    }
}
