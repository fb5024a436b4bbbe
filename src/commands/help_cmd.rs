use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

const CATEGORIES: &[(&str, &[&str])] = &[
    ("Navigation", &["pwd", "cd", "ls"]),
    ("File operations", &["cat", "touch", "mkdir", "rm", "mv", "echo"]),
    ("Text processing", &["head", "tail", "wc", "grep"]),
    ("System", &["whoami", "hostname", "uname", "date", "uptime"]),
    ("Environment & shell", &["history", "alias", "unalias", "export", "env", "clear", "exit", "man", "help"]),
];

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn summary(&self) -> &'static str {
        "display available commands"
    }

    fn usage(&self) -> &'static str {
        "help [COMMAND]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if let Some(topic) = ctx.args.first() {
            return match ctx.registry.get(topic) {
                Some(cmd) => CommandResult::success(format!(
                    "{} - {}\n\nUsage: {}\n",
                    cmd.name(),
                    cmd.summary(),
                    cmd.usage()
                )),
                None => CommandResult::error(format!("help: no help topics match '{}'\n", topic)),
            };
        }

        let mut out = String::from("Available commands:\n\n");
        for (category, names) in CATEGORIES {
            out.push_str(&format!("  {}:\n", category));
            for name in names.iter().filter_map(|n| ctx.registry.get(n)) {
                out.push_str(&format!("    {:<10} {}\n", name.name(), name.summary()));
            }
            out.push('\n');
        }
        out.push_str("Use 'man <command>' for details on a specific command.\n");
        CommandResult::success(out)
    }
}
