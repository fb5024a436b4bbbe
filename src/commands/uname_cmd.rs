use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

const KERNEL_NAME: &str = "SimOS";
const KERNEL_RELEASE: &str = "2.4.0-sim";
const KERNEL_VERSION: &str = "#1 SMP PREEMPT";
const MACHINE: &str = "x86_64";

pub struct UnameCommand;

impl Command for UnameCommand {
    fn name(&self) -> &'static str {
        "uname"
    }

    fn summary(&self) -> &'static str {
        "print system information"
    }

    fn usage(&self) -> &'static str {
        "uname [-a] [-s] [-n] [-r] [-m]\n    -a  print all information\n    -s  kernel name\n    -n  network node host name\n    -r  kernel release\n    -m  machine hardware name"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let (mut kernel, mut node, mut release, mut version, mut machine) =
            (false, false, false, false, false);

        for arg in &ctx.args {
            let Some(flags) = arg.strip_prefix('-') else {
                return CommandResult::failure(
                    "uname",
                    ShellError::invalid_argument(format!("extra operand '{}'", arg)),
                );
            };
            for c in flags.chars() {
                match c {
                    'a' => {
                        kernel = true;
                        node = true;
                        release = true;
                        version = true;
                        machine = true;
                    }
                    's' => kernel = true,
                    'n' => node = true,
                    'r' => release = true,
                    'v' => version = true,
                    'm' => machine = true,
                    _ => {
                        return CommandResult::failure(
                            "uname",
                            ShellError::invalid_argument(format!("invalid option -- '{}'", c)),
                        )
                    }
                }
            }
        }
        if !(node || release || version || machine) {
            kernel = true;
        }

        let mut parts: Vec<&str> = Vec::new();
        if kernel {
            parts.push(KERNEL_NAME);
        }
        if node {
            parts.push(&ctx.options.hostname);
        }
        if release {
            parts.push(KERNEL_RELEASE);
        }
        if version {
            parts.push(KERNEL_VERSION);
        }
        if machine {
            parts.push(MACHINE);
        }
        CommandResult::success(format!("{}\n", parts.join(" ")))
    }
}
