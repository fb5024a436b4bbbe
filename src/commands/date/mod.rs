// src/commands/date/mod.rs
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct DateCommand;

/// Render `now` with a strftime format, rejecting unknown specifiers.
fn format_date(now: &DateTime<Utc>, fmt: &str) -> Result<String, ShellError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(fmt).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ShellError::invalid_argument(format!("invalid format '{}'", fmt)));
    }
    Ok(now.format_with_items(items.into_iter()).to_string())
}

impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn summary(&self) -> &'static str {
        "print the system date and time"
    }

    fn usage(&self) -> &'static str {
        "date [-I] [-R] [+FORMAT]\n    -I  output in ISO 8601 format\n    -R  output in RFC 5322 format\n    +FORMAT  strftime sequences such as %Y %m %d %H %M %S"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let now = Utc::now();
        let mut format = "%a %b %e %H:%M:%S UTC %Y".to_string();

        for arg in &ctx.args {
            match arg.as_str() {
                "-u" | "--utc" => {}
                "-I" | "--iso-8601" => format = "%Y-%m-%d".to_string(),
                "-R" | "--rfc-email" => format = "%a, %d %b %Y %H:%M:%S +0000".to_string(),
                custom if custom.starts_with('+') => format = custom[1..].to_string(),
                other => {
                    return CommandResult::failure(
                        "date",
                        ShellError::invalid_argument(format!("invalid option '{}'", other)),
                    )
                }
            }
        }

        match format_date(&now, &format) {
            Ok(text) => CommandResult::success(format!("{}\n", text)),
            Err(err) => CommandResult::failure("date", err),
        }
    }
}
