use chrono::{Duration, Utc};

use crate::commands::{Command, CommandContext, CommandResult};

pub struct UptimeCommand;

/// `uptime`-style duration: `5 min`, `2:07`, `3 days, 1:15`.
fn format_uptime(elapsed: Duration) -> String {
    let total_minutes = elapsed.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    let clock = if hours == 0 {
        format!("{} min", minutes)
    } else {
        format!("{}:{:02}", hours, minutes)
    };
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

impl Command for UptimeCommand {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn summary(&self) -> &'static str {
        "tell how long the session has been running"
    }

    fn usage(&self) -> &'static str {
        "uptime"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let now = Utc::now();
        CommandResult::success(format!(
            " {} up {},  1 user,  load average: 0.00, 0.01, 0.05\n",
            now.format("%H:%M:%S"),
            format_uptime(now - ctx.state.started_at)
        ))
    }
}
