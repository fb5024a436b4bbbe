// src/commands/rm/mod.rs
use tracing::warn;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::path::is_within;
use crate::interpreter::errors::ShellError;

/// Integrity damage for deleting at or under the system area.
pub const SYSTEM_DELETE_DELTA: i32 = -15;
/// Integrity damage for deleting at or under the home directory.
pub const HOME_DELETE_DELTA: i32 = -5;

const SYSTEM_ROOT: &str = "/system";

pub struct RmCommand;

/// Integrity damage deleting `path` causes, if it is protected. A path is
/// protected when it lies in a protected area or contains one; the system
/// area wins when both apply.
fn protected_delta(path: &str, home: &str) -> Option<i32> {
    let touches = |area: &str| is_within(path, area) || is_within(area, path);
    if touches(SYSTEM_ROOT) {
        Some(SYSTEM_DELETE_DELTA)
    } else if touches(home) {
        Some(HOME_DELETE_DELTA)
    } else {
        None
    }
}

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn summary(&self) -> &'static str {
        "remove files or directories"
    }

    fn usage(&self) -> &'static str {
        "rm [-r] [-f] FILE...\n    -r  remove directories and their contents recursively\n    -f  ignore nonexistent files"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let mut recursive = false;
        let mut force = false;
        let mut paths: Vec<&str> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "--recursive" => recursive = true,
                "--force" => force = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    for c in flag[1..].chars() {
                        match c {
                            'r' | 'R' => recursive = true,
                            'f' => force = true,
                            _ => {
                                return CommandResult::failure(
                                    "rm",
                                    ShellError::invalid_argument(format!("invalid option -- '{}'", c)),
                                )
                            }
                        }
                    }
                }
                path => paths.push(path),
            }
        }

        if paths.is_empty() {
            if force {
                return CommandResult::success(String::new());
            }
            return CommandResult::failure("rm", ShellError::invalid_argument("missing operand"));
        }

        let mut out = String::new();
        let mut exit_code = 0;

        for path in paths {
            let resolved = ctx.fs.resolve_path(path);
            let Some(node) = ctx.fs.get_node_by_path(&resolved) else {
                if !force {
                    out.push_str(&format!(
                        "rm: cannot remove '{}': No such file or directory\n",
                        path
                    ));
                    exit_code = 1;
                }
                continue;
            };
            if node.is_directory() && !recursive {
                out.push_str(&format!("rm: cannot remove '{}': Is a directory\n", path));
                exit_code = 1;
                continue;
            }

            // the root itself is never deleted, so nothing is damaged
            let is_root = node.parent().is_none();
            let delta = protected_delta(&resolved, ctx.fs.home_dir()).filter(|_| !is_root);
            if let Some(delta) = delta {
                warn!(path = %resolved, delta, "deleting protected path");
                ctx.reporter.report_destructive_action(delta);
            }
            if let Err(err) = ctx.fs.delete_node(&resolved) {
                out.push_str(&format!("rm: cannot remove '{}': {}\n", path, err.reason()));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(out, exit_code)
    }
}
