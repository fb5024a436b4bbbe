// src/commands/ls/mod.rs
use chrono::{DateTime, Duration, Utc};

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{FsError, FsNode};
use crate::interpreter::errors::ShellError;

pub struct LsCommand;

fn format_time(modified: DateTime<Utc>) -> String {
    if Utc::now() - modified < Duration::days(180) {
        modified.format("%b %e %H:%M").to_string()
    } else {
        modified.format("%b %e  %Y").to_string()
    }
}

fn format_long(node: &FsNode, name: &str) -> String {
    let meta = node.metadata();
    format!(
        "{} 1 {} {} {:>5} {} {}\n",
        meta.permissions,
        meta.owner,
        meta.group,
        meta.size,
        format_time(meta.modified),
        name
    )
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn summary(&self) -> &'static str {
        "list directory contents"
    }

    fn usage(&self) -> &'static str {
        "ls [-a] [-l] [PATH]...\n    -a  include entries starting with .\n    -l  use a long listing format"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let mut show_all = false;
        let mut long_format = false;
        let mut paths: Vec<&str> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "-a" => show_all = true,
                "-l" => long_format = true,
                "-la" | "-al" => {
                    long_format = true;
                    show_all = true;
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    for c in flag[1..].chars() {
                        match c {
                            'a' => show_all = true,
                            'l' => long_format = true,
                            _ => {
                                return CommandResult::failure(
                                    "ls",
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
            paths.push(".");
        }

        let mut out = String::new();
        let mut exit_code = 0;
        let show_header = paths.len() > 1;

        for (idx, path) in paths.iter().enumerate() {
            let Some(node) = ctx.fs.get_node_by_path(path) else {
                out.push_str(&format!(
                    "ls: cannot access '{}': {}\n",
                    path,
                    FsError::not_found(path).reason()
                ));
                exit_code = 1;
                continue;
            };

            if node.is_file() {
                if long_format {
                    out.push_str(&format_long(node, path));
                } else {
                    out.push_str(&format!("{}\n", path));
                }
                continue;
            }

            if show_header {
                if idx > 0 {
                    out.push('\n');
                }
                out.push_str(&format!("{}:\n", path));
            }

            let mut entries: Vec<&FsNode> = ctx
                .fs
                .get_children(node.id())
                .into_iter()
                .filter(|e| show_all || !e.is_hidden())
                .collect();
            entries.sort_by(|a, b| a.name().cmp(b.name()));

            if long_format {
                out.push_str(&format!("total {}\n", entries.len()));
            }
            for entry in entries {
                if long_format {
                    out.push_str(&format_long(entry, entry.name()));
                } else {
                    out.push_str(&format!("{}\n", entry.name()));
                }
            }
        }

        CommandResult::with_exit_code(out, exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;

    fn env_with_structure() -> TestEnv {
        TestEnv::new()
            .with_file("/work/b.txt", "bbb")
            .with_file("/work/a.txt", "a")
            .with_file("/work/.hidden", "")
            .with_file("/work/sub/nested.txt", "n")
    }

    #[test]
    fn test_ls_basic_sorted() {
        let mut env = env_with_structure();
        let result = env.run(&LsCommand, &["/work"]);
        assert_eq!(result.text(), "a.txt\nb.txt\nsub\n");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_ls_all() {
        let mut env = env_with_structure();
        let result = env.run(&LsCommand, &["-a", "/work"]);
        assert_eq!(result.text(), ".hidden\na.txt\nb.txt\nsub\n");
    }

    #[test]
    fn test_ls_long() {
        let mut env = env_with_structure();
        let result = env.run(&LsCommand, &["-l", "/work"]);
        let lines: Vec<&str> = result.text().lines().collect();
        assert_eq!(lines[0], "total 3");
        assert!(lines[1].starts_with("-rw-r--r-- 1 user user     1 "));
        assert!(lines[1].ends_with(" a.txt"));
        assert!(lines[3].starts_with("drwxr-xr-x"));
        assert!(!result.text().contains(".hidden"));
    }

    #[test]
    fn test_ls_combined_la() {
        let mut env = env_with_structure();
        for flag in ["-la", "-al"] {
            let result = env.run(&LsCommand, &[flag, "/work"]);
            assert!(result.text().contains(".hidden"));
            assert!(result.text().contains("-rw-r--r--"));
        }
    }

    #[test]
    fn test_ls_current_directory() {
        let mut env = TestEnv::new();
        let result = env.run(&LsCommand, &[]);
        assert_eq!(result.text(), "readme.txt\n");
    }

    #[test]
    fn test_ls_single_file() {
        let mut env = env_with_structure();
        let result = env.run(&LsCommand, &["/work/a.txt"]);
        assert_eq!(result.text(), "/work/a.txt\n");
    }

    #[test]
    fn test_ls_multiple_directories() {
        let mut env = env_with_structure();
        let result = env.run(&LsCommand, &["/work/sub", "/data"]);
        assert_eq!(result.text(), "/work/sub:\nnested.txt\n\n/data:\nlogs\n");
    }

    #[test]
    fn test_ls_nonexistent() {
        let mut env = TestEnv::new();
        let result = env.run(&LsCommand, &["/nope"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.text(), "ls: cannot access '/nope': No such file or directory\n");
    }

    #[test]
    fn test_ls_invalid_option() {
        let mut env = TestEnv::new();
        let result = env.run(&LsCommand, &["-z"]);
        assert_eq!(result.exit_code, 2);
        assert_eq!(result.text(), "ls: invalid option -- 'z'\n");
    }
}
