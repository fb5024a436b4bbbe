// src/commands/wc/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct WcCommand;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Stats {
    lines: usize,
    words: usize,
    chars: usize,
}

/// A final line without a trailing newline still counts as a line.
fn count_stats(content: &str) -> Stats {
    Stats {
        lines: content.lines().count(),
        words: content.split_whitespace().count(),
        chars: content.chars().count(),
    }
}

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn summary(&self) -> &'static str {
        "print line, word, and character counts"
    }

    fn usage(&self) -> &'static str {
        "wc [-l] [-w] [-c] FILE...\n    -l  print the line counts\n    -w  print the word counts\n    -c  print the character counts"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let mut show_lines = false;
        let mut show_words = false;
        let mut show_chars = false;
        let mut files: Vec<&str> = Vec::new();

        for arg in &ctx.args {
            if arg.len() > 1 && arg.starts_with('-') {
                for c in arg[1..].chars() {
                    match c {
                        'l' => show_lines = true,
                        'w' => show_words = true,
                        'c' | 'm' => show_chars = true,
                        _ => {
                            return CommandResult::failure(
                                "wc",
                                ShellError::invalid_argument(format!("invalid option -- '{}'", c)),
                            )
                        }
                    }
                }
            } else {
                files.push(arg);
            }
        }

        if !show_lines && !show_words && !show_chars {
            show_lines = true;
            show_words = true;
            show_chars = true;
        }
        if files.is_empty() {
            return CommandResult::failure("wc", ShellError::invalid_argument("missing file operand"));
        }

        let mut out = String::new();
        let mut exit_code = 0;
        let mut all_stats: Vec<(Stats, &str)> = Vec::new();

        for file in files {
            match ctx.fs.read_file(file) {
                Ok(content) => all_stats.push((count_stats(&content), file)),
                Err(err) => {
                    out.push_str(CommandResult::fs_error("wc", file, &err).text());
                    exit_code = 1;
                }
            }
        }

        let mut total = Stats::default();
        for (stats, _) in &all_stats {
            total.lines += stats.lines;
            total.words += stats.words;
            total.chars += stats.chars;
        }

        let width = if all_stats.len() > 1 { 7 } else { 0 };
        let width = width
            .max(total.lines.to_string().len())
            .max(total.words.to_string().len())
            .max(total.chars.to_string().len());

        let render = |stats: &Stats, name: &str| {
            let mut parts: Vec<String> = Vec::new();
            if show_lines {
                parts.push(format!("{:>width$}", stats.lines, width = width));
            }
            if show_words {
                parts.push(format!("{:>width$}", stats.words, width = width));
            }
            if show_chars {
                parts.push(format!("{:>width$}", stats.chars, width = width));
            }
            format!("{} {}\n", parts.join(" "), name)
        };

        for (stats, name) in &all_stats {
            out.push_str(&render(stats, *name));
        }
        if all_stats.len() > 1 {
            out.push_str(&render(&total, "total"));
        }

        CommandResult::with_exit_code(out, exit_code)
    }
}
