// src/commands/grep/mod.rs
use regex_lite::Regex;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct GrepCommand;

#[derive(Debug, Default)]
struct GrepOptions {
    pattern: String,
    invert_match: bool,
    count_only: bool,
    line_number: bool,
    fixed_strings: bool,
    files: Vec<String>,
}

fn parse_grep_args(args: &[String]) -> Result<GrepOptions, ShellError> {
    let mut opts = GrepOptions::default();
    let mut pattern: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "-e" {
            i += 1;
            let value = args
                .get(i)
                .ok_or_else(|| ShellError::invalid_argument("option requires an argument -- 'e'"))?;
            pattern = Some(value.clone());
        } else if arg == "--invert-match" {
            opts.invert_match = true;
        } else if arg == "--count" {
            opts.count_only = true;
        } else if arg == "--line-number" {
            opts.line_number = true;
        } else if arg == "--fixed-strings" {
            opts.fixed_strings = true;
        } else if arg == "--ignore-case" {
            // matching is always case-insensitive
        } else if arg.len() > 1 && arg.starts_with('-') {
            for c in arg[1..].chars() {
                match c {
                    // matching is always case-insensitive
                    'i' | 'E' => {}
                    'v' => opts.invert_match = true,
                    'c' => opts.count_only = true,
                    'n' => opts.line_number = true,
                    'F' => opts.fixed_strings = true,
                    _ => {
                        return Err(ShellError::invalid_argument(format!("invalid option -- '{}'", c)))
                    }
                }
            }
        } else {
            positional.push(arg.clone());
        }
        i += 1;
    }

    opts.pattern = match pattern {
        Some(p) => p,
        None if positional.is_empty() => {
            return Err(ShellError::invalid_argument("usage: grep [-n] [-v] [-c] PATTERN FILE..."))
        }
        None => positional.remove(0),
    };
    if positional.is_empty() {
        return Err(ShellError::invalid_argument("missing file operand"));
    }
    opts.files = positional;
    Ok(opts)
}

fn build_regex(opts: &GrepOptions) -> Result<Regex, ShellError> {
    let pattern = if opts.fixed_strings {
        regex_lite::escape(&opts.pattern)
    } else {
        opts.pattern.clone()
    };

    Regex::new(&format!("(?i){}", pattern)).map_err(|e| ShellError::MalformedPattern {
        pattern: opts.pattern.clone(),
        reason: e.to_string(),
    })
}

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn summary(&self) -> &'static str {
        "print lines matching a pattern"
    }

    fn usage(&self) -> &'static str {
        "grep [-n] [-v] [-c] [-F] PATTERN FILE...\n    PATTERN is a case-insensitive regular expression.\n    -n  prefix each line with its line number\n    -v  select non-matching lines\n    -c  print only a count of selected lines\n    -F  treat PATTERN as a fixed string"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let opts = match parse_grep_args(&ctx.args) {
            Ok(o) => o,
            Err(err) => return CommandResult::failure("grep", err),
        };
        let regex = match build_regex(&opts) {
            Ok(r) => r,
            Err(err) => return CommandResult::failure("grep", err),
        };

        let show_filename = opts.files.len() > 1;
        let mut out = String::new();
        let mut any_selected = false;
        let mut had_error = false;

        for file in &opts.files {
            let content = match ctx.fs.read_file(file) {
                Ok(c) => c,
                Err(err) => {
                    out.push_str(CommandResult::fs_error("grep", file, &err).text());
                    had_error = true;
                    continue;
                }
            };

            let mut count = 0;
            for (idx, line) in content.lines().enumerate() {
                if regex.is_match(line) == opts.invert_match {
                    continue;
                }
                count += 1;
                if opts.count_only {
                    continue;
                }
                if show_filename {
                    out.push_str(&format!("{}:", file));
                }
                if opts.line_number {
                    out.push_str(&format!("{}:", idx + 1));
                }
                out.push_str(line);
                out.push('\n');
            }

            if opts.count_only {
                if show_filename {
                    out.push_str(&format!("{}:{}\n", file, count));
                } else {
                    out.push_str(&format!("{}\n", count));
                }
            }
            any_selected |= count > 0;
        }

        let exit_code = if any_selected && !had_error { 0 } else { 1 };
        CommandResult::with_exit_code(out, exit_code)
    }
}
