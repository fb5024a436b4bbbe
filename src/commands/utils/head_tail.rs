// src/commands/utils/head_tail.rs
use crate::commands::{CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub const DEFAULT_LINES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTailOptions {
    pub lines: usize,
    pub files: Vec<String>,
}

impl Default for HeadTailOptions {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES,
            files: Vec::new(),
        }
    }
}

fn parse_count(value: &str) -> Result<usize, ShellError> {
    value
        .parse()
        .map_err(|_| ShellError::invalid_argument(format!("invalid number of lines: '{}'", value)))
}

/// Accepts `-N`, `-n N` and `-nN`.
pub fn parse_head_tail_args(args: &[String]) -> Result<HeadTailOptions, ShellError> {
    let mut opts = HeadTailOptions::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "-n" || arg == "--lines" {
            i += 1;
            let value = args
                .get(i)
                .ok_or_else(|| ShellError::invalid_argument("option requires an argument -- 'n'"))?;
            opts.lines = parse_count(value)?;
        } else if let Some(value) = arg.strip_prefix("--lines=") {
            opts.lines = parse_count(value)?;
        } else if let Some(value) = arg.strip_prefix("-n") {
            opts.lines = parse_count(value)?;
        } else if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c.is_ascii_digit()) {
            opts.lines = parse_count(&arg[1..])?;
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(ShellError::invalid_argument(format!("invalid option -- '{}'", &arg[1..])));
        } else {
            opts.files.push(arg.clone());
        }
        i += 1;
    }

    if opts.files.is_empty() {
        return Err(ShellError::invalid_argument("missing file operand"));
    }
    Ok(opts)
}

/// Run `processor` over every file, with `==> name <==` headers when there
/// is more than one.
pub fn process_head_tail_files<F>(
    ctx: &CommandContext<'_>,
    opts: &HeadTailOptions,
    cmd_name: &str,
    processor: F,
) -> CommandResult
where
    F: Fn(&str) -> String,
{
    let mut out = String::new();
    let mut exit_code = 0;

    let show_headers = opts.files.len() > 1;
    let mut files_processed = 0;

    for file in &opts.files {
        match ctx.fs.read_file(file) {
            Ok(content) => {
                if show_headers {
                    if files_processed > 0 {
                        out.push('\n');
                    }
                    out.push_str(&format!("==> {} <==\n", file));
                }
                out.push_str(&processor(&content));
                files_processed += 1;
            }
            Err(err) => {
                out.push_str(CommandResult::fs_error(cmd_name, file, &err).text());
                exit_code = 1;
            }
        }
    }

    CommandResult::with_exit_code(out, exit_code)
}

pub fn get_head(content: &str, lines: usize) -> String {
    content.split_inclusive('\n').take(lines).collect()
}

pub fn get_tail(content: &str, lines: usize) -> String {
    let all: Vec<&str> = content.split_inclusive('\n').collect();
    let start = all.len().saturating_sub(lines);
    all[start..].concat()
}
