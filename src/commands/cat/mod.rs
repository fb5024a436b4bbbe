// src/commands/cat/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn summary(&self) -> &'static str {
        "concatenate files and print them"
    }

    fn usage(&self) -> &'static str {
        "cat [-n] FILE...\n    -n  number all output lines"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let mut show_line_numbers = false;
        let mut files: Vec<&str> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "-n" | "--number" => show_line_numbers = true,
                _ => files.push(arg),
            }
        }

        if files.is_empty() {
            return CommandResult::failure("cat", ShellError::invalid_argument("missing file operand"));
        }

        let mut out = String::new();
        let mut exit_code = 0;
        let mut line_number = 1;

        for file in files {
            let content = match ctx.fs.read_file(file) {
                Ok(c) => c,
                Err(err) => {
                    out.push_str(CommandResult::fs_error("cat", file, &err).text());
                    exit_code = 1;
                    continue;
                }
            };

            if show_line_numbers {
                let (numbered, next_line) = add_line_numbers(&content, line_number);
                out.push_str(&numbered);
                line_number = next_line;
            } else {
                out.push_str(&content);
            }
        }

        CommandResult::with_exit_code(out, exit_code)
    }
}

fn add_line_numbers(content: &str, start_line: usize) -> (String, usize) {
    let has_trailing_newline = content.ends_with('\n');
    let numbered: Vec<String> = content
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:>6}\t{}", start_line + i, line))
        .collect();
    let count = numbered.len();

    let mut result = numbered.join("\n");
    if has_trailing_newline {
        result.push('\n');
    }
    (result, start_line + count)
}
