// src/commands/echo/mod.rs
use indexmap::IndexMap;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::path::{basename, dirname};
use crate::interpreter::errors::ShellError;

pub struct EchoCommand;

#[derive(Debug, PartialEq, Eq)]
enum Redirect<'a> {
    Truncate(&'a str),
    Append(&'a str),
}

/// Replace `$NAME` and `${NAME}` with values from `env`. Unset variables
/// expand to nothing.
pub fn expand_variables(text: &str, env: &IndexMap<String, String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        let braced = chars.peek() == Some(&'{');
        if braced {
            chars.next();
        }
        let mut name = String::new();
        while let Some(&n) = chars.peek() {
            let valid = n == '_' || n.is_ascii_alphanumeric();
            if !valid || (name.is_empty() && n.is_ascii_digit()) {
                break;
            }
            name.push(n);
            chars.next();
        }
        if braced {
            if chars.peek() == Some(&'}') {
                chars.next();
            } else {
                out.push_str("${");
                out.push_str(&name);
                continue;
            }
        }
        if name.is_empty() {
            out.push('$');
            if braced {
                out.push_str("{}");
            }
            continue;
        }
        if let Some(value) = env.get(&name) {
            out.push_str(value);
        }
    }
    out
}

/// Split words from a trailing `> file` / `>> file` redirection.
fn split_redirect(args: &[String]) -> Result<(Vec<&str>, Option<Redirect<'_>>), ShellError> {
    let mut words = Vec::new();
    let mut redirect = None;
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_str();
        let (append, rest) = if let Some(rest) = arg.strip_prefix(">>") {
            (true, rest)
        } else if let Some(rest) = arg.strip_prefix('>') {
            (false, rest)
        } else {
            words.push(arg);
            i += 1;
            continue;
        };

        let target = if rest.is_empty() {
            i += 1;
            match args.get(i) {
                Some(t) => t.as_str(),
                None => {
                    return Err(ShellError::invalid_argument(
                        "syntax error near unexpected token `newline'",
                    ))
                }
            }
        } else {
            rest
        };
        redirect = Some(if append { Redirect::Append(target) } else { Redirect::Truncate(target) });
        i += 1;
    }

    Ok((words, redirect))
}

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn summary(&self) -> &'static str {
        "display a line of text"
    }

    fn usage(&self) -> &'static str {
        "echo [-n] [TEXT]... [> FILE | >> FILE]\n    -n  do not output the trailing newline\n    $NAME expands to the value of an environment variable."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let (mut words, redirect) = match split_redirect(&ctx.args) {
            Ok(split) => split,
            Err(err) => return CommandResult::failure("echo", err),
        };

        let mut no_newline = false;
        while words.first() == Some(&"-n") {
            no_newline = true;
            words.remove(0);
        }

        let mut output = expand_variables(&words.join(" "), &ctx.state.env);
        if !no_newline {
            output.push('\n');
        }

        let Some(redirect) = redirect else {
            return CommandResult::success(output);
        };

        let (target, append) = match redirect {
            Redirect::Truncate(t) => (t, false),
            Redirect::Append(t) => (t, true),
        };
        let path = ctx.fs.resolve_path(target);
        let outcome = match ctx.fs.get_node_by_path(&path) {
            Some(node) => {
                let content = match node.content() {
                    Some(existing) if append => format!("{}{}", existing, output),
                    _ => output,
                };
                ctx.fs.update_file_content(&path, &content)
            }
            None => ctx
                .fs
                .create_file(&basename(&path), &dirname(&path), &output)
                .map(|_| ()),
        };

        match outcome {
            Ok(()) => CommandResult::success(String::new()),
            Err(err) => CommandResult::fs_error("echo", target, &err),
        }
    }
}
