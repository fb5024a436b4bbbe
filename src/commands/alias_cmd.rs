use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct AliasCommand;

/// Rejoin `name='multi word'` values the tokenizer split apart.
fn merge_single_quoted(args: &[String]) -> Vec<String> {
    let mut merged = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut current = arg.clone();
        let opens_quote = current
            .split_once('=')
            .is_some_and(|(_, v)| v.starts_with('\'') && (v.len() == 1 || !v.ends_with('\'')));
        if opens_quote {
            for next in iter.by_ref() {
                current.push(' ');
                current.push_str(next);
                if next.ends_with('\'') {
                    break;
                }
            }
        }
        merged.push(current);
    }
    merged
}

fn strip_quotes(value: &str) -> &str {
    for q in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(q) && value.ends_with(q) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn valid_alias_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '$' | '\'' | '"'))
}

impl Command for AliasCommand {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn summary(&self) -> &'static str {
        "define or display aliases"
    }

    fn usage(&self) -> &'static str {
        "alias [NAME[=VALUE] ...]\n    Without arguments, print all aliases."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            let mut out = String::new();
            for (name, value) in &ctx.state.aliases {
                out.push_str(&format!("alias {}='{}'\n", name, value));
            }
            return CommandResult::success(out);
        }

        let mut out = String::new();
        let mut exit_code = 0;

        for arg in merge_single_quoted(&ctx.args) {
            if let Some((name, value)) = arg.split_once('=') {
                if !valid_alias_name(name) {
                    return CommandResult::failure(
                        "alias",
                        ShellError::invalid_argument(format!("`{}': invalid alias name", name)),
                    );
                }
                ctx.state
                    .aliases
                    .insert(name.to_string(), strip_quotes(value).to_string());
            } else if let Some(value) = ctx.state.aliases.get(&arg) {
                out.push_str(&format!("alias {}='{}'\n", arg, value));
            } else {
                out.push_str(&format!("alias: {}: not found\n", arg));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(out, exit_code)
    }
}

pub struct UnaliasCommand;

impl Command for UnaliasCommand {
    fn name(&self) -> &'static str {
        "unalias"
    }

    fn summary(&self) -> &'static str {
        "remove aliases"
    }

    fn usage(&self) -> &'static str {
        "unalias [-a] NAME...\n    -a  remove all aliases"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::failure("unalias", ShellError::invalid_argument("usage: unalias [-a] name [name ...]"));
        }

        let mut out = String::new();
        let mut exit_code = 0;

        for arg in &ctx.args {
            if arg == "-a" {
                ctx.state.aliases.clear();
            } else if ctx.state.aliases.shift_remove(arg).is_none() {
                out.push_str(&format!("unalias: {}: not found\n", arg));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(out, exit_code)
    }
}
