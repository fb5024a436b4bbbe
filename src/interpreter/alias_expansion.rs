//! Alias Expansion
//!
//! Aliases are single-token shorthands. When the first token of a line is an
//! alias key, its first occurrence in the raw line is replaced with the
//! expansion and the result is tokenized again. Expansion is not recursive,
//! and a command word written in double quotes is never expanded.

use indexmap::IndexMap;

use super::tokenizer::tokenize;

/// Expand the leading alias of `input`, if any. Returns `None` when the first
/// token is not an alias.
pub fn expand_alias(input: &str, aliases: &IndexMap<String, String>) -> Option<String> {
    // a quoted command word is taken literally
    if input.trim_start().starts_with('"') {
        return None;
    }
    let tokens = tokenize(input);
    let first = tokens.first()?;
    let expansion = aliases.get(first)?;
    Some(input.replacen(first.as_str(), expansion, 1))
}

/// Tokens of `input` after one level of alias expansion.
pub fn expand_and_tokenize(input: &str, aliases: &IndexMap<String, String>) -> Vec<String> {
    match expand_alias(input, aliases) {
        Some(expanded) => tokenize(&expanded),
        None => tokenize(input),
    }
}
