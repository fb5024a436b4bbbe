//! Tokenizer
//!
//! Splits a command line on whitespace. A double-quoted run is one token
//! with the quotes removed; there are no escapes and no single quotes.

pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    // a quoted run yields a token even when it is empty
    let mut pending = false;

    for ch in input.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            pending = true;
        } else if ch.is_whitespace() && !in_quotes {
            if pending {
                tokens.push(std::mem::take(&mut current));
                pending = false;
            }
        } else {
            current.push(ch);
            pending = true;
        }
    }
    if pending {
        tokens.push(current);
    }
    tokens
}
