//! Re-lexing of embedded text
//!
//! Run-argument splitting needs to tokenize the text of a string token
//! again. The real script lexer lives outside this crate and is plugged in
//! through [`Relex`]; [`WhitespaceRelexer`] is the stand-in used by default.

/// Tokenizes arbitrary text into the raw token strings
pub trait Relex: Send + Sync {
    fn relex(&self, text: &str) -> Vec<String>;
}

/// Splits on whitespace, keeping double-quoted segments (quotes included)
/// together as one token
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceRelexer;

impl Relex for WhitespaceRelexer {
    fn relex(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for c in text.chars() {
            match c {
                '"' => {
                    in_quotes = !in_quotes;
                    current.push(c);
                }
                c if c.is_whitespace() && !in_quotes => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(c),
            }
        }

        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }
}
