//! Markup scanner: finds tag and entity tokens in a text-with-markup string.
//!
//! Offsets are character offsets (not byte offsets) because the sequence builder walks the
//! input one `char` at a time.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

fn markup_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?P<tag></?[A-Za-z!](?:"[^"]*"|'[^']*'|[^<>"'])*>)|(?P<entity>&(?:#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z][A-Za-z0-9]*);)"#,
        )
        .expect("valid regex")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Tag,
    Entity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub text: &'a str,
    /// First character index covered by the token.
    pub start: usize,
    /// One past the last character index covered by the token.
    pub end: usize,
    pub kind: TokenKind,
}

impl Token<'_> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    pub fn is_entity(&self) -> bool {
        self.kind == TokenKind::Entity
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    pub fn last_index(&self) -> usize {
        self.end.saturating_sub(1)
    }
}

/// Returns every tag and entity token in `input`, left to right and non-overlapping.
///
/// Quoted attribute values are opaque, so `<a title="1>2">` is one tag. Malformed or unterminated
/// syntax (`<b`, `&amp`, `a < b`, `<a title="x>`) is not matched and stays plain text.
pub fn scan(input: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut byte_cursor = 0usize;
    let mut char_cursor = 0usize;

    for m in markup_token_regex().find_iter(input) {
        char_cursor += input[byte_cursor..m.start()].chars().count();
        let len = m.as_str().chars().count();
        let kind = if m.as_str().starts_with('&') {
            TokenKind::Entity
        } else {
            TokenKind::Tag
        };
        out.push(Token {
            text: m.as_str(),
            start: char_cursor,
            end: char_cursor + len,
            kind,
        });
        char_cursor += len;
        byte_cursor = m.end();
    }

    out
}
