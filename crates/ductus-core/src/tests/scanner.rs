use crate::scanner::{Token, TokenKind, scan};

fn spans(input: &str) -> Vec<(&str, usize, usize, TokenKind)> {
    scan(input)
        .into_iter()
        .map(|t| (t.text, t.start, t.end, t.kind))
        .collect()
}

#[test]
fn scan_finds_tags_and_entities_in_order() {
    assert_eq!(
        spans("a<b>c</b>d"),
        vec![
            ("<b>", 1, 4, TokenKind::Tag),
            ("</b>", 5, 9, TokenKind::Tag)
        ]
    );
    assert_eq!(spans("a&amp;b"), vec![("&amp;", 1, 6, TokenKind::Entity)]);
    assert_eq!(
        spans("&#38;&#x26;"),
        vec![
            ("&#38;", 0, 5, TokenKind::Entity),
            ("&#x26;", 5, 11, TokenKind::Entity)
        ]
    );
}

#[test]
fn scan_handles_tokens_at_both_ends() {
    assert_eq!(spans("<br>"), vec![("<br>", 0, 4, TokenKind::Tag)]);
    assert_eq!(
        spans("<p>Hi</p>"),
        vec![("<p>", 0, 3, TokenKind::Tag), ("</p>", 5, 9, TokenKind::Tag)]
    );
}

#[test]
fn scan_gives_repeated_tokens_their_own_ranges() {
    assert_eq!(
        spans("<i>x<i>"),
        vec![("<i>", 0, 3, TokenKind::Tag), ("<i>", 4, 7, TokenKind::Tag)]
    );
    assert_eq!(
        spans("&amp;&amp;"),
        vec![
            ("&amp;", 0, 5, TokenKind::Entity),
            ("&amp;", 5, 10, TokenKind::Entity)
        ]
    );
}

#[test]
fn scan_ignores_malformed_markup() {
    assert!(scan("a <b c").is_empty());
    assert!(scan("fish &amp chips").is_empty());
    assert!(scan("1 < 2 > 0").is_empty());
    assert!(scan("&;").is_empty());
    assert!(scan("").is_empty());
}

#[test]
fn scan_keeps_quoted_attribute_values_inside_the_tag() {
    assert_eq!(
        spans(r#"<a title="1>2">x</a>"#),
        vec![
            (r#"<a title="1>2">"#, 0, 15, TokenKind::Tag),
            ("</a>", 16, 20, TokenKind::Tag)
        ]
    );
    assert_eq!(
        spans("<i data-x='<b>'>y"),
        vec![("<i data-x='<b>'>", 0, 16, TokenKind::Tag)]
    );
    assert!(scan(r#"<a title="x>"#).is_empty());
}

#[test]
fn scan_offsets_count_characters_not_bytes() {
    let tokens = scan("é—<b>ü&amp;");
    assert_eq!(
        tokens,
        vec![
            Token {
                text: "<b>",
                start: 2,
                end: 5,
                kind: TokenKind::Tag,
            },
            Token {
                text: "&amp;",
                start: 6,
                end: 11,
                kind: TokenKind::Entity,
            },
        ]
    );
    assert_eq!(tokens[0].len(), 3);
    assert_eq!(tokens[1].last_index(), 10);
    assert!(tokens[1].contains(6));
    assert!(!tokens[1].contains(11));
    assert!(tokens[1].is_entity());
}

#[test]
fn scan_keeps_attributes_inside_tags() {
    assert_eq!(
        spans(r#"<a href="/x?y=1&amp;z=2">go</a>"#),
        vec![
            (r#"<a href="/x?y=1&amp;z=2">"#, 0, 25, TokenKind::Tag),
            ("</a>", 27, 31, TokenKind::Tag)
        ]
    );
}
