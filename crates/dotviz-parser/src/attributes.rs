//! Attribute list parsing.
//!
//! Turns the interior of a bracket clause (`color=red, label="A, B"`) into
//! an [`Attributes`] map. Parsing is lenient: malformed entries are dropped
//! rather than reported.

use log::trace;

use dotviz_core::attributes::Attributes;

use crate::{
    lexer,
    tokens::{PositionedToken, Token, source_text},
};

/// Parse the text between `[` and `]` into attributes.
///
/// Entries are separated by `,` or `;` outside double quotes. Each entry is
/// split on its first `=`. A side that is a single quoted string yields its
/// unquoted content, anything else its trimmed source text. Entries without
/// `=` or with an empty key are dropped. A repeated key keeps its last value.
///
/// # Examples
///
/// ```
/// let attrs = dotviz_parser::attributes::parse(r#"color=red, label="A, B""#);
///
/// assert_eq!(attrs.get("color"), Some("red"));
/// assert_eq!(attrs.get("label"), Some("A, B"));
/// ```
pub fn parse(source: &str) -> Attributes {
    from_tokens(source, &lexer::tokenize(source))
}

/// Build attributes from the tokens of a bracket's interior.
///
/// `tokens` must come from tokenizing `source`.
pub(crate) fn from_tokens(source: &str, tokens: &[PositionedToken<'_>]) -> Attributes {
    let mut attributes = Attributes::new();

    for entry in tokens.split(|t| matches!(t.token, Token::Comma | Token::Semicolon)) {
        let Some(equals) = entry.iter().position(|t| t.token == Token::Equals) else {
            let text = source_text(source, entry);
            if !text.is_empty() {
                trace!(entry = text; "Dropping attribute without value");
            }
            continue;
        };

        let key = entry_value(source, &entry[..equals]);
        if key.is_empty() {
            trace!(entry = source_text(source, entry); "Dropping attribute without key");
            continue;
        }

        attributes.insert(key, entry_value(source, &entry[equals + 1..]));
    }

    attributes
}

/// One side of an `=`: the content of a lone quoted string, else the raw text.
fn entry_value(source: &str, tokens: &[PositionedToken<'_>]) -> String {
    let mut significant = tokens.iter().filter(|t| !t.is_trivia());
    match (significant.next(), significant.next()) {
        (
            Some(PositionedToken {
                token: Token::QuotedString(text),
                ..
            }),
            None,
        ) => text.clone(),
        _ => source_text(source, tokens).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(attributes: &Attributes) -> Vec<(&str, &str)> {
        attributes.iter().collect()
    }

    #[test]
    fn test_simple_list() {
        let attrs = parse("color=red, shape=box");
        assert_eq!(pairs(&attrs), vec![("color", "red"), ("shape", "box")]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let attrs = parse("  color =  red  ,shape= box ");
        assert_eq!(pairs(&attrs), vec![("color", "red"), ("shape", "box")]);
    }

    #[test]
    fn test_semicolon_separator() {
        let attrs = parse("color=red; shape=box");
        assert_eq!(pairs(&attrs), vec![("color", "red"), ("shape", "box")]);
    }

    #[test]
    fn test_quoted_value_is_unquoted() {
        let attrs = parse(r#"label="Start here""#);
        assert_eq!(attrs.get("label"), Some("Start here"));
    }

    #[test]
    fn test_separators_inside_quotes_are_kept() {
        let attrs = parse(r#"label="a, b; c", color=red"#);
        assert_eq!(pairs(&attrs), vec![("label", "a, b; c"), ("color", "red")]);
    }

    #[test]
    fn test_escaped_quote_inside_value() {
        let attrs = parse(r#"label="say \"hi\", then go""#);
        assert_eq!(attrs.get("label"), Some(r#"say "hi", then go"#));
    }

    #[test]
    fn test_value_split_on_first_equals() {
        let attrs = parse("label=a=b");
        assert_eq!(attrs.get("label"), Some("a=b"));
    }

    #[test]
    fn test_malformed_entries_dropped() {
        let attrs = parse("filled, =red, color=blue,,");
        assert_eq!(pairs(&attrs), vec![("color", "blue")]);
    }

    #[test]
    fn test_empty_value_kept() {
        let attrs = parse("label=");
        assert_eq!(attrs.get("label"), Some(""));
    }

    #[test]
    fn test_last_write_wins() {
        let attrs = parse("color=red, color=blue");
        assert_eq!(pairs(&attrs), vec![("color", "blue")]);
    }

    #[test]
    fn test_quoted_key() {
        let attrs = parse(r#""font name"=Arial"#);
        assert_eq!(attrs.get("font name"), Some("Arial"));
    }

    #[test]
    fn test_unquoted_values_keep_source_text() {
        let attrs = parse("color=#ff0000, width=1.5in, label=a b");
        assert_eq!(
            pairs(&attrs),
            vec![("color", "#ff0000"), ("width", "1.5in"), ("label", "a b")]
        );
    }

    #[test]
    fn test_single_quote_char_not_stripped() {
        let attrs = parse(r#"label=""#);
        assert_eq!(attrs.get("label"), Some("\""));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
    }
}
