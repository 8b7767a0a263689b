use std::fmt;

use crate::span::Span;

/// Token types for the DOT subset
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'src> {
    // Identifiers and literals
    Identifier(&'src str),
    Numeral(&'src str),
    QuotedString(String),

    // Edge operators
    DirectedEdge,   // ->
    UndirectedEdge, // --

    // Punctuation
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Semicolon,    // ;
    Comma,        // ,
    Equals,       // =
    Colon,        // :

    // Comments
    LineComment(&'src str),  // // comment
    BlockComment(&'src str), // /* comment */

    // Whitespace
    Whitespace,
    Newline,

    /// Any character the lexer does not recognize.
    Unknown(char),
}

impl<'src> Token<'src> {
    /// Tokens that carry no meaning for statement classification.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::LineComment(_) | Token::BlockComment(_)
        )
    }

    /// The node or graph id this token spells, if it can be used as one.
    ///
    /// Quoted strings yield their unquoted content.
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Token::Identifier(name) | Token::Numeral(name) => Some(name),
            Token::QuotedString(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true if this is the identifier `keyword`, ignoring ASCII case.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Identifier(name) if name.eq_ignore_ascii_case(keyword))
    }
}

/// A token with position information
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}

impl<'src> std::ops::Deref for PositionedToken<'src> {
    type Target = Token<'src>;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

/// Source text covered by a run of tokens, trimmed.
pub fn source_text<'src>(source: &'src str, tokens: &[PositionedToken<'_>]) -> &'src str {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => source[first.span.start()..last.span.end()].trim(),
        _ => "",
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{name}"),
            Token::Numeral(value) => write!(f, "{value}"),
            Token::QuotedString(s) => write!(f, "\"{s}\""),

            Token::DirectedEdge => write!(f, "->"),
            Token::UndirectedEdge => write!(f, "--"),

            Token::LeftBrace => write!(f, "{{"),
            Token::RightBrace => write!(f, "}}"),
            Token::LeftBracket => write!(f, "["),
            Token::RightBracket => write!(f, "]"),
            Token::Semicolon => write!(f, ";"),
            Token::Comma => write!(f, ","),
            Token::Equals => write!(f, "="),
            Token::Colon => write!(f, ":"),

            Token::LineComment(comment) => write!(f, "//{comment}"),
            Token::BlockComment(comment) => write!(f, "/*{comment}*/"),
            Token::Whitespace => write!(f, " "),
            Token::Newline => write!(f, "\\n"),

            Token::Unknown(c) => write!(f, "{c}"),
        }
    }
}
