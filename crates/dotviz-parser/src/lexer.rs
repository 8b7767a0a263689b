//! Lexical analyzer for DOT source text.
//!
//! The lexer converts source text into a stream of [`Token`]s for the
//! statement classifier. It never fails: characters that start no known
//! token become [`Token::Unknown`], so every byte of the input is covered by
//! exactly one token and later stages decide what to ignore.

use winnow::{
    Parser as _,
    ascii::{digit0, digit1},
    combinator::{alt, delimited, opt, preceded, repeat},
    error::{ContextError, ModalResult},
    stream::{LocatingSlice, Location},
    token::{any, literal, none_of, take_until, take_while},
};

use crate::{
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// Parse a double-quoted string on a single line.
///
/// `\"` is the only escape sequence; any other backslash is kept verbatim.
fn quoted_string<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    let string_char = alt((literal("\\\"").value('"'), none_of(['"', '\n'])));

    delimited(
        '"',
        repeat(0.., string_char).fold(String::new, |mut acc, ch| {
            acc.push(ch);
            acc
        }),
        '"',
    )
    .map(Token::QuotedString)
    .parse_next(input)
}

/// Parse line comment starting with '//'
fn line_comment<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    preceded("//", take_while(0.., |c| c != '\n'))
        .map(Token::LineComment)
        .parse_next(input)
}

/// Parse a `/* ... */` comment that closes on the same line
fn block_comment<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    delimited(
        "/*",
        take_until(0.., "*/").verify(|content: &str| !content.contains('\n')),
        "*/",
    )
    .map(Token::BlockComment)
    .parse_next(input)
}

/// Parse the two edge operators
fn edge_operator<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        literal("->").value(Token::DirectedEdge),
        literal("--").value(Token::UndirectedEdge),
    ))
    .parse_next(input)
}

/// Parse identifiers: a letter or underscore followed by letters, digits or underscores
fn identifier<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_')
        .verify(|s: &str| s.chars().next().is_some_and(|c| !c.is_ascii_digit()))
        .map(Token::Identifier)
        .parse_next(input)
}

/// Parse a DOT numeral: `-?(.[0-9]+ | [0-9]+(.[0-9]*)?)`
fn numeral<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    (
        opt('-'),
        alt((('.', digit1).void(), (digit1, opt(('.', digit0))).void())),
    )
        .take()
        .map(Token::Numeral)
        .parse_next(input)
}

/// Parse single character tokens
fn single_char_token<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '{'.value(Token::LeftBrace),
        '}'.value(Token::RightBrace),
        '['.value(Token::LeftBracket),
        ']'.value(Token::RightBracket),
        ';'.value(Token::Semicolon),
        ','.value(Token::Comma),
        '='.value(Token::Equals),
        ':'.value(Token::Colon),
    ))
    .parse_next(input)
}

/// Parse whitespace (spaces, tabs, carriage returns but not newlines)
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_whitespace() && c != '\n')
        .value(Token::Whitespace)
        .parse_next(input)
}

/// Parse newline
fn newline<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    '\n'.value(Token::Newline).parse_next(input)
}

/// Fallback for any character no other rule accepts
fn unknown<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    any.map(Token::Unknown).parse_next(input)
}

/// Parse a single token with position tracking
fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let token = alt((
        line_comment,      // Must come before unknown '/'
        block_comment,     // Same
        quoted_string,     // Unterminated strings fall through to unknown '"'
        edge_operator,     // Must come before numeral ('-5')
        identifier,        // Must come before numeral ('1a' is not an identifier)
        numeral,           // Must come before unknown '-' and '.'
        single_char_token, // Punctuation
        newline,           // Must come before whitespace
        whitespace,        // General whitespace
        unknown,           // Always succeeds on non-empty input
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Split source text into positioned tokens.
///
/// The returned tokens cover the input without gaps, in order.
pub fn tokenize(input: &str) -> Vec<PositionedToken<'_>> {
    let mut located_input = LocatingSlice::new(input);
    let mut tokens = Vec::new();

    while !located_input.is_empty() {
        match positioned_token(&mut located_input) {
            Ok(token) => tokens.push(token),
            // Only reachable at end of input, as `unknown` accepts any char.
            Err(_) => break,
        }
    }

    tokens
}
