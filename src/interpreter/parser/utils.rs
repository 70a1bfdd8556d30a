use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses the items of a comma-separated list up to and including
/// `closing`.
///
/// The opening token must already be consumed. An empty list is just the
/// closing token. No trailing comma is accepted.
///
/// # Errors
/// - Any error of `parse_item`.
/// - `UnexpectedToken` if an item is followed by neither `,` nor `closing`.
/// - `UnexpectedEndOfInput` if the list is never closed.
pub(in crate::interpreter::parser) fn parse_list_until<'a, I, T>(
    tokens: &mut Peekable<I>,
    closing: &Token,
    mut parse_item: impl FnMut(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if next_is(tokens, closing) {
        tokens.next();
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);

        let Some((token, line)) = tokens.next() else {
            return Err(ParseError::UnexpectedEndOfInput { line: 0 });
        };
        match token {
            Token::Comma => {},
            tok if tok == closing => return Ok(items),
            tok => {
                return Err(ParseError::UnexpectedToken { token: format!("List items must be separated by ',' and closed by '{closing}', found '{tok}'"),
                                                         line:  *line, });
            },
        }
    }
}

/// Whether the next token equals `expected`. Nothing is consumed.
pub(in crate::interpreter::parser) fn next_is<'a, I>(tokens: &mut Peekable<I>,
                                                     expected: &Token)
                                                     -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().is_some_and(|(tok, _)| tok == expected)
}

/// Consumes a name: a variable, function, parameter or property key.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a name, found '{tok}'"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the next token and checks that it is `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
/// - `message`: Describes what was expected, used in the error.
///
/// # Returns
/// The line of the consumed token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    message: &str)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("{message}, found '{tok}'"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Skips any number of `;` tokens.
pub(in crate::interpreter::parser) fn skip_semicolons<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Returns the line of the next token, or `0` at the end of input.
pub(in crate::interpreter::parser) fn peek_line<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(0, |(_, line)| *line)
}
