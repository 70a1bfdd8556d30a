use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, skip_semicolons},
        },
    },
};

/// Parses a brace-delimited statement list.
///
/// Function bodies, branch bodies and loop bodies all use this form; there
/// is no single-statement body without braces. Semicolons between the
/// statements are optional.
///
/// Grammar: `block := "{" (statement ";"*)* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `owner`: Names the construct the block belongs to, used in errors.
///
/// # Returns
/// The statements inside the braces.
///
/// # Errors
/// - `UnexpectedToken` if the block does not start with `{`.
/// - `UnexpectedEndOfInput` if the closing `}` is missing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, owner: &str) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::LBrace, &format!("Expected '{{' to open {owner} body"))?;

    let mut statements = Vec::new();
    loop {
        skip_semicolons(tokens);

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(statements)
}
