use std::iter::Peekable;

use crate::{
    ast::{Expr, Program, Property},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            statement::parse_statement,
            unary::parse_unary,
            utils::{expect, next_is, parse_identifier, skip_semicolons},
        },
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Largest number of parameters a function may declare, and of arguments a
/// call may pass.
pub const MAX_ARGUMENTS: usize = 255;

/// Parses source text into a [`Program`].
///
/// The text is tokenized first; then statements are parsed until the token
/// stream is exhausted. Stray `;` between statements are skipped.
///
/// # Errors
/// Returns the first lexical or syntax error. End-of-input errors report the
/// last line of the source.
///
/// # Example
/// ```
/// use laika::{ast::Statement, interpreter::parser::core::parse_program};
///
/// let program = parse_program("mut x = 1; x = x + 1;").unwrap();
/// assert_eq!(program.body.len(), 2);
/// assert!(matches!(program.body[0], Statement::VariableDeclaration { .. }));
/// ```
pub fn parse_program(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();

    let mut body = Vec::new();
    loop {
        skip_semicolons(&mut iter);
        if iter.peek().is_none() {
            break;
        }
        match parse_statement(&mut iter) {
            Ok(statement) => body.push(statement),
            Err(ParseError::UnexpectedEndOfInput { .. }) => {
                return Err(ParseError::UnexpectedEndOfInput { line: last_line });
            },
            Err(e) => return Err(e),
        }
    }

    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy:
///
/// ```text
///     assignment -> object -> unary -> or -> and -> comparison
///                -> additive -> multiplicative -> call/member -> primary
/// ```
///
/// Grammar: `expression := assignment`
///
/// Parenthesized expressions re-enter here, so the stack is grown on demand
/// for deeply nested input.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    ensure_sufficient_stack(|| parse_assignment(tokens))
}

/// Parses a right-associative assignment.
///
/// The left-hand side is not restricted here; any expression is accepted and
/// the evaluator rejects targets that are not identifiers.
///
/// Grammar: `assignment := object ("=" assignment)?`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_object(tokens)?;

    if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        let value = parse_expression(tokens)?;
        return Ok(Expr::Assignment { assignee: Box::new(left),
                                     value:    Box::new(value), });
    }

    Ok(left)
}

/// Parses an object literal, or falls through to the unary tier.
///
/// Each property is either `key: expression` or a shorthand `key` whose value
/// is looked up when the literal is evaluated. Entries are comma-separated and
/// a trailing comma before `}` is allowed.
///
/// Grammar:
/// ```text
///     object   := "{" (property ("," property)* ","?)? "}"
///               | unary
///     property := identifier (":" expression)?
/// ```
fn parse_object<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if !next_is(tokens, &Token::LBrace) {
        return parse_unary(tokens);
    }
    tokens.next();

    let mut properties = Vec::new();
    loop {
        if next_is(tokens, &Token::RBrace) {
            break;
        }
        let key = parse_identifier(tokens)?;

        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
                properties.push(Property { key, value: None });
            },
            Some((Token::RBrace, _)) => properties.push(Property { key, value: None }),
            Some((Token::Colon, _)) => {
                tokens.next();
                let value = parse_expression(tokens)?;
                properties.push(Property { key,
                                           value: Some(value) });

                if !next_is(tokens, &Token::RBrace) {
                    expect(tokens,
                           &Token::Comma,
                           "Expected comma or close brace following property")?;
                }
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ':' in key assignment, found '{tok}'"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    expect(tokens, &Token::RBrace, "Expected closing brace")?;

    Ok(Expr::ObjectLiteral(properties))
}
