use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_logical_or,
            core::{MAX_ARGUMENTS, ParseResult, parse_expression},
            utils::{expect, parse_list_until},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `!`  (logical not)
/// - `++` (in-place increment)
/// - `--` (in-place decrement)
///
/// Unary operators sit below `or` in the precedence ladder, so their operand
/// is a whole boolean expression: `!a and b` is parsed as `!(a and b)`.
/// They nest to the right, so `!!x` is `!(!x)`.
///
/// Grammar:
/// ```text
///     unary := ("!" | "++" | "--") unary
///            | logical_or
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or the expression of the next tier.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Bang, _)) => UnaryOperator::Not,
        Some((Token::PlusPlus, _)) => UnaryOperator::Increment,
        Some((Token::MinusMinus, _)) => UnaryOperator::Decrement,
        _ => return parse_logical_or(tokens),
    };
    tokens.next();

    let operand = ensure_sufficient_stack(|| parse_unary(tokens))?;
    Ok(Expr::Unary { op,
                     operand: Box::new(operand) })
}

/// Parses a primary expression followed by any chain of member accesses and
/// calls.
///
/// Postfix forms compose left to right and may alternate freely, each one
/// wrapping the node built so far:
/// ```text
///     f(x)(y).z[w]
/// ```
///
/// Grammar:
/// ```text
///     call_member := primary ( "." identifier
///                            | "[" expression "]"
///                            | "(" arguments ")" )*
/// ```
///
/// # Errors
/// Returns a `ParseError` if:
/// - a `.` is not followed by an identifier,
/// - a `[` is not closed with `]`,
/// - a call passes more than [`MAX_ARGUMENTS`] arguments.
pub(crate) fn parse_call_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut node = parse_primary(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::Dot, line)) => {
                let line = *line;
                tokens.next();
                let property = match tokens.next() {
                    Some((Token::Identifier(name), _)) => Expr::Identifier(name.clone()),
                    Some(_) => return Err(ParseError::InvalidMemberProperty { line }),
                    None => return Err(ParseError::UnexpectedEndOfInput { line }),
                };
                node = Expr::Member { object:   Box::new(node),
                                      property: Box::new(property),
                                      computed: false, };
            },
            Some((Token::LBracket, _)) => {
                tokens.next();
                let property = parse_expression(tokens)?;
                expect(tokens, &Token::RBracket, "Expected ']' after computed property")?;
                node = Expr::Member { object:   Box::new(node),
                                      property: Box::new(property),
                                      computed: true, };
            },
            Some((Token::LParen, line)) => {
                let line = *line;
                let arguments = parse_arguments(tokens)?;
                if arguments.len() > MAX_ARGUMENTS {
                    return Err(ParseError::TooManyArguments { count: arguments.len(),
                                                              max: MAX_ARGUMENTS,
                                                              line });
                }
                node = Expr::Call { caller: Box::new(node),
                                    arguments };
            },
            _ => break,
        }
    }

    Ok(node)
}

/// Parses a parenthesized, comma-separated argument list.
///
/// Used for call arguments and, through the same grammar, for the parameter
/// list of a function declaration. The length limit is checked by the
/// caller, which knows which error to report.
///
/// Grammar: `arguments := "(" (expression ("," expression)*)? ")"`
pub(crate) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::LParen, "Expected '(' to open argument list")?;
    parse_list_until(tokens, &Token::RParen, parse_expression)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - identifiers
/// - numeric literals
/// - string literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := identifier | number | string | "(" expression ")"
/// ```
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(Expr::Identifier(name.clone())),
        Some((Token::Number(value), _)) => Ok(Expr::NumericLiteral(*value)),
        Some((Token::Str(value), _)) => Ok(Expr::StringLiteral(value.clone())),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "Expected ')' after grouped expression")?;
            Ok(expr)
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Unexpected token '{tok}' found while parsing"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
