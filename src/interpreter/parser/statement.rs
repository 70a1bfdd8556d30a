use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, ForLoop, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{MAX_ARGUMENTS, ParseResult, parse_expression},
            unary::parse_arguments,
            utils::{expect, parse_identifier, peek_line},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a single statement.
///
/// The leading token decides the form:
/// - `mut` / `keep`: a variable declaration,
/// - `fn`: a function declaration,
/// - `if`, `while`, `for`: control constructs,
/// - `break`, `pass`, `return`: control-flow statements,
/// - anything else: an expression used as a statement.
///
/// A trailing `;` is left in the stream; statement lists skip it.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    ensure_sufficient_stack(|| parse_statement_inner(tokens))
}

/// Dispatch for [`parse_statement`], which wraps it for stack safety.
fn parse_statement_inner<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Mut | Token::Keep, _)) => parse_variable_declaration(tokens),
        Some((Token::Fn, _)) => parse_function_declaration(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::For, _)) => parse_for(tokens),
        Some((Token::Break, _)) => {
            tokens.next();
            Ok(Statement::Break)
        },
        Some((Token::Pass, _)) => {
            tokens.next();
            Ok(Statement::Pass)
        },
        Some((Token::Return, _)) => parse_return(tokens),
        Some(_) => Ok(Statement::Expression(parse_expression(tokens)?)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `(mut | keep) <identifier> [= <expression>]`.
/// A `mut` declaration without an initializer binds Null; a `keep`
/// declaration must have one.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing,
/// - a `keep` declaration has no value,
/// - the expression is malformed.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let constant = matches!(tokens.next(), Some((Token::Keep, _)));
    let line = peek_line(tokens);
    let name = parse_identifier(tokens)?;

    let value = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else if constant {
        return Err(ParseError::MissingConstantValue { name, line });
    } else {
        None
    };

    Ok(Statement::VariableDeclaration { constant, name, value })
}

/// Parses a function declaration of the form
/// `fn <name>(param1, param2, ...) { <statements> }`.
///
/// The parameter list is parsed like a call's argument list and each entry
/// must then be a bare identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is missing,
/// - a parameter is not an identifier,
/// - more than [`MAX_ARGUMENTS`] parameters are declared,
/// - the body is malformed.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    let line = peek_line(tokens);
    let name = parse_identifier(tokens)?;

    let arguments = parse_arguments(tokens)?;
    if arguments.len() > MAX_ARGUMENTS {
        return Err(ParseError::TooManyParameters { name,
                                                   count: arguments.len(),
                                                   max: MAX_ARGUMENTS,
                                                   line });
    }

    let mut parameters = Vec::with_capacity(arguments.len());
    for argument in &arguments {
        match argument {
            Expr::Identifier(symbol) => parameters.push(symbol.clone()),
            _ => return Err(ParseError::InvalidParameter { function: name, line }),
        }
    }

    let body = parse_block(tokens, "function")?;

    Ok(Statement::Function(Rc::new(FunctionDef { name, parameters, body })))
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if (<condition>) { ... }
///     else if (<condition>) { ... }
///     else { ... }
/// ```
/// An `else if` is stored as an `else` branch holding a single nested `if`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    let condition = parse_condition(tokens, "if statement")?;
    let then_branch = parse_block(tokens, "if")?;

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        if let Some((Token::If, _)) = tokens.peek() {
            vec![parse_statement(tokens)?]
        } else {
            parse_block(tokens, "else")?
        }
    } else {
        Vec::new()
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch })
}

/// Parses `while (<condition>) { ... }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    let condition = parse_condition(tokens, "while loop")?;
    let body = parse_block(tokens, "while loop")?;

    Ok(Statement::While { condition, body })
}

/// Parses `for (<initializer>; <condition>; <increment>) { ... }`.
///
/// Each of the three clauses may be empty, but both semicolons are required.
/// The initializer is either a variable declaration or an expression.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    expect(tokens, &Token::LParen, "Expected '(' after 'for'")?;

    let initializer = match tokens.peek() {
        Some((Token::Semicolon, _)) => None,
        Some((Token::Mut | Token::Keep, _)) => Some(Box::new(parse_variable_declaration(tokens)?)),
        _ => Some(Box::new(Statement::Expression(parse_expression(tokens)?))),
    };
    expect(tokens, &Token::Semicolon, "Expected ';' after for loop initializer")?;

    let condition = match tokens.peek() {
        Some((Token::Semicolon, _)) => None,
        _ => Some(parse_expression(tokens)?),
    };
    expect(tokens, &Token::Semicolon, "Expected ';' after for loop condition")?;

    let increment = match tokens.peek() {
        Some((Token::RParen, _)) => None,
        _ => Some(parse_expression(tokens)?),
    };
    expect(tokens, &Token::RParen, "Expected ')' after for loop clauses")?;

    let body = parse_block(tokens, "for loop")?;

    Ok(Statement::For(ForLoop { initializer,
                                condition,
                                increment,
                                body }))
}

/// Parses `return [<expression>]`.
///
/// The value is omitted when `return` is directly followed by `;`, `}`, the
/// end of input or a line break. A value must start on the same line as
/// `return`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = tokens.next().map(|(_, line)| *line);

    match tokens.peek() {
        None | Some((Token::Semicolon | Token::RBrace, _)) => Ok(Statement::Return(None)),
        Some((_, next)) if Some(*next) != line => Ok(Statement::Return(None)),
        Some(_) => Ok(Statement::Return(Some(parse_expression(tokens)?))),
    }
}

/// Parses a parenthesized condition: `"(" expression ")"`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>, owner: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens,
           &Token::LParen,
           &format!("Expected parenthesized condition in {owner}"))?;
    let condition = parse_expression(tokens)?;
    expect(tokens,
           &Token::RParen,
           &format!("Expected ')' closing the condition in {owner}"))?;

    Ok(condition)
}
