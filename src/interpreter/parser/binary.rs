use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_call_member},
    },
};

/// Parses a chain of `or` operations.
///
/// The rule is: `logical_or := logical_and ("or" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Logical` tree, or the operand alone when no `or` follows.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_logical_and(tokens)?;
    while let Some((Token::Or, _)) = tokens.peek() {
        tokens.next();
        let right = parse_logical_and(tokens)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::Or,
                               right: Box::new(right), };
    }
    Ok(left)
}

/// Parses a chain of `and` operations.
///
/// The rule is: `logical_and := comparison ("and" comparison)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_comparison(tokens)?;
    while let Some((Token::And, _)) = tokens.peek() {
        tokens.next();
        let right = parse_comparison(tokens)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::And,
                               right: Box::new(right), };
    }
    Ok(left)
}

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators:
/// `<`, `>`, `<=`, `>=`, `==`, `!=`. They share one precedence level and
/// associate to the left, so `a < b == c` is `(a < b) == c`.
///
/// The rule is: `comparison := additive (cmp_op additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_additive(tokens)?;
    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token_to_comparison_operator(token)
    {
        tokens.next();
        let right = parse_additive(tokens)?;
        left = Expr::Logical { left: Box::new(left),
                               op,
                               right: Box::new(right) };
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`, whose operands are
/// call and member chains.
///
/// The rule is: `multiplicative := call_member (("*" | "/" | "%") call_member)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_call_member(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_call_member(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its arithmetic operator, if it is one.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Maps a token to its comparison operator, if it is one.
const fn token_to_comparison_operator(token: &Token) -> Option<LogicalOperator> {
    match token {
        Token::Greater => Some(LogicalOperator::Greater),
        Token::GreaterEqual => Some(LogicalOperator::GreaterEqual),
        Token::Less => Some(LogicalOperator::Less),
        Token::LessEqual => Some(LogicalOperator::LessEqual),
        Token::EqualEqual => Some(LogicalOperator::Equal),
        Token::BangEqual => Some(LogicalOperator::NotEqual),
        _ => None,
    }
}
