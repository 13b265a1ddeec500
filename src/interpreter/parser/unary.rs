use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, nest, parse_expression},
    },
};

/// Parses a unary minus expression.
///
/// Unary minus is right-associative and binds tighter than every binary
/// operator. Applied directly to an unsigned integer literal it is folded
/// into a negative literal, so that `-9223372036854775808` is in range
/// although its magnitude alone is not.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting depth of the enclosing construct. Every `-` nests one
///   level deeper.
///
/// # Returns
/// An [`Expr::UnaryOp`], a folded literal or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens, nest(depth, *line)?)?;
        if let Expr::Literal { value: LiteralValue::Integer(digits),
                               .. } = &expr
           && !digits.starts_with('-')
        {
            return Ok(Expr::Literal { value: LiteralValue::Integer(format!("-{digits}")),
                                      line:  *line, });
        }
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(expr),
                                  line: *line, });
    }
    parse_primary(tokens, depth)
}

/// Parses a primary expression.
///
/// Primary expressions are the atomic building blocks:
/// - integer, string and boolean literals,
/// - identifiers,
/// - parenthesized expressions.
///
/// A parenthesized expression nests one level deeper than `depth`.
///
/// # Errors
/// - `ParseError::NestingTooDeep` past the nesting limit.
/// - `ParseError::ExpectedClosingParen` if a group is not closed.
/// - `ParseError::Expected` for any token that cannot start an expression.
/// - `ParseError::UnexpectedEndOfInput` if the stream is exhausted.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(digits), line)) => {
            Ok(Expr::Literal { value: LiteralValue::Integer(digits.clone()),
                               line:  *line, })
        },
        Some((Token::Str(s), line)) => Ok(Expr::Literal { value: LiteralValue::Text(s.clone()),
                                                          line:  *line, }),
        Some((Token::Bool(b), line)) => Ok(Expr::Literal { value: LiteralValue::Bool(*b),
                                                           line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens, nest(depth, *line)?)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { line: *line }),
            }
        },
        Some((token, line)) => Err(ParseError::Expected { expected: "expression".to_string(),
                                                          found:    token.to_string(),
                                                          line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "expression".to_string() }),
    }
}
