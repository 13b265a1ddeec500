use std::iter::Peekable;

use crate::{
    ast::{
        Block, ConditionalBranch, ForShape, ForStatement, IfStatement, SwitchCase, SwitchStatement,
    },
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            block::{parse_block, parse_statements},
            core::{ParseResult, nest, parse_expression},
            statement::parse_simple_statement,
            utils::{expect, expect_keyword, parse_comma_separated, skip_newlines},
        },
    },
};

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if <condition> { ... }
///     else if <condition> { ... }
///     else { ... }
/// ```
/// `else` must follow the closing brace of the previous branch on the same
/// line.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
/// - `depth`: Nesting depth of the enclosing block.
///
/// # Returns
/// An [`IfStatement`] holding every guarded branch in order.
///
/// # Errors
/// - `ParseError::Expected` if `else` is followed by neither `if` nor `{`.
/// - Propagates any errors from condition or block parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<IfStatement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_keyword(tokens, Keyword::If)?;
    let mut branches = vec![parse_branch(tokens, depth)?];
    let mut else_body = None;

    while let Some((Token::Keyword(Keyword::Else), _)) = tokens.peek() {
        tokens.next();
        match tokens.peek() {
            Some((Token::Keyword(Keyword::If), _)) => {
                tokens.next();
                branches.push(parse_branch(tokens, depth)?);
            },
            Some((Token::LBrace, _)) => {
                else_body = Some(parse_block(tokens, depth)?);
                break;
            },
            Some((token, line)) => {
                return Err(ParseError::Expected { expected: "'if' or '{' after 'else'".to_string(),
                                                  found:    token.to_string(),
                                                  line:     *line, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "'if' or '{'".to_string() });
            },
        }
    }

    Ok(IfStatement { branches,
                     else_body,
                     line })
}

/// Parses `condition { body }`.
fn parse_branch<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<ConditionalBranch>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens, depth)?;
    let body = parse_block(tokens, depth)?;
    Ok(ConditionalBranch { condition, body })
}

/// Parses a `switch` statement.
///
/// Syntax:
/// ```text
///     switch [subject] {
///     case <expr>, <expr>:
///         ...
///     default:
///         ...
///     }
/// ```
/// A case body runs until the next `case`, `default` or the closing brace.
/// `default` may appear in any position, but only once.
///
/// # Errors
/// - `ParseError::DuplicateDefault` for a second `default` clause.
/// - `ParseError::Expected` for an empty `case` list or a stray token.
pub fn parse_switch<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<SwitchStatement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_keyword(tokens, Keyword::Switch)?;
    let subject = match tokens.peek() {
        Some((Token::LBrace, _)) => None,
        _ => Some(parse_expression(tokens, depth)?),
    };
    expect(tokens, &Token::LBrace, "'{'")?;

    let mut cases = Vec::new();
    let mut default = None;

    loop {
        skip_newlines(tokens);
        match tokens.next() {
            Some((Token::Keyword(Keyword::Case), case_line)) => {
                let values = parse_comma_separated(tokens,
                                                   |tokens| parse_expression(tokens, depth),
                                                   &Token::Colon)?;
                if values.is_empty() {
                    return Err(ParseError::Expected { expected: "case expression".to_string(),
                                                      found:    Token::Colon.to_string(),
                                                      line:     *case_line, });
                }
                let body = parse_case_body(tokens, depth, *case_line)?;
                cases.push(SwitchCase { values, body });
            },
            Some((Token::Keyword(Keyword::Default), default_line)) => {
                expect(tokens, &Token::Colon, "':'")?;
                if default.is_some() {
                    return Err(ParseError::DuplicateDefault { line: *default_line });
                }
                default = Some(parse_case_body(tokens, depth, *default_line)?);
            },
            Some((Token::RBrace, _)) => break,
            Some((token, line)) => {
                return Err(ParseError::Expected { expected: "'case', 'default' or '}'".to_string(),
                                                  found:    token.to_string(),
                                                  line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { expected: "'}'".to_string() }),
        }
    }

    Ok(SwitchStatement { subject,
                         cases,
                         default,
                         line })
}

/// Parses the statements of one `case` or `default` clause, one level
/// deeper than the `switch`.
fn parse_case_body<'a, I>(tokens: &mut Peekable<I>,
                          depth: usize,
                          line: usize)
                          -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statements = parse_statements(tokens, nest(depth, line)?, |token| {
                         matches!(token,
                                  Token::Keyword(Keyword::Case | Keyword::Default) | Token::RBrace)
                     })?;
    Ok(Block { statements, line })
}

/// Parses a `for` loop in any of its three shapes.
///
/// Syntax:
/// ```text
///     for { ... }
///     for <condition> { ... }
///     for [init]; [condition]; [post] { ... }
/// ```
/// The three-clause shape is recognized by a `;` before the opening brace of
/// the body.
///
/// # Errors
/// Propagates errors from the clauses and the body.
pub fn parse_for<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<ForStatement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_keyword(tokens, Keyword::For)?;

    let shape = if let Some((Token::LBrace, _)) = tokens.peek() {
        ForShape::Infinite
    } else if has_clauses(tokens) {
        parse_clauses(tokens, depth)?
    } else {
        ForShape::Condition(parse_expression(tokens, depth)?)
    };

    let body = parse_block(tokens, depth)?;

    Ok(ForStatement { shape, body, line })
}

/// Looks ahead, without consuming anything, for a `;` before the loop body.
fn has_clauses<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.clone()
          .map(|(token, _)| token)
          .take_while(|token| !matches!(token, Token::LBrace | Token::NewLine))
          .any(|token| matches!(token, Token::Semicolon))
}

/// Parses `[init]; [condition]; [post]`.
fn parse_clauses<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<ForShape>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let init = match tokens.peek() {
        Some((Token::Semicolon, _)) => None,
        _ => Some(Box::new(parse_simple_statement(tokens, depth)?)),
    };
    expect(tokens, &Token::Semicolon, "';'")?;

    let condition = match tokens.peek() {
        Some((Token::Semicolon, _)) => None,
        _ => Some(parse_expression(tokens, depth)?),
    };
    expect(tokens, &Token::Semicolon, "';'")?;

    let post = match tokens.peek() {
        Some((Token::LBrace, _)) => None,
        _ => Some(Box::new(parse_simple_statement(tokens, depth)?)),
    };

    Ok(ForShape::Clauses { init, condition, post })
}
