use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::core::ParseResult,
        value::kind::ValueKind,
    },
};

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The required token.
/// - `description`: How the required token is named in the error message.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// `ParseError::Expected` if a different token follows, or
/// `ParseError::UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, line)) if token == expected => Ok(*line),
        Some((token, line)) => Err(ParseError::Expected { expected: description.to_string(),
                                                          found:    token.to_string(),
                                                          line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: description.to_string() }),
    }
}

/// Consumes the next token, which must be the keyword `keyword`.
pub(in crate::interpreter::parser) fn expect_keyword<'a, I>(tokens: &mut Peekable<I>,
                                                            keyword: Keyword)
                                                            -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::Keyword(keyword), &format!("'{keyword}'"))
}

/// Skips any number of newline tokens.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Ends a statement inside a block.
///
/// A statement is terminated by a newline, which is consumed, or by the
/// closing brace of its block, which is left for the caller.
///
/// # Errors
/// `ParseError::Expected` if anything else follows the statement.
pub(in crate::interpreter::parser) fn expect_terminator<'a, I>(tokens: &mut Peekable<I>)
                                                               -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::NewLine, _)) => {
            tokens.next();
            Ok(())
        },
        Some((Token::RBrace, _)) | None => Ok(()),
        Some((token, line)) => Err(ParseError::Expected { expected: "newline".to_string(),
                                                          found:    token.to_string(),
                                                          line:     *line, }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by `fmt.Println` argument lists and `case` value
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `)` or `:`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(ParseError::Expected { expected: format!("',' or '{closing}'"),
                                                  found:    tok.to_string(),
                                                  line:     *line, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: format!("'{closing}'") });
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// Reserved words never reach this point as identifiers: the lexer has
/// already turned them into keyword tokens, so `var if = 1` fails here.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), line)) => Ok((s.clone(), *line)),
        Some((tok, line)) => Err(ParseError::Expected { expected: "identifier".to_string(),
                                                        found:    tok.to_string(),
                                                        line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "identifier".to_string() }),
    }
}

/// Consumes a type name (`int`, `bool` or `string`) if one follows.
pub(in crate::interpreter::parser) fn parse_optional_type<'a, I>(tokens: &mut Peekable<I>)
                                                                 -> Option<ValueKind>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let kind = match tokens.peek() {
        Some((Token::Keyword(Keyword::Int), _)) => ValueKind::Int,
        Some((Token::Keyword(Keyword::Bool), _)) => ValueKind::Bool,
        Some((Token::Keyword(Keyword::String), _)) => ValueKind::Text,
        _ => return None,
    };
    tokens.next();
    Some(kind)
}
