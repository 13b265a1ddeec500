use std::iter::Peekable;

use crate::{
    ast::{Block, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, nest},
            statement::parse_statement,
            utils::{expect, expect_terminator, skip_newlines},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements, each ended by a newline or
/// by the closing brace. Blank lines inside the block are ignored.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `depth`: Nesting depth of the enclosing construct. The block's
///   statements are one level deeper.
///
/// # Returns
/// The parsed [`Block`], with the line of its opening brace.
///
/// # Errors
/// `ParseError::NestingTooDeep` past the nesting limit, and any error of the
/// statements inside.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::LBrace, "'{'")?;
    let depth = nest(depth, line)?;
    let statements = parse_statements(tokens, depth, |token| matches!(token, Token::RBrace))?;
    expect(tokens, &Token::RBrace, "'}'")?;

    Ok(Block { statements, line })
}

/// Parses statements until `is_end` accepts the next token or the input is
/// exhausted. The ending token is left in the stream.
///
/// Used for brace blocks and for `case` bodies, which end at the next `case`,
/// `default` or `}`.
pub fn parse_statements<'a, I>(tokens: &mut Peekable<I>,
                               depth: usize,
                               is_end: impl Fn(&Token) -> bool)
                               -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    skip_newlines(tokens);
    while let Some((token, _)) = tokens.peek() {
        if is_end(token) {
            break;
        }
        statements.push(parse_statement(tokens, depth)?);
        expect_terminator(tokens)?;
        skip_newlines(tokens);
    }

    Ok(statements)
}
