use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting depth of blocks, parentheses, prefix operators and
/// operator chains.
///
/// Parsing, checking and evaluation all recurse over the tree, so the limit
/// keeps every pass well inside the stack.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Returns the depth one level below `depth`.
///
/// # Errors
/// `ParseError::NestingTooDeep` once the new depth exceeds
/// [`MAX_NESTING_DEPTH`].
pub fn nest(depth: usize, line: usize) -> ParseResult<usize> {
    let depth = depth + 1;
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                line });
    }
    Ok(depth)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the logical connectives, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := logical`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `depth`: Nesting depth of the enclosing construct.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical(tokens, depth)
}
