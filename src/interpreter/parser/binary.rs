use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, nest},
            unary::parse_unary,
        },
    },
};

/// Parses the logical connectives `&&` and `||`.
///
/// Both connectives share the lowest precedence level and associate to the
/// left, so `true || false && false` groups as `(true || false) && false`.
///
/// The rule is: `logical := not (("&&" | "||") not)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `depth`: Nesting depth of the enclosing construct. Every connective
///   nests one level deeper.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the operand itself when no connective
/// follows.
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut depth = depth;
    let mut left = parse_not(tokens, depth)?;
    while let Some((token, line)) = tokens.peek() {
        if let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::And | BinaryOperator::Or)
        {
            tokens.next();
            depth = nest(depth, *line)?;
            let right = parse_not(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: *line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical negation.
///
/// `!` binds looser than the relational operators: `!a == b` is
/// `!(a == b)`.
///
/// The rule is: `not := "!" not | relational`
pub fn parse_not<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Bang, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_not(tokens, nest(depth, *line)?)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Not,
                                  expr: Box::new(expr),
                                  line: *line, });
    }
    parse_relational(tokens, depth)
}

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators:
/// `<`, `>`, `<=`, `>=`, `==`, `!=`.
///
/// An ordering (`<`, `>`, `<=`, `>=`) binds tighter than an equality, so two
/// conditions can be compared directly: `x > 0 == y > 0` is
/// `(x > 0) == (y > 0)`. Otherwise comparisons do not chain: `a < b < c` and
/// `a == b == c` are syntax errors. Operands may be negated conditions, so
/// `done == !ready` is accepted.
///
/// The rule is:
/// ```text
///     relational := ordering (("==" | "!=") ordering)?
///     ordering   := operand (("<" | ">" | "<=" | ">=") operand)?
///     operand    := "!" operand | additive
/// ```
///
/// # Errors
/// `ParseError::ChainedComparison` for a comparison operator left over
/// after the rule above.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_ordering(tokens, depth)?;

    if let Some((op, line)) = peek_comparison(tokens)
       && op.is_equality()
    {
        tokens.next();
        let depth = nest(depth, line)?;
        let right = parse_ordering(tokens, depth)?;
        expr = Expr::BinaryOp { left: Box::new(expr),
                                op,
                                right: Box::new(right),
                                line };
    }

    if let Some((_, line)) = peek_comparison(tokens) {
        return Err(ParseError::ChainedComparison { line });
    }
    Ok(expr)
}

fn parse_ordering<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_comparison_operand(tokens, depth)?;

    let Some((op, line)) = peek_comparison(tokens).filter(|(op, _)| op.is_ordering()) else {
        return Ok(left);
    };
    tokens.next();

    let right = parse_comparison_operand(tokens, nest(depth, line)?)?;
    Ok(Expr::BinaryOp { left: Box::new(left),
                        op,
                        right: Box::new(right),
                        line })
}

/// Parses an operand of a comparison: any number of `!` followed by an
/// additive expression.
fn parse_comparison_operand<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Bang, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_comparison_operand(tokens, nest(depth, *line)?)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Not,
                                  expr: Box::new(expr),
                                  line: *line, });
    }
    parse_additive(tokens, depth)
}

fn peek_comparison<'a, I>(tokens: &mut Peekable<I>) -> Option<(BinaryOperator, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, line) = tokens.peek()?;
    token_to_binary_operator(token).filter(|op| op.is_relational())
                                   .map(|op| (op, *line))
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `depth`: Nesting depth of the enclosing construct.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut depth = depth;
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            depth = nest(depth, *line)?;
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: *line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut depth = depth;
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            depth = nest(depth, *line)?;
            let right = parse_unary(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: *line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to the binary operator it spells, if any.
///
/// ## Example
/// ```
/// use golite::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::ModAssign), None);
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}
