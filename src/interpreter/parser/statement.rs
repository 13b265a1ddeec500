use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Declaration, Initializer, Scope, Statement, StepOperator},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            control::{parse_for, parse_if, parse_switch},
            core::{ParseResult, parse_expression},
            utils::{
                expect, expect_keyword, parse_comma_separated, parse_identifier,
                parse_optional_type,
            },
        },
    },
};

/// Parses a single statement inside a block.
///
/// A statement may be one of:
/// - a `var` or `const` declaration,
/// - an `if`, `switch` or `for` construct,
/// - `break` or `continue`,
/// - a simple statement (see [`parse_simple_statement`]).
///
/// The statement terminator is not consumed; see
/// [`parse_statements`](crate::interpreter::parser::block::parse_statements).
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `depth`: Nesting depth of the enclosing block.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Keyword(Keyword::Var | Keyword::Const), _)) => {
            Ok(Statement::Declaration(parse_declaration(tokens, Scope::Local, depth)?))
        },
        Some((Token::Keyword(Keyword::If), _)) => Ok(Statement::If(parse_if(tokens, depth)?)),
        Some((Token::Keyword(Keyword::Switch), _)) => {
            Ok(Statement::Switch(parse_switch(tokens, depth)?))
        },
        Some((Token::Keyword(Keyword::For), _)) => Ok(Statement::For(parse_for(tokens, depth)?)),
        Some((Token::Keyword(Keyword::Break), line)) => {
            tokens.next();
            Ok(Statement::Break { line: *line })
        },
        Some((Token::Keyword(Keyword::Continue), line)) => {
            tokens.next();
            Ok(Statement::Continue { line: *line })
        },
        _ => parse_simple_statement(tokens, depth),
    }
}

/// Parses a statement that may also appear as the init or post clause of a
/// three-clause `for` loop.
///
/// Grammar:
/// ```text
///     simple := identifier ":=" expression
///             | identifier "=" expression
///             | identifier ("+=" | "-=" | "*=" | "/=" | "%=") expression
///             | identifier ("++" | "--")
///             | "fmt" "." "Println" "(" arguments? ")"
/// ```
///
/// # Errors
/// Returns a `ParseError` if the statement matches none of the forms above.
pub fn parse_simple_statement<'a, I>(tokens: &mut Peekable<I>,
                                     depth: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Keyword(Keyword::Fmt), _)) = tokens.peek() {
        return parse_print(tokens, depth);
    }

    let (name, line) = match tokens.peek() {
        Some((Token::Identifier(_), _)) => parse_identifier(tokens)?,
        Some((token, line)) => {
            return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                     line:  *line, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "statement".to_string() });
        },
    };

    match tokens.next() {
        Some((Token::Define, _)) => {
            let value = parse_expression(tokens, depth)?;
            Ok(Statement::Define { name, value, line })
        },
        Some((Token::Equals, _)) => {
            let value = parse_expression(tokens, depth)?;
            Ok(Statement::Assignment { name, value, line })
        },
        Some((Token::PlusPlus, _)) => Ok(Statement::Step { name,
                                                           op: StepOperator::Increment,
                                                           line }),
        Some((Token::MinusMinus, _)) => Ok(Statement::Step { name,
                                                             op: StepOperator::Decrement,
                                                             line }),
        Some((token, token_line)) => {
            let Some(op) = compound_operator(token) else {
                let expected = "an assignment, '++' or '--'".to_string();
                return Err(ParseError::Expected { expected,
                                                  found: token.to_string(),
                                                  line: *token_line });
            };
            let value = parse_expression(tokens, depth)?;
            Ok(Statement::CompoundAssignment { name, op, value, line })
        },
        None => {
            let expected = format!("an assignment to '{name}'");
            Err(ParseError::UnexpectedEndOfInput { expected })
        },
    }
}

/// Parses a `var` or `const` declaration.
///
/// Grammar:
/// ```text
///     declaration := ("var" | "const") identifier type? ("=" expression)?
///     type        := "int" | "bool" | "string"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `var` or `const`.
/// - `scope`: The table the declaration binds into.
/// - `depth`: Nesting depth of the enclosing block.
///
/// # Errors
/// - `ParseError::MissingTypeOrValue` for `var x` with neither part.
/// - `ParseError::MissingConstValue` for a `const` without initializer.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                                scope: Scope,
                                depth: usize)
                                -> ParseResult<Declaration>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (constant, line) = match tokens.next() {
        Some((Token::Keyword(Keyword::Var), line)) => (false, *line),
        Some((Token::Keyword(Keyword::Const), line)) => (true, *line),
        Some((token, line)) => {
            return Err(ParseError::Expected { expected: "'var' or 'const'".to_string(),
                                              found:    token.to_string(),
                                              line:     *line, });
        },
        None => {
            let expected = "'var' or 'const'".to_string();
            return Err(ParseError::UnexpectedEndOfInput { expected });
        },
    };

    let (name, _) = parse_identifier(tokens)?;
    let kind = parse_optional_type(tokens);

    let value = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens, depth)?)
    } else {
        None
    };

    let initializer = match (kind, value) {
        (_, None) if constant => return Err(ParseError::MissingConstValue { name, line }),
        (None, None) => return Err(ParseError::MissingTypeOrValue { name, line }),
        (Some(kind), value) => Initializer::Typed { kind, value },
        (None, Some(value)) => Initializer::Inferred(value),
    };

    Ok(Declaration { name,
                     constant,
                     initializer,
                     scope,
                     line })
}

/// Parses `fmt.Println(arguments)`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_keyword(tokens, Keyword::Fmt)?;
    expect(tokens, &Token::Dot, "'.'")?;
    expect_keyword(tokens, Keyword::Println)?;
    expect(tokens, &Token::LParen, "'('")?;
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, depth),
                                          &Token::RParen)?;

    Ok(Statement::Print { arguments, line })
}

/// Maps a compound assignment token to its arithmetic operator.
const fn compound_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::PlusAssign => Some(BinaryOperator::Add),
        Token::MinusAssign => Some(BinaryOperator::Sub),
        Token::MulAssign => Some(BinaryOperator::Mul),
        Token::DivAssign => Some(BinaryOperator::Div),
        Token::ModAssign => Some(BinaryOperator::Mod),
        _ => None,
    }
}
