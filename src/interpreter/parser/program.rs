use std::iter::Peekable;

use crate::{
    ast::{Import, Program, Scope},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            block::parse_block,
            core::ParseResult,
            statement::parse_declaration,
            utils::{expect, expect_keyword, skip_newlines},
        },
    },
};

/// Parses a complete source file.
///
/// Grammar:
/// ```text
///     program := NL* "package" "main" NL
///                (declaration NL | import NL)*
///                "func" "main" "(" ")" block NL*
///     import  := "import" string
/// ```
/// Package-level declarations go into the global table; at most one import
/// clause is allowed.
///
/// # Errors
/// - `ParseError::UnexpectedToken` for a second import clause.
/// - `ParseError::UnexpectedTrailingTokens` for anything after `func main`.
/// - Propagates every other grammar failure.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    skip_newlines(tokens);
    expect_keyword(tokens, Keyword::Package)?;
    expect_keyword(tokens, Keyword::Main)?;
    expect(tokens, &Token::NewLine, "newline")?;

    let mut globals = Vec::new();
    let mut import = None;

    loop {
        skip_newlines(tokens);
        match tokens.peek() {
            Some((Token::Keyword(Keyword::Var | Keyword::Const), _)) => {
                globals.push(parse_declaration(tokens, Scope::Global, 0)?);
            },
            Some((Token::Keyword(Keyword::Import), line)) => {
                if import.is_some() {
                    return Err(ParseError::UnexpectedToken { token: Keyword::Import.to_string(),
                                                             line:  *line, });
                }
                tokens.next();
                import = Some(parse_import_path(tokens, *line)?);
            },
            Some((Token::Keyword(Keyword::Func), _)) => break,
            Some((token, line)) => {
                return Err(ParseError::Expected { expected: "a declaration, an import or 'func'"
                                                            .to_string(),
                                                  found:    token.to_string(),
                                                  line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { expected: "'func'".to_string() }),
        }
        expect(tokens, &Token::NewLine, "newline")?;
    }

    expect_keyword(tokens, Keyword::Func)?;
    expect_keyword(tokens, Keyword::Main)?;
    expect(tokens, &Token::LParen, "'('")?;
    expect(tokens, &Token::RParen, "')'")?;
    let main = parse_block(tokens, 0)?;

    skip_newlines(tokens);
    if let Some((token, line)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          line:  *line, });
    }

    Ok(Program { globals, import, main })
}

/// Parses the quoted path of an import clause.
fn parse_import_path<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Import>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Str(path), _)) => Ok(Import { path: path.clone(),
                                                   line }),
        Some((token, line)) => Err(ParseError::Expected { expected: "import path".to_string(),
                                                          found:    token.to_string(),
                                                          line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "import path".to_string() }),
    }
}
