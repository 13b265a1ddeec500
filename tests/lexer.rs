use golite::{
    error::LexError,
    interpreter::lexer::{Keyword, Lexer, Token, TokenKind},
};
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(source).filter_map(Result::ok).map(|lexeme| lexeme.token).collect()
}

fn lines(source: &str) -> Vec<(Token, usize)> {
    Lexer::new(source).filter_map(Result::ok)
                      .map(|lexeme| (lexeme.token, lexeme.line))
                      .collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn int(digits: &str) -> Token {
    Token::Integer(digits.to_string())
}

#[test]
fn reserved_words_need_a_word_boundary() {
    assert_eq!(tokens("for forty if iffy var variable fmt Println println"),
               vec![Token::Keyword(Keyword::For),
                    ident("forty"),
                    Token::Keyword(Keyword::If),
                    ident("iffy"),
                    Token::Keyword(Keyword::Var),
                    ident("variable"),
                    Token::Keyword(Keyword::Fmt),
                    Token::Keyword(Keyword::Println),
                    ident("println")]);
}

#[test]
fn boolean_literals() {
    assert_eq!(tokens("true false truth"),
               vec![Token::Bool(true), Token::Bool(false), ident("truth")]);
}

#[test]
fn longest_operator_wins() {
    assert_eq!(tokens("a := b <= c == d != e && f || g"),
               vec![ident("a"),
                    Token::Define,
                    ident("b"),
                    Token::LessEqual,
                    ident("c"),
                    Token::EqualEqual,
                    ident("d"),
                    Token::BangEqual,
                    ident("e"),
                    Token::AndAnd,
                    ident("f"),
                    Token::OrOr,
                    ident("g")]);
    assert_eq!(tokens("x++ y-- z+=1 w%=2"),
               vec![ident("x"),
                    Token::PlusPlus,
                    ident("y"),
                    Token::MinusMinus,
                    ident("z"),
                    Token::PlusAssign,
                    int("1"),
                    ident("w"),
                    Token::ModAssign,
                    int("2")]);
}

#[test]
fn integer_literals_keep_their_digits() {
    assert_eq!(tokens("0 007 9223372036854775808 123456789012345678901234567890123456789012"),
               vec![int("0"),
                    int("007"),
                    int("9223372036854775808"),
                    int("123456789012345678901234567890123456789012")]);
    assert_eq!(tokens("-5"), vec![Token::Minus, int("5")]);
}

#[test]
fn string_literals_drop_their_quotes() {
    assert_eq!(tokens(r#"fmt.Println("hello, world", "")"#),
               vec![Token::Keyword(Keyword::Fmt),
                    Token::Dot,
                    Token::Keyword(Keyword::Println),
                    Token::LParen,
                    Token::Str("hello, world".to_string()),
                    Token::Comma,
                    Token::Str(String::new()),
                    Token::RParen]);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(tokens("x // the rest is ignored: @ $\ny"),
               vec![ident("x"), Token::NewLine, ident("y")]);
}

#[test]
fn newline_runs_collapse_into_one_token() {
    let source = "a\n\n   \t\nb\n";

    assert_eq!(lines(source),
               vec![(ident("a"), 1), (Token::NewLine, 1), (ident("b"), 4), (Token::NewLine, 4)]);
}

#[test]
fn strings_spanning_lines_advance_the_line_count() {
    let source = "s := \"one\ntwo\"\nt";

    assert_eq!(lines(source),
               vec![(ident("s"), 1),
                    (Token::Define, 1),
                    (Token::Str("one\ntwo".to_string()), 1),
                    (Token::NewLine, 2),
                    (ident("t"), 3)]);
}

#[test]
fn illegal_characters_are_skipped_one_at_a_time() {
    let results: Vec<_> = Lexer::new("a\n@#b").collect();

    assert_eq!(results.len(), 5);
    assert_eq!(results[2],
               Err(LexError::IllegalCharacter { character: '@',
                                                line:      2, }));
    assert_eq!(results[3],
               Err(LexError::IllegalCharacter { character: '#',
                                                line:      2, }));
    assert_eq!(results[4].as_ref().map(|lexeme| lexeme.token.clone()), Ok(ident("b")));
}

#[test]
fn lexemes_carry_their_source_text() {
    let texts: Vec<String> = Lexer::new("count += \"x\"").filter_map(Result::ok)
                                                         .map(|lexeme| lexeme.text)
                                                         .collect();

    assert_eq!(texts, vec!["count", "+=", "\"x\""]);
}

#[test]
fn token_kinds() {
    let kinds: Vec<TokenKind> = tokens("x 1 \"s\" true for + ( \n").iter()
                                                                   .map(Token::kind)
                                                                   .collect();

    assert_eq!(kinds,
               vec![TokenKind::Identifier,
                    TokenKind::IntegerLiteral,
                    TokenKind::StringLiteral,
                    TokenKind::BooleanLiteral,
                    TokenKind::Keyword,
                    TokenKind::Operator,
                    TokenKind::Punctuation,
                    TokenKind::NewLine]);
}
