use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// `Keyword` and `Bool` carry no pattern of their own: words are always
/// matched as identifiers first and then looked up in the reserved-word
/// table by [`Lexer`].
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`, kept as their digits. Range
    /// checks happen when the literal is evaluated.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens, such as `"hello"`, stored without quotes.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens: `true` or `false`.
    Bool(bool),
    /// Reserved words such as `var` or `for`.
    Keyword(Keyword),
    /// Identifier tokens; variable names such as `x` or `total_sum`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// `||`
    #[token("||")]
    OrOr,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `:=`
    #[token(":=")]
    Define,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `%=`
    #[token("%=")]
    ModAssign,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semicolon,
    /// A run of newlines, including any blanks between them. Terminates
    /// statements.
    #[regex(r"\n[ \t\r\n]*", |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// The reserved words of the language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `var`
    Var,
    /// `const`
    Const,
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `string`
    String,
    /// `if`
    If,
    /// `else`
    Else,
    /// `switch`
    Switch,
    /// `case`
    Case,
    /// `default`
    Default,
    /// `for`
    For,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `package`
    Package,
    /// `import`
    Import,
    /// `func`
    Func,
    /// `main`
    Main,
    /// `fmt`
    Fmt,
    /// `Println`
    Println,
}

/// The closed set of token categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A user-chosen name.
    Identifier,
    /// An unsigned decimal literal.
    IntegerLiteral,
    /// A quoted string literal.
    StringLiteral,
    /// `true` or `false`.
    BooleanLiteral,
    /// A reserved word.
    Keyword,
    /// An arithmetic, relational, logical or assignment operator.
    Operator,
    /// Brackets, separators and the selector dot.
    Punctuation,
    /// A statement-terminating newline run.
    NewLine,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token together with its source text and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The classified token.
    pub token: Token,
    /// The exact source text of the token.
    pub text:  String,
    /// The 1-based line the token starts on.
    pub line:  usize,
}

/// A lazy, error-tolerant tokenizer.
///
/// Yields one `Ok(Lexeme)` per token. An unrecognised character yields one
/// `Err(LexError::IllegalCharacter)`, exactly that character is skipped and
/// the scan resumes behind it.
///
/// # Example
/// ```
/// use golite::interpreter::lexer::{Keyword, Lexer, Token};
///
/// let tokens: Vec<Token> = Lexer::new("for forty").filter_map(Result::ok)
///                                                .map(|lexeme| lexeme.token)
///                                                .collect();
///
/// assert_eq!(tokens,
///            vec![Token::Keyword(Keyword::For), Token::Identifier("forty".to_string())]);
/// ```
pub struct Lexer<'source> {
    source: &'source str,
    offset: usize,
    inner:  logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { source,
               offset: 0,
               inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Restarts the underlying scanner at byte `position` of the source,
    /// keeping the current line count.
    fn resume_at(&mut self, position: usize) {
        let line = self.inner.extras.line;
        self.offset = position;
        self.inner = Token::lexer_with_extras(&self.source[position..], LexerExtras { line });
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Lexeme, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.extras.line;
        let token = self.inner.next()?;

        match token {
            Ok(token) => Some(Ok(Lexeme { token: token.reclassify(),
                                          text: self.inner.slice().to_string(),
                                          line })),
            Err(()) => {
                let span = self.inner.span();
                let start = self.offset + span.start;
                let character = self.source
                                    .get(start..)
                                    .and_then(|rest| rest.chars().next())
                                    .unwrap_or('\u{fffd}');
                let resume = start + character.len_utf8();
                if resume != self.offset + span.end {
                    self.resume_at(resume);
                }
                Some(Err(LexError::IllegalCharacter { character, line }))
            },
        }
    }
}

impl Token {
    /// Returns the category of the token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::IntegerLiteral,
            Self::Str(_) => TokenKind::StringLiteral,
            Self::Bool(_) => TokenKind::BooleanLiteral,
            Self::Keyword(_) => TokenKind::Keyword,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::NewLine | Self::Comment | Self::Ignored => TokenKind::NewLine,
            Self::LParen
            | Self::RParen
            | Self::LBrace
            | Self::RBrace
            | Self::Comma
            | Self::Colon
            | Self::Dot
            | Self::Semicolon => TokenKind::Punctuation,
            _ => TokenKind::Operator,
        }
    }

    /// Turns reserved words matched as identifiers into keyword or boolean
    /// tokens. Every other token is returned unchanged.
    fn reclassify(self) -> Self {
        match self {
            Self::Identifier(word) => reserved_word(&word).unwrap_or(Self::Identifier(word)),
            other => other,
        }
    }
}

/// The fixed reserved-word table.
fn reserved_word(word: &str) -> Option<Token> {
    let keyword = match word {
        "true" => return Some(Token::Bool(true)),
        "false" => return Some(Token::Bool(false)),
        "var" => Keyword::Var,
        "const" => Keyword::Const,
        "int" => Keyword::Int,
        "bool" => Keyword::Bool,
        "string" => Keyword::String,
        "if" => Keyword::If,
        "else" => Keyword::Else,
        "switch" => Keyword::Switch,
        "case" => Keyword::Case,
        "default" => Keyword::Default,
        "for" => Keyword::For,
        "break" => Keyword::Break,
        "continue" => Keyword::Continue,
        "package" => Keyword::Package,
        "import" => Keyword::Import,
        "func" => Keyword::Func,
        "main" => Keyword::Main,
        "fmt" => Keyword::Fmt,
        "Println" => Keyword::Println,
        _ => return None,
    };
    Some(Token::Keyword(keyword))
}

/// Strips the quotes of a string literal and counts the newlines inside it.
fn parse_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();
    slice.get(1..slice.len() - 1).map(str::to_string)
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Self::Var => "var",
            Self::Const => "const",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::String => "string",
            Self::If => "if",
            Self::Else => "else",
            Self::Switch => "switch",
            Self::Case => "case",
            Self::Default => "default",
            Self::For => "for",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Package => "package",
            Self::Import => "import",
            Self::Func => "func",
            Self::Main => "main",
            Self::Fmt => "fmt",
            Self::Println => "Println",
        };
        write!(f, "{word}")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Integer(n) => return write!(f, "{n}"),
            Self::Str(s) => return write!(f, "\"{s}\""),
            Self::Bool(b) => return write!(f, "{b}"),
            Self::Keyword(k) => return write!(f, "{k}"),
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::Comment => "//",
            Self::OrOr => "||",
            Self::AndAnd => "&&",
            Self::LessEqual => "<=",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::Greater => ">",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Define => ":=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Bang => "!",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::NewLine => "newline",
            Self::Ignored => " ",
        };
        write!(f, "{symbol}")
    }
}
