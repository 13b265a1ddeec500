/// Lexical errors.
///
/// Raised by the tokenizer when it meets a character that starts no token.
/// Lexical errors never stop the scan: the offending character is skipped
/// and tokenizing resumes with the next one.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while the token stream is reduced
/// to a syntax tree. Every parse error is a syntax error and is fatal for the
/// run: nothing is evaluated once one has been produced.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all semantic errors raised while a program executes, such as
/// redeclarations, type mismatches, division by zero, overflow, missing
/// imports or misplaced loop control. They are recovered locally: the
/// offending construct has no effect and execution continues.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error taxonomy every diagnostic belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An unrecognised character in the source text.
    Lexical,
    /// The token stream does not match the grammar.
    Syntax,
    /// A name was declared twice.
    Redeclaration,
    /// A name was used without being declared.
    UndefinedIdentifier,
    /// A constant was the target of an assignment.
    ConstAssign,
    /// Two values of different kinds met where one kind was required.
    TypeMismatch,
    /// An operator was applied to a kind it is not defined on.
    InvalidOperation,
    /// Division or modulo by zero.
    ZeroDivision,
    /// An integer left the signed 64-bit range.
    Overflow,
    /// `fmt` was used without being imported, or an unknown package was
    /// imported.
    Import,
    /// `break` or `continue` outside of a loop or switch.
    LoopControl,
    /// A loop ran for more iterations than allowed.
    IterationLimit,
}

/// A single entry of the diagnostics list produced by a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Diagnostic {
    /// A tokenizer error.
    #[error(transparent)]
    Lexical(#[from] LexError),
    /// A grammar error.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// A semantic error raised during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Diagnostic {
    /// Returns the taxonomy tag of this diagnostic.
    ///
    /// ## Example
    /// ```
    /// use golite::error::{Diagnostic, ErrorKind, RuntimeError};
    ///
    /// let diagnostic = Diagnostic::from(RuntimeError::ZeroDivision { line: 3 });
    /// assert_eq!(diagnostic.kind(), ErrorKind::ZeroDivision);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical(_) => ErrorKind::Lexical,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Runtime(error) => error.kind(),
        }
    }
}
