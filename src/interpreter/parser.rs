/// Core parsing entry points and result type.
///
/// Declares `ParseResult` and the expression entry point shared by every
/// other parser module.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from the logical connectives down to
/// multiplication. Relational operators are non-associative.
pub mod binary;

/// Unary minus and primary expressions.
pub mod unary;

/// Statement parsing.
///
/// Declarations, the assignment family, increments, `break`, `continue` and
/// `fmt.Println`. Control constructs are delegated to [`control`].
pub mod statement;

/// Control constructs: `if`, `switch` and the three shapes of `for`.
pub mod control;

/// Brace-delimited statement blocks.
pub mod block;

/// Whole-program parsing: the package clause, package-level declarations,
/// the import clause and `func main`.
pub mod program;

/// Shared helpers for matching single tokens and comma-separated lists.
pub mod utils;
