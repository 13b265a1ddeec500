/// The checker module validates loop control before anything runs.
///
/// It walks the syntax tree once with two nesting counters and reports every
/// `break` outside a loop or switch and every `continue` outside a loop.
pub mod checker;
/// The diagnostics module collects what a run produced.
///
/// Errors and accepted-construct records are appended in order while the
/// program executes and handed back to the caller as an [`Outcome`] once the
/// run is over.
///
/// [`Outcome`]: diagnostics::Outcome
pub mod diagnostics;
/// The environment module holds every binding of a run.
///
/// # Responsibilities
/// - Keeps the global table and the stack of local block frames.
/// - Rejects redeclarations, assignments to constants and assignments that
///   would change a binding's kind.
pub mod environment;
/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the program, evaluates expressions and conditions,
/// runs branches and loops, updates the environment and records what
/// happened.
///
/// # Responsibilities
/// - Evaluates expressions over integers, booleans and strings.
/// - Executes statements, selecting branches and repeating loop bodies.
/// - Reports runtime errors, substituting fallback values where an
///   expression can carry on.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a lazy stream
/// of tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, operators, delimiters, keywords and newlines. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source text and
///   line number.
/// - Reclassifies reserved words after the identifier pattern matched.
/// - Reports illegal characters, skipping exactly one character each time.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the structure of the whole program. A grammar
/// failure aborts the run before anything is evaluated.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Enforces operator precedence and forbids chained comparisons.
/// - Reports syntax errors with location info.
pub mod parser;
/// Records of accepted constructs.
///
/// A record describes one statement that took effect, together with the
/// values it used. Records are purely observational.
pub mod record;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the three value variants (integer, boolean and text)
/// and the kind tag used for type checks and declared types.
pub mod value;
