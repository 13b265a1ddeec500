//! # golite
//!
//! golite is an interpreter for a small, statically typed subset of Go.
//! It tokenizes and parses a whole program, then executes it over integers,
//! booleans and strings, collecting a record of every construct that took
//! effect and every error it met along the way.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::interpreter::{
    diagnostics::Outcome,
    evaluator::core::{DEFAULT_ITERATION_LIMIT, Options},
};
use crate::interpreter::{
    checker::check_loop_control,
    diagnostics::Diagnostics,
    environment::Environment,
    evaluator::core::Context,
    lexer::Lexer,
    parser::program::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for tokenizing, parsing and evaluation.
///
/// This module defines all errors that can be raised during a run. Each
/// carries the source line it refers to and belongs to one kind of the error
/// taxonomy.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps them in a single `Diagnostic` type for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, loop-control checking,
/// evaluation, value representations and diagnostics.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, checker and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for checked integer arithmetic.
///
/// This module provides the range check for integer literals and the floor
/// division and modulo used by the evaluator.
pub mod util;

/// Runs a program with the default [`Options`].
///
/// # Examples
/// ```
/// use golite::run;
///
/// let outcome = run("package main\n\nfunc main() {\n    x := 5\n    x := 6\n}\n");
///
/// assert!(!outcome.is_success());
/// assert_eq!(outcome.lines(), vec!["Error on line 5: 'x' redeclared in this scope.".to_string()]);
/// ```
#[must_use]
pub fn run(source: &str) -> Outcome {
    run_with_options(source, &Options::default())
}

/// Tokenizes, parses, checks and executes `source`.
///
/// Illegal characters are reported and skipped. A syntax error ends the run
/// before anything is executed. Every other error is reported and the run
/// carries on with the next construct.
#[must_use]
pub fn run_with_options(source: &str, options: &Options) -> Outcome {
    debug!(bytes = source.len(), "starting run");

    let mut diagnostics = Diagnostics::default();
    let mut tokens = Vec::new();
    for lexeme in Lexer::new(source) {
        match lexeme {
            Ok(lexeme) => tokens.push((lexeme.token, lexeme.line)),
            Err(error) => diagnostics.report(error),
        }
    }

    let program = match parse_program(&mut tokens.iter().peekable()) {
        Ok(program) => program,
        Err(error) => {
            debug!("syntax error, nothing is executed");
            diagnostics.report(error);
            return diagnostics.into_outcome(Environment::new());
        },
    };

    for error in check_loop_control(&program) {
        diagnostics.report(error);
    }

    let mut context = Context::new(*options, diagnostics);
    context.run_program(&program);
    let outcome = context.into_outcome();

    debug!(errors = outcome.errors.len(),
           notices = outcome.notices.len(),
           "run finished");
    outcome
}
