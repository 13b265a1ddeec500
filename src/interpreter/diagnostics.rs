use tracing::debug;

use crate::{
    error::{Diagnostic, ErrorKind},
    interpreter::{environment::Environment, record::Record},
};

/// The ordered error and notice lists of a run in progress.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors:       Vec<Diagnostic>,
    notices:      Vec<Record>,
    syntax_error: bool,
}

impl Diagnostics {
    /// Appends an error.
    pub fn report(&mut self, error: impl Into<Diagnostic>) {
        let error = error.into();
        debug!(kind = ?error.kind(), "{error}");
        if error.kind() == ErrorKind::Syntax {
            self.syntax_error = true;
        }
        self.errors.push(error);
    }

    /// Appends an accepted-construct record.
    pub fn notice(&mut self, record: Record) {
        self.notices.push(record);
    }

    /// Replaces the notice list, returning the previous one.
    ///
    /// Control constructs swap in an empty list while their body runs, so
    /// that the body's records can be nested inside the construct's own
    /// record.
    pub fn swap_notices(&mut self, notices: Vec<Record>) -> Vec<Record> {
        std::mem::replace(&mut self.notices, notices)
    }

    /// Whether any error was reported so far.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Finishes the run.
    #[must_use]
    pub fn into_outcome(self, environment: Environment) -> Outcome {
        Outcome { notices: self.notices,
                  errors: self.errors,
                  syntax_error: self.syntax_error,
                  environment }
    }
}

/// Everything a finished run produced.
///
/// # Example
/// ```
/// use golite::run;
///
/// let outcome = run("package main\nimport \"fmt\"\nfunc main() {\n    fmt.Println(1 + 2)\n}\n");
///
/// assert!(outcome.is_success());
/// assert_eq!(outcome.printed(), vec!["3".to_string()]);
/// ```
#[derive(Debug)]
pub struct Outcome {
    /// Records of the constructs that took effect, in execution order.
    pub notices:      Vec<Record>,
    /// Every error reported, in order.
    pub errors:       Vec<Diagnostic>,
    /// Whether the program failed to parse.
    pub syntax_error: bool,
    /// The bindings as they were when the run ended.
    pub environment:  Environment,
}

impl Outcome {
    /// Whether the run finished without any error.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && !self.syntax_error
    }

    /// The lines to show to the user: the error messages if the run failed,
    /// the rendered notices otherwise.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        if self.is_success() {
            self.notices.iter().flat_map(Record::render).collect()
        } else {
            self.errors.iter().map(ToString::to_string).collect()
        }
    }

    /// The lines printed by `fmt.Println`, one per call, arguments separated
    /// by a single space.
    #[must_use]
    pub fn printed(&self) -> Vec<String> {
        let mut out = Vec::new();
        for record in &self.notices {
            record.collect_printed(&mut out);
        }
        out
    }

    /// The taxonomy tag of every error, in order.
    #[must_use]
    pub fn error_kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(Diagnostic::kind).collect()
    }
}
