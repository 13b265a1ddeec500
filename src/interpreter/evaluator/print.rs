use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        record::Record,
    },
};

impl Context {
    /// Executes `fmt.Println(arguments)`.
    ///
    /// The arguments are evaluated left to right and recorded; the caller
    /// decides whether and where the line is printed.
    ///
    /// # Errors
    /// - `RuntimeError::Import` if `"fmt"` was not imported; no argument is
    ///   evaluated then.
    /// - Any unrecoverable error of an argument.
    pub fn exec_print(&mut self, arguments: &[Expr], line: usize) -> EvalResult<()> {
        if !self.fmt_imported {
            let details = "fmt.Println used without importing \"fmt\"".to_string();
            return Err(RuntimeError::Import { details, line });
        }

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        self.diagnostics.notice(Record::Print { values });
        Ok(())
    }
}
