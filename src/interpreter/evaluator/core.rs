use tracing::trace;

use crate::{
    ast::{Block, Expr, LiteralValue, Program, Statement},
    error::RuntimeError,
    interpreter::{
        diagnostics::{Diagnostics, Outcome},
        environment::Environment,
        record::Record,
        value::core::Value,
    },
    util::num::literal_to_i64_checked,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default maximum number of iterations of a single loop.
pub const DEFAULT_ITERATION_LIMIT: u64 = 1_000_000;

/// Settings of a run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of iterations any single loop may run. `None` lets
    /// loops run until they end on their own.
    pub iteration_limit: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self { iteration_limit: Some(DEFAULT_ITERATION_LIMIT) }
    }
}

/// How a statement left the block it ran in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Carry on with the next statement.
    Normal,
    /// Leave the innermost loop or switch.
    Break,
    /// Start the next iteration of the innermost loop.
    Continue,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state of one run: the bindings, the
/// diagnostics collected so far, the run options and the nesting counters
/// that decide whether `break` and `continue` have a target.
///
/// ## Usage
///
/// A `Context` is created for every run, handed the diagnostics of the
/// tokenizer and the checker, and consumed by [`Context::into_outcome`].
pub struct Context {
    /// The global table and the local frames.
    pub environment:     Environment,
    /// Errors and records collected so far.
    pub diagnostics:     Diagnostics,
    /// Run settings.
    pub options:         Options,
    /// Whether `import "fmt"` was accepted.
    pub fmt_imported:    bool,
    /// Number of loops around the statement being executed.
    pub loop_depth:      usize,
    /// Number of loops and switches around the statement being executed.
    pub breakable_depth: usize,
}

impl Context {
    /// Creates a context with empty bindings.
    #[must_use]
    pub fn new(options: Options, diagnostics: Diagnostics) -> Self {
        Self { environment: Environment::new(),
               diagnostics,
               options,
               fmt_imported: false,
               loop_depth: 0,
               breakable_depth: 0 }
    }

    /// Executes a whole program: the import clause, the package-level
    /// declarations in order and then the body of `main`.
    ///
    /// Errors never stop the run; each one is reported and execution goes on
    /// with the next construct.
    pub fn run_program(&mut self, program: &Program) {
        if let Some(import) = &program.import {
            if import.path == "fmt" {
                self.fmt_imported = true;
                self.diagnostics.notice(Record::Import { path: import.path.clone() });
            } else {
                let details = format!("package \"{}\" is not supported", import.path);
                self.report(RuntimeError::Import { details,
                                                   line: import.line });
            }
        }

        for declaration in &program.globals {
            if let Err(error) = self.exec_declaration(declaration) {
                self.report(error);
            }
        }

        self.exec_statements(&program.main.statements);
    }

    /// Executes statements in order until one of them changes the flow.
    ///
    /// A failing statement is reported and has no effect; the next statement
    /// runs as usual.
    pub fn exec_statements(&mut self, statements: &[Statement]) -> Flow {
        for statement in statements {
            trace!(line = statement.line_number(), "executing statement");
            match self.exec_statement(statement) {
                Ok(Flow::Normal) => {},
                Ok(flow) => return flow,
                Err(error) => self.report(error),
            }
        }
        Flow::Normal
    }

    /// Executes a nested block in a fresh local frame.
    pub fn exec_block(&mut self, block: &Block) -> Flow {
        self.environment.push_frame();
        let flow = self.exec_statements(&block.statements);
        self.environment.pop_frame();
        flow
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// How control leaves the statement. Only `break` and `continue`, or a
    /// construct containing one that was not consumed, return anything other
    /// than [`Flow::Normal`].
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Declaration(declaration) => self.exec_declaration(declaration)?,
            Statement::Define { name, value, line } => self.exec_define(name, value, *line)?,
            Statement::Assignment { name, value, line } => {
                self.exec_assignment(name, value, *line)?;
            },
            Statement::CompoundAssignment { name,
                                            op,
                                            value,
                                            line, } => {
                self.exec_compound_assignment(name, *op, value, *line)?;
            },
            Statement::Step { name, op, line } => self.exec_step(name, *op, *line)?,
            Statement::If(statement) => return self.exec_if(statement),
            Statement::Switch(statement) => return self.exec_switch(statement),
            Statement::For(statement) => self.exec_for(statement)?,
            Statement::Break { .. } if self.breakable_depth > 0 => {
                self.diagnostics.notice(Record::Break);
                return Ok(Flow::Break);
            },
            Statement::Continue { .. } if self.loop_depth > 0 => {
                self.diagnostics.notice(Record::Continue);
                return Ok(Flow::Continue);
            },
            Statement::Break { .. } | Statement::Continue { .. } => {},
            Statement::Print { arguments, line } => self.exec_print(arguments, *line)?,
        }
        Ok(Flow::Normal)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    ///
    /// Type mismatches, invalid operations and division by zero are reported
    /// here and replaced by a fallback value, so that the enclosing statement
    /// can still take effect. Undefined identifiers and overflow are returned
    /// as errors and abort the enclosing statement.
    ///
    /// # Example
    /// ```
    /// use golite::{
    ///     ast::{BinaryOperator, Expr, LiteralValue},
    ///     interpreter::{
    ///         diagnostics::Diagnostics,
    ///         evaluator::core::{Context, Options},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut context = Context::new(Options::default(), Diagnostics::default());
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: LiteralValue::from(7_i64),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Div,
    ///                             right: Box::new(Expr::Literal { value: LiteralValue::from(0_i64),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Int(0));
    /// assert!(context.diagnostics.has_errors());
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, line } => Self::eval_literal(value, *line),
            Expr::Variable { name, line } => self.environment.lookup(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                self.recover(Self::eval_unary(*op, &value, *line), |_| {
                        Self::unary_fallback(*op, &value)
                    })
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.recover(Self::eval_binary(*op, &left, &right, *line), |error| {
                        Self::binary_fallback(*op, &left, error)
                    })
            },
        }
    }

    /// Evaluates an expression that must produce a boolean.
    ///
    /// # Errors
    /// `RuntimeError::TypeMismatch` if the value is not a `Bool`, and any
    /// error raised by the expression itself.
    pub fn eval_condition(&mut self, expr: &Expr) -> EvalResult<bool> {
        let value = self.eval(expr)?;
        value.as_bool().ok_or_else(|| {
                           let details = format!("non-boolean condition {} ({})",
                                                 value.to_literal(),
                                                 value.kind());
                           RuntimeError::TypeMismatch { details,
                                                        line: expr.line_number() }
                       })
    }

    fn eval_literal(value: &LiteralValue, line: usize) -> EvalResult<Value> {
        match value {
            LiteralValue::Integer(digits) => Ok(Value::Int(literal_to_i64_checked(digits, line)?)),
            LiteralValue::Bool(b) => Ok(Value::Bool(*b)),
            LiteralValue::Text(s) => Ok(Value::Text(s.clone())),
        }
    }

    /// Reports a recoverable error and substitutes `fallback(&error)` for
    /// the failed result. Other errors are passed through.
    fn recover(&mut self,
               result: EvalResult<Value>,
               fallback: impl FnOnce(&RuntimeError) -> Value)
               -> EvalResult<Value> {
        match result {
            Err(error) if error.is_recoverable() => {
                let value = fallback(&error);
                self.report(error);
                Ok(value)
            },
            other => other,
        }
    }

    /// Runs `f` with an empty notice list and returns its result together
    /// with the records it produced.
    pub fn capture<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> (T, Vec<Record>) {
        let outer = self.diagnostics.swap_notices(Vec::new());
        let result = f(self);
        let captured = self.diagnostics.swap_notices(outer);
        (result, captured)
    }

    /// Appends a runtime error to the diagnostics.
    pub fn report(&mut self, error: RuntimeError) {
        self.diagnostics.report(error);
    }

    /// Ends the run.
    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        self.diagnostics.into_outcome(self.environment)
    }
}
