use crate::{
    ast::{BinaryOperator, Declaration, Expr, Initializer, Scope, StepOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        record::Record,
        value::core::Value,
    },
};

impl Context {
    /// Executes a `var` or `const` declaration.
    ///
    /// The name must not be visible yet. Without an initializer the declared
    /// type's zero value is bound; with both a type and an initializer the
    /// value must be of that type.
    ///
    /// # Errors
    /// - `RuntimeError::Redeclaration` if the name is already bound.
    /// - `RuntimeError::TypeMismatch` if the value does not match the type.
    /// - Any unrecoverable error of the initializer.
    ///
    /// In every error case nothing is bound.
    pub fn exec_declaration(&mut self, declaration: &Declaration) -> EvalResult<()> {
        let Declaration { name,
                          constant,
                          initializer,
                          scope,
                          line, } = declaration;

        self.ensure_undeclared(name, *line)?;

        let value = match initializer {
            Initializer::Typed { kind, value: None } => kind.zero_value(),
            Initializer::Typed { kind,
                                 value: Some(expr), } => {
                let value = self.eval(expr)?;
                if value.kind() != *kind {
                    let details = format!("cannot use {} ({}) as {kind} value in declaration",
                                          value.to_literal(),
                                          value.kind());
                    return Err(RuntimeError::TypeMismatch { details, line: *line });
                }
                value
            },
            Initializer::Inferred(expr) => self.eval(expr)?,
        };

        self.environment.declare(*scope, name, value.clone(), *constant, *line)?;
        self.diagnostics.notice(Record::Declaration { name: name.clone(),
                                                      constant: *constant,
                                                      scope: *scope,
                                                      kind: value.kind(),
                                                      value });
        Ok(())
    }

    /// Executes `name := value`, declaring a new local variable.
    ///
    /// # Errors
    /// `RuntimeError::Redeclaration` if the name is already bound.
    pub fn exec_define(&mut self, name: &str, value: &Expr, line: usize) -> EvalResult<()> {
        self.ensure_undeclared(name, line)?;
        let value = self.eval(value)?;
        self.environment.declare(Scope::Local, name, value.clone(), false, line)?;
        self.diagnostics.notice(Record::Define { name: name.to_string(),
                                                 value });
        Ok(())
    }

    /// Executes `name = value`.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedIdentifier`, `RuntimeError::ConstAssign` or
    /// `RuntimeError::TypeMismatch`; the binding is left unchanged.
    pub fn exec_assignment(&mut self, name: &str, value: &Expr, line: usize) -> EvalResult<()> {
        self.environment.writable(name, line)?;
        let value = self.eval(value)?;
        let scope = self.environment.assign(name, value.clone(), line)?;
        self.diagnostics.notice(Record::Assignment { name: name.to_string(),
                                                     scope,
                                                     value });
        Ok(())
    }

    /// Executes `name op= value`.
    ///
    /// Unlike an expression, a compound assignment never substitutes a
    /// fallback: a type mismatch, an operator the target's kind does not
    /// support or a zero divisor leaves the target unchanged.
    ///
    /// # Errors
    /// The errors of [`Context::exec_assignment`], plus
    /// `RuntimeError::InvalidOperation`, `RuntimeError::ZeroDivision` and
    /// `RuntimeError::Overflow`.
    pub fn exec_compound_assignment(&mut self,
                                    name: &str,
                                    op: BinaryOperator,
                                    value: &Expr,
                                    line: usize)
                                    -> EvalResult<()> {
        let current = self.environment.writable(name, line)?.1.value.clone();
        let operand = self.eval(value)?;
        let result = Self::eval_binary(op, &current, &operand, line)?;
        self.environment.assign(name, result.clone(), line)?;
        self.diagnostics.notice(Record::CompoundAssignment { name: name.to_string(),
                                                             op,
                                                             operand,
                                                             value: result });
        Ok(())
    }

    /// Executes `name++` or `name--` on an integer binding.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedIdentifier`, `RuntimeError::ConstAssign`,
    /// `RuntimeError::InvalidOperation` for a non-integer target, or
    /// `RuntimeError::Overflow`.
    pub fn exec_step(&mut self, name: &str, op: StepOperator, line: usize) -> EvalResult<()> {
        let (_, binding) = self.environment.writable(name, line)?;
        let Value::Int(current) = binding.value else {
            return Err(RuntimeError::InvalidOperation { op: op.to_string(),
                                                        kind: binding.value.kind(),
                                                        line });
        };

        let next = match op {
            StepOperator::Increment => current.checked_add(1),
            StepOperator::Decrement => current.checked_sub(1),
        };
        let next = next.ok_or_else(|| {
                           let details = format!("{name}{op} does not fit in int");
                           RuntimeError::Overflow { details, line }
                       })?;

        binding.value = Value::Int(next);
        self.diagnostics.notice(Record::Step { name: name.to_string(),
                                               op,
                                               value: Value::Int(next) });
        Ok(())
    }

    fn ensure_undeclared(&self, name: &str, line: usize) -> EvalResult<()> {
        if self.environment.resolve(name).is_some() {
            return Err(RuntimeError::Redeclaration { name: name.to_string(),
                                                     line });
        }
        Ok(())
    }
}
