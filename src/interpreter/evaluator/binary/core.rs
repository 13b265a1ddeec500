use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Both operands must be of the same kind; otherwise the operation is
    /// rejected with a type mismatch before any operator runs. Arithmetic
    /// operators are handled by `eval_arithmetic`, relational operators by
    /// `eval_comparison` and the logical connectives by `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use golite::{
    ///     ast::BinaryOperator,
    ///     error::ErrorKind,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Value::Int(3), &Value::Int(4), 1);
    /// assert_eq!(sum.unwrap(), Value::Int(7));
    ///
    /// let mixed = Context::eval_binary(BinaryOperator::Add, &Value::Int(3), &Value::from("4"), 1);
    /// assert_eq!(mixed.unwrap_err().kind(), ErrorKind::TypeMismatch);
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        if left.kind() != right.kind() {
            let details = format!("mismatched types {} and {} for operator {op}",
                                  left.kind(),
                                  right.kind());
            return Err(RuntimeError::TypeMismatch { details, line });
        }

        if op.is_arithmetic() {
            Self::eval_arithmetic(op, left, right, line)
        } else if op.is_relational() {
            Self::eval_comparison(op, left, right, line)
        } else {
            Self::eval_logic(op, left, right, line)
        }
    }

    /// The value a failed binary operation yields so that evaluation can
    /// carry on.
    ///
    /// Comparisons and logical connectives yield `false`. Failed arithmetic
    /// yields `0`, except for an operator the operands' kind does not
    /// support, which yields the zero value of that kind.
    #[must_use]
    pub fn binary_fallback(op: BinaryOperator, left: &Value, error: &RuntimeError) -> Value {
        match error {
            _ if !op.is_arithmetic() => Value::Bool(false),
            RuntimeError::InvalidOperation { .. } => left.kind().zero_value(),
            _ => Value::Int(0),
        }
    }
}
