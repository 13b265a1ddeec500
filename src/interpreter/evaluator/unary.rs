use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: checked integer negation.
    /// - `Not`: boolean negation.
    ///
    /// # Errors
    /// - `RuntimeError::InvalidOperation` for any other operand kind.
    /// - `RuntimeError::Overflow` when negating the smallest integer.
    ///
    /// # Example
    /// ```
    /// use golite::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Int(5), 1).unwrap();
    /// assert_eq!(v, Value::Int(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Bool(false), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::Int(i64::MIN), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Int(n)) => {
                let details = || format!("-({n}) does not fit in int");
                n.checked_neg()
                 .map(Value::Int)
                 .ok_or_else(|| RuntimeError::Overflow { details: details(), line })
            },
            (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
            _ => Err(RuntimeError::InvalidOperation { op: op.to_string(),
                                                      kind: value.kind(),
                                                      line }),
        }
    }

    /// The value a failed unary operation yields: `false` for `!`, the zero
    /// value of the operand's kind for `-`.
    #[must_use]
    pub fn unary_fallback(op: UnaryOperator, value: &Value) -> Value {
        match op {
            UnaryOperator::Negate => value.kind().zero_value(),
            UnaryOperator::Not => Value::Bool(false),
        }
    }
}
