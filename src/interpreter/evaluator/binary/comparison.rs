use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Maps a relational operator and the ordering of its operands to the
/// final boolean value.
#[must_use]
pub const fn ordering_result(op: BinaryOperator, ordering: Ordering) -> Option<bool> {
    match op {
        BinaryOperator::Less => Some(ordering.is_lt()),
        BinaryOperator::Greater => Some(ordering.is_gt()),
        BinaryOperator::LessEqual => Some(ordering.is_le()),
        BinaryOperator::GreaterEqual => Some(ordering.is_ge()),
        BinaryOperator::Equal => Some(ordering.is_eq()),
        BinaryOperator::NotEqual => Some(ordering.is_ne()),
        _ => None,
    }
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Integers are ordered numerically and strings lexicographically; both
    /// support all six operators. Booleans only support `==` and `!=`, which
    /// is how two conditions are compared with each other.
    ///
    /// # Example
    /// ```
    /// use golite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less,
    ///                                       &Value::from("apple"),
    ///                                       &Value::from("banana"),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less,
    ///                                       &Value::Bool(false),
    ///                                       &Value::Bool(true),
    ///                                       1);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b))
                if matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual) =>
            {
                Some(a.cmp(b))
            },
            _ => None,
        };

        ordering.and_then(|ordering| ordering_result(op, ordering))
                .map(Value::Bool)
                .ok_or_else(|| RuntimeError::InvalidOperation { op: op.to_string(),
                                                                kind: left.kind(),
                                                                line })
    }
}
