use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{floor_div_checked, floor_mod_checked, overflow},
};

impl Context {
    /// Evaluates `+ - * / %` on two operands of the same kind.
    ///
    /// Integer arithmetic is checked: a result outside the 64-bit range is an
    /// overflow error. Division and modulo round toward negative infinity and
    /// test the divisor for zero first. Strings only support `+`, which
    /// concatenates; booleans support no arithmetic at all.
    ///
    /// # Example
    /// ```
    /// use golite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let quotient = Context::eval_arithmetic(BinaryOperator::Div, &Value::Int(-7), &Value::Int(2), 1);
    /// assert_eq!(quotient.unwrap(), Value::Int(-4));
    ///
    /// let joined = Context::eval_arithmetic(BinaryOperator::Add,
    ///                                       &Value::from("hi"),
    ///                                       &Value::from("!"),
    ///                                       1);
    /// assert_eq!(joined.unwrap(), Value::from("hi!"));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match (left, right) {
            (Value::Int(a), Value::Int(b)) => {
                let (a, b) = (*a, *b);
                let result = match op {
                    Add => a.checked_add(b).ok_or_else(|| overflow(a, "+", b, line))?,
                    Sub => a.checked_sub(b).ok_or_else(|| overflow(a, "-", b, line))?,
                    Mul => a.checked_mul(b).ok_or_else(|| overflow(a, "*", b, line))?,
                    Div => floor_div_checked(a, b, line)?,
                    Mod => floor_mod_checked(a, b, line)?,
                    _ => return Err(invalid(op, left, line)),
                };
                Ok(Value::Int(result))
            },
            (Value::Text(a), Value::Text(b)) if op == Add => Ok(Value::Text(format!("{a}{b}"))),
            _ => Err(invalid(op, left, line)),
        }
    }
}

fn invalid(op: BinaryOperator, operand: &Value, line: usize) -> RuntimeError {
    RuntimeError::InvalidOperation { op: op.to_string(),
                                     kind: operand.kind(),
                                     line }
}
