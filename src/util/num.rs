use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts the text of an integer literal to `i64`.
///
/// `digits` is a run of decimal digits, optionally preceded by `-`. The
/// error message quotes it unchanged, however long it is.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value lies outside
/// `-2^63 ..= 2^63 - 1`.
///
/// ## Example
/// ```
/// use golite::util::num::literal_to_i64_checked;
///
/// assert_eq!(literal_to_i64_checked("-9223372036854775808", 1).unwrap(), i64::MIN);
/// assert_eq!(literal_to_i64_checked("007", 1).unwrap(), 7);
///
/// let digits = "123456789012345678901234567890123456789012";
/// let error = literal_to_i64_checked(digits, 3).unwrap_err();
/// assert!(error.to_string().contains(&format!("cannot use {digits} as int value")));
/// ```
pub fn literal_to_i64_checked(digits: &str, line: usize) -> EvalResult<i64> {
    digits.parse().map_err(|_| {
                       let details = format!("cannot use {digits} as int value");
                       RuntimeError::Overflow { details, line }
                   })
}

/// Divides two integers, rounding the quotient toward negative infinity.
///
/// ## Errors
/// - `RuntimeError::ZeroDivision` if `right` is zero.
/// - `RuntimeError::Overflow` for `i64::MIN / -1`.
///
/// ## Example
/// ```
/// use golite::util::num::floor_div_checked;
///
/// assert_eq!(floor_div_checked(7, 2, 1).unwrap(), 3);
/// assert_eq!(floor_div_checked(-7, 2, 1).unwrap(), -4);
/// assert_eq!(floor_div_checked(7, -2, 1).unwrap(), -4);
/// assert!(floor_div_checked(7, 0, 1).is_err());
/// ```
pub fn floor_div_checked(left: i64, right: i64, line: usize) -> EvalResult<i64> {
    if right == 0 {
        return Err(RuntimeError::ZeroDivision { line });
    }
    let quotient = left.checked_div(right).ok_or_else(|| overflow(left, "/", right, line))?;
    if left % right != 0 && (left < 0) != (right < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Computes the remainder matching [`floor_div_checked`]: the result has the
/// sign of the divisor.
///
/// ## Errors
/// Returns `RuntimeError::ZeroDivision` if `right` is zero.
///
/// ## Example
/// ```
/// use golite::util::num::floor_mod_checked;
///
/// assert_eq!(floor_mod_checked(7, 3, 1).unwrap(), 1);
/// assert_eq!(floor_mod_checked(-7, 3, 1).unwrap(), 2);
/// assert_eq!(floor_mod_checked(7, -3, 1).unwrap(), -2);
/// ```
pub fn floor_mod_checked(left: i64, right: i64, line: usize) -> EvalResult<i64> {
    if right == 0 {
        return Err(RuntimeError::ZeroDivision { line });
    }
    // `i64::MIN % -1` overflows in hardware although the remainder is zero.
    if right == -1 {
        return Ok(0);
    }
    let remainder = left % right;
    if remainder != 0 && (remainder < 0) != (right < 0) {
        Ok(remainder + right)
    } else {
        Ok(remainder)
    }
}

/// Builds the overflow error for a binary integer operation.
pub(crate) fn overflow(left: i64, op: &str, right: i64, line: usize) -> RuntimeError {
    RuntimeError::Overflow { details: format!("{left} {op} {right} does not fit in int"),
                             line }
}
