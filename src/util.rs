/// Checked integer helpers.
///
/// This module provides the integer routines whose behaviour is part of the
/// language: narrowing literals to 64 bits, and floor division and floor
/// modulo with explicit zero and overflow checks.
///
/// All functions return a `Result`, which is `Ok` if the operation is exact
/// and representable, or a [`RuntimeError`](crate::error::RuntimeError)
/// otherwise.
pub mod num;
