/// Dispatch over the operator families and fallback values.
pub mod core;

/// `+ - * / %` over integers and `+` over strings.
pub mod arithmetic;

/// The six relational operators.
pub mod comparison;

/// `&&` and `||`.
pub mod logic;
