use crate::{error::ErrorKind, interpreter::value::kind::ValueKind};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to declare a name that is already bound.
    #[error("Error on line {line}: '{name}' redeclared in this scope.")]
    Redeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use a name that was never declared.
    #[error("Error on line {line}: Undefined identifier '{name}'.")]
    UndefinedIdentifier {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a constant.
    #[error("Error on line {line}: Cannot assign to constant '{name}'.")]
    ConstAssign {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two values had incompatible kinds.
    #[error("Error on line {line}: Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operator was applied to a kind it does not support.
    #[error("Error on line {line}: Invalid operation: operator {op} is not defined on {kind}.")]
    InvalidOperation {
        /// The operator as written in source.
        op:   String,
        /// The kind of the operand(s).
        kind: ValueKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    #[error("Error on line {line}: Division by zero.")]
    ZeroDivision {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal or result does not fit in 64 bits.
    #[error("Error on line {line}: Overflow: {details}.")]
    Overflow {
        /// Details about the value that overflowed.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A package was used without being imported, or cannot be imported.
    #[error("Error on line {line}: Import error: {details}.")]
    Import {
        /// Details about the failing import.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// `break` or `continue` appeared where it cannot apply.
    #[error("Error on line {line}: '{keyword}' is not inside a {allowed}.")]
    LoopControl {
        /// Either `break` or `continue`.
        keyword: &'static str,
        /// The constructs the keyword is allowed in.
        allowed: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A loop did not terminate within the configured number of iterations.
    #[error("Error on line {line}: Loop stopped after reaching the iteration limit of {limit}.")]
    IterationLimit {
        /// The configured limit.
        limit: u64,
        /// The source line of the loop.
        line:  usize,
    },
}

impl RuntimeError {
    /// Returns the taxonomy tag of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Redeclaration { .. } => ErrorKind::Redeclaration,
            Self::UndefinedIdentifier { .. } => ErrorKind::UndefinedIdentifier,
            Self::ConstAssign { .. } => ErrorKind::ConstAssign,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            Self::ZeroDivision { .. } => ErrorKind::ZeroDivision,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::Import { .. } => ErrorKind::Import,
            Self::LoopControl { .. } => ErrorKind::LoopControl,
            Self::IterationLimit { .. } => ErrorKind::IterationLimit,
        }
    }

    /// Whether an expression can carry on with a substitute value after this
    /// error was reported.
    ///
    /// Type mismatches, invalid operations and division by zero inside an
    /// expression are reported and replaced by a fallback value. Every other
    /// error aborts the statement that raised it.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self,
                 Self::TypeMismatch { .. } | Self::InvalidOperation { .. } | Self::ZeroDivision { .. })
    }
}
