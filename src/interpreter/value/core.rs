use crate::interpreter::value::kind::ValueKind;

/// Represents a runtime value in the interpreter.
///
/// Exactly three kinds exist and no implicit conversion happens between
/// them: every operator requires both operands to be of the same variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Int(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators and required by every
    /// condition.
    Bool(bool),
    /// A string, stored without its surrounding quotes.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl Value {
    /// Returns the kind tag of the value.
    ///
    /// # Example
    /// ```
    /// use golite::interpreter::value::{core::Value, kind::ValueKind};
    ///
    /// assert_eq!(Value::from("go").kind(), ValueKind::Text);
    /// assert_eq!(Value::from(4).kind(), ValueKind::Int);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Bool(_) => ValueKind::Bool,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Returns the integer if the value is an `Int`.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if the value is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Formats the value the way it would be written in source code, with
    /// text in double quotes.
    ///
    /// # Example
    /// ```
    /// use golite::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("hi").to_literal(), "\"hi\"");
    /// assert_eq!(Value::from(7).to_literal(), "7");
    /// ```
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::Text(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
