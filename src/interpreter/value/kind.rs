use crate::interpreter::value::core::Value;

/// The kind of a [`Value`], and the type named in a declaration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `int`: a signed 64-bit integer.
    Int,
    /// `bool`.
    Bool,
    /// `string`: UTF-8 text.
    Text,
}

impl ValueKind {
    /// Returns the value a binding of this kind holds when declared without
    /// an initializer.
    ///
    /// ## Example
    /// ```
    /// use golite::interpreter::value::{core::Value, kind::ValueKind};
    ///
    /// assert_eq!(ValueKind::Int.zero_value(), Value::Int(0));
    /// assert_eq!(ValueKind::Bool.zero_value(), Value::Bool(false));
    /// assert_eq!(ValueKind::Text.zero_value(), Value::Text(String::new()));
    /// ```
    #[must_use]
    pub const fn zero_value(self) -> Value {
        match self {
            Self::Int => Value::Int(0),
            Self::Bool => Value::Bool(false),
            Self::Text => Value::Text(String::new()),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Text => "string",
        };
        write!(f, "{name}")
    }
}
