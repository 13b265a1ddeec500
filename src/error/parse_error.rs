/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Syntax error at '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token or construct was required but something else was
    /// found.
    #[error("Error on line {line}: Syntax error: expected {expected}, found '{found}'.")]
    Expected {
        /// Description of what the grammar required.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error: Syntax error at end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// Description of what the grammar required.
        expected: String,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two relational operators were chained, as in `a < b < c`.
    #[error("Error on line {line}: Comparison operators cannot be chained.")]
    ChainedComparison {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `var` declaration has neither a type nor an initializer.
    #[error("Error on line {line}: Declaration of '{name}' needs a type or an initializer.")]
    MissingTypeOrValue {
        /// The declared name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `const` declaration has no initializer.
    #[error("Error on line {line}: Constant '{name}' must be initialized.")]
    MissingConstValue {
        /// The declared name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `switch` statement has more than one `default` clause.
    #[error("Error on line {line}: Multiple defaults in switch.")]
    DuplicateDefault {
        /// The source line of the second `default`.
        line: usize,
    },
    /// Found extra tokens after the end of `func main`.
    #[error("Error on line {line}: Extra tokens after the main function: '{token}'.")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Expressions or blocks are nested deeper than the parser allows.
    #[error("Error on line {line}: Syntax error: nesting deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the limit was exceeded.
        line:  usize,
    },
}
