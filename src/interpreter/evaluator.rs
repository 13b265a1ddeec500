/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: integer
/// arithmetic, string concatenation, comparisons and logical connectives.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, run options, expression evaluation with its
/// fallback values and the statement dispatcher.
pub mod core;

/// Declarations and the assignment family.
pub mod statement;

/// Execution of `if`, `switch` and `for`.
///
/// Selects branches, repeats loop bodies and nests the records of what ran
/// inside the construct's own record.
pub mod control;

/// The `fmt.Println` built-in.
pub mod print;
