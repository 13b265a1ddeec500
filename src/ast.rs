use crate::interpreter::value::kind::ValueKind;

/// Represents a literal value in the language.
///
/// Integer literals keep their decimal text until they are evaluated so that
/// values outside the 64-bit range can be reported, as written, instead of
/// wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// The digits of an integer literal, with a leading `-` when a unary
    /// minus was folded into it.
    Integer(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal, without quotes.
    Text(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value.to_string())
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Arithmetic, relational and logical expressions share this one tree; the
/// kinds of their operands are only checked when they are evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value (number, string, boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable or constant by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use golite::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// The environment table a declaration binds into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Package-level declarations, made before `func main`.
    Global,
    /// Declarations inside `func main` and its nested blocks.
    Local,
}

/// How a `var` or `const` declaration obtains its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer {
    /// An explicit type, with an optional value that must match it. Without a
    /// value the type's zero value is bound.
    Typed {
        /// The declared type.
        kind:  ValueKind,
        /// The optional initializer.
        value: Option<Expr>,
    },
    /// No type: the binding takes the kind of the value.
    Inferred(Expr),
}

/// A `var` or `const` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The declared name.
    pub name:        String,
    /// Whether the binding is a constant.
    pub constant:    bool,
    /// The declared type and/or initial value.
    pub initializer: Initializer,
    /// The table the binding goes into.
    pub scope:       Scope,
    /// Line number in the source code.
    pub line:        usize,
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
    /// Line of the opening brace.
    pub line:       usize,
}

/// One `if` or `else if` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalBranch {
    /// The guard, which must evaluate to a boolean.
    pub condition: Expr,
    /// The statements run when the guard holds.
    pub body:      Block,
}

/// An `if` statement with its `else if` chain and optional `else`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStatement {
    /// The `if` arm followed by every `else if` arm.
    pub branches:  Vec<ConditionalBranch>,
    /// The final `else` block.
    pub else_body: Option<Block>,
    /// Line of the `if` keyword.
    pub line:      usize,
}

/// One `case` of a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCase {
    /// The comma-separated case expressions.
    pub values: Vec<Expr>,
    /// Statements up to the next `case`, `default` or closing brace.
    pub body:   Block,
}

/// A `switch` statement.
///
/// Without a subject every case expression is a condition; with a subject
/// every case expression is compared against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchStatement {
    /// The optional switch subject.
    pub subject: Option<Expr>,
    /// The cases in source order.
    pub cases:   Vec<SwitchCase>,
    /// The `default` clause.
    pub default: Option<Block>,
    /// Line of the `switch` keyword.
    pub line:    usize,
}

/// The three shapes a `for` loop can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForShape {
    /// `for init; condition; post { ... }`, every clause optional.
    Clauses {
        /// Runs once before the first iteration.
        init:      Option<Box<Statement>>,
        /// Checked before every iteration; a missing condition is true.
        condition: Option<Expr>,
        /// Runs after every iteration.
        post:      Option<Box<Statement>>,
    },
    /// `for condition { ... }`.
    Condition(Expr),
    /// `for { ... }`.
    Infinite,
}

/// A `for` loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForStatement {
    /// The loop header.
    pub shape: ForShape,
    /// The loop body.
    pub body:  Block,
    /// Line of the `for` keyword.
    pub line:  usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A `var` or `const` declaration.
    Declaration(Declaration),
    /// The define form `name := value`.
    Define {
        /// The name of the new variable.
        name:  String,
        /// The initial value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A variable assignment `name = value`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A compound assignment such as `name += value`.
    CompoundAssignment {
        /// The name of the variable.
        name:  String,
        /// The arithmetic operator applied (`+`, `-`, `*`, `/` or `%`).
        op:    BinaryOperator,
        /// The right-hand side.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name++` or `name--`.
    Step {
        /// The name of the variable.
        name: String,
        /// Increment or decrement.
        op:   StepOperator,
        /// Line number in the source code.
        line: usize,
    },
    /// An `if` statement.
    If(IfStatement),
    /// A `switch` statement.
    Switch(SwitchStatement),
    /// A `for` loop.
    For(ForStatement),
    /// `break`.
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `continue`.
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// `fmt.Println(arguments...)`.
    Print {
        /// The printed expressions, left to right.
        arguments: Vec<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number of the statement's first token.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Declaration(Declaration { line, .. })
            | Self::If(IfStatement { line, .. })
            | Self::Switch(SwitchStatement { line, .. })
            | Self::For(ForStatement { line, .. })
            | Self::Define { line, .. }
            | Self::Assignment { line, .. }
            | Self::CompoundAssignment { line, .. }
            | Self::Step { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::Print { line, .. } => *line,
        }
    }
}

/// An `import "path"` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// The imported package path, without quotes.
    pub path: String,
    /// Line number in the source code.
    pub line: usize,
}

/// A whole source file: `package main`, package-level declarations, an
/// optional import and `func main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Package-level declarations in source order.
    pub globals: Vec<Declaration>,
    /// The import clause.
    pub import:  Option<Import>,
    /// The body of `func main`.
    pub main:    Block,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, or concatenation of strings (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
    /// Floor modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl BinaryOperator {
    /// Whether the operator is one of `+ - * / %`.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod)
    }

    /// Whether the operator is one of `< <= > >= == !=`.
    #[must_use]
    pub const fn is_relational(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }

    /// Whether the operator is one of `< <= > >=`.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(self, Self::Less | Self::Greater | Self::LessEqual | Self::GreaterEqual)
    }

    /// Whether the operator is `==` or `!=`.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

/// The operator of an increment/decrement statement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOperator {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl std::fmt::Display for StepOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
        }
    }
}
