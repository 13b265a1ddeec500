use crate::{
    ast::{BinaryOperator, Scope, StepOperator},
    interpreter::value::{core::Value, kind::ValueKind},
};

/// Which arm of an `if` chain ran.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Branch {
    /// The guarded branch at this index: 0 for `if`, 1.. for each `else if`.
    Then(usize),
    /// The `else` block.
    Else,
    /// No guard held and there is no `else`.
    Skipped,
}

/// Which clause of a `switch` ran.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arm {
    /// The case at this index, counted from 0.
    Case(usize),
    /// The `default` clause.
    Default,
    /// No case matched and there is no `default`.
    Unmatched,
}

/// The shape of a `for` loop, for display.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopShape {
    /// `for init; condition; post`.
    Clauses,
    /// `for condition`.
    Condition,
    /// `for`.
    Infinite,
}

/// A description of one construct that took effect.
///
/// Control constructs carry the records of the statements their bodies
/// executed, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `import "path"`.
    Import {
        /// The imported path.
        path: String,
    },
    /// A `var` or `const` declaration.
    Declaration {
        /// The declared name.
        name:     String,
        /// Whether the binding is constant.
        constant: bool,
        /// The table the binding went into.
        scope:    Scope,
        /// The kind of the binding.
        kind:     ValueKind,
        /// The bound value.
        value:    Value,
    },
    /// `name := value`.
    Define {
        /// The declared name.
        name:  String,
        /// The bound value.
        value: Value,
    },
    /// `name = value`.
    Assignment {
        /// The assigned name.
        name:  String,
        /// The table the binding lives in.
        scope: Scope,
        /// The new value.
        value: Value,
    },
    /// `name op= operand`.
    CompoundAssignment {
        /// The assigned name.
        name:    String,
        /// The arithmetic operator.
        op:      BinaryOperator,
        /// The evaluated right-hand side.
        operand: Value,
        /// The resulting value.
        value:   Value,
    },
    /// `name++` or `name--`.
    Step {
        /// The stepped name.
        name:  String,
        /// Increment or decrement.
        op:    StepOperator,
        /// The resulting value.
        value: Value,
    },
    /// An `if` chain.
    If {
        /// The values of the guards that were evaluated, in order.
        conditions: Vec<Value>,
        /// The arm that ran.
        branch:     Branch,
        /// What that arm executed.
        body:       Vec<Self>,
    },
    /// A `switch` statement.
    Switch {
        /// The value of the subject, if the switch has one.
        subject: Option<Value>,
        /// The clause that ran.
        arm:     Arm,
        /// What that clause executed.
        body:    Vec<Self>,
    },
    /// A `for` loop.
    For {
        /// The loop shape.
        shape:      LoopShape,
        /// How many times the body started.
        iterations: u64,
        /// What every iteration executed, concatenated.
        body:       Vec<Self>,
    },
    /// `break`.
    Break,
    /// `continue`.
    Continue,
    /// `fmt.Println(values)`.
    Print {
        /// The evaluated arguments, left to right.
        values: Vec<Value>,
    },
}

impl Record {
    /// Renders the record and everything nested in it, one line per record,
    /// indenting nested records by two spaces per level.
    ///
    /// ## Example
    /// ```
    /// use golite::interpreter::{
    ///     record::{Branch, Record},
    ///     value::core::Value,
    /// };
    ///
    /// let record = Record::If { conditions: vec![Value::Bool(true)],
    ///                           branch:     Branch::Then(0),
    ///                           body:       vec![Record::Print { values: vec![Value::Int(1)] }], };
    ///
    /// assert_eq!(record.render(),
    ///            vec!["if true -> then branch".to_string(), "  fmt.Println(1)".to_string()]);
    /// ```
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(0, &mut lines);
        lines
    }

    fn render_into(&self, depth: usize, lines: &mut Vec<String>) {
        lines.push(format!("{}{self}", "  ".repeat(depth)));
        for child in self.children() {
            child.render_into(depth + 1, lines);
        }
    }

    /// Returns the records nested inside a control construct.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::If { body, .. } | Self::Switch { body, .. } | Self::For { body, .. } => body,
            _ => &[],
        }
    }

    /// Appends the lines printed by this record and its children to `out`.
    pub fn collect_printed(&self, out: &mut Vec<String>) {
        if let Self::Print { values } = self {
            out.push(values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "));
        }
        for child in self.children() {
            child.collect_printed(out);
        }
    }
}

fn scope_label(scope: Scope) -> &'static str {
    match scope {
        Scope::Global => "global",
        Scope::Local => "local",
    }
}

fn join_literals(values: &[Value]) -> String {
    values.iter().map(Value::to_literal).collect::<Vec<_>>().join(", ")
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Import { path } => write!(f, "import \"{path}\""),
            Self::Declaration { name,
                                constant,
                                scope,
                                kind,
                                value, } => {
                let keyword = if *constant { "const" } else { "var" };
                write!(f,
                       "{keyword} {name} {kind} = {} ({})",
                       value.to_literal(),
                       scope_label(*scope))
            },
            Self::Define { name, value } => write!(f, "{name} := {}", value.to_literal()),
            Self::Assignment { name, scope, value } => {
                write!(f, "{name} = {} ({})", value.to_literal(), scope_label(*scope))
            },
            Self::CompoundAssignment { name,
                                       op,
                                       operand,
                                       value, } => {
                write!(f, "{name} {op}= {} -> {}", operand.to_literal(), value.to_literal())
            },
            Self::Step { name, op, value } => write!(f, "{name}{op} -> {}", value.to_literal()),
            Self::If { conditions, branch, .. } => {
                let taken = match branch {
                    Branch::Then(0) => "then branch".to_string(),
                    Branch::Then(n) => format!("else if branch {n}"),
                    Branch::Else => "else branch".to_string(),
                    Branch::Skipped => "no branch".to_string(),
                };
                write!(f, "if {} -> {taken}", join_literals(conditions))
            },
            Self::Switch { subject, arm, .. } => {
                write!(f, "switch")?;
                if let Some(subject) = subject {
                    write!(f, " {}", subject.to_literal())?;
                }
                match arm {
                    Arm::Case(n) => write!(f, " -> case {}", n + 1),
                    Arm::Default => write!(f, " -> default"),
                    Arm::Unmatched => write!(f, " -> no case"),
                }
            },
            Self::For { shape, iterations, .. } => {
                let shape = match shape {
                    LoopShape::Clauses => "for clauses",
                    LoopShape::Condition => "for condition",
                    LoopShape::Infinite => "for",
                };
                let plural = if *iterations == 1 { "" } else { "s" };
                write!(f, "{shape} ran {iterations} iteration{plural}")
            },
            Self::Break => write!(f, "break"),
            Self::Continue => write!(f, "continue"),
            Self::Print { values } => write!(f, "fmt.Println({})", join_literals(values)),
        }
    }
}
