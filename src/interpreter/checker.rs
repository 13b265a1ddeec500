use crate::{
    ast::{Block, Program, Statement},
    error::RuntimeError,
};

/// Walks a program and reports every `break` that is not inside a loop or
/// switch and every `continue` that is not inside a loop.
///
/// The walk covers all branches, including those that never run.
///
/// ## Example
/// ```
/// use golite::{
///     ast::{Block, Program, Statement},
///     interpreter::checker::check_loop_control,
/// };
///
/// let program = Program { globals: Vec::new(),
///                         import:  None,
///                         main:    Block { statements: vec![Statement::Break { line: 3 }],
///                                          line:       2, }, };
///
/// assert_eq!(check_loop_control(&program).len(), 1);
/// ```
#[must_use]
pub fn check_loop_control(program: &Program) -> Vec<RuntimeError> {
    let mut checker = LoopControlChecker::default();
    checker.block(&program.main);
    checker.errors
}

#[derive(Default)]
struct LoopControlChecker {
    loops:      usize,
    breakables: usize,
    errors:     Vec<RuntimeError>,
}

impl LoopControlChecker {
    fn block(&mut self, block: &Block) {
        for statement in &block.statements {
            self.statement(statement);
        }
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Break { line } if self.breakables == 0 => {
                self.errors.push(RuntimeError::LoopControl { keyword: "break",
                                                             allowed: "loop or switch",
                                                             line:    *line, });
            },
            Statement::Continue { line } if self.loops == 0 => {
                self.errors.push(RuntimeError::LoopControl { keyword: "continue",
                                                             allowed: "loop",
                                                             line:    *line, });
            },
            Statement::If(statement) => {
                for branch in &statement.branches {
                    self.block(&branch.body);
                }
                if let Some(body) = &statement.else_body {
                    self.block(body);
                }
            },
            Statement::Switch(statement) => {
                self.breakables += 1;
                for case in &statement.cases {
                    self.block(&case.body);
                }
                if let Some(body) = &statement.default {
                    self.block(body);
                }
                self.breakables -= 1;
            },
            Statement::For(statement) => {
                self.loops += 1;
                self.breakables += 1;
                self.block(&statement.body);
                self.loops -= 1;
                self.breakables -= 1;
            },
            _ => {},
        }
    }
}
