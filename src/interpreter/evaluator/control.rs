use tracing::trace;

use crate::{
    ast::{Block, ForShape, ForStatement, IfStatement, SwitchStatement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        record::{Arm, Branch, LoopShape, Record},
        value::core::Value,
    },
};

impl Context {
    /// Executes an `if` chain.
    ///
    /// Guards are evaluated in order until one holds; only that branch runs.
    /// If none holds the `else` block runs, if there is one.
    ///
    /// # Errors
    /// Any error raised by a guard, including a non-boolean guard. Nothing
    /// runs in that case.
    pub fn exec_if(&mut self, statement: &IfStatement) -> EvalResult<Flow> {
        let mut conditions = Vec::new();
        let mut selected = None;

        for (index, branch) in statement.branches.iter().enumerate() {
            let holds = self.eval_condition(&branch.condition)?;
            conditions.push(Value::Bool(holds));
            if holds {
                selected = Some((Branch::Then(index), &branch.body));
                break;
            }
        }

        let (branch, body) = match selected {
            Some((branch, body)) => (branch, Some(body)),
            None => match &statement.else_body {
                Some(body) => (Branch::Else, Some(body)),
                None => (Branch::Skipped, None),
            },
        };

        let (flow, body) = self.capture(|context| context.exec_optional_block(body));
        self.diagnostics.notice(Record::If { conditions,
                                             branch,
                                             body });
        Ok(flow)
    }

    /// Executes a `switch` statement.
    ///
    /// With a subject, the first case holding a value equal to the subject
    /// runs; without one, the first case holding a true condition runs. Case
    /// expressions are evaluated in order and only until a match is found.
    /// `default` runs when nothing matched. A `break` inside the chosen
    /// clause ends the switch.
    ///
    /// # Errors
    /// - `RuntimeError::TypeMismatch` for a case value of another kind than
    ///   the subject, or a non-boolean case condition.
    /// - Any error raised by the subject or a case expression.
    pub fn exec_switch(&mut self, statement: &SwitchStatement) -> EvalResult<Flow> {
        let subject = statement.subject.as_ref().map(|expr| self.eval(expr)).transpose()?;
        let mut selected = None;

        'cases: for (index, case) in statement.cases.iter().enumerate() {
            for expr in &case.values {
                let matched = match &subject {
                    Some(subject) => {
                        let value = self.eval(expr)?;
                        if value.kind() != subject.kind() {
                            let details = format!("invalid case {} ({}) in switch on {} ({})",
                                                  value.to_literal(),
                                                  value.kind(),
                                                  subject.to_literal(),
                                                  subject.kind());
                            return Err(RuntimeError::TypeMismatch { details,
                                                                    line: expr.line_number() });
                        }
                        value == *subject
                    },
                    None => self.eval_condition(expr)?,
                };
                if matched {
                    selected = Some((Arm::Case(index), &case.body));
                    break 'cases;
                }
            }
        }

        let (arm, body) = match selected {
            Some((arm, body)) => (arm, Some(body)),
            None => match &statement.default {
                Some(body) => (Arm::Default, Some(body)),
                None => (Arm::Unmatched, None),
            },
        };

        self.breakable_depth += 1;
        let (flow, body) = self.capture(|context| context.exec_optional_block(body));
        self.breakable_depth -= 1;

        self.diagnostics.notice(Record::Switch { subject, arm, body });
        Ok(match flow {
               Flow::Break => Flow::Normal,
               other => other,
           })
    }

    /// Executes a `for` loop in any of its shapes.
    ///
    /// The init clause runs once in a frame of its own, so that its variables
    /// are visible to the condition, the post clause and the body, but not
    /// after the loop. Each iteration runs the body in a fresh frame.
    ///
    /// The loop's record is appended even if the loop was cut short by an
    /// error, since the iterations that ran did take effect.
    ///
    /// # Errors
    /// - `RuntimeError::IterationLimit` once the configured limit is reached.
    /// - Any error raised by a clause or a non-boolean condition.
    pub fn exec_for(&mut self, statement: &ForStatement) -> EvalResult<()> {
        let shape = match statement.shape {
            ForShape::Clauses { .. } => LoopShape::Clauses,
            ForShape::Condition(_) => LoopShape::Condition,
            ForShape::Infinite => LoopShape::Infinite,
        };

        self.environment.push_frame();
        let ((iterations, result), body) = self.capture(|context| {
                                                 let mut iterations = 0;
                                                 let result =
                                                     context.run_loop(statement, &mut iterations);
                                                 (iterations, result)
                                             });
        self.environment.pop_frame();

        self.diagnostics.notice(Record::For { shape,
                                              iterations,
                                              body });
        result
    }

    fn run_loop(&mut self, statement: &ForStatement, iterations: &mut u64) -> EvalResult<()> {
        let (init, condition, post) = match &statement.shape {
            ForShape::Clauses { init,
                                condition,
                                post, } => (init.as_deref(), condition.as_ref(), post.as_deref()),
            ForShape::Condition(condition) => (None, Some(condition), None),
            ForShape::Infinite => (None, None, None),
        };

        if let Some(init) = init {
            self.exec_statement(init)?;
        }

        loop {
            if let Some(condition) = condition
               && !self.eval_condition(condition)?
            {
                break;
            }
            if let Some(limit) = self.options.iteration_limit
               && *iterations >= limit
            {
                return Err(RuntimeError::IterationLimit { limit,
                                                          line: statement.line });
            }

            *iterations += 1;
            trace!(line = statement.line, iteration = *iterations, "loop iteration");

            self.loop_depth += 1;
            self.breakable_depth += 1;
            let flow = self.exec_block(&statement.body);
            self.loop_depth -= 1;
            self.breakable_depth -= 1;

            if flow == Flow::Break {
                break;
            }
            if let Some(post) = post {
                self.exec_statement(post)?;
            }
        }
        Ok(())
    }

    fn exec_optional_block(&mut self, block: Option<&Block>) -> Flow {
        block.map_or(Flow::Normal, |block| self.exec_block(block))
    }
}
