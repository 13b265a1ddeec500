use std::collections::HashMap;

use crate::{
    ast::Scope,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A name's value together with its constant flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The current value. Its kind never changes after declaration.
    pub value:    Value,
    /// Whether the binding rejects assignment.
    pub constant: bool,
}

/// The symbol tables of one run.
///
/// Package-level declarations live in the global table. Everything declared
/// inside `func main` lives in a stack of local frames: the body of `main` is
/// the base frame and every nested block pushes one more.
///
/// Lookups check the global table first and the local frames afterwards,
/// innermost first. Because a name visible anywhere cannot be declared again,
/// no name is ever bound in more than one table at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    global: HashMap<String, Binding>,
    frames: Vec<HashMap<String, Binding>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment with an empty global table and one empty local
    /// frame.
    #[must_use]
    pub fn new() -> Self {
        Self { global: HashMap::new(),
               frames: vec![HashMap::new()], }
    }

    /// Binds `name` in the table selected by `scope`.
    ///
    /// # Errors
    /// `RuntimeError::Redeclaration` if `name` is already visible; the
    /// existing binding is left untouched.
    ///
    /// # Example
    /// ```
    /// use golite::{
    ///     ast::Scope,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.declare(Scope::Local, "x", Value::Int(5), false, 1).unwrap();
    ///
    /// assert!(env.declare(Scope::Local, "x", Value::Int(6), false, 2).is_err());
    /// assert_eq!(env.get("x"), Some(&Value::Int(5)));
    /// ```
    pub fn declare(&mut self,
                   scope: Scope,
                   name: &str,
                   value: Value,
                   constant: bool,
                   line: usize)
                   -> EvalResult<()> {
        if self.resolve(name).is_some() {
            return Err(RuntimeError::Redeclaration { name: name.to_string(),
                                                     line });
        }

        let binding = Binding { value, constant };
        match scope {
            Scope::Global => {
                self.global.insert(name.to_string(), binding);
            },
            Scope::Local => {
                if let Some(frame) = self.frames.last_mut() {
                    frame.insert(name.to_string(), binding);
                }
            },
        }
        Ok(())
    }

    /// Finds the binding for `name`, checking the global table before the
    /// local frames.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<(Scope, &Binding)> {
        if let Some(binding) = self.global.get(name) {
            return Some((Scope::Global, binding));
        }
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .map(|binding| (Scope::Local, binding))
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedIdentifier` if no binding exists.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.resolve(name)
            .map(|(_, binding)| binding.value.clone())
            .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: name.to_string(),
                                                               line })
    }

    /// Overwrites the value of an existing, non-constant binding of the same
    /// kind and returns the table it lives in.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedIdentifier` if `name` is not bound.
    /// - `RuntimeError::ConstAssign` if the binding is constant.
    /// - `RuntimeError::TypeMismatch` if `value` has a different kind.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<Scope> {
        let (scope, binding) = self.writable(name, line)?;

        if binding.value.kind() != value.kind() {
            let details = format!("cannot use {} ({}) as {} value in assignment",
                                  value.to_literal(),
                                  value.kind(),
                                  binding.value.kind());
            return Err(RuntimeError::TypeMismatch { details, line });
        }

        binding.value = value;
        Ok(scope)
    }

    /// Returns the mutable binding for `name` after checking that it exists
    /// and is not constant.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedIdentifier` or `RuntimeError::ConstAssign`.
    pub fn writable(&mut self, name: &str, line: usize) -> EvalResult<(Scope, &mut Binding)> {
        let found = if let Some(binding) = self.global.get_mut(name) {
            Some((Scope::Global, binding))
        } else {
            self.frames
                .iter_mut()
                .rev()
                .find_map(|frame| frame.get_mut(name))
                .map(|binding| (Scope::Local, binding))
        };

        match found {
            None => Err(RuntimeError::UndefinedIdentifier { name: name.to_string(),
                                                            line }),
            Some((_, binding)) if binding.constant => {
                Err(RuntimeError::ConstAssign { name: name.to_string(),
                                                line })
            },
            Some(found) => Ok(found),
        }
    }

    /// Opens a local frame for a nested block.
    pub fn push_frame(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Closes the innermost local frame. The base frame of `main` is never
    /// removed.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Returns the current value of `name`, if it is bound.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.resolve(name).map(|(_, binding)| &binding.value)
    }

    /// Returns whether `name` is bound to a constant.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|(_, binding)| binding.constant)
    }

    /// Returns the table `name` is bound in.
    #[must_use]
    pub fn scope_of(&self, name: &str) -> Option<Scope> {
        self.resolve(name).map(|(scope, _)| scope)
    }
}
