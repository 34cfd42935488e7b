//! Variable store for the interpreter.
//!
//! One flat scope for the whole run. A declared variable keeps its declared
//! type and starts out uninitialized unless it has an initializer.

use rustc_hash::FxHashMap;

use minipl_ir::{Value, ValueLookup, ValueType};

/// A declared variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub ty: ValueType,
    /// `None` until first assigned.
    pub value: Option<Value>,
}

/// Error returned by [`Environment::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// No variable of that name.
    Undeclared,
    /// The value's type differs from the declared type.
    TypeMismatch(ValueType),
}

#[derive(Clone, Debug, Default)]
pub struct Environment {
    variables: FxHashMap<String, Variable>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Declare `name` as an uninitialized variable of type `ty`.
    ///
    /// A declaration inside a `for` body runs once per iteration. Running it
    /// again with the same type resets the variable to uninitialized.
    /// Returns `false` if `name` already exists with a different type.
    pub fn declare(&mut self, name: &str, ty: ValueType) -> bool {
        match self.variables.get_mut(name) {
            Some(existing) if existing.ty == ty => {
                existing.value = None;
                true
            }
            Some(_) => false,
            None => {
                self.variables
                    .insert(name.to_owned(), Variable { ty, value: None });
                true
            }
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Store `value` in `name`, which must exist with a matching type.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        let variable = self
            .variables
            .get_mut(name)
            .ok_or(AssignError::Undeclared)?;
        if value.value_type() != variable.ty {
            return Err(AssignError::TypeMismatch(variable.ty));
        }
        variable.value = Some(value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Lets failed assertions show current values: `x(=5) < 3`.
impl ValueLookup for Environment {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.get(name).and_then(|v| v.value.clone())
    }
}
