//! Declared-type table.

use minipl_ir::ValueType;
use rustc_hash::FxHashMap;

/// Maps each declared variable to its type. Single global scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeEnv {
    bindings: FxHashMap<String, ValueType>,
}

impl TypeEnv {
    pub fn new() -> Self {
        TypeEnv::default()
    }

    /// Declare `name`. Returns `false`, leaving the table unchanged, if it
    /// was already declared.
    pub fn declare(&mut self, name: &str, ty: ValueType) -> bool {
        if self.bindings.contains_key(name) {
            return false;
        }
        self.bindings.insert(name.to_owned(), ty);
        true
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<ValueType> {
        self.bindings.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
