//! Static type checking for MiniPL.
//!
//! [`check`] visits every statement and expression of a parsed program and
//! records a [`TypeError`] for each violation of the typing rules. Checking
//! continues past errors, so independent problems are all reported in one
//! run. The interpreter only runs a program with zero type errors.
//!
//! There is one flat scope. A variable is declared exactly once, keeps its
//! declared type for the whole program, and is visible to every statement
//! after its declaration.

mod checker;
mod env;
mod error;

pub use checker::TypeChecker;
pub use env::TypeEnv;
pub use error::{TypeError, TypeErrorKind};

use minipl_ir::Stmt;
use tracing::debug;

/// Output of [`check`].
#[derive(Clone, Debug, Default)]
pub struct TypeCheckResult {
    /// Errors in the order they were found.
    pub errors: Vec<TypeError>,
    /// Declared types of every variable in the program.
    pub env: TypeEnv,
}

impl TypeCheckResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Type check a whole program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check(statements: &[Stmt]) -> TypeCheckResult {
    let mut checker = TypeChecker::new();
    checker.check_stmts(statements);
    let result = checker.finish();
    debug!(
        variables = result.env.len(),
        errors = result.errors.len(),
        "type checked"
    );
    result
}
