//! Statement and expression checking.

use minipl_ir::{BinaryOp, Expr, Stmt, Token, ValueType};
use minipl_stack::ensure_sufficient_stack;

use crate::{TypeCheckResult, TypeEnv, TypeError, TypeErrorKind};

type CheckResult<T> = Result<T, TypeError>;

/// Walks a program, collecting type errors.
///
/// Statement checks record their error and return, so checking moves on to
/// the next statement. Expression checks stop at the first error inside the
/// expression, since the rest of it has no meaningful type.
#[derive(Default)]
pub struct TypeChecker {
    env: TypeEnv,
    /// Counters of the `for` loops currently being checked, innermost last.
    loop_counters: Vec<String>,
    errors: Vec<TypeError>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::default()
    }

    pub fn check_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.check_stmt(stmt);
        }
    }

    pub fn finish(self) -> TypeCheckResult {
        debug_assert!(self.loop_counters.is_empty());
        TypeCheckResult {
            errors: self.errors,
            env: self.env,
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        if let Err(error) = self.stmt(stmt) {
            tracing::trace!(line = error.line, %error, "type error");
            self.errors.push(error);
        }
    }

    fn stmt(&mut self, stmt: &Stmt) -> CheckResult<()> {
        match stmt {
            Stmt::VarDecl {
                name,
                ty,
                initializer,
            } => self.var_decl(name, *ty, initializer.as_ref()),
            Stmt::Assign { name, value } => self.assign(name, value),
            Stmt::Print { keyword, expr } => match self.expr_type(expr)? {
                ValueType::Bool => Err(TypeError::new(
                    keyword,
                    TypeErrorKind::PrintBool {
                        found: ValueType::Bool,
                    },
                )),
                ValueType::Int | ValueType::Str => Ok(()),
            },
            Stmt::Read { name, .. } => self.writable(name).map(|_| ()),
            Stmt::Assert { keyword, expr } => match self.expr_type(expr)? {
                ValueType::Bool => Ok(()),
                found => Err(TypeError::new(
                    keyword,
                    TypeErrorKind::AssertNotBool { found },
                )),
            },
            Stmt::For {
                keyword,
                var,
                start,
                end,
                body,
            } => {
                self.for_loop(keyword, var, [start, end], body);
                Ok(())
            }
        }
    }

    fn var_decl(
        &mut self,
        name: &Token,
        ty: ValueType,
        initializer: Option<&Expr>,
    ) -> CheckResult<()> {
        if !self.env.declare(&name.text, ty) {
            return Err(TypeError::new(
                name,
                TypeErrorKind::Redeclared {
                    name: name.text.clone(),
                },
            ));
        }
        let Some(init) = initializer else {
            return Ok(());
        };
        let found = self.expr_type(init)?;
        if found == ty {
            Ok(())
        } else {
            Err(TypeError::new(
                name,
                TypeErrorKind::InitializerMismatch {
                    name: name.text.clone(),
                    expected: ty,
                    found,
                },
            ))
        }
    }

    fn assign(&mut self, name: &Token, value: &Expr) -> CheckResult<()> {
        let expected = self.writable(name)?;
        let found = self.expr_type(value)?;
        if found == expected {
            Ok(())
        } else {
            Err(TypeError::new(
                name,
                TypeErrorKind::AssignMismatch {
                    name: name.text.clone(),
                    expected,
                    found,
                },
            ))
        }
    }

    /// Target of an assignment or `read`: declared and not an active loop
    /// counter. Returns its declared type.
    fn writable(&self, name: &Token) -> CheckResult<ValueType> {
        let ty = self.declared(name)?;
        if self.loop_counters.contains(&name.text) {
            return Err(TypeError::new(
                name,
                TypeErrorKind::AssignToLoopCounter {
                    name: name.text.clone(),
                },
            ));
        }
        Ok(ty)
    }

    fn declared(&self, name: &Token) -> CheckResult<ValueType> {
        self.env.lookup(&name.text).ok_or_else(|| {
            TypeError::new(
                name,
                TypeErrorKind::Undeclared {
                    name: name.text.clone(),
                },
            )
        })
    }

    /// Header problems are all reported; the body is checked regardless,
    /// with the counter guarded for its duration.
    fn for_loop(&mut self, keyword: &Token, var: &Token, bounds: [&Expr; 2], body: &[Stmt]) {
        match self.declared(var) {
            Ok(ValueType::Int) => {}
            Ok(found) => self.errors.push(TypeError::new(
                var,
                TypeErrorKind::LoopCounterNotInt {
                    name: var.text.clone(),
                    found,
                },
            )),
            Err(e) => self.errors.push(e),
        }

        let already_guarded = self.loop_counters.contains(&var.text);
        if already_guarded {
            self.errors.push(TypeError::new(
                var,
                TypeErrorKind::LoopCounterInUse {
                    name: var.text.clone(),
                },
            ));
        }

        for bound in bounds {
            match self.expr_type(bound) {
                Ok(ValueType::Int) => {}
                Ok(found) => self.errors.push(TypeError::new(
                    keyword,
                    TypeErrorKind::LoopBoundNotInt { found },
                )),
                Err(e) => self.errors.push(e),
            }
        }

        if !already_guarded {
            self.loop_counters.push(var.text.clone());
        }
        self.check_stmts(body);
        if !already_guarded {
            self.loop_counters.pop();
        }
    }

    /// Type of `expr`, or the first error inside it.
    pub fn expr_type(&self, expr: &Expr) -> CheckResult<ValueType> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(value) => Ok(value.value_type()),
            Expr::Grouping(inner) => self.expr_type(inner),
            Expr::Identifier(name) => self.declared(name),
            Expr::Unary { op, operand } => match self.expr_type(operand)? {
                ValueType::Bool => Ok(ValueType::Bool),
                found => Err(TypeError::new(op, TypeErrorKind::NotNotBool { found })),
            },
            Expr::Logical { left, op, right } => {
                let left = self.expr_type(left)?;
                let right = self.expr_type(right)?;
                if left == ValueType::Bool && right == ValueType::Bool {
                    Ok(ValueType::Bool)
                } else {
                    Err(TypeError::new(
                        op,
                        TypeErrorKind::LogicalNotBool { left, right },
                    ))
                }
            }
            Expr::Binary {
                left,
                op,
                token,
                right,
            } => {
                let left = self.expr_type(left)?;
                let right = self.expr_type(right)?;
                binary_type(*op, left, right)
                    .map_err(|kind| TypeError::new(token, kind))
            }
        })
    }
}

/// Result type of `left op right`.
fn binary_type(op: BinaryOp, left: ValueType, right: ValueType) -> Result<ValueType, TypeErrorKind> {
    match op {
        BinaryOp::Lt | BinaryOp::Eq => {
            if left == right {
                Ok(ValueType::Bool)
            } else {
                Err(TypeErrorKind::ComparisonMismatch {
                    op: op.as_symbol(),
                    left,
                    right,
                })
            }
        }
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            if left == ValueType::Int && right == ValueType::Int {
                Ok(ValueType::Int)
            } else {
                Err(TypeErrorKind::ArithmeticNotInt {
                    op: op.as_symbol(),
                    left,
                    right,
                })
            }
        }
        BinaryOp::Add => {
            if left == right && left != ValueType::Bool {
                Ok(left)
            } else {
                Err(TypeErrorKind::AddMismatch { left, right })
            }
        }
    }
}
