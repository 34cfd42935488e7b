//! Statement execution and expression evaluation.

use minipl_diagnostic::Diagnostic;
use minipl_ir::{render_expr, Expr, Stmt, Token, Value, ValueType};
use minipl_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::environment::AssignError;
use crate::input_handler::SharedInputHandler;
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalResult, RuntimeError, RuntimeErrorKind};

/// Executes one program against a fresh [`Environment`].
///
/// The environment outlives [`Interpreter::interpret`] so callers can look
/// at final variable values.
pub struct Interpreter {
    env: Environment,
    print: SharedPrintHandler,
    input: SharedInputHandler,
    failed_assertions: usize,
}

impl Interpreter {
    pub fn new(print: SharedPrintHandler, input: SharedInputHandler) -> Self {
        Interpreter {
            env: Environment::new(),
            print,
            input,
            failed_assertions: 0,
        }
    }

    /// Run `program` to completion or to the first runtime error.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn interpret(&mut self, program: &[Stmt]) -> EvalResult<()> {
        let result = self.exec_block(program);
        debug!(
            variables = self.env.len(),
            failed_assertions = self.failed_assertions,
            ok = result.is_ok(),
            "interpreted"
        );
        result
    }

    /// Current value of `name`, if declared and initialized.
    pub fn value_of(&self, name: &str) -> Option<&Value> {
        self.env.get(name).and_then(|v| v.value.as_ref())
    }

    /// Number of `assert` statements that evaluated to false.
    pub fn failed_assertions(&self) -> usize {
        self.failed_assertions
    }

    fn exec_block(&mut self, stmts: &[Stmt]) -> EvalResult<()> {
        for stmt in stmts {
            self.exec(stmt)?;
        }
        Ok(())
    }

    fn exec(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::VarDecl {
                name,
                ty,
                initializer,
            } => {
                if !self.env.declare(&name.text, *ty) {
                    return Err(error_at(
                        name,
                        RuntimeErrorKind::Redeclared {
                            name: name.text.clone(),
                        },
                    ));
                }
                if let Some(init) = initializer {
                    let value = self.eval(init)?;
                    self.store(name, value)?;
                }
                Ok(())
            }
            Stmt::Assign { name, value } => {
                let value = self.eval(value)?;
                self.store(name, value)
            }
            Stmt::Print { keyword, expr } => {
                let value = self.eval(expr)?;
                self.print
                    .print(&value.to_string())
                    .map_err(|e| error_at(keyword, RuntimeErrorKind::Io(e.to_string())))
            }
            Stmt::Read { name, .. } => self.read(name),
            Stmt::Assert { keyword, expr } => {
                if !self.eval_bool(expr, keyword, "assert")? {
                    self.failed_assertions += 1;
                    let rendered = render_expr(expr, &self.env);
                    self.print
                        .report(&Diagnostic::assertion_failed(keyword.line, rendered));
                }
                Ok(())
            }
            Stmt::For {
                keyword,
                var,
                start,
                end,
                body,
            } => {
                let begin = self.eval_bound(start, keyword)?;
                let end = self.eval_bound(end, keyword)?;
                trace!(var = %var.text, begin, end, "for");
                for n in begin..=end {
                    trace!(var = %var.text, value = n, "iteration");
                    self.store(var, Value::Int(n))?;
                    ensure_sufficient_stack(|| self.exec_block(body))?;
                }
                Ok(())
            }
        }
    }

    fn read(&mut self, name: &Token) -> EvalResult<()> {
        let ty = self.declared_type(name)?;
        if ty == ValueType::Bool {
            return Err(error_at(
                name,
                RuntimeErrorKind::ReadBool {
                    name: name.text.clone(),
                },
            ));
        }

        let line = self
            .input
            .read_line()
            .map_err(|e| error_at(name, RuntimeErrorKind::Io(e.to_string())))?
            .ok_or_else(|| error_at(name, RuntimeErrorKind::EndOfInput))?;
        let line = strip_line_terminator(&line);

        let value = match ty {
            ValueType::Int => {
                let trimmed = line.trim();
                let n = trimmed.parse::<i64>().map_err(|_| {
                    error_at(
                        name,
                        RuntimeErrorKind::InvalidInteger {
                            input: trimmed.to_owned(),
                        },
                    )
                })?;
                Value::Int(n)
            }
            ValueType::Str | ValueType::Bool => Value::Str(line.to_owned()),
        };
        self.store(name, value)
    }

    fn declared_type(&self, name: &Token) -> EvalResult<ValueType> {
        self.env.get(&name.text).map(|v| v.ty).ok_or_else(|| {
            error_at(
                name,
                RuntimeErrorKind::Undeclared {
                    name: name.text.clone(),
                },
            )
        })
    }

    fn store(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        let found = value.value_type();
        self.env
            .assign(&name.text, value)
            .map_err(|err| match err {
                AssignError::Undeclared => RuntimeErrorKind::Undeclared {
                    name: name.text.clone(),
                },
                AssignError::TypeMismatch(expected) => RuntimeErrorKind::AssignMismatch {
                    name: name.text.clone(),
                    expected,
                    found,
                },
            })
            .map_err(|kind| error_at(name, kind))
    }

    fn eval_bound(&mut self, expr: &Expr, keyword: &Token) -> EvalResult<i64> {
        let value = self.eval(expr)?;
        value.as_int().ok_or_else(|| {
            error_at(
                keyword,
                RuntimeErrorKind::InvalidOperand {
                    op: "..",
                    found: value.value_type(),
                },
            )
        })
    }

    fn eval_bool(&mut self, expr: &Expr, at: &Token, op: &'static str) -> EvalResult<bool> {
        let value = self.eval(expr)?;
        value.as_bool().ok_or_else(|| {
            error_at(
                at,
                RuntimeErrorKind::InvalidOperand {
                    op,
                    found: value.value_type(),
                },
            )
        })
    }

    /// Evaluate an expression to a value.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Grouping(inner) => self.eval(inner),
            Expr::Unary { op, operand } => {
                let b = self.eval_bool(operand, op, "!")?;
                Ok(Value::Bool(!b))
            }
            Expr::Binary {
                left,
                op,
                token,
                right,
            } => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                evaluate_binary(*op, l, r).map_err(|kind| error_at(token, kind))
            }
            Expr::Logical { left, op, right } => {
                if !self.eval_bool(left, op, "&")? {
                    return Ok(Value::Bool(false));
                }
                self.eval_bool(right, op, "&").map(Value::Bool)
            }
            Expr::Identifier(name) => self.lookup(name),
        })
    }

    fn lookup(&self, name: &Token) -> EvalResult<Value> {
        match self.env.get(&name.text) {
            Some(variable) => variable.value.clone().ok_or_else(|| {
                error_at(
                    name,
                    RuntimeErrorKind::NotInitialized {
                        name: name.text.clone(),
                    },
                )
            }),
            None => Err(error_at(
                name,
                RuntimeErrorKind::Undeclared {
                    name: name.text.clone(),
                },
            )),
        }
    }
}

#[inline]
fn error_at(token: &Token, kind: RuntimeErrorKind) -> RuntimeError {
    RuntimeError::new(token, kind)
}

/// Drop one trailing `\n` or `\r\n`.
fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
