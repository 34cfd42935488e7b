//! Binary operator evaluation.
//!
//! Mirrors the static rules: `=` and `<` take any two values of the same
//! type, `- * /` take integers, `+` adds integers or concatenates strings.
//! Integer arithmetic is checked; `/` truncates toward zero.

use minipl_ir::{BinaryOp, Value, ValueType};

use crate::RuntimeErrorKind;

/// Evaluate `left op right`.
pub(crate) fn evaluate_binary(
    op: BinaryOp,
    left: Value,
    right: Value,
) -> Result<Value, RuntimeErrorKind> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => eval_int_binary(op, l, r),
        (Value::Str(l), Value::Str(r)) => eval_str_binary(op, l, &r),
        (Value::Bool(l), Value::Bool(r)) => eval_bool_binary(op, l, r),
        (l, r) => Err(invalid_operands(op, &l, &r)),
    }
}

fn eval_int_binary(op: BinaryOp, l: i64, r: i64) -> Result<Value, RuntimeErrorKind> {
    let result = match op {
        BinaryOp::Lt => return Ok(Value::Bool(l < r)),
        BinaryOp::Eq => return Ok(Value::Bool(l == r)),
        BinaryOp::Add => l.checked_add(r),
        BinaryOp::Sub => l.checked_sub(r),
        BinaryOp::Mul => l.checked_mul(r),
        BinaryOp::Div if r == 0 => return Err(RuntimeErrorKind::DivisionByZero),
        BinaryOp::Div => l.checked_div(r),
    };
    result.map(Value::Int).ok_or(RuntimeErrorKind::IntegerOverflow {
        op: op.as_symbol(),
    })
}

/// Strings order by their bytes.
fn eval_str_binary(op: BinaryOp, mut l: String, r: &str) -> Result<Value, RuntimeErrorKind> {
    match op {
        BinaryOp::Add => {
            l.push_str(r);
            Ok(Value::Str(l))
        }
        BinaryOp::Lt => Ok(Value::Bool(l.as_bytes() < r.as_bytes())),
        BinaryOp::Eq => Ok(Value::Bool(l == r)),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => Err(RuntimeErrorKind::InvalidOperands {
            op: op.as_symbol(),
            left: ValueType::Str,
            right: ValueType::Str,
        }),
    }
}

/// `false < true`.
fn eval_bool_binary(op: BinaryOp, l: bool, r: bool) -> Result<Value, RuntimeErrorKind> {
    match op {
        BinaryOp::Lt => Ok(Value::Bool(!l & r)),
        BinaryOp::Eq => Ok(Value::Bool(l == r)),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            Err(RuntimeErrorKind::InvalidOperands {
                op: op.as_symbol(),
                left: ValueType::Bool,
                right: ValueType::Bool,
            })
        }
    }
}

fn invalid_operands(op: BinaryOp, left: &Value, right: &Value) -> RuntimeErrorKind {
    RuntimeErrorKind::InvalidOperands {
        op: op.as_symbol(),
        left: left.value_type(),
        right: right.value_type(),
    }
}
