//! Runtime values and their types.

use std::fmt;

/// The three primitive types of MiniPL.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueType {
    Int,
    Str,
    Bool,
}

impl ValueType {
    /// Source keyword for this type.
    pub const fn keyword(self) -> &'static str {
        match self {
            ValueType::Int => "int",
            ValueType::Str => "string",
            ValueType::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A tagged runtime value.
///
/// The tag is the variant itself, so a value's type and payload cannot
/// disagree, and there are no implicit conversions between variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl Value {
    #[inline]
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Str(_) => ValueType::Str,
            Value::Bool(_) => ValueType::Bool,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Output form used by `print`: integers in decimal, strings verbatim.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
