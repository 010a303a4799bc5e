use std::fmt::{self, Display, Formatter};

use smol_str::SmolStr;

use crate::{number::Number, operator::Operator};

/// Literal scalar carried by a constant-push code.
///
/// The tree builder relocates values into the tree without interpreting
/// them; the set of variants only has to cover what the compiler can
/// produce as a constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(Number),
    Bool(bool),
    None,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n.into())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::None => write!(f, "None"),
        }
    }
}

/// Opaque reference to a column or field of the underlying storage.
///
/// Carried by name; resolving the name against a table is the hosting
/// engine's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef(SmolStr);

impl ColumnRef {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        ColumnRef(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::new(name)
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        ColumnRef::new(name)
    }
}

impl From<SmolStr> for ColumnRef {
    fn from(name: SmolStr) -> Self {
        ColumnRef(name)
    }
}

impl Display for ColumnRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The wrapper object a constant-push code carries its literal in.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    value: Value,
}

impl Constant {
    pub fn new(value: impl Into<Value>) -> Self {
        Constant {
            value: value.into(),
        }
    }

    /// Unwraps the pushed literal.
    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Operand attached to a code, when the operator needs one.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Column/field reference of a value-access code.
    Column(ColumnRef),
    /// Literal wrapper of a constant-push code.
    Constant(Constant),
}

/// One instruction of a compiled expression: an operator and, where the
/// operator calls for one, an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    pub op: Operator,
    pub operand: Option<Operand>,
}

impl Code {
    /// A bare code with no operand. Two-operand operators take their
    /// inputs from the stack, not from the code.
    pub fn new(op: Operator) -> Self {
        Code { op, operand: None }
    }

    /// A value-access code referencing `column`.
    pub fn get_value(column: impl Into<ColumnRef>) -> Self {
        Code {
            op: Operator::GetValue,
            operand: Some(Operand::Column(column.into())),
        }
    }

    /// A constant-push code carrying `value`.
    pub fn push(value: impl Into<Value>) -> Self {
        Code {
            op: Operator::Push,
            operand: Some(Operand::Constant(Constant::new(value))),
        }
    }
}
