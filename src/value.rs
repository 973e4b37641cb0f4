//! SQL 参数值类型，以及条件右值 / 函数实参的统一表示。

use crate::bindings::Bindings;
use crate::builder::Compile;
use crate::error::Result;
use crate::expr::Expr;
use crate::field::Field;
use crate::options::CompileOptions;
use crate::select::SqlBuilder;
use std::borrow::Cow;

/// SQL 参数值。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    DateTime(time::OffsetDateTime),
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    /// 绑定前的归一化：布尔值变成 0/1，其余原样保留。
    pub(crate) fn normalize(self) -> Self {
        match self {
            Self::Bool(b) => Self::I64(i64::from(b)),
            other => other,
        }
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for SqlValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u16> for SqlValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<time::OffsetDateTime> for SqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

/// 比较运算的右值：单值、列表、字段（列对列比较）或子表达式。
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    Single(SqlValue),
    List(Vec<SqlValue>),
    Field(Field),
    Expr(Box<Expr>),
}

impl<T: Into<SqlValue>> From<T> for ConditionValue {
    fn from(v: T) -> Self {
        Self::Single(v.into())
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for ConditionValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SqlValue>, const N: usize> From<[T; N]> for ConditionValue {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<Field> for ConditionValue {
    fn from(v: Field) -> Self {
        Self::Field(v)
    }
}

impl From<Expr> for ConditionValue {
    fn from(v: Expr) -> Self {
        Self::Expr(Box::new(v))
    }
}

impl From<SqlBuilder> for ConditionValue {
    fn from(v: SqlBuilder) -> Self {
        Self::Field(Field::from(v))
    }
}

/// THEN/ELSE/COALESCE 的实参：字段原样内联，字面值进入参数列表。
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Field(Field),
    Value(SqlValue),
}

impl<T: Into<SqlValue>> From<T> for Operand {
    fn from(v: T) -> Self {
        Self::Value(v.into())
    }
}

impl From<Field> for Operand {
    fn from(v: Field) -> Self {
        Self::Field(v)
    }
}

impl From<Expr> for Operand {
    fn from(v: Expr) -> Self {
        Self::Field(Field::from(v))
    }
}

impl From<SqlBuilder> for Operand {
    fn from(v: SqlBuilder) -> Self {
        Self::Field(Field::from(v))
    }
}

impl Compile for Operand {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        match self {
            Self::Field(field) => field.compile(options, bindings),
            Self::Value(value) => Ok(bindings.bind(value.clone())),
        }
    }
}
