//! CASE 表达式构建器。
//!
//! `when` / `then` / `else_` 的调用顺序由类型状态保证：
//! `Empty --when--> Pending --then--> Ready --when--> Pending`，
//! 只有 `Ready` 可以 `else_` 或转换为表达式。
//!
//! ```compile_fail
//! use coral_sql::case_when;
//!
//! // then() 之前必须先 when()
//! let _ = case_when().then("value");
//! ```
//!
//! ```compile_fail
//! use coral_sql::{case_when, Operator};
//!
//! // 悬空的 when() 不能直接 else_()
//! let _ = case_when().when("status", Operator::Eq, "active").else_("Default");
//! ```

use crate::bindings::Bindings;
use crate::builder::Compile;
use crate::condition::Condition;
use crate::conditions::Conditions;
use crate::error::{BuildError, Result};
use crate::expr::{Expr, Operator};
use crate::field::Field;
use crate::options::CompileOptions;
use crate::value::{ConditionValue, Operand, SqlValue};

mod sealed {
    pub trait Sealed {}
}

/// CASE 构建器所处的状态。
pub trait CaseState: sealed::Sealed {}

/// 尚未添加任何分支。
#[derive(Debug, Clone, PartialEq)]
pub struct Empty;

/// 已 `when`，等待 `then`。
#[derive(Debug, Clone, PartialEq)]
pub struct Pending {
    condition: CaseCondition,
}

/// 至少有一个完整分支。
#[derive(Debug, Clone, PartialEq)]
pub struct Ready;

impl sealed::Sealed for Empty {}
impl sealed::Sealed for Pending {}
impl sealed::Sealed for Ready {}
impl CaseState for Empty {}
impl CaseState for Pending {}
impl CaseState for Ready {}

/// 可以继续 `when` 的状态。
pub trait AcceptsWhen: CaseState {}
impl AcceptsWhen for Empty {}
impl AcceptsWhen for Ready {}

/// WHEN 后面的条件。
#[derive(Debug, Clone, PartialEq)]
pub enum CaseCondition {
    /// `field OP value`，不加括号。
    Compare { field: Field, expr: Expr },
    /// `(field expr)`
    Condition(Condition),
    /// 条件组文本，不额外包裹括号。
    Group(Conditions),
}

impl Compile for CaseCondition {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        match self {
            Self::Compare { field, expr } => {
                let field = field.compile(options, bindings)?;
                let expr = expr.compile(options, bindings)?;
                Ok(format!("{field} {expr}"))
            }
            Self::Condition(condition) => condition.compile(options, bindings),
            Self::Group(group) => group
                .compile_group(options, bindings)?
                .ok_or(BuildError::EmptyCaseCondition),
        }
    }
}

/// 完成的 CASE 表达式。
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpr {
    clauses: Vec<(CaseCondition, Operand)>,
    else_value: Option<Operand>,
}

impl Compile for CaseExpr {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        let mut sql = String::from("(CASE");
        for (condition, value) in &self.clauses {
            let condition = condition.compile(options, bindings)?;
            let value = value.compile(options, bindings)?;
            sql.push_str(&format!(" WHEN {condition} THEN {value}"));
        }
        if let Some(value) = &self.else_value {
            sql.push_str(&format!(" ELSE {}", value.compile(options, bindings)?));
        }
        sql.push_str(" END)");
        Ok(sql)
    }
}

/// CASE 构建器。
#[derive(Debug, Clone, PartialEq)]
pub struct CaseWhen<S: CaseState = Empty> {
    clauses: Vec<(CaseCondition, Operand)>,
    state: S,
}

/// 开始一个 CASE 表达式。
///
/// ```
/// use coral_sql::{case_when, create_builder, Operator};
///
/// let (sql, args) = create_builder()
///     .from("users")
///     .column(
///         case_when()
///             .when("status", Operator::Eq, "active")
///             .then("Active")
///             .else_("Inactive"),
///     )
///     .to_sql()
///     .unwrap();
/// assert_eq!(
///     sql,
///     "SELECT\n  (CASE WHEN `status` = ? THEN ? ELSE ? END)\nFROM\n  `users`"
/// );
/// assert_eq!(args.len(), 3);
/// ```
pub fn case_when() -> CaseWhen<Empty> {
    CaseWhen {
        clauses: Vec::new(),
        state: Empty,
    }
}

impl<S: AcceptsWhen> CaseWhen<S> {
    /// `WHEN field OP value`；`value` 为 NULL 且运算符是 `=` / `!=` / `<>` 时改写为 `IS [NOT] NULL`。
    pub fn when(
        self,
        field: impl Into<Field>,
        op: Operator,
        value: impl Into<ConditionValue>,
    ) -> CaseWhen<Pending> {
        let value = value.into();
        let is_null = matches!(value, ConditionValue::Single(SqlValue::Null));
        let expr = match op {
            Operator::Eq if is_null => Expr::Null { negated: false },
            Operator::Ne | Operator::NotEqual if is_null => Expr::Null { negated: true },
            _ => Expr::Compare { op, value },
        };
        self.pending(CaseCondition::Compare {
            field: field.into(),
            expr,
        })
    }

    /// `WHEN (field expr)`，例如搭配 `is_not_null()`。
    pub fn when_expr(self, field: impl Into<Field>, expr: Expr) -> CaseWhen<Pending> {
        self.pending(CaseCondition::Condition(Condition::new(field, expr)))
    }

    /// 以整个条件组作为 WHEN 条件。
    pub fn when_conditions(self, conditions: Conditions) -> CaseWhen<Pending> {
        self.pending(CaseCondition::Group(conditions))
    }

    fn pending(self, condition: CaseCondition) -> CaseWhen<Pending> {
        CaseWhen {
            clauses: self.clauses,
            state: Pending { condition },
        }
    }
}

impl CaseWhen<Pending> {
    /// 补全当前分支。字面值绑定为参数，字段与表达式内联。
    pub fn then(self, value: impl Into<Operand>) -> CaseWhen<Ready> {
        let mut clauses = self.clauses;
        clauses.push((self.state.condition, value.into()));
        CaseWhen {
            clauses,
            state: Ready,
        }
    }
}

impl CaseWhen<Ready> {
    pub fn else_(self, value: impl Into<Operand>) -> Expr {
        Expr::Case(CaseExpr {
            clauses: self.clauses,
            else_value: Some(value.into()),
        })
    }

    /// 不带 ELSE 结束。
    pub fn end(self) -> Expr {
        Expr::Case(CaseExpr {
            clauses: self.clauses,
            else_value: None,
        })
    }
}

impl From<CaseWhen<Ready>> for Expr {
    fn from(v: CaseWhen<Ready>) -> Self {
        v.end()
    }
}

impl From<CaseWhen<Ready>> for Field {
    fn from(v: CaseWhen<Ready>) -> Self {
        Field::from(v.end())
    }
}

impl From<CaseWhen<Ready>> for Operand {
    fn from(v: CaseWhen<Ready>) -> Self {
        Operand::from(v.end())
    }
}
