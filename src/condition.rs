//! 单个条件、条件连接词，以及条件组中的条目。

use crate::bindings::Bindings;
use crate::builder::Compile;
use crate::conditions::Conditions;
use crate::error::{BuildError, Result};
use crate::expr::{Expr, Operator};
use crate::field::Field;
use crate::options::CompileOptions;
use crate::value::ConditionValue;
use std::fmt;
use std::str::FromStr;

/// 字段与表达式组成的一个谓词：`(field expr)`。
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    field: Option<Field>,
    expr: Expr,
}

impl Condition {
    pub fn new(field: impl Into<Field>, expr: Expr) -> Self {
        Self {
            field: Some(field.into()),
            expr,
        }
    }

    /// 不带字段的独立表达式，例如裸 `EXISTS (...)`。
    pub fn standalone(expr: Expr) -> Self {
        Self { field: None, expr }
    }

    /// `(field OP value)`
    pub fn compare(
        field: impl Into<Field>,
        op: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self::new(field, Expr::compare(op, value))
    }

    /// 两参数简写：表达式原样使用，列表推断为 `IN`，其余推断为 `=`。
    pub fn shorthand(field: impl Into<Field>, value: impl Into<ConditionValue>) -> Self {
        let value: ConditionValue = value.into();
        match value {
            ConditionValue::Expr(expr) => Self::new(field, *expr),
            value @ ConditionValue::List(_) => Self::compare(field, Operator::In, value),
            value => Self::compare(field, Operator::Eq, value),
        }
    }
}

impl Compile for Condition {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        let Some(field) = &self.field else {
            return self.expr.compile(options, bindings);
        };
        let field_sql = field.compile(options, bindings)?;
        let expr_sql = self.expr.compile(options, bindings)?;
        if field.is_expr() {
            Ok(format!("(({field_sql}) {expr_sql})"))
        } else {
            Ok(format!("({field_sql} {expr_sql})"))
        }
    }
}

/// 条件之间的连接词。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Conjunction {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            _ => Err(BuildError::UnsupportedConjunction(s.to_string())),
        }
    }
}

/// 条件组中的一个条目：单个条件或嵌套的条件组。
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Condition(Condition),
    Group(Conditions),
}

impl From<Condition> for Predicate {
    fn from(v: Condition) -> Self {
        Self::Condition(v)
    }
}

impl From<Conditions> for Predicate {
    fn from(v: Conditions) -> Self {
        Self::Group(v)
    }
}

impl From<Expr> for Predicate {
    fn from(v: Expr) -> Self {
        Self::Condition(Condition::standalone(v))
    }
}

impl Predicate {
    /// 编译结果为空时返回 `None`，嵌套条件组外包一层括号。
    pub(crate) fn compile_entry(
        &self,
        options: &CompileOptions,
        bindings: &mut Bindings,
    ) -> Result<Option<String>> {
        match self {
            Self::Condition(condition) => {
                let sql = condition.compile(options, bindings)?;
                Ok((!sql.is_empty()).then_some(sql))
            }
            Self::Group(group) => Ok(group
                .compile_group(options, bindings)?
                .map(|sql| format!("({sql})"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Condition, Conjunction};
    use crate::bindings::Bindings;
    use crate::builder::Compile;
    use crate::error::BuildError;
    use crate::expr::{Operator, is_null};
    use crate::options::CompileOptions;
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    fn render(condition: &Condition) -> (String, Vec<SqlValue>) {
        let mut bindings = Bindings::default();
        let sql = condition
            .compile(&CompileOptions::default(), &mut bindings)
            .unwrap();
        (sql, bindings.into_values())
    }

    #[test]
    fn shorthand_infers_eq_and_in() {
        assert_eq!(
            render(&Condition::shorthand("id", 1_i64)),
            ("(`id` = ?)".to_string(), vec![SqlValue::I64(1)])
        );
        assert_eq!(
            render(&Condition::shorthand("id", [1_i64, 2])),
            (
                "(`id` IN (?,?))".to_string(),
                vec![SqlValue::I64(1), SqlValue::I64(2)]
            )
        );
    }

    #[test]
    fn shorthand_uses_expression_as_is() {
        assert_eq!(
            render(&Condition::shorthand("email", is_null())),
            ("(`email` IS NULL)".to_string(), vec![])
        );
    }

    #[test]
    fn compare_with_explicit_operator() {
        assert_eq!(
            render(&Condition::compare("name", Operator::Like, "%a%")),
            ("(`name` LIKE ?)".to_string(), vec![SqlValue::from("%a%")])
        );
    }

    #[test]
    fn conjunction_parse() {
        assert_eq!("AND".parse::<Conjunction>(), Ok(Conjunction::And));
        assert_eq!("or".parse::<Conjunction>(), Ok(Conjunction::Or));
        assert_eq!(
            "xor".parse::<Conjunction>(),
            Err(BuildError::UnsupportedConjunction("xor".to_string()))
        );
    }
}
