//! 表达式节点：比较、NULL 判断、EXISTS、CASE、COALESCE 与 JSON 构造。

use crate::bindings::Bindings;
use crate::builder::Compile;
use crate::case::CaseExpr;
use crate::error::{BuildError, Result};
use crate::field::Field;
use crate::options::CompileOptions;
use crate::select::SqlBuilder;
use crate::value::{ConditionValue, Operand};
use std::fmt;
use std::str::FromStr;

/// 比较运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    /// `!=`
    Ne,
    /// `<>`
    NotEqual,
    Lt,
    Le,
    Ge,
    Gt,
    In,
    NotIn,
    Like,
    NotLike,
    Between,
    Regexp,
}

impl Operator {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::NotEqual => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Gt => ">",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::Between => "BETWEEN",
            Self::Regexp => "REGEXP",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Like => "like",
            Self::NotLike => "not like",
            Self::Between => "between",
            Self::Regexp => "regexp",
            other => other.as_sql(),
        }
    }

    fn requires_list(self) -> bool {
        matches!(self, Self::In | Self::NotIn | Self::Between)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Operator {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "=" => Self::Eq,
            "!=" => Self::Ne,
            "<>" => Self::NotEqual,
            "<" => Self::Lt,
            "<=" => Self::Le,
            ">=" => Self::Ge,
            ">" => Self::Gt,
            "in" => Self::In,
            "not in" => Self::NotIn,
            "like" => Self::Like,
            "not like" => Self::NotLike,
            "between" => Self::Between,
            "regexp" => Self::Regexp,
            _ => return Err(BuildError::UnsupportedOperator(s.to_string())),
        };
        Ok(op)
    }
}

/// 不绑定具体字段的 SQL 表达式。
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `OP 右值`
    Compare { op: Operator, value: ConditionValue },
    /// `IS [NOT] NULL`
    Null { negated: bool },
    /// `[NOT] EXISTS (子查询)`
    Exists {
        subquery: Box<SqlBuilder>,
        negated: bool,
    },
    Case(CaseExpr),
    Coalesce(Vec<Operand>),
    JsonObject(Vec<(String, Field)>),
    JsonArrayAgg(Box<Field>),
    /// 原样输出的 SQL 文本。
    Raw(String),
}

impl Expr {
    pub fn compare(op: Operator, value: impl Into<ConditionValue>) -> Self {
        Self::Compare {
            op,
            value: value.into(),
        }
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }
}

impl Compile for Expr {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        match self {
            Self::Compare { op, value } => compile_compare(*op, value, options, bindings),
            Self::Null { negated: false } => Ok("IS NULL".to_string()),
            Self::Null { negated: true } => Ok("IS NOT NULL".to_string()),
            Self::Exists { subquery, negated } => {
                let sql = subquery.compile(options, bindings)?;
                let keyword = if *negated { "NOT EXISTS" } else { "EXISTS" };
                Ok(format!("{keyword} ({sql})"))
            }
            Self::Case(case) => case.compile(options, bindings),
            Self::Coalesce(args) => {
                if args.is_empty() {
                    return Err(BuildError::EmptyCoalesce);
                }
                let mut parts = Vec::with_capacity(args.len());
                for arg in args {
                    parts.push(arg.compile(options, bindings)?);
                }
                Ok(format!("COALESCE({})", parts.join(", ")))
            }
            Self::JsonObject(pairs) => {
                let mut parts = Vec::with_capacity(pairs.len() * 2);
                for (key, field) in pairs {
                    parts.push(format!("'{}'", key.replace('\'', "''")));
                    parts.push(field.compile(options, bindings)?);
                }
                Ok(format!("{}({})", options.json_object_fn, parts.join(", ")))
            }
            Self::JsonArrayAgg(field) => {
                let inner = field.compile(options, bindings)?;
                Ok(format!("{}({inner})", options.json_array_agg_fn))
            }
            Self::Raw(sql) => Ok(sql.clone()),
        }
    }
}

fn compile_compare(
    op: Operator,
    value: &ConditionValue,
    options: &CompileOptions,
    bindings: &mut Bindings,
) -> Result<String> {
    match value {
        ConditionValue::Field(field) => {
            // IN / NOT IN 只接受子查询作为非列表右值
            if op == Operator::Between || (op.requires_list() && !field.is_subquery()) {
                return Err(BuildError::ListValueRequired {
                    operator: op.name(),
                });
            }
            Ok(format!("{} {}", op.as_sql(), field.compile(options, bindings)?))
        }
        ConditionValue::Expr(expr) => {
            if op.requires_list() {
                return Err(BuildError::ListValueRequired {
                    operator: op.name(),
                });
            }
            Ok(format!("{} {}", op.as_sql(), expr.compile(options, bindings)?))
        }
        ConditionValue::List(values) => match op {
            Operator::In | Operator::NotIn => {
                if values.is_empty() {
                    return Err(BuildError::EmptyValueList {
                        operator: op.name(),
                    });
                }
                let tokens: Vec<String> =
                    values.iter().map(|v| bindings.bind(v.clone())).collect();
                Ok(format!("{} ({})", op.as_sql(), tokens.join(",")))
            }
            Operator::Between => match values.as_slice() {
                [start, end] => {
                    let start = bindings.bind(start.clone());
                    let end = bindings.bind(end.clone());
                    Ok(format!("BETWEEN {start} AND {end}"))
                }
                other => Err(BuildError::BetweenArity { len: other.len() }),
            },
            _ => Err(BuildError::ListValueNotSupported {
                operator: op.name(),
            }),
        },
        ConditionValue::Single(v) => {
            if op.requires_list() {
                return Err(BuildError::ListValueRequired {
                    operator: op.name(),
                });
            }
            Ok(format!("{} {}", op.as_sql(), bindings.bind(v.clone())))
        }
    }
}

/// `IS NULL`
pub fn is_null() -> Expr {
    Expr::Null { negated: false }
}

/// `IS NOT NULL`
pub fn is_not_null() -> Expr {
    Expr::Null { negated: true }
}

/// `EXISTS (子查询)`，子查询参数按出现位置并入外层参数列表。
pub fn exists(subquery: SqlBuilder) -> Expr {
    Expr::Exists {
        subquery: Box::new(subquery),
        negated: false,
    }
}

/// `NOT EXISTS (子查询)`
pub fn not_exists(subquery: SqlBuilder) -> Expr {
    Expr::Exists {
        subquery: Box::new(subquery),
        negated: true,
    }
}

/// `COALESCE(a, b, ...)`：字段与子表达式内联，字面值绑定为参数。
///
/// 至少需要一个参数，否则编译时返回 [`BuildError::EmptyCoalesce`]。
/// 参数类型不一致时使用 [`coalesce!`](crate::coalesce) 宏更方便。
pub fn coalesce<I>(args: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expr::Coalesce(args.into_iter().map(Into::into).collect())
}

/// `JSON_OBJECT('k', v, ...)`，函数名随方言变化；值是字符串时按标识符处理。
pub fn json_object<I, K, V>(pairs: I) -> Expr
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Field>,
{
    Expr::JsonObject(
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

/// `JSON_ARRAYAGG(expr)`，函数名随方言变化。
pub fn json_array_aggregate(expr: impl Into<Field>) -> Expr {
    Expr::JsonArrayAgg(Box::new(expr.into()))
}

/// `COALESCE(JSON_ARRAYAGG(expr), default)`，用于空聚合时给出默认值。
pub fn json_array_aggregate_or(expr: impl Into<Field>, default: impl Into<Operand>) -> Expr {
    Expr::Coalesce(vec![
        Operand::from(json_array_aggregate(expr)),
        default.into(),
    ])
}

/// 原样输出的 SQL 表达式。
pub fn raw(sql: impl Into<String>) -> Expr {
    Expr::Raw(sql.into())
}
