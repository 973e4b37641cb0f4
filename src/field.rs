//! 字段：标识符、原始 SQL 片段、表达式或子查询。

use crate::bindings::Bindings;
use crate::builder::Compile;
use crate::error::Result;
use crate::expr::Expr;
use crate::options::CompileOptions;
use crate::select::SqlBuilder;

const QUOTE_CHARS: [char; 3] = ['`', '"', '\''];

/// 任何可以出现在列、条件左值、GROUP BY / ORDER BY 位置的东西。
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// 标识符，按 `.` 分段加引号。
    Name(String),
    /// 原样输出的 SQL 片段（函数调用、算术等）。
    Raw(String),
    Expr(Box<Expr>),
    Subquery(Box<SqlBuilder>),
}

impl Field {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    pub(crate) fn is_expr(&self) -> bool {
        matches!(self, Self::Expr(_))
    }

    pub(crate) fn is_subquery(&self) -> bool {
        matches!(self, Self::Subquery(_))
    }
}

/// 声明一个不做任何转义的原始片段字段。
///
/// ```
/// use coral_sql::{create_builder, unescape};
///
/// let (sql, _) = create_builder()
///     .column_as(unescape("COUNT(*)"), "total")
///     .from("users")
///     .to_sql()
///     .unwrap();
/// assert!(sql.contains("COUNT(*) AS `total`"));
/// ```
pub fn unescape(sql: impl Into<String>) -> Field {
    Field::Raw(sql.into())
}

/// 为（可能带 `.` 的）标识符加引号；已带引号的段原样保留，`quote` 为 `None` 时不处理。
pub fn quote_identifier(name: &str, quote: Option<&str>) -> String {
    let Some(q) = quote else {
        return name.to_string();
    };
    name.split('.')
        .map(|segment| {
            if is_quoted_fragment(segment) {
                segment.to_string()
            } else {
                format!("{q}{segment}{q}")
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// 片段里是否存在一对相同引号包住的非空内容。
pub(crate) fn is_quoted_fragment(segment: &str) -> bool {
    QUOTE_CHARS.iter().any(|&c| {
        let first = segment.find(c);
        let last = segment.rfind(c);
        matches!((first, last), (Some(i), Some(j)) if j >= i + 2)
    })
}

impl Compile for Field {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        match self {
            Self::Name(name) => Ok(options.quote_identifier(name)),
            Self::Raw(sql) => Ok(sql.clone()),
            Self::Expr(expr) => expr.compile(options, bindings),
            Self::Subquery(builder) => {
                tracing::trace!(bound = bindings.len(), "compile subquery");
                Ok(format!("({})", builder.compile(options, bindings)?))
            }
        }
    }
}

impl From<&str> for Field {
    fn from(v: &str) -> Self {
        Self::Name(v.to_string())
    }
}

impl From<String> for Field {
    fn from(v: String) -> Self {
        Self::Name(v)
    }
}

impl From<Expr> for Field {
    fn from(v: Expr) -> Self {
        Self::Expr(Box::new(v))
    }
}

impl From<SqlBuilder> for Field {
    fn from(v: SqlBuilder) -> Self {
        Self::Subquery(Box::new(v))
    }
}
