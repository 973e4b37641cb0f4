//! SELECT 语句的各个子句：列、表、JOIN、GROUP BY、ORDER BY。

use crate::bindings::Bindings;
use crate::builder::Compile;
use crate::error::{BuildError, Result};
use crate::field::Field;
use crate::options::CompileOptions;
use crate::select::SqlBuilder;
use std::fmt;
use std::str::FromStr;

fn alias_suffix(alias: Option<&str>, options: &CompileOptions) -> String {
    match alias {
        Some(alias) => format!(" AS {}", options.quote_identifier(alias)),
        None => String::new(),
    }
}

/// SELECT 列表。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
    rows: Vec<(Field, Option<String>)>,
}

impl Columns {
    pub(crate) fn push(&mut self, field: Field, alias: Option<String>) {
        self.rows.push((field, alias));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Compile for Columns {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        let indent = &options.indent;
        if self.rows.is_empty() {
            return Ok(format!("{indent}*"));
        }
        let mut lines = Vec::with_capacity(self.rows.len());
        for (field, alias) in &self.rows {
            let sql = field.compile(options, bindings)?;
            lines.push(format!(
                "{indent}{sql}{}",
                alias_suffix(alias.as_deref(), options)
            ));
        }
        Ok(lines.join(",\n"))
    }
}

/// FROM / JOIN 的目标。
#[derive(Debug, Clone, PartialEq)]
pub enum TableSource {
    Name(String),
    Subquery(Box<SqlBuilder>),
}

/// 表或带别名的子查询。
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    source: TableSource,
    alias: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            source: TableSource::Name(name.into()),
            alias: None,
        }
    }

    pub fn with_alias(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            source: TableSource::Name(name.into()),
            alias: Some(alias.into()),
        }
    }

    /// 子查询作为表时必须带别名。
    pub fn subquery(builder: SqlBuilder, alias: impl Into<String>) -> Self {
        Self {
            source: TableSource::Subquery(Box::new(builder)),
            alias: Some(alias.into()),
        }
    }
}

impl Compile for Table {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        let source = match &self.source {
            TableSource::Name(name) => options.quote_identifier(name),
            TableSource::Subquery(builder) => {
                tracing::trace!(bound = bindings.len(), "compile table subquery");
                format!("({})", builder.compile(options, bindings)?)
            }
        };
        Ok(format!(
            "{source}{}",
            alias_suffix(self.alias.as_deref(), options)
        ))
    }
}

/// JOIN 方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Left,
    Right,
    Inner,
    Outer,
}

impl JoinKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Inner => "INNER",
            Self::Outer => "OUTER",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for JoinKind {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "inner" => Ok(Self::Inner),
            "outer" => Ok(Self::Outer),
            _ => Err(BuildError::UnsupportedJoinKind(s.to_string())),
        }
    }
}

/// `[KIND ]JOIN table ON condition`，ON 条件原样输出。
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    kind: Option<JoinKind>,
    table: Table,
    on: String,
}

impl Join {
    pub fn new(kind: Option<JoinKind>, table: Table, on: impl Into<String>) -> Self {
        Self {
            kind,
            table,
            on: on.into(),
        }
    }
}

impl Compile for Join {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        let table = self.table.compile(options, bindings)?;
        let prefix = match self.kind {
            Some(kind) => format!("{} ", kind.as_sql()),
            None => String::new(),
        };
        Ok(format!("{prefix}JOIN {table} ON {}", self.on))
    }
}

/// GROUP BY 列表，单行逗号分隔。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Groups {
    rows: Vec<Field>,
}

impl Groups {
    pub(crate) fn push(&mut self, field: Field) {
        self.rows.push(field);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Compile for Groups {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        let mut parts = Vec::with_capacity(self.rows.len());
        for field in &self.rows {
            parts.push(field.compile(options, bindings)?);
        }
        Ok(parts.join(","))
    }
}

/// 排序方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for OrderDirection {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(BuildError::UnsupportedOrderDirection(s.to_string())),
        }
    }
}

/// ORDER BY 列表，每项一行。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Orders {
    rows: Vec<(Field, OrderDirection)>,
}

impl Orders {
    pub(crate) fn push(&mut self, field: Field, direction: OrderDirection) {
        self.rows.push((field, direction));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Compile for Orders {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        let mut lines = Vec::with_capacity(self.rows.len());
        for (field, direction) in &self.rows {
            let sql = field.compile(options, bindings)?;
            lines.push(format!("{}{sql} {}", options.indent, direction.as_sql()));
        }
        Ok(lines.join(",\n"))
    }
}
