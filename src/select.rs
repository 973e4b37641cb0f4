//! SqlBuilder：构建 SELECT 语句并收集参数。

use crate::bindings::Bindings;
use crate::builder::Compile;
use crate::clauses::{Columns, Groups, Join, JoinKind, OrderDirection, Orders, Table};
use crate::condition::{Conjunction, Predicate};
use crate::conditions::Conditions;
use crate::error::{BuildError, Result};
use crate::expr::Operator;
use crate::field::Field;
use crate::options::{CompileOptions, Options};
use crate::value::{ConditionValue, SqlValue};

/// SELECT 语句构建器。
///
/// 所有链式方法按值接收并返回 `Self`；`to_sql` 只读，不修改构建器。
///
/// ```
/// use coral_sql::{create_builder, SqlValue};
///
/// let (sql, args) = create_builder().from("users").where_("id", 1_i64).to_sql().unwrap();
/// assert_eq!(sql, "SELECT\n  *\nFROM\n  `users`\nWHERE\n  (`id` = ?)");
/// assert_eq!(args, vec![SqlValue::I64(1)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlBuilder {
    columns: Columns,
    select: Option<String>,
    table: Option<Table>,
    joins: Vec<Join>,
    where_: Conditions,
    having: Conditions,
    groups: Groups,
    orders: Orders,
    limit: Option<u64>,
    offset: Option<u64>,
    options: Options,
}

impl SqlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// 替换构建时保存的配置。
    pub fn set_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn column(mut self, field: impl Into<Field>) -> Self {
        self.columns.push(field.into(), None);
        self
    }

    pub fn column_as(mut self, field: impl Into<Field>, alias: impl Into<String>) -> Self {
        self.columns.push(field.into(), Some(alias.into()));
        self
    }

    /// 自定义完整的 SELECT 文本，原样输出并覆盖 `column` 添加的列。
    pub fn select(mut self, sql: impl Into<String>) -> Self {
        self.select = Some(sql.into());
        self
    }

    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.table = Some(Table::new(table));
        self
    }

    pub fn from_as(mut self, table: impl Into<String>, alias: impl Into<String>) -> Self {
        self.table = Some(Table::with_alias(table, alias));
        self
    }

    pub fn from_subquery(mut self, subquery: SqlBuilder, alias: impl Into<String>) -> Self {
        self.table = Some(Table::subquery(subquery, alias));
        self
    }

    // ==================== JOIN ====================

    pub fn join(
        mut self,
        kind: Option<JoinKind>,
        table: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        self.joins.push(Join::new(kind, Table::new(table), on));
        self
    }

    pub fn join_as(
        mut self,
        kind: Option<JoinKind>,
        table: impl Into<String>,
        alias: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        self.joins
            .push(Join::new(kind, Table::with_alias(table, alias), on));
        self
    }

    pub fn join_subquery(
        mut self,
        kind: Option<JoinKind>,
        subquery: SqlBuilder,
        alias: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        self.joins
            .push(Join::new(kind, Table::subquery(subquery, alias), on));
        self
    }

    pub fn left_join(self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.join(Some(JoinKind::Left), table, on)
    }

    pub fn left_join_as(
        self,
        table: impl Into<String>,
        alias: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        self.join_as(Some(JoinKind::Left), table, alias, on)
    }

    pub fn left_join_subquery(
        self,
        subquery: SqlBuilder,
        alias: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        self.join_subquery(Some(JoinKind::Left), subquery, alias, on)
    }

    pub fn inner_join_as(
        self,
        table: impl Into<String>,
        alias: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        self.join_as(Some(JoinKind::Inner), table, alias, on)
    }

    pub fn right_join_as(
        self,
        table: impl Into<String>,
        alias: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        self.join_as(Some(JoinKind::Right), table, alias, on)
    }

    // ==================== WHERE / HAVING ====================

    /// `WHERE (field = value)`，列表值推断为 `IN`，表达式值原样使用。多次调用以 AND 连接。
    pub fn where_(mut self, field: impl Into<Field>, value: impl Into<ConditionValue>) -> Self {
        self.where_ = self.where_.and(field, value);
        self
    }

    pub fn where_op(
        mut self,
        field: impl Into<Field>,
        op: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        self.where_ = self.where_.and_op(field, op, value);
        self
    }

    /// 追加预先构建的条件、条件组或独立表达式（如裸 `EXISTS`）。
    pub fn where_predicate(mut self, predicate: impl Into<Predicate>) -> Self {
        self.where_.push(Conjunction::And, predicate.into());
        self
    }

    pub fn having(mut self, field: impl Into<Field>, value: impl Into<ConditionValue>) -> Self {
        self.having = self.having.and(field, value);
        self
    }

    pub fn having_op(
        mut self,
        field: impl Into<Field>,
        op: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        self.having = self.having.and_op(field, op, value);
        self
    }

    pub fn having_predicate(mut self, predicate: impl Into<Predicate>) -> Self {
        self.having.push(Conjunction::And, predicate.into());
        self
    }

    // ==================== GROUP / ORDER / LIMIT ====================

    pub fn group_by(mut self, field: impl Into<Field>) -> Self {
        self.groups.push(field.into());
        self
    }

    pub fn order_by(mut self, field: impl Into<Field>, direction: OrderDirection) -> Self {
        self.orders.push(field.into(), direction);
        self
    }

    /// `0` 输出 `LIMIT 0`；未调用则省略。
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    // ==================== 编译 ====================

    /// 使用构建时保存的配置编译。
    pub fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        self.to_sql_with(&Options::default())
    }

    /// 调用时配置与保存的配置逐字段合并，调用时优先。
    pub fn to_sql_with(&self, options: &Options) -> Result<(String, Vec<SqlValue>)> {
        let resolved = self.options.merge(options).resolve();
        let mut bindings = Bindings::new(resolved.placeholder);
        let sql = self.compile_root(&resolved, &mut bindings)?;
        Ok((sql, bindings.into_values()))
    }

    /// 使用调用方提供的参数收集器编译；占位符风格以收集器为准。
    pub fn to_sql_with_bindings(
        &self,
        options: &Options,
        bindings: &mut Bindings,
    ) -> Result<String> {
        let resolved = self.options.merge(options).resolve();
        self.compile_root(&resolved, bindings)
    }

    fn compile_root(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        let sql = self.compile(options, bindings)?;
        tracing::debug!(
            flavor = %options.flavor,
            sql_len = sql.len(),
            bound = bindings.len(),
            "compiled select"
        );
        Ok(sql)
    }
}

impl Compile for SqlBuilder {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String> {
        let table = self.table.as_ref().ok_or(BuildError::TableNotSet)?;
        let indent = &options.indent;
        let mut sections: Vec<String> = Vec::new();

        match &self.select {
            Some(select) => sections.push(select.clone()),
            None => sections.push(format!(
                "SELECT\n{}",
                self.columns.compile(options, bindings)?
            )),
        }
        sections.push(format!("FROM\n{indent}{}", table.compile(options, bindings)?));

        for join in &self.joins {
            sections.push(join.compile(options, bindings)?);
        }
        if let Some(sql) = self.where_.compile_group(options, bindings)? {
            sections.push(format!("WHERE\n{indent}{sql}"));
        }
        if !self.groups.is_empty() {
            sections.push(format!(
                "GROUP BY\n{indent}{}",
                self.groups.compile(options, bindings)?
            ));
        }
        if let Some(sql) = self.having.compile_group(options, bindings)? {
            sections.push(format!("HAVING\n{indent}{sql}"));
        }
        if !self.orders.is_empty() {
            sections.push(format!("ORDER BY\n{}", self.orders.compile(options, bindings)?));
        }
        if let Some(limit) = self.limit {
            sections.push(format!("LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            sections.push(format!("OFFSET {offset}"));
        }

        Ok(sections.join("\n"))
    }
}
