//! 条件组：以 AND / OR 连接的条件与嵌套条件组。

use crate::bindings::Bindings;
use crate::condition::{Condition, Conjunction, Predicate};
use crate::error::Result;
use crate::expr::Operator;
use crate::field::Field;
use crate::options::{CompileOptions, Options};
use crate::value::{ConditionValue, SqlValue};

/// 条件组。
///
/// ```
/// use coral_sql::{create_conditions, Operator, SqlValue};
///
/// let (sql, args) = create_conditions()
///     .and_op("age", Operator::Between, [20_i64, 29])
///     .or_op("age", Operator::Between, [30_i64, 39])
///     .to_sql()
///     .unwrap();
/// assert_eq!(
///     sql.as_deref(),
///     Some("(`age` BETWEEN ? AND ?)\n  OR (`age` BETWEEN ? AND ?)")
/// );
/// assert_eq!(args, vec![SqlValue::I64(20), SqlValue::I64(29), SqlValue::I64(30), SqlValue::I64(39)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditions {
    rows: Vec<(Conjunction, Predicate)>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// `AND (field = value)`，列表值推断为 `IN`。
    pub fn and(self, field: impl Into<Field>, value: impl Into<ConditionValue>) -> Self {
        self.add(Conjunction::And, field, value)
    }

    pub fn and_op(
        self,
        field: impl Into<Field>,
        op: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        self.add_op(Conjunction::And, field, op, value)
    }

    /// 追加一个预先构建好的条件或条件组。
    pub fn and_predicate(self, predicate: impl Into<Predicate>) -> Self {
        self.add_predicate(Conjunction::And, predicate)
    }

    pub fn or(self, field: impl Into<Field>, value: impl Into<ConditionValue>) -> Self {
        self.add(Conjunction::Or, field, value)
    }

    pub fn or_op(
        self,
        field: impl Into<Field>,
        op: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        self.add_op(Conjunction::Or, field, op, value)
    }

    pub fn or_predicate(self, predicate: impl Into<Predicate>) -> Self {
        self.add_predicate(Conjunction::Or, predicate)
    }

    pub fn add(
        self,
        conjunction: Conjunction,
        field: impl Into<Field>,
        value: impl Into<ConditionValue>,
    ) -> Self {
        self.add_predicate(conjunction, Condition::shorthand(field, value))
    }

    pub fn add_op(
        self,
        conjunction: Conjunction,
        field: impl Into<Field>,
        op: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        self.add_predicate(conjunction, Condition::compare(field, op, value))
    }

    pub fn add_predicate(
        mut self,
        conjunction: Conjunction,
        predicate: impl Into<Predicate>,
    ) -> Self {
        self.push(conjunction, predicate.into());
        self
    }

    pub(crate) fn push(&mut self, conjunction: Conjunction, predicate: Predicate) {
        self.rows.push((conjunction, predicate));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 使用默认配置编译；空条件组返回 `None`。
    pub fn to_sql(&self) -> Result<(Option<String>, Vec<SqlValue>)> {
        self.to_sql_with(&Options::default())
    }

    pub fn to_sql_with(&self, options: &Options) -> Result<(Option<String>, Vec<SqlValue>)> {
        let resolved = options.resolve();
        let mut bindings = Bindings::new(resolved.placeholder);
        let sql = self.compile_group(&resolved, &mut bindings)?;
        Ok((sql, bindings.into_values()))
    }

    /// 编译为多行文本。编译结果为空的条目被丢弃，连接词只加在第一个保留条目之后。
    pub(crate) fn compile_group(
        &self,
        options: &CompileOptions,
        bindings: &mut Bindings,
    ) -> Result<Option<String>> {
        let mut lines: Vec<String> = Vec::with_capacity(self.rows.len());
        for (conjunction, predicate) in &self.rows {
            let Some(sql) = predicate.compile_entry(options, bindings)? else {
                continue;
            };
            if lines.is_empty() {
                lines.push(sql);
            } else {
                lines.push(format!("{}{} {sql}", options.indent, conjunction.as_sql()));
            }
        }
        if lines.is_empty() {
            return Ok(None);
        }
        Ok(Some(lines.join("\n")))
    }
}
