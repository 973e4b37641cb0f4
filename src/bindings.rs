//! Bindings：按占位符出现顺序收集参数值。

use crate::placeholder::Placeholder;
use crate::value::SqlValue;

/// 参数收集器。一次编译（含全部子查询）共享同一个实例。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    placeholder: Placeholder,
    values: Vec<SqlValue>,
}

impl Bindings {
    pub fn new(placeholder: Placeholder) -> Self {
        Self {
            placeholder,
            values: Vec::new(),
        }
    }

    /// 追加一个参数并返回对应的占位符文本（`?` 或 `$n`）。
    pub fn bind(&mut self, value: impl Into<SqlValue>) -> String {
        self.values.push(value.into().normalize());
        let mut out = String::new();
        self.placeholder.write_placeholder(self.values.len(), &mut out);
        tracing::trace!(index = self.values.len(), placeholder = %out, "bind value");
        out
    }

    pub fn placeholder(&self) -> Placeholder {
        self.placeholder
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
