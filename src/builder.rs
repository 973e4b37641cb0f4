//! 编译协议与构建入口。

use crate::bindings::Bindings;
use crate::conditions::Conditions;
use crate::error::Result;
use crate::options::{CompileOptions, Options};
use crate::select::SqlBuilder;

/// 所有 SQL 节点共享的编译协议。
///
/// 参数收集器显式传入，节点按输出文本从左到右、深度优先的顺序绑定参数，
/// 因此第 N 个占位符总是对应第 N 个参数。
pub trait Compile {
    fn compile(&self, options: &CompileOptions, bindings: &mut Bindings) -> Result<String>;
}

/// 创建一个使用默认配置的 SELECT 构建器。
pub fn create_builder() -> SqlBuilder {
    SqlBuilder::new()
}

/// 创建一个带配置的 SELECT 构建器。
///
/// ```
/// use coral_sql::{create_builder_with, Options};
///
/// let (sql, _) = create_builder_with(Options::new().no_quote())
///     .from("users")
///     .column("id")
///     .to_sql()
///     .unwrap();
/// assert_eq!(sql, "SELECT\n  id\nFROM\n  users");
/// ```
pub fn create_builder_with(options: Options) -> SqlBuilder {
    SqlBuilder::with_options(options)
}

/// 创建一个空的条件组。
pub fn create_conditions() -> Conditions {
    Conditions::new()
}
