//! coral-sql：可组合的 SELECT 语句构建与参数收集库。

pub mod bindings;
#[cfg(test)]
mod bindings_tests;
pub mod builder;
pub mod case;
pub mod clauses;
pub mod condition;
pub mod conditions;
pub mod error;
pub mod expr;
pub mod field;
pub mod flavor;
pub mod macros;
pub mod options;
#[cfg(test)]
mod options_tests;
pub mod placeholder;
pub mod select;
pub mod value;

pub use crate::bindings::Bindings;
pub use crate::builder::{Compile, create_builder, create_builder_with, create_conditions};
pub use crate::case::{CaseCondition, CaseExpr, CaseWhen, case_when};
pub use crate::clauses::{JoinKind, OrderDirection};
pub use crate::condition::{Condition, Conjunction, Predicate};
pub use crate::conditions::Conditions;
pub use crate::error::{BuildError, Result};
pub use crate::expr::{
    Expr, Operator, coalesce, exists, is_not_null, is_null, json_array_aggregate,
    json_array_aggregate_or, json_object, not_exists, raw,
};
pub use crate::field::{Field, unescape};
pub use crate::flavor::Flavor;
pub use crate::options::{CompileOptions, Options};
pub use crate::placeholder::Placeholder;
pub use crate::select::SqlBuilder;
pub use crate::value::{ConditionValue, Operand, SqlValue};
