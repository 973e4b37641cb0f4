//! 构建错误：全部是调用方用法错误，不可重试。

use thiserror::Error;

/// 构建结果别名。
pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("table not set")]
    TableNotSet,

    #[error("operator \"{operator}\" requires an array value")]
    ListValueRequired { operator: &'static str },

    #[error("operator \"{operator}\" does not support array value")]
    ListValueNotSupported { operator: &'static str },

    #[error("operator \"between\" requires exactly 2 values, got {len}")]
    BetweenArity { len: usize },

    #[error("operator \"{operator}\" requires at least one value")]
    EmptyValueList { operator: &'static str },

    #[error("coalesce requires at least one argument")]
    EmptyCoalesce,

    #[error("case expression condition group is empty")]
    EmptyCaseCondition,

    #[error("operator \"{0}\" is not supported")]
    UnsupportedOperator(String),

    #[error("conjunction \"{0}\" is not supported")]
    UnsupportedConjunction(String),

    #[error("join direction \"{0}\" is not supported")]
    UnsupportedJoinKind(String),

    #[error("order direction \"{0}\" is not supported")]
    UnsupportedOrderDirection(String),

    #[error("driver \"{0}\" is not supported")]
    UnsupportedFlavor(String),

    #[error("placeholder \"{0}\" is not supported")]
    UnsupportedPlaceholder(String),
}
