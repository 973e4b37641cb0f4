//! SQL Flavor（方言）：控制默认引号字符与 JSON 函数名。

use crate::error::BuildError;
use std::fmt;
use std::str::FromStr;

/// 支持的目标数据库。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
}

impl Flavor {
    /// 未显式配置 quote 时使用的标识符引号。
    pub fn default_quote(self) -> &'static str {
        match self {
            Self::PostgreSQL => "\"",
            Self::MySQL | Self::SQLite => "`",
        }
    }

    /// 构造 JSON 对象的函数名。
    pub fn json_object_fn(self) -> &'static str {
        match self {
            Self::MySQL => "JSON_OBJECT",
            Self::PostgreSQL => "json_build_object",
            Self::SQLite => "json_object",
        }
    }

    /// 聚合为 JSON 数组的函数名。
    pub fn json_array_agg_fn(self) -> &'static str {
        match self {
            Self::MySQL => "JSON_ARRAYAGG",
            Self::PostgreSQL => "json_agg",
            Self::SQLite => "json_group_array",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
        };
        f.write_str(s)
    }
}

impl FromStr for Flavor {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySQL),
            "postgresql" | "postgres" => Ok(Self::PostgreSQL),
            "sqlite" => Ok(Self::SQLite),
            _ => Err(BuildError::UnsupportedFlavor(s.to_string())),
        }
    }
}
