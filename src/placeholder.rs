//! SQL 占位符风格。

use crate::error::BuildError;
use std::fmt;
use std::str::FromStr;

/// SQL 占位符风格。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placeholder {
    /// 使用 `?` 作为占位符（常见于 MySQL/SQLite）。
    #[default]
    QuestionMark,
    /// 使用 `$1, $2, ...` 作为占位符（常见于 PostgreSQL）。
    DollarNumbered,
}

impl Placeholder {
    pub(crate) fn write_placeholder(self, index_1_based: usize, out: &mut String) {
        match self {
            Self::QuestionMark => out.push('?'),
            Self::DollarNumbered => {
                out.push('$');
                out.push_str(&index_1_based.to_string());
            }
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuestionMark => f.write_str("?"),
            Self::DollarNumbered => f.write_str("$"),
        }
    }
}

impl FromStr for Placeholder {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "?" => Ok(Self::QuestionMark),
            "$" => Ok(Self::DollarNumbered),
            other => Err(BuildError::UnsupportedPlaceholder(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Placeholder;
    use crate::error::BuildError;
    use pretty_assertions::assert_eq;

    #[test]
    fn write_placeholder_question_mark() {
        let mut s = String::new();
        Placeholder::QuestionMark.write_placeholder(1, &mut s);
        assert_eq!(s, "?");
    }

    #[test]
    fn write_placeholder_dollar_numbered() {
        let mut s = String::new();
        Placeholder::DollarNumbered.write_placeholder(12, &mut s);
        assert_eq!(s, "$12");
    }

    #[test]
    fn parse_placeholder() {
        assert_eq!("?".parse::<Placeholder>(), Ok(Placeholder::QuestionMark));
        assert_eq!("$".parse::<Placeholder>(), Ok(Placeholder::DollarNumbered));
        assert_eq!(
            ":".parse::<Placeholder>(),
            Err(BuildError::UnsupportedPlaceholder(":".to_string()))
        );
    }
}
