//! 编译配置：可合并的 `Options` 与一次性解析后的 `CompileOptions`。

use crate::flavor::Flavor;
use crate::placeholder::Placeholder;

const DEFAULT_INDENT: &str = "  ";

/// 调用方提供的部分配置，所有字段都可省略。
///
/// `quote` 是三态：`None` 未设置（取方言默认），`Some(None)` 不加引号，
/// `Some(Some(q))` 使用 `q`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub placeholder: Option<Placeholder>,
    pub indent: Option<String>,
    pub quote: Option<Option<String>>,
    pub flavor: Option<Flavor>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    pub fn quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(Some(quote.into()));
        self
    }

    /// 标识符不加任何引号。
    pub fn no_quote(mut self) -> Self {
        self.quote = Some(None);
        self
    }

    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = Some(flavor);
        self
    }

    /// 逐字段合并，`over` 中已设置的字段优先。
    pub fn merge(&self, over: &Options) -> Options {
        Options {
            placeholder: over.placeholder.or(self.placeholder),
            indent: over.indent.clone().or_else(|| self.indent.clone()),
            quote: over.quote.clone().or_else(|| self.quote.clone()),
            flavor: over.flavor.or(self.flavor),
        }
    }

    /// 补齐默认值并按方言解析引号与 JSON 函数名。
    pub fn resolve(&self) -> CompileOptions {
        let flavor = self.flavor.unwrap_or_default();
        let quote = match &self.quote {
            Some(explicit) => explicit.clone(),
            None => Some(flavor.default_quote().to_string()),
        };
        CompileOptions {
            indent: self
                .indent
                .clone()
                .unwrap_or_else(|| DEFAULT_INDENT.to_string()),
            placeholder: self.placeholder.unwrap_or_default(),
            quote,
            flavor,
            json_object_fn: flavor.json_object_fn(),
            json_array_agg_fn: flavor.json_array_agg_fn(),
        }
    }
}

/// 解析完成的配置，编译过程中不再分支判断方言。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub indent: String,
    pub placeholder: Placeholder,
    pub quote: Option<String>,
    pub flavor: Flavor,
    pub json_object_fn: &'static str,
    pub json_array_agg_fn: &'static str,
}

impl CompileOptions {
    pub(crate) fn quote_identifier(&self, name: &str) -> String {
        crate::field::quote_identifier(name, self.quote.as_deref())
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Options::default().resolve()
    }
}
