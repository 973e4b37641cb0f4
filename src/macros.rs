//! 宏集合：为表达式构造函数提供可变参数调用封装。
//! 通过 `coalesce!` / `json_object!`，不同类型的实参无需手动转换即可混用。

/// `COALESCE(a, b, ...)`，每个实参经 `Into<Operand>` 转换。
///
/// ```
/// use coral_sql::{coalesce, create_builder, unescape, SqlValue};
///
/// let (sql, args) = create_builder()
///     .from("items")
///     .column(coalesce![unescape("description"), "No description"])
///     .to_sql()
///     .unwrap();
/// assert_eq!(sql, "SELECT\n  COALESCE(description, ?)\nFROM\n  `items`");
/// assert_eq!(args, vec![SqlValue::from("No description")]);
/// ```
#[macro_export]
macro_rules! coalesce {
    ($($arg:expr),+ $(,)?) => {
        $crate::expr::Expr::Coalesce(vec![
            $(<$crate::value::Operand as ::core::convert::From<_>>::from($arg)),+
        ])
    };
}

/// `JSON_OBJECT('k', v, ...)`，值经 `Into<Field>` 转换，字符串按标识符处理。
///
/// ```
/// use coral_sql::{create_builder, json_object, unescape};
///
/// let (sql, _) = create_builder()
///     .from("users")
///     .column(json_object! { "id" => "id", "count" => unescape("COUNT(*)") })
///     .to_sql()
///     .unwrap();
/// assert_eq!(sql, "SELECT\n  JSON_OBJECT('id', `id`, 'count', COUNT(*))\nFROM\n  `users`");
/// ```
#[macro_export]
macro_rules! json_object {
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::expr::Expr::JsonObject(vec![
            $((
                ::std::string::String::from($key),
                <$crate::field::Field as ::core::convert::From<_>>::from($value),
            )),+
        ])
    };
}
