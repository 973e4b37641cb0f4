#[cfg(test)]
mod tests {
    use crate::bindings::Bindings;
    use crate::placeholder::Placeholder;
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn question_mark_tokens() {
        let mut b = Bindings::default();
        assert_eq!(b.bind(1_i64), "?");
        assert_eq!(b.bind("a"), "?");
        assert_eq!(b.values(), &[SqlValue::I64(1), SqlValue::from("a")]);
    }

    #[test]
    fn dollar_tokens_use_position_after_append() {
        let mut b = Bindings::new(Placeholder::DollarNumbered);
        assert_eq!(b.bind(10_i64), "$1");
        assert_eq!(b.bind(20_i64), "$2");
        assert_eq!(b.bind(30_i64), "$3");
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn bool_is_bound_as_integer() {
        let mut b = Bindings::default();
        b.bind(true);
        b.bind(false);
        assert_eq!(b.into_values(), vec![SqlValue::I64(1), SqlValue::I64(0)]);
    }

    #[test]
    fn null_and_dates_pass_through() {
        let date = time::macros::datetime!(2024-01-02 03:04:05 UTC);
        let mut b = Bindings::default();
        b.bind(SqlValue::Null);
        b.bind(date);
        assert_eq!(b.values(), &[SqlValue::Null, SqlValue::DateTime(date)]);
    }

    #[test]
    fn empty_sink() {
        let b = Bindings::new(Placeholder::DollarNumbered);
        assert!(b.is_empty());
        assert_eq!(b.placeholder(), Placeholder::DollarNumbered);
    }
}
