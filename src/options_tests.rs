#[cfg(test)]
mod tests {
    use crate::flavor::Flavor;
    use crate::options::Options;
    use crate::placeholder::Placeholder;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_defaults() {
        let resolved = Options::new().resolve();
        assert_eq!(resolved.indent, "  ");
        assert_eq!(resolved.placeholder, Placeholder::QuestionMark);
        assert_eq!(resolved.quote.as_deref(), Some("`"));
        assert_eq!(resolved.flavor, Flavor::MySQL);
        assert_eq!(resolved.json_object_fn, "JSON_OBJECT");
        assert_eq!(resolved.json_array_agg_fn, "JSON_ARRAYAGG");
    }

    #[test]
    fn postgres_switches_quote_and_json_functions() {
        let resolved = Options::new().flavor(Flavor::PostgreSQL).resolve();
        assert_eq!(resolved.quote.as_deref(), Some("\""));
        assert_eq!(resolved.json_object_fn, "json_build_object");
        assert_eq!(resolved.json_array_agg_fn, "json_agg");
    }

    #[test]
    fn explicit_quote_beats_flavor_default() {
        let resolved = Options::new().flavor(Flavor::PostgreSQL).quote("`").resolve();
        assert_eq!(resolved.quote.as_deref(), Some("`"));

        let resolved = Options::new().flavor(Flavor::PostgreSQL).no_quote().resolve();
        assert_eq!(resolved.quote, None);
    }

    #[test]
    fn merge_prefers_right_side() {
        let stored = Options::new()
            .placeholder(Placeholder::DollarNumbered)
            .indent("    ")
            .no_quote();
        let call = Options::new().indent("\t").quote("\"");

        let merged = stored.merge(&call);
        assert_eq!(merged.placeholder, Some(Placeholder::DollarNumbered));
        assert_eq!(merged.indent.as_deref(), Some("\t"));
        assert_eq!(merged.quote, Some(Some("\"".to_string())));
        assert_eq!(merged.flavor, None);
    }

    #[test]
    fn merge_keeps_left_when_right_unset() {
        let stored = Options::new().no_quote();
        let merged = stored.merge(&Options::new());
        assert_eq!(merged.quote, Some(None));
        assert_eq!(merged.resolve().quote, None);
    }
}
