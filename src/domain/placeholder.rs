//! Placeholder detection and substitution for `<NAME>` tokens.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::values::VariableValues;

/// Names recognized by [`extract`]: an uppercase letter or underscore followed by
/// uppercase letters, digits, or underscores.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Z_][A-Z0-9_]*)>").expect("placeholder pattern must be valid")
});

/// Any bracketed token without nested brackets. Used for substitution so that keys
/// are matched literally, whatever their case.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>]+)>").expect("token pattern must be valid"));

/// Return the distinct placeholder names in `template`, in first-occurrence order.
pub fn extract(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Replace every `<KEY>` whose value is non-blank.
///
/// The scan is a single pass over the original template: substituted text is never
/// rescanned, so a value containing `<OTHER>` stays literal and the result does not
/// depend on the order of `values`. Tokens with blank or missing values are kept.
pub fn substitute(template: &str, values: &VariableValues) -> String {
    TOKEN
        .replace_all(template, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) if !is_blank(value) => value.to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Names from `names` whose value is missing or blank, in the given order.
pub fn unfilled<'a>(names: &'a [String], values: &VariableValues) -> Vec<&'a str> {
    names
        .iter()
        .filter(|name| values.get(name.as_str()).is_none_or(is_blank))
        .map(String::as_str)
        .collect()
}

/// Whether a value counts as unfilled.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn values(pairs: &[(&str, &str)]) -> VariableValues {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn extract_returns_nothing_without_placeholders() {
        assert!(extract("no vars").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn extract_deduplicates_names() {
        assert_eq!(extract("<A> and <A> and <B>"), vec!["A", "B"]);
    }

    #[test]
    fn extract_ignores_lowercase_and_malformed_tokens() {
        assert!(extract("<lowercase>").is_empty());
        assert!(extract("<Mixed> <1ABC> <A-B> < A> <A").is_empty());
    }

    #[test]
    fn extract_accepts_underscores_and_digits() {
        assert_eq!(extract("<_X> <API_KEY_2> <<NESTED>>"), vec!["_X", "API_KEY_2", "NESTED"]);
    }

    #[test]
    fn substitute_replaces_filled_placeholder() {
        assert_eq!(substitute("Hello <NAME>", &values(&[("NAME", "World")])), "Hello World");
    }

    #[test]
    fn substitute_keeps_blank_values_visible() {
        assert_eq!(substitute("Hello <NAME>", &values(&[("NAME", "")])), "Hello <NAME>");
        assert_eq!(substitute("Hello <NAME>", &values(&[("NAME", "  \t")])), "Hello <NAME>");
    }

    #[test]
    fn substitute_replaces_every_occurrence() {
        assert_eq!(substitute("<A> <A>", &values(&[("A", "x")])), "x x");
    }

    #[test]
    fn substitute_leaves_unknown_placeholders() {
        assert_eq!(substitute("<A> <B>", &values(&[("A", "1")])), "1 <B>");
    }

    #[test]
    fn substitute_does_not_rescan_inserted_values() {
        let vals = values(&[("A", "<B>"), ("B", "<A>")]);
        assert_eq!(substitute("<A>-<B>", &vals), "<B>-<A>");
    }

    #[test]
    fn substitute_matches_keys_literally() {
        assert_eq!(substitute("Hi <name>", &values(&[("name", "Ada")])), "Hi Ada");
    }

    #[test]
    fn unfilled_preserves_name_order() {
        let names = vec!["C".to_string(), "A".to_string(), "B".to_string()];
        let vals = values(&[("A", "set"), ("B", " ")]);
        assert_eq!(unfilled(&names, &vals), vec!["C", "B"]);
    }

    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-Z_][A-Z0-9_]{0,6}"
    }

    proptest! {
        #[test]
        fn substitute_is_idempotent_for_plain_values(
            names in prop::collection::vec(name_strategy(), 1..5),
            fill in prop::collection::vec("[a-z ]{0,8}", 5),
        ) {
            let template = names.iter().map(|n| format!("<{n}>")).collect::<Vec<_>>().join(" + ");
            let vals: VariableValues =
                names.iter().cloned().zip(fill.iter().cloned()).collect();

            let once = substitute(&template, &vals);
            prop_assert_eq!(substitute(&once, &vals), once);
        }

        #[test]
        fn extract_finds_every_inserted_name(
            names in prop::collection::vec(name_strategy(), 0..6)
        ) {
            let template = names.iter().map(|n| format!("x <{n}> y")).collect::<String>();
            let found = extract(&template);

            for name in &names {
                prop_assert!(found.contains(name));
            }
            let unique: HashSet<_> = found.iter().collect();
            prop_assert_eq!(unique.len(), found.len());
        }
    }
}
