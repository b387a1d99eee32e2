//! Placeholder value mapping.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::placeholder::is_blank;

/// Current value for each placeholder of the active template.
///
/// An empty string marks a placeholder that has not been filled yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableValues(BTreeMap<String, String>);

impl VariableValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries whose value is blank.
    pub fn unfilled_count(&self) -> usize {
        self.0.values().filter(|v| is_blank(v)).count()
    }

    /// Align the key set with `names`.
    ///
    /// New names start empty, names no longer present are dropped, and values of
    /// surviving names are kept verbatim.
    pub fn reconcile(&mut self, names: &[String]) {
        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
        self.0.retain(|name, _| wanted.contains(name.as_str()));
        for name in names {
            self.0.entry(name.clone()).or_default();
        }
    }

    /// Overlay `other` onto `self`; entries from `other` win.
    pub fn merge(&mut self, other: VariableValues) {
        self.0.extend(other.0);
    }
}

impl FromIterator<(String, String)> for VariableValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for VariableValues {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reconcile_adds_drops_and_preserves() {
        let mut values: VariableValues =
            [("A", "1"), ("B", "2")].into_iter().map(|(k, v)| (k.into(), v.into())).collect();

        values.reconcile(&names(&["A", "C"]));

        assert_eq!(values.len(), 2);
        assert_eq!(values.get("A"), Some("1"));
        assert_eq!(values.get("C"), Some(""));
        assert!(!values.contains("B"));
    }

    #[test]
    fn reconcile_with_no_names_clears_everything() {
        let mut values = VariableValues::new();
        values.set("A", "x");
        values.reconcile(&[]);
        assert!(values.is_empty());
    }

    #[test]
    fn merge_prefers_incoming_values() {
        let mut values = VariableValues::new();
        values.set("A", "old");
        values.set("B", "keep");

        let mut incoming = VariableValues::new();
        incoming.set("A", "new");
        incoming.set("C", "extra");
        values.merge(incoming);

        assert_eq!(values.get("A"), Some("new"));
        assert_eq!(values.get("B"), Some("keep"));
        assert_eq!(values.get("C"), Some("extra"));
    }

    #[test]
    fn unfilled_count_treats_whitespace_as_blank() {
        let mut values = VariableValues::new();
        values.set("A", "");
        values.set("B", "   ");
        values.set("C", "value");
        assert_eq!(values.unfilled_count(), 2);
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut values = VariableValues::new();
        values.set("NAME", "World");
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"{"NAME":"World"}"#);
    }
}
