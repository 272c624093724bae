use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use super::error::DistSqlError;

/// Free-form string properties attached to a rule or algorithm.
///
/// Backed by a `BTreeMap` so iteration (and therefore the display form) is
/// always in ascending key order, whatever order the entries were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
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

    /// Single-cell display form.
    ///
    /// Empty properties render as `""`. Anything else renders as a JSON object
    /// with keys in ascending order, e.g. `{"databaseName":"jbossts","host":"127.0.0.1"}`.
    /// Quotes, backslashes and control characters inside keys or values are
    /// escaped with JSON rules, so the text parses back unambiguously.
    pub fn to_display_string(&self) -> Result<String, DistSqlError> {
        if self.0.is_empty() {
            return Ok(String::new());
        }
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Inverse of [`Properties::to_display_string`].
    pub fn parse_display(text: &str) -> Result<Self, DistSqlError> {
        if text.is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(text)
            .map(Self)
            .map_err(|e| DistSqlError::ParseError(format!("invalid properties '{text}': {e}")))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_properties_render_empty() {
        assert_eq!(Properties::new().to_display_string().unwrap(), "");
    }

    #[test]
    fn test_properties_render_sorted_json() {
        let props: Properties = [("host", "127.0.0.1"), ("databaseName", "jbossts")].into_iter().collect();
        assert_eq!(
            props.to_display_string().unwrap(),
            r#"{"databaseName":"jbossts","host":"127.0.0.1"}"#
        );
    }

    #[test]
    fn test_quotes_and_delimiters_are_escaped() {
        let props: Properties = [("a\",\"b", "x:\"y\"\n")].into_iter().collect();
        let text = props.to_display_string().unwrap();
        assert_eq!(text, r#"{"a\",\"b":"x:\"y\"\n"}"#);
        assert_eq!(Properties::parse_display(&text).unwrap(), props);
    }

    #[test]
    fn test_control_characters_survive() {
        let props: Properties = [("k", "\u{1}\u{7f}\t")].into_iter().collect();
        let text = props.to_display_string().unwrap();
        assert_eq!(Properties::parse_display(&text).unwrap(), props);
    }

    #[test]
    fn test_parse_display_rejects_garbage() {
        assert!(matches!(
            Properties::parse_display("host=127.0.0.1"),
            Err(DistSqlError::ParseError(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_display_round_trips(entries in prop::collection::vec((".{0,12}", ".{0,12}"), 1..8)) {
            let props: Properties = entries.into_iter().collect();
            let text = props.to_display_string().unwrap();
            prop_assert_eq!(Properties::parse_display(&text).unwrap(), props);
        }

        #[test]
        fn prop_display_ignores_insertion_order(entries in prop::collection::btree_map("[a-zA-Z_]{1,8}", "[ -~]{0,8}", 0..8)) {
            let forward: Properties = entries.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            let backward: Properties = entries.iter().rev().map(|(k, v)| (k.clone(), v.clone())).collect();
            prop_assert_eq!(forward.to_display_string().unwrap(), backward.to_display_string().unwrap());
        }
    }
}
