//! Query parameter assembly.
//!
//! Absent values are omitted from the request entirely; nothing is ever sent
//! as an empty or null parameter.

use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always sent
    pub fn required(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    /// Sent when present and non-empty
    pub fn text(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Sent when present, zero included
    pub fn number<N: Display>(mut self, key: &'static str, value: Option<N>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Sent as lowercase "true"/"false" when present
    pub fn flag(mut self, key: &'static str, value: Option<bool>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Upper-cases and trims a single station or airport identifier
pub fn normalize_identifier(id: &str) -> String {
    id.trim().to_uppercase()
}

/// A lone identifier is normalized; a comma-separated list is sent as given
pub fn identifier_param(ids: Option<&str>) -> Option<String> {
    ids.map(|ids| {
        if ids.contains(',') {
            ids.to_string()
        } else {
            normalize_identifier(ids)
        }
    })
}

/// Joins a list of identifiers for an `ids` parameter, entries untouched
pub fn join_identifiers<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_omitted() {
        let params = QueryParams::new()
            .text("ids", None)
            .text("bbox", Some(""))
            .number::<u32>("hours", None)
            .flag("taf", None);

        assert!(params.is_empty());
    }

    #[test]
    fn test_present_values_are_sent() {
        let params = QueryParams::new()
            .required("format", "json")
            .text("ids", Some("KJFK"))
            .number("hours", Some(0u32))
            .number("level", Some(-3000i32))
            .flag("taf", Some(false))
            .flag("metar", Some(true));

        assert_eq!(
            params.pairs(),
            &[
                ("format", "json".to_string()),
                ("ids", "KJFK".to_string()),
                ("hours", "0".to_string()),
                ("level", "-3000".to_string()),
                ("taf", "false".to_string()),
                ("metar", "true".to_string()),
            ]
        );
        assert_eq!(params.get("hours"), Some("0"));
        assert_eq!(params.get("date"), None);
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier(" kjfk "), "KJFK");
        assert_eq!(normalize_identifier("\tcYyZ\n"), "CYYZ");
        assert_eq!(normalize_identifier(&normalize_identifier(" klax")), "KLAX");
    }

    #[test]
    fn test_identifier_param() {
        assert_eq!(identifier_param(Some(" kjfk ")).as_deref(), Some("KJFK"));
        assert_eq!(identifier_param(Some("kjfk,KLAX")).as_deref(), Some("kjfk,KLAX"));
        assert_eq!(identifier_param(None), None);
    }

    #[test]
    fn test_join_identifiers_leaves_entries_alone() {
        assert_eq!(join_identifiers(&["KJFK", "klax"]), "KJFK,klax");
        assert_eq!(join_identifiers::<&str>(&[]), "");
    }
}
