use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A locale-keyed string, e.g. `{"en": "Payment", "de": "Zahlung"}`.
///
/// Backed by a `BTreeMap` so that equality and serialization do not depend
/// on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString(BTreeMap<String, String>);

impl LocalizedString {
    /// Creates an empty localized string.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Shorthand for a single English value.
    #[must_use]
    pub fn en(value: impl Into<String>) -> Self {
        Self::new().with("en", value)
    }

    /// Adds or replaces the value for `locale`.
    #[must_use]
    pub fn with(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(locale.into(), value.into());
        self
    }

    /// Returns the value for `locale`, if present.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get("en").or_else(|| self.0.values().next().map(String::as_str)) {
            Some(value) => f.write_str(value),
            None => f.write_str(""),
        }
    }
}
