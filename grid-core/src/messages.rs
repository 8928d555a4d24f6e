//! Localizable UI messages.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Message key of the text shown in the no-data row.
pub const NO_DATA: &str = "noData";

/// Mapping from message keys to display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Messages(HashMap<String, String>);

impl Messages {
    /// Create an empty message table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message, returning the table for chaining.
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(key.into(), text.into());
        self
    }

    /// Look up a message.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Messages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Build a lookup that returns the message for a key, or the key itself.
pub fn get_messages_formatter(messages: &Messages) -> impl Fn(&str) -> String + '_ {
    move |key: &str| messages.get(key).unwrap_or(key).to_string()
}
