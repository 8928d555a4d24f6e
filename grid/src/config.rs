//! Grid configuration.

use grid_core::Messages;
use serde::Deserialize;

/// Grid-wide settings consumed by the built-in plugins.
///
/// Every field has a default, so a partial JSON document is a valid config:
///
/// ```
/// use grid::GridConfig;
///
/// let config = GridConfig::from_json(r#"{"messages": {"noData": "Nothing"}}"#).unwrap();
/// assert_eq!(config.messages.get("noData"), Some("Nothing"));
/// assert_eq!(config.edit_row_height, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// UI texts by message key.
    pub messages: Messages,
    /// Height of edit and added rows, in terminal rows.
    pub edit_row_height: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            edit_row_height: 1,
        }
    }
}

impl GridConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the message table.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Set the height of edit and added rows.
    pub fn edit_row_height(mut self, height: u16) -> Self {
        self.edit_row_height = height;
        self
    }
}
