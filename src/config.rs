//! Names the controller uses to talk to the page.
//!
//! Every field has a default matching the stylesheet contract, so a page only
//! overrides what it renamed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Storage key, attribute, control, and media query names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key the preference is persisted under.
    pub storage_key: String,
    /// Attribute set on the root element.
    pub attribute: String,
    /// `id` of the injected toggle button.
    pub control_id: String,
    /// `class` of the injected toggle button.
    pub control_class: String,
    /// Media query answering "prefers dark".
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            attribute: "data-theme".to_owned(),
            control_id: "themeToggleBtn".to_owned(),
            control_class: "theme-toggle".to_owned(),
            media_query: "(prefers-color-scheme: dark)".to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a JSON object with
    /// string fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
