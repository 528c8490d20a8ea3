//! Host environment seams for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches `window` directly. Each browser concern is a
//! small trait so the same controller runs against web-sys bindings in the page
//! and against the in-memory host in tests.

use crate::theme::Theme;

/// Failure reported by a host binding.
///
/// Bindings report; only the controller decides to degrade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
    #[error("{operation} failed: {message}")]
    Rejected { operation: &'static str, message: String },
}

/// Persistent string key-value store.
pub trait ThemeStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Store `value` under `key`, overwriting.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError>;
}

/// The document's root element attributes.
pub trait ThemeDocument {
    /// # Errors
    ///
    /// Returns [`HostError`] when there is no root element.
    fn attribute(&self, name: &str) -> Result<Option<String>, HostError>;

    /// # Errors
    ///
    /// Returns [`HostError`] when there is no root element or the write fails.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError>;
}

/// Ambient color-scheme signal.
pub trait ColorSchemeQuery {
    /// Whether `query` (normally `(prefers-color-scheme: dark)`) matches.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the environment cannot evaluate media queries.
    fn prefers_dark(&self, query: &str) -> Result<bool, HostError>;
}

/// The injected toggle button.
pub trait ToggleControl {
    /// Reflect `active` on the control: glyph and tooltip for the opposite theme.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the control cannot be updated.
    fn show(&mut self, active: Theme) -> Result<(), HostError>;
}
