//! In-memory host for tests and non-browser rendering.
//!
//! Handles are cheap clones over shared state: hand one clone to the
//! controller and keep another to inspect what it wrote.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::host::{ColorSchemeQuery, HostError, ThemeDocument, ThemeStorage, ToggleControl};
use crate::theme::Theme;

/// Key-value store backed by a shared map.
#[derive(Clone, Debug)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    readable: bool,
    writable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Rc::default(),
            readable: true,
            writable: true,
        }
    }

    /// Storage pre-populated with a single entry.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Storage that fails every read and write, like a browser with storage disabled.
    pub fn unavailable() -> Self {
        Self {
            entries: Rc::default(),
            readable: false,
            writable: false,
        }
    }

    /// Storage that reads normally but rejects writes, like an exhausted quota.
    #[must_use]
    pub fn read_only(self) -> Self {
        Self { writable: false, ..self }
    }

    /// Current value under `key`, bypassing availability flags.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        if !self.readable {
            return Err(HostError::Unavailable("storage"));
        }
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        if !self.writable {
            return Err(HostError::Rejected {
                operation: "storage write",
                message: "quota exceeded".to_owned(),
            });
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Root element attributes backed by a shared map.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    attributes: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute_value(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }
}

impl ThemeDocument for MemoryDocument {
    fn attribute(&self, name: &str) -> Result<Option<String>, HostError> {
        Ok(self.attribute_value(name))
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Ambient signal with a fixed answer; `None` means the query is unsupported.
#[derive(Clone, Copy, Debug)]
pub struct FixedColorScheme(pub Option<bool>);

impl FixedColorScheme {
    pub fn dark() -> Self {
        Self(Some(true))
    }

    pub fn light() -> Self {
        Self(Some(false))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self, _query: &str) -> Result<bool, HostError> {
        self.0.ok_or(HostError::Unavailable("matchMedia"))
    }
}

#[derive(Debug, Default)]
struct ControlState {
    icon: String,
    title: String,
    updates: usize,
}

/// Toggle control recording the last glyph and tooltip it was given.
#[derive(Clone, Debug, Default)]
pub struct MemoryControl {
    state: Rc<RefCell<ControlState>>,
}

impl MemoryControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(&self) -> String {
        self.state.borrow().icon.clone()
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    /// Number of times the control was redrawn.
    pub fn updates(&self) -> usize {
        self.state.borrow().updates
    }
}

impl ToggleControl for MemoryControl {
    fn show(&mut self, active: Theme) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        active.toggle_icon().clone_into(&mut state.icon);
        active.toggle_title().clone_into(&mut state.title);
        state.updates += 1;
        Ok(())
    }
}
