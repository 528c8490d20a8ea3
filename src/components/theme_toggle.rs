//! Toggle button injected into the page body.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller does not hold the button element. It writes the active theme
//! into a signal through [`SignalControl`], and the button derives its glyph
//! and tooltip from that signal.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::host::{HostError, ToggleControl};
use crate::theme::Theme;

/// Control binding that publishes the active theme to a [`ThemeToggle`].
#[derive(Clone, Copy)]
pub struct SignalControl {
    shown: RwSignal<Option<Theme>>,
}

impl SignalControl {
    pub fn new(shown: RwSignal<Option<Theme>>) -> Self {
        Self { shown }
    }

    pub fn signal(&self) -> RwSignal<Option<Theme>> {
        self.shown
    }
}

impl ToggleControl for SignalControl {
    fn show(&mut self, active: Theme) -> Result<(), HostError> {
        if self.shown.try_set(Some(active)).is_some() {
            return Err(HostError::Unavailable("toggle control"));
        }
        Ok(())
    }
}

/// Glyph for the button; blank until a theme has been applied.
pub fn toggle_icon(shown: Option<Theme>) -> &'static str {
    shown.map_or("", Theme::toggle_icon)
}

/// Tooltip and accessible label for the button.
pub fn toggle_label(shown: Option<Theme>) -> &'static str {
    shown.map_or("", Theme::toggle_title)
}

/// Theme toggle button.
///
/// `on_toggle` runs on every click; it is expected to apply the other theme,
/// which flows back into `shown`.
#[component]
pub fn ThemeToggle<F>(id: String, class: String, shown: RwSignal<Option<Theme>>, on_toggle: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    let icon = move || toggle_icon(shown.get());
    let label = move || toggle_label(shown.get());

    view! {
        <button id=id class=class title=label aria-label=label on:click=move |_| on_toggle()>
            {icon}
        </button>
    }
}
