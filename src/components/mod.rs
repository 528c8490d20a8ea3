//! Leptos components rendered into the host page.

pub mod theme_toggle;
