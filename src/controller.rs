//! Theme resolution, application, and toggling.
//!
//! DESIGN
//! ======
//! The controller owns its host bindings instead of reaching for globals. A
//! page builds one controller, runs [`ThemeController::initialize`] as soon as
//! the script loads so the root attribute is set before first paint, and calls
//! [`ThemeController::mount_control`] once the body exists. The theme resolved
//! in the first phase is reused by the second; the stored preference is read
//! once per page.
//!
//! TRADE-OFFS
//! ==========
//! Host failures never reach the caller. A missing store or media query
//! degrades to light, and a failed write is logged while the remaining steps of
//! an apply still run.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ThemeConfig;
use crate::host::{ColorSchemeQuery, HostError, ThemeDocument, ThemeStorage, ToggleControl};
use crate::theme::Theme;

/// Keeps the document attribute, stored preference, and toggle control in agreement.
pub struct ThemeController<S, D, Q, C> {
    config: ThemeConfig,
    storage: S,
    document: D,
    color_scheme: Q,
    control: Option<C>,
    current: Option<Theme>,
}

impl<S, D, Q, C> ThemeController<S, D, Q, C>
where
    S: ThemeStorage,
    D: ThemeDocument,
    Q: ColorSchemeQuery,
    C: ToggleControl,
{
    pub fn new(config: ThemeConfig, storage: S, document: D, color_scheme: Q) -> Self {
        Self {
            config,
            storage,
            document,
            color_scheme,
            control: None,
            current: None,
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Theme set by the most recent apply, if any.
    pub fn current_theme(&self) -> Option<Theme> {
        self.current
    }

    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    /// Stored preference if it names a theme, otherwise the ambient signal.
    pub fn resolve_preferred_theme(&self) -> Theme {
        match self.storage.get(&self.config.storage_key) {
            Ok(Some(saved)) => {
                if let Ok(theme) = saved.parse::<Theme>() {
                    return theme;
                }
                log::debug!("ignoring stored theme {saved:?}");
            }
            Ok(None) => {}
            Err(e) => warn_host("read stored theme", &e),
        }

        match self.color_scheme.prefers_dark(&self.config.media_query) {
            Ok(prefers_dark) => Theme::from_prefers_dark(prefers_dark),
            Err(e) => {
                warn_host("query color scheme", &e);
                Theme::Light
            }
        }
    }

    /// Set the root attribute, persist the value, and redraw the control if attached.
    pub fn apply_theme(&mut self, theme: Theme) {
        if let Err(e) = self.document.set_attribute(&self.config.attribute, theme.as_str()) {
            warn_host("set theme attribute", &e);
        }
        if let Err(e) = self.storage.set(&self.config.storage_key, theme.as_str()) {
            warn_host("persist theme", &e);
        }
        if let Some(control) = self.control.as_mut() {
            if let Err(e) = control.show(theme) {
                warn_host("update toggle control", &e);
            }
        }
        self.current = Some(theme);
        log::debug!("theme applied: {theme}");
    }

    /// Early phase: resolve the preference and apply it before the control exists.
    pub fn initialize(&mut self) -> Theme {
        let theme = self.resolve_preferred_theme();
        self.apply_theme(theme);
        theme
    }

    /// Ready phase: attach the control and apply the theme from the early phase.
    ///
    /// Resolves the preference only if [`Self::initialize`] never ran.
    pub fn mount_control(&mut self, control: C) -> Theme {
        self.control = Some(control);
        let theme = self
            .current
            .unwrap_or_else(|| self.resolve_preferred_theme());
        self.apply_theme(theme);
        theme
    }

    /// Click handler: switch away from whatever the document currently shows.
    ///
    /// Anything other than `dark` on the root element counts as light.
    pub fn toggle(&mut self) -> Theme {
        let shown = match self.document.attribute(&self.config.attribute) {
            Ok(value) => value,
            Err(e) => {
                warn_host("read theme attribute", &e);
                None
            }
        };
        let next = if shown.as_deref() == Some(Theme::Dark.as_str()) {
            Theme::Light
        } else {
            Theme::Dark
        };
        self.apply_theme(next);
        next
    }
}

fn warn_host(action: &str, error: &HostError) {
    log::warn!("theme: could not {action}: {error}");
}
