//! # theme-toggle
//!
//! Light/dark theme toggle for server-rendered pages, compiled to WASM.
//!
//! The preferred theme is resolved from the stored preference or the
//! browser's `prefers-color-scheme`, written to the root element's
//! `data-theme` attribute before first paint, and flipped by a toggle button
//! injected into `<body>` once the document has loaded. Styling reacts to the
//! attribute and lives in the page's stylesheet.
//!
//! Browser bindings are behind the `csr` feature; everything else builds and
//! tests natively against the in-memory host.

pub mod components;
pub mod config;
pub mod controller;
pub mod host;
pub mod memory;
pub mod theme;

#[cfg(feature = "csr")]
pub mod browser;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use theme::{ParseThemeError, Theme};
