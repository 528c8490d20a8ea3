//! Browser bindings and page lifecycle entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here touches `web_sys` and is compiled only with the `csr`
//! feature. The bindings translate JS exceptions and missing globals into
//! [`HostError`]; deciding what to do about them is left to the controller.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Storage, Window};

use crate::components::theme_toggle::{SignalControl, ThemeToggle};
use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::host::{ColorSchemeQuery, HostError, ThemeDocument, ThemeStorage};

/// Controller wired to the live page.
pub type BrowserController = ThemeController<WebStorage, RootElement, MediaQuery, SignalControl>;

fn rejected(operation: &'static str, err: &JsValue) -> HostError {
    HostError::Rejected { operation, message: format!("{err:?}") }
}

/// `window.localStorage`, if the browser exposes it.
pub struct WebStorage {
    storage: Option<Storage>,
}

impl WebStorage {
    pub fn new(window: &Window) -> Self {
        // Throws in some privacy modes; treat that like a missing store.
        Self { storage: window.local_storage().ok().flatten() }
    }

    fn storage(&self) -> Result<&Storage, HostError> {
        self.storage.as_ref().ok_or(HostError::Unavailable("localStorage"))
    }
}

impl ThemeStorage for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| rejected("localStorage.getItem", &e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| rejected("localStorage.setItem", &e))
    }
}

/// Attributes of `document.documentElement`.
pub struct RootElement {
    document: Option<Document>,
}

impl RootElement {
    pub fn new(document: Option<Document>) -> Self {
        Self { document }
    }

    fn element(&self) -> Result<web_sys::Element, HostError> {
        self.document
            .as_ref()
            .and_then(Document::document_element)
            .ok_or(HostError::Unavailable("documentElement"))
    }
}

impl ThemeDocument for RootElement {
    fn attribute(&self, name: &str) -> Result<Option<String>, HostError> {
        Ok(self.element()?.get_attribute(name))
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        self.element()?
            .set_attribute(name, value)
            .map_err(|e| rejected("setAttribute", &e))
    }
}

/// `window.matchMedia`.
pub struct MediaQuery {
    window: Window,
}

impl MediaQuery {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ColorSchemeQuery for MediaQuery {
    fn prefers_dark(&self, query: &str) -> Result<bool, HostError> {
        self.window
            .match_media(query)
            .map_err(|e| rejected("matchMedia", &e))?
            .map(|mq| mq.matches())
            .ok_or(HostError::Unavailable("matchMedia"))
    }
}

/// Module entry point: runs as soon as the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    install(ThemeConfig::default());
}

/// Apply the preferred theme now and inject the toggle once the body exists.
///
/// Apps embedding this crate call this from their own entry point to supply
/// a custom [`ThemeConfig`].
pub fn install(config: ThemeConfig) {
    console_error_panic_hook::set_once();
    // A host app may already own the logger.
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(window) = web_sys::window() else {
        log::warn!("theme: no window, toggle disabled");
        return;
    };
    let document = window.document();

    let controller: Rc<RefCell<BrowserController>> = Rc::new(RefCell::new(ThemeController::new(
        config,
        WebStorage::new(&window),
        RootElement::new(document.clone()),
        MediaQuery::new(window),
    )));

    // Before first paint.
    let theme = controller.borrow_mut().initialize();
    log::info!("theme: initial theme {theme}");

    let Some(document) = document else {
        return;
    };
    if document.ready_state() == DocumentReadyState::Loading {
        let on_ready = Closure::once_into_js(move || mount(&controller));
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::warn!("theme: could not wait for DOMContentLoaded: {e:?}");
        }
    } else {
        mount(&controller);
    }
}

/// Ready phase: mount the button into `<body>` and hand it to the controller.
fn mount(controller: &Rc<RefCell<BrowserController>>) {
    let shown = RwSignal::new(None);
    let (id, class) = {
        let controller = controller.borrow();
        let config = controller.config();
        (config.control_id.clone(), config.control_class.clone())
    };

    let on_click = Rc::clone(controller);
    leptos::mount::mount_to_body(move || {
        view! {
            <ThemeToggle
                id=id
                class=class
                shown=shown
                on_toggle=move || {
                    let next = on_click.borrow_mut().toggle();
                    log::debug!("theme: toggled to {next}");
                }
            />
        }
    });

    controller.borrow_mut().mount_control(SignalControl::new(shown));
}
