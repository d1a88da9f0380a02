//! Browser entry point.
//!
//! `start` runs when the wasm module is instantiated. It waits for
//! `DOMContentLoaded` if the document is still parsing, then:
//!
//! 1. reads the embedded config overlay (falling back to defaults),
//! 2. installs the console log subscriber,
//! 3. prints the banner,
//! 4. wires every feature independently ([`features::wire_all`]),
//! 5. replaces the history entry so a reload does not resubmit a form,
//! 6. logs the activation report.
//!
//! Everything here is glue: DOM lookups, listeners, observers and timers.
//! The decisions live in the platform-independent modules.

mod element;
mod features;
mod notifications;
mod observer;
mod timers;

use crate::config::{self, ConfigError, EMBEDDED_CONFIG_ID, InteractionConfig};
use crate::controller::Feature;
use crate::diagnostics;
use crate::logging;
use crate::notify::Notifier;
use notifications::DocumentHost;
use std::rc::Rc;
use thiserror::Error;
use timers::TimeoutScheduler;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        WebError::Js(message)
    }
}

/// Handles shared by every feature's setup.
pub(crate) struct Page {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub config: Rc<InteractionConfig>,
    pub scheduler: TimeoutScheduler,
    pub notifier: Rc<Notifier<DocumentHost, TimeoutScheduler>>,
}

impl Page {
    pub(crate) fn new(window: Window, config: InteractionConfig) -> Result<Self, WebError> {
        let document = window.document().ok_or(WebError::NoDocument)?;
        let body = document.body().ok_or(WebError::NoBody)?;
        let config = Rc::new(config);
        let scheduler = TimeoutScheduler::new(window.clone());
        let notifier = Rc::new(Notifier::new(
            DocumentHost::new(document.clone()),
            scheduler.clone(),
            &config.notifications,
            &config.branding.accent,
        ));
        Ok(Self {
            window,
            document,
            body,
            config,
            scheduler,
            notifier,
        })
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = boot() {
        report_fatal(&err);
    }
}

fn report_fatal(err: &WebError) {
    web_sys::console::error_1(&JsValue::from_str(&format!(
        "site-interactions: {err}"
    )));
}

fn boot() -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;
    if document.ready_state() != "loading" {
        return run(window);
    }
    let ready = Closure::once_into_js(move || {
        if let Err(err) = run(window) {
            report_fatal(&err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())?;
    Ok(())
}

fn run(window: Window) -> Result<(), WebError> {
    let document = window.document().ok_or(WebError::NoDocument)?;

    // Config decides the log level, so it is read before logging exists and
    // any problem with it is reported right after.
    let (config, config_error) = match embedded_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (InteractionConfig::default(), Some(err)),
    };
    logging::init(logging::parse_level(&config.logging.level).unwrap_or(LevelFilter::WARN));
    if let Some(err) = config_error {
        warn!(%err, "embedded configuration ignored; using defaults");
    }

    for line in diagnostics::banner(&config.branding) {
        web_sys::console::log_2(
            &JsValue::from_str(&line.text),
            &JsValue::from_str(&line.css),
        );
    }

    let page = Page::new(window, config)?;
    let report = features::wire_all(&page);
    strip_resubmission(&page.window);

    for line in report.lines() {
        debug!("{line}");
    }
    info!(
        active = report.active_count(),
        total = Feature::ALL.len(),
        "page interactions ready"
    );
    Ok(())
}

fn embedded_config(document: &Document) -> Result<InteractionConfig, ConfigError> {
    match document.get_element_by_id(EMBEDDED_CONFIG_ID) {
        Some(script) => config::parse_config(&script.text_content().unwrap_or_default()),
        None => Ok(InteractionConfig::default()),
    }
}

/// Replace the current history entry with itself so a refresh after a form
/// submit does not offer to resubmit.
fn strip_resubmission(window: &Window) {
    let (Ok(history), Ok(href)) = (window.history(), window.location().href()) else {
        return;
    };
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&href)) {
        debug!(?err, "history.replaceState rejected");
    }
}
