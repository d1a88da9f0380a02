//! Mobile navigation menu.
//!
//! "Menu open" is one flag mirrored onto three elements: the toggle button and
//! the menu panel carry `active`, the body carries `menu-open`. All three are
//! written together on every change, so they can never disagree, even if the
//! page started with an inconsistent set of classes.

use crate::dom::{ACTIVE_CLASS, Element, MENU_OPEN_CLASS};
use tracing::trace;

/// Where a document-level click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickTarget {
    pub in_panel: bool,
    pub in_button: bool,
}

pub struct MobileMenu<E> {
    button: E,
    panel: E,
    body: E,
}

impl<E: Element> MobileMenu<E> {
    pub fn new(button: E, panel: E, body: E) -> Self {
        Self {
            button,
            panel,
            body,
        }
    }

    /// The panel is the source of truth, matching what the outside-click
    /// check looks at.
    pub fn is_open(&self) -> bool {
        self.panel.has_class(ACTIVE_CLASS)
    }

    pub fn button(&self) -> &E {
        &self.button
    }

    pub fn panel(&self) -> &E {
        &self.panel
    }

    fn set_open(&self, open: bool) {
        self.button.set_class(ACTIVE_CLASS, open);
        self.panel.set_class(ACTIVE_CLASS, open);
        self.body.set_class(MENU_OPEN_CLASS, open);
        trace!(open, "menu state");
    }

    /// Toggle button click. Returns the new state.
    pub fn toggle(&self) -> bool {
        let open = !self.is_open();
        self.set_open(open);
        open
    }

    /// A link inside the menu was clicked.
    pub fn close(&self) {
        self.set_open(false);
    }

    /// Any click on the document. Closes the menu when it is open and the
    /// click landed outside both the panel and the button. Returns whether
    /// the menu was closed by this click.
    pub fn handle_document_click(&self, target: ClickTarget) -> bool {
        if target.in_panel || target.in_button || !self.is_open() {
            return false;
        }
        self.close();
        true
    }
}
