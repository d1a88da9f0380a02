//! Scroll-driven chrome: the header's `scrolled` state, the scroll-to-top
//! button, and anchor jump targets.
//!
//! Nothing here reads the browser. The binding layer passes in the current
//! offset (and for anchors, the target's viewport position) and applies the
//! result.

use crate::config::ScrollConfig;
use crate::dom::{Element, SCROLLED_CLASS, VISIBLE_CLASS};

/// Classes derived from one scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub header_scrolled: bool,
    pub scroll_top_visible: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollEffects {
    header_threshold: f64,
    scroll_top_threshold: f64,
    anchor_offset: f64,
}

impl ScrollEffects {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            header_threshold: config.header_threshold,
            scroll_top_threshold: config.scroll_top_threshold,
            anchor_offset: config.anchor_offset,
        }
    }

    /// Both thresholds are strict: exactly at the threshold is "not past".
    pub fn evaluate(&self, offset: f64) -> ScrollState {
        ScrollState {
            header_scrolled: offset > self.header_threshold,
            scroll_top_visible: offset > self.scroll_top_threshold,
        }
    }

    /// Evaluate `offset` and write the classes onto whichever elements exist.
    pub fn apply<E: Element>(&self, offset: f64, header: Option<&E>, scroll_top: Option<&E>) {
        let state = self.evaluate(offset);
        if let Some(header) = header {
            header.set_class(SCROLLED_CLASS, state.header_scrolled);
        }
        if let Some(button) = scroll_top {
            button.set_class(VISIBLE_CLASS, state.scroll_top_visible);
        }
    }

    /// Document offset to scroll to for an anchor target.
    ///
    /// `target_top` is the target's top edge relative to the viewport (as
    /// reported by `getBoundingClientRect`), `page_offset` the current
    /// vertical scroll. Returns `None` when the target does not exist.
    pub fn anchor_destination(&self, target_top: Option<f64>, page_offset: f64) -> Option<f64> {
        target_top.map(|top| top + page_offset - self.anchor_offset)
    }
}
