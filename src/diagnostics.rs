//! Console banner and page-load timing.
//!
//! These are user-facing console lines, not log events: they are printed
//! regardless of the log level.

use crate::config::BrandingConfig;

/// One styled console line: `console.log("%c" + text, css)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub css: String,
}

/// The two-line startup banner.
pub fn banner(branding: &BrandingConfig) -> [StyledLine; 2] {
    [
        StyledLine {
            text: format!("%c{}", branding.title),
            css: format!(
                "color: {}; font-size: 20px; font-weight: bold;",
                branding.accent
            ),
        },
        StyledLine {
            text: format!("%c{}", branding.tagline),
            css: format!("color: {}; font-size: 12px;", branding.muted),
        },
    ]
}

/// `⚡ Page loaded in <ms>ms` from Navigation Timing values.
///
/// `None` until `loadEventEnd` is recorded (it is still zero while `load`
/// handlers run) or if the values are inconsistent.
pub fn page_load_message(navigation_start: f64, load_event_end: f64) -> Option<String> {
    if load_event_end <= 0.0 || load_event_end < navigation_start {
        return None;
    }
    Some(format!(
        "⚡ Page loaded in {}ms",
        (load_event_end - navigation_start).round()
    ))
}
