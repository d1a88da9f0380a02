//! Toast notifications.
//!
//! At most one notification is on the page at a time. [`Notifier::notify`]
//! removes the current one synchronously, shows the new one, and schedules
//! two follow-ups: the exit animation after `visible_ms` and removal
//! `exit_ms` later.
//!
//! Pending timers of a replaced notification are not cancelled. They still
//! fire, and act on an element that is already detached; hosts must treat
//! that as a no-op (the DOM's `Element.remove()` already does).
//!
//! Timing and DOM access are behind [`Scheduler`] and [`NotificationHost`] so
//! the lifecycle can be driven by a manual clock in tests.

use crate::config::NotificationConfig;
use crate::schedule::Scheduler;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// `id` of the `<style>` block holding the slide keyframes.
pub const KEYFRAMES_STYLE_ID: &str = "notification-styles";

/// Slide-in / slide-out keyframes, installed once per page.
pub const KEYFRAMES_CSS: &str = r#"
@keyframes slideInRight {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}
"#;

/// Class every notification element carries; used to find the current one.
pub const NOTIFICATION_CLASS: &str = "notification";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Background colour. Info uses the site accent.
    pub fn color(self, accent: &str) -> &str {
        match self {
            Severity::Success => "#25D366",
            Severity::Error => "#e74c3c",
            Severity::Info => accent,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a host needs to build the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// `notification notification-<severity>`
    pub class_name: String,
    /// Inline `style` attribute value.
    pub style: String,
}

impl Notification {
    pub fn new(message: &str, severity: Severity, accent: &str) -> Self {
        let style = format!(
            "position: fixed; top: 100px; right: 20px; background: {bg}; color: white; \
             padding: 1rem 2rem; border-radius: 12px; box-shadow: 0 10px 40px rgba(0,0,0,0.3); \
             z-index: 10000; animation: slideInRight 0.5s ease-out; font-weight: 600; \
             max-width: 400px;",
            bg = severity.color(accent),
        );
        Self {
            message: message.to_string(),
            severity,
            class_name: format!("{NOTIFICATION_CLASS} {NOTIFICATION_CLASS}-{severity}"),
            style,
        }
    }
}

/// `animation` value that plays the exit slide over `exit_ms`.
pub fn exit_animation(exit_ms: u32) -> String {
    format!("slideOutRight {}s ease-out", f64::from(exit_ms) / 1000.0)
}

/// Document operations the notifier performs.
pub trait NotificationHost: 'static {
    type Handle: 'static;

    /// Remove whatever notification is currently in the document.
    fn remove_current(&self);

    /// Add the keyframes block unless it is already present.
    fn install_keyframes(&self);

    /// Create and attach the element. `None` if the document refused.
    fn show(&self, notification: &Notification) -> Option<Self::Handle>;

    /// Switch the element to its exit animation.
    fn begin_exit(&self, handle: &Self::Handle, animation: &str);

    /// Detach the element. Must be a no-op if it is already detached.
    fn dismiss(&self, handle: &Self::Handle);
}

pub struct Notifier<H, S> {
    host: Rc<H>,
    scheduler: S,
    visible_ms: u32,
    exit_ms: u32,
    accent: String,
}

impl<H: NotificationHost, S: Scheduler> Notifier<H, S> {
    pub fn new(host: H, scheduler: S, config: &NotificationConfig, accent: &str) -> Self {
        Self {
            host: Rc::new(host),
            scheduler,
            visible_ms: config.visible_ms,
            exit_ms: config.exit_ms,
            accent: accent.to_string(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn notify(&self, message: &str, severity: Severity) {
        self.host.remove_current();
        self.host.install_keyframes();

        let notification = Notification::new(message, severity, &self.accent);
        let Some(handle) = self.host.show(&notification) else {
            debug!(%severity, "notification could not be attached");
            return;
        };
        debug!(%severity, text = message, "notification shown");

        let host = Rc::clone(&self.host);
        let scheduler = self.scheduler.clone();
        let exit_ms = self.exit_ms;
        self.scheduler.after(
            self.visible_ms,
            Box::new(move || {
                host.begin_exit(&handle, &exit_animation(exit_ms));
                scheduler.after(exit_ms, Box::new(move || host.dismiss(&handle)));
            }),
        );
    }
}
