use crate::dom::Element as _;
use crate::notify::{KEYFRAMES_CSS, KEYFRAMES_STYLE_ID, NOTIFICATION_CLASS, Notification, NotificationHost};
use tracing::{trace, warn};
use web_sys::{Document, Element};

/// Notifications as `<div>`s appended to `<body>`.
pub struct DocumentHost {
    document: Document,
}

impl DocumentHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl NotificationHost for DocumentHost {
    type Handle = Element;

    fn remove_current(&self) {
        if let Ok(Some(existing)) = self
            .document
            .query_selector(&format!(".{NOTIFICATION_CLASS}"))
        {
            existing.remove();
        }
    }

    fn install_keyframes(&self) {
        if self.document.get_element_by_id(KEYFRAMES_STYLE_ID).is_some() {
            return;
        }
        let Some(head) = self.document.head() else {
            trace!("no <head>; notification keyframes not installed");
            return;
        };
        match self.document.create_element("style") {
            Ok(style) => {
                style.set_id(KEYFRAMES_STYLE_ID);
                style.set_text_content(Some(KEYFRAMES_CSS));
                if let Err(err) = head.append_child(&style) {
                    warn!(?err, "could not install notification keyframes");
                }
            }
            Err(err) => warn!(?err, "could not create <style>"),
        }
    }

    fn show(&self, notification: &Notification) -> Option<Element> {
        let body = self.document.body()?;
        let el = self.document.create_element("div").ok()?;
        el.set_class_name(&notification.class_name);
        el.set_text_content(Some(&notification.message));
        el.set_attribute("style", &notification.style).ok()?;
        body.append_child(&el).ok()?;
        Some(el)
    }

    fn begin_exit(&self, handle: &Element, animation: &str) {
        handle.set_style("animation", animation);
    }

    fn dismiss(&self, handle: &Element) {
        handle.remove();
    }
}
