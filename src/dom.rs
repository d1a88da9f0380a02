//! Element trait and shared DOM vocabulary.
//!
//! The [`Element`] trait is the seam between feature logic and the browser.
//! Every feature module is written against it, so the same code runs on
//! `web_sys::Element` in the page and on an in-memory fake in unit tests.
//!
//! Methods take `&self` because DOM handles are shared references: several
//! closures hold the same element and mutate it through the browser.

/// Class shared by the menu button, the menu panel and active nav links.
pub const ACTIVE_CLASS: &str = "active";
/// Class added to `<body>` while the mobile menu is open.
pub const MENU_OPEN_CLASS: &str = "menu-open";
/// Class added to the header once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Class added to the scroll-to-top button once it should show.
pub const VISIBLE_CLASS: &str = "visible";
/// Attribute holding an image URL until the image is near the viewport.
pub const DEFERRED_SRC_ATTR: &str = "data-src";

/// The operations features need from a page element.
pub trait Element {
    fn has_class(&self, class: &str) -> bool;

    /// Add or remove `class` depending on `present`.
    fn set_class(&self, class: &str, present: bool);

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    /// Removing an absent attribute is a no-op.
    fn remove_attribute(&self, name: &str);

    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    /// Set an inline style property (`opacity`, `transform`, `--i`, ...).
    fn set_style(&self, property: &str, value: &str);
}

/// Extract the fragment id from an in-page href: `"#about"` → `Some("about")`.
///
/// A bare `"#"` and hrefs that do not start with `#` yield `None`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
