//! `web_sys::Element` as a [`dom::Element`], plus selector helpers.

use super::WebError;
use crate::dom;
use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

impl dom::Element for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        if let Err(err) = self.class_list().toggle_with_force(class, present) {
            trace!(?err, class, "classList.toggle rejected");
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = Element::set_attribute(self, name, value) {
            trace!(?err, name, "setAttribute rejected");
        }
    }

    fn remove_attribute(&self, name: &str) {
        if let Err(err) = Element::remove_attribute(self, name) {
            trace!(?err, name, "removeAttribute rejected");
        }
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    /// Only HTML elements carry an inline style; others are left alone.
    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            trace!(?err, property, "style.setProperty rejected");
        }
    }
}

pub fn query_one(document: &Document, selector: &str) -> Result<Option<Element>, WebError> {
    Ok(document.query_selector(selector)?)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Descendants of `parent` matching `selector`.
pub fn query_within(parent: &Element, selector: &str) -> Result<Vec<Element>, WebError> {
    Ok(elements(&parent.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
