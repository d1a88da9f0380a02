//! Fade-in on first appearance.
//!
//! The page's CSS starts these elements transparent and shifted down; the
//! watcher writes the terminal style inline when they intersect. Under a
//! reduced-motion preference nothing is observed and the terminal style is
//! written immediately with transitions disabled, so the element ends up in
//! the same place without animating there.

use super::Observation;
use crate::dom::Element;

pub struct FadeIn {
    reduced_motion: bool,
}

impl FadeIn {
    pub fn new(reduced_motion: bool) -> Self {
        Self { reduced_motion }
    }

    /// Called once per element at startup. Returns whether the element
    /// should be handed to the observer.
    pub fn prepare<E: Element>(&self, element: &E) -> bool {
        if self.reduced_motion {
            element.set_style("transition", "none");
            element.set_style("opacity", "1");
            element.set_style("transform", "none");
            return false;
        }
        true
    }

    /// Observer callback for one entry. Leaving the viewport never undoes
    /// the reveal.
    pub fn on_intersection<E: Element>(&self, element: &E, is_intersecting: bool) -> Observation {
        if is_intersecting {
            element.set_style("opacity", "1");
            element.set_style("transform", "translateY(0)");
        }
        Observation::Keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::FakeElement;

    #[test]
    fn intersecting_element_is_revealed() {
        let fade = FadeIn::new(false);
        let el = FakeElement::new();
        assert!(fade.prepare(&el));
        assert_eq!(el.style("opacity"), None);

        fade.on_intersection(&el, true);
        assert_eq!(el.style("opacity").as_deref(), Some("1"));
        assert_eq!(el.style("transform").as_deref(), Some("translateY(0)"));
    }

    #[test]
    fn leaving_viewport_keeps_reveal() {
        let fade = FadeIn::new(false);
        let el = FakeElement::new();
        fade.on_intersection(&el, true);
        fade.on_intersection(&el, false);
        assert_eq!(el.style("opacity").as_deref(), Some("1"));
    }

    #[test]
    fn non_intersecting_entry_writes_nothing() {
        let fade = FadeIn::new(false);
        let el = FakeElement::new();
        fade.on_intersection(&el, false);
        assert_eq!(el.style("opacity"), None);
    }

    #[test]
    fn reduced_motion_shows_immediately_without_observing() {
        let fade = FadeIn::new(true);
        let el = FakeElement::new();
        assert!(!fade.prepare(&el));
        assert_eq!(el.style("opacity").as_deref(), Some("1"));
        assert_eq!(el.style("transform").as_deref(), Some("none"));
        assert_eq!(el.style("transition").as_deref(), Some("none"));
    }
}
