//! Active-section highlighting in the navigation.
//!
//! On each scroll the current offset plus a fixed lookahead is matched
//! against every identified section's vertical span. The nav link pointing
//! at the matching section gets `active`; its siblings lose it.
//!
//! When nothing matches (above the first section, below the last, or in a
//! gap between sections) the previous highlight is left as it was.

use crate::dom::{ACTIVE_CLASS, Element, fragment_id};
use tracing::trace;

/// A section's id and vertical span in document coordinates
/// (`offsetTop` / `offsetHeight`).
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Half-open: the top edge is inside, the bottom edge is not.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Id of the section under `scroll_y + lookahead`. When spans overlap the
/// last one in document order wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let position = scroll_y + lookahead;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(position))
        .map(|s| s.id.as_str())
}

pub struct NavHighlighter<E> {
    links: Vec<(E, Option<String>)>,
    lookahead: f64,
}

impl<E: Element> NavHighlighter<E> {
    /// Each link's `href` is read once here.
    pub fn new(links: Vec<E>, lookahead: f64) -> Self {
        let links = links
            .into_iter()
            .map(|link| {
                let target = link
                    .attribute("href")
                    .and_then(|href| fragment_id(&href).map(str::to_string));
                (link, target)
            })
            .collect();
        Self { links, lookahead }
    }

    /// Re-evaluate for the current scroll offset. Returns the id marked
    /// active, or `None` if the highlight was left unchanged.
    pub fn update<'a>(&self, sections: &'a [SectionBounds], scroll_y: f64) -> Option<&'a str> {
        let id = active_section(sections, scroll_y, self.lookahead)?;
        for (link, target) in &self.links {
            link.set_class(ACTIVE_CLASS, target.as_deref() == Some(id));
        }
        trace!(id, "active section");
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::FakeElement;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                id: "home".into(),
                top: 0.0,
                height: 800.0,
            },
            SectionBounds {
                id: "about".into(),
                top: 800.0,
                height: 600.0,
            },
            SectionBounds {
                id: "contact".into(),
                top: 1400.0,
                height: 500.0,
            },
        ]
    }

    fn links() -> Vec<FakeElement> {
        ["#home", "#about", "#contact"]
            .iter()
            .map(|href| {
                let link = FakeElement::new();
                link.set_attribute("href", href);
                link
            })
            .collect()
    }

    fn active(links: &[FakeElement]) -> Vec<bool> {
        links.iter().map(|l| l.has_class(ACTIVE_CLASS)).collect()
    }

    #[test]
    fn exact_top_boundary_selects_section() {
        let links = links();
        let nav = NavHighlighter::new(links.clone(), 100.0);
        // 700 + 100 lookahead lands exactly on about's top edge
        assert_eq!(nav.update(&sections(), 700.0), Some("about"));
        assert_eq!(active(&links), vec![false, true, false]);
    }

    #[test]
    fn bottom_edge_belongs_to_next_section() {
        assert_eq!(active_section(&sections(), 1300.0, 100.0), Some("contact"));
        assert_eq!(active_section(&sections(), 1299.0, 100.0), Some("about"));
    }

    #[test]
    fn switching_sections_moves_highlight() {
        let links = links();
        let nav = NavHighlighter::new(links.clone(), 100.0);
        nav.update(&sections(), 0.0);
        assert_eq!(active(&links), vec![true, false, false]);
        nav.update(&sections(), 1500.0);
        assert_eq!(active(&links), vec![false, false, true]);
    }

    #[test]
    fn past_last_section_keeps_previous_highlight() {
        let links = links();
        let nav = NavHighlighter::new(links.clone(), 100.0);
        nav.update(&sections(), 1500.0);
        assert_eq!(nav.update(&sections(), 5000.0), None);
        assert_eq!(active(&links), vec![false, false, true]);
    }

    #[test]
    fn overlapping_sections_last_wins() {
        let mut overlapping = sections();
        overlapping.push(SectionBounds {
            id: "listings".into(),
            top: 700.0,
            height: 300.0,
        });
        assert_eq!(active_section(&overlapping, 750.0, 100.0), Some("listings"));
    }

    #[test]
    fn links_without_fragment_are_cleared() {
        let links = links();
        let external = FakeElement::new();
        external.set_attribute("href", "/blog");
        external.set_class(ACTIVE_CLASS, true);
        let mut all = links.clone();
        all.push(external.clone());

        let nav = NavHighlighter::new(all, 100.0);
        nav.update(&sections(), 0.0);
        assert!(!external.has_class(ACTIVE_CLASS));
        assert!(links[0].has_class(ACTIVE_CLASS));
    }
}
