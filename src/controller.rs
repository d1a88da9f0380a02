//! Feature inventory and the startup activation report.
//!
//! Each feature is wired independently. The binding layer records, per
//! feature, whether it was wired and, if not, why; the report is logged once
//! at the end of startup. A skipped feature never stops the others.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Feature {
    MobileMenu,
    SmoothAnchors,
    HeaderScroll,
    ScrollToTop,
    ContactForm,
    SearchForm,
    FadeIn,
    GalleryParallax,
    StatCounters,
    LazyImages,
    NavHighlight,
    PageLoadTiming,
}

impl Feature {
    pub const ALL: [Feature; 12] = [
        Feature::MobileMenu,
        Feature::SmoothAnchors,
        Feature::HeaderScroll,
        Feature::ScrollToTop,
        Feature::ContactForm,
        Feature::SearchForm,
        Feature::FadeIn,
        Feature::GalleryParallax,
        Feature::StatCounters,
        Feature::LazyImages,
        Feature::NavHighlight,
        Feature::PageLoadTiming,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::MobileMenu => "mobile-menu",
            Feature::SmoothAnchors => "smooth-anchors",
            Feature::HeaderScroll => "header-scroll",
            Feature::ScrollToTop => "scroll-to-top",
            Feature::ContactForm => "contact-form",
            Feature::SearchForm => "search-form",
            Feature::FadeIn => "fade-in",
            Feature::GalleryParallax => "gallery-parallax",
            Feature::StatCounters => "stat-counters",
            Feature::LazyImages => "lazy-images",
            Feature::NavHighlight => "nav-highlight",
            Feature::PageLoadTiming => "page-load-timing",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Wired; `targets` is the number of elements it attached to.
    Active { targets: usize },
    /// A required element matched nothing.
    Missing { selector: String },
    /// The runtime lacks a capability (e.g. `IntersectionObserver`).
    Unsupported { capability: &'static str },
    /// Setup hit a DOM error.
    Failed { reason: String },
}

impl Activation {
    pub fn is_active(&self) -> bool {
        matches!(self, Activation::Active { .. })
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Active { targets } => write!(f, "active ({targets} elements)"),
            Activation::Missing { selector } => write!(f, "skipped: nothing matches '{selector}'"),
            Activation::Unsupported { capability } => {
                write!(f, "skipped: {capability} unavailable")
            }
            Activation::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivationReport {
    entries: Vec<(Feature, Activation)>,
}

impl ActivationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a feature's outcome. A later record for the same feature
    /// replaces the earlier one.
    pub fn record(&mut self, feature: Feature, activation: Activation) {
        match self.entries.iter_mut().find(|(f, _)| *f == feature) {
            Some(entry) => entry.1 = activation,
            None => self.entries.push((feature, activation)),
        }
    }

    pub fn get(&self, feature: Feature) -> Option<&Activation> {
        self.entries
            .iter()
            .find(|(f, _)| *f == feature)
            .map(|(_, a)| a)
    }

    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|(_, a)| a.is_active()).count()
    }

    /// One line per feature, in [`Feature::ALL`] order. Unrecorded features
    /// are listed as not wired.
    pub fn lines(&self) -> Vec<String> {
        Feature::ALL
            .iter()
            .map(|feature| match self.get(*feature) {
                Some(activation) => format!("{feature}: {activation}"),
                None => format!("{feature}: not wired"),
            })
            .collect()
    }
}

/// Activation for a feature that needs at least one element.
pub fn require_any(selector: &str, found: usize) -> Activation {
    if found == 0 {
        Activation::Missing {
            selector: selector.to_string(),
        }
    } else {
        Activation::Active { targets: found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_any_reports_missing_selector() {
        assert_eq!(
            require_any(".stats-inline", 0),
            Activation::Missing {
                selector: ".stats-inline".into()
            }
        );
        assert_eq!(require_any("img", 3), Activation::Active { targets: 3 });
    }

    #[test]
    fn report_counts_active_features() {
        let mut report = ActivationReport::new();
        report.record(Feature::MobileMenu, Activation::Active { targets: 2 });
        report.record(
            Feature::LazyImages,
            Activation::Unsupported {
                capability: "IntersectionObserver",
            },
        );
        report.record(Feature::HeaderScroll, Activation::Active { targets: 1 });
        assert_eq!(report.active_count(), 2);
    }

    #[test]
    fn later_record_replaces_earlier() {
        let mut report = ActivationReport::new();
        report.record(Feature::FadeIn, Activation::Active { targets: 4 });
        report.record(
            Feature::FadeIn,
            Activation::Failed {
                reason: "observer".into(),
            },
        );
        assert!(!report.get(Feature::FadeIn).unwrap().is_active());
        assert_eq!(report.active_count(), 0);
    }

    #[test]
    fn lines_cover_every_feature_in_order() {
        let mut report = ActivationReport::new();
        report.record(
            Feature::ScrollToTop,
            Activation::Missing {
                selector: "#scrollTop".into(),
            },
        );
        let lines = report.lines();
        assert_eq!(lines.len(), Feature::ALL.len());
        assert_eq!(lines[0], "mobile-menu: not wired");
        assert_eq!(lines[3], "scroll-to-top: skipped: nothing matches '#scrollTop'");
    }
}
