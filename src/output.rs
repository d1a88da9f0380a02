//! CLI output formatting for `check`.
//!
//! The summary is **behaviour-centric, not key-centric**: each line says what
//! a visitor will see ("header: scrolled past 50px") rather than echoing the
//! TOML key, so a config can be reviewed without cross-referencing the docs.
//!
//! ```text
//! Config: interactions.toml
//!
//! Scroll
//!     header: scrolled past 50px
//!     scroll-to-top: visible past 300px
//!     anchor offset: 80px
//!     nav lookahead: 100px
//!
//! Features
//!     mobile-menu: .mobile-menu-btn, .nav-menu, .nav-menu a
//!     ...
//! ```
//!
//! [`format_check_output`] is pure and returns lines; [`print_check_output`]
//! writes them to stdout.

use crate::config::{InteractionConfig, SelectorConfig};
use crate::controller::Feature;
use std::path::Path;

fn indent(line: impl AsRef<str>) -> String {
    format!("    {}", line.as_ref())
}

/// Selectors a feature looks up, in lookup order.
pub fn feature_selectors(feature: Feature, selectors: &SelectorConfig) -> Vec<&str> {
    match feature {
        Feature::MobileMenu => vec![
            &selectors.menu_button,
            &selectors.menu_panel,
            &selectors.menu_links,
        ],
        Feature::SmoothAnchors => vec![&selectors.anchors],
        Feature::HeaderScroll => vec![&selectors.header],
        Feature::ScrollToTop => vec![&selectors.scroll_top],
        Feature::ContactForm => vec![&selectors.contact_form],
        Feature::SearchForm => vec![&selectors.search_form],
        Feature::FadeIn => vec![&selectors.fade_in],
        Feature::GalleryParallax => vec![&selectors.gallery_items],
        Feature::StatCounters => vec![&selectors.stats_container, &selectors.stat_numbers],
        Feature::LazyImages => vec![&selectors.lazy_images],
        Feature::NavHighlight => vec![&selectors.sections, &selectors.nav_links],
        Feature::PageLoadTiming => vec![],
    }
    .into_iter()
    .map(String::as_str)
    .collect()
}

pub fn format_check_output(config: &InteractionConfig, source: Option<&Path>) -> Vec<String> {
    let mut lines = Vec::new();
    match source {
        Some(path) => lines.push(format!("Config: {}", path.display())),
        None => lines.push("Config: stock defaults".to_string()),
    }

    let scroll = &config.scroll;
    lines.push(String::new());
    lines.push("Scroll".to_string());
    lines.push(indent(format!(
        "header: scrolled past {}px",
        scroll.header_threshold
    )));
    lines.push(indent(format!(
        "scroll-to-top: visible past {}px",
        scroll.scroll_top_threshold
    )));
    lines.push(indent(format!("anchor offset: {}px", scroll.anchor_offset)));
    lines.push(indent(format!(
        "nav lookahead: {}px",
        scroll.section_lookahead
    )));

    let notifications = &config.notifications;
    lines.push(String::new());
    lines.push("Notifications".to_string());
    lines.push(indent(format!(
        "visible {}ms, exit {}ms",
        notifications.visible_ms, notifications.exit_ms
    )));

    let counter = &config.counter;
    lines.push(String::new());
    lines.push("Counters".to_string());
    lines.push(indent(format!(
        "{}ms in {}ms ticks ({} steps), start at {:.0}% visible",
        counter.duration_ms,
        counter.tick_ms,
        counter.duration_ms / counter.tick_ms.max(1),
        counter.threshold * 100.0
    )));

    let fade = &config.fade_in;
    lines.push(String::new());
    lines.push("Fade-in".to_string());
    lines.push(indent(format!(
        "{:.0}% visible, margin {}",
        fade.threshold * 100.0,
        fade.root_margin
    )));

    let parallax = &config.parallax;
    lines.push(String::new());
    lines.push("Parallax".to_string());
    lines.push(indent(format!(
        "lift {}px, scale {}, tilt up to {}deg",
        parallax.lift_px, parallax.scale, parallax.max_tilt_deg
    )));

    lines.push(String::new());
    lines.push("Features".to_string());
    for feature in Feature::ALL {
        let selectors = feature_selectors(feature, &config.selectors);
        if selectors.is_empty() {
            lines.push(indent(feature.name()));
        } else {
            lines.push(indent(format!("{feature}: {}", selectors.join(", "))));
        }
    }

    lines.push(String::new());
    lines.push("Logging".to_string());
    lines.push(indent(format!("level: {}", config.logging.level)));
    lines
}

pub fn print_check_output(config: &InteractionConfig, source: Option<&Path>) {
    for line in format_check_output(config, source) {
        println!("{line}");
    }
}
