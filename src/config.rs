//! Interaction configuration.
//!
//! Every threshold, timing, selector and branding string the page controller
//! uses lives here. All fields have defaults matching the shipped site, so a
//! page that embeds no configuration behaves exactly like the stock build.
//!
//! ## Where Configuration Comes From
//!
//! In the browser, a sparse TOML overlay can be embedded in the page:
//!
//! ```html
//! <script type="application/toml" id="site-interactions-config">
//! [scroll]
//! anchor_offset = 96
//! </script>
//! ```
//!
//! The overlay is merged on top of the stock defaults and validated. A broken
//! overlay is logged and ignored; the page still gets the defaults.
//!
//! On the command line, `site-interactions check --config file.toml` runs the
//! same merge and validation against a file.
//!
//! ## Configuration Options
//!
//! ```toml
//! [scroll]
//! header_threshold = 50       # px before the header gets `scrolled`
//! scroll_top_threshold = 300  # px before the scroll-to-top button shows
//! anchor_offset = 80          # fixed header allowance for anchor jumps
//! section_lookahead = 100     # px added to scrollY for nav highlighting
//!
//! [notifications]
//! visible_ms = 5000
//! exit_ms = 500
//!
//! [counter]
//! duration_ms = 2000
//! tick_ms = 16
//! threshold = 0.5
//!
//! [fade_in]
//! threshold = 0.1
//! root_margin = "0px 0px -50px 0px"
//!
//! [parallax]
//! lift_px = 10.0
//! scale = 1.02
//! max_tilt_deg = 5.0
//!
//! [logging]
//! level = "warn"              # off, error, warn, info, debug, trace
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// `id` of the `<script>` block that carries a page-level config overlay.
pub const EMBEDDED_CONFIG_ID: &str = "site-interactions-config";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full interaction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InteractionConfig {
    /// Scroll thresholds and offsets.
    pub scroll: ScrollConfig,
    /// Toast lifetime and the fixed form messages.
    pub notifications: NotificationConfig,
    /// Stat counter animation.
    pub counter: CounterConfig,
    /// Fade-in watcher.
    pub fade_in: FadeInConfig,
    /// Gallery tile tilt.
    pub parallax: ParallaxConfig,
    /// Selectors used to discover page elements.
    pub selectors: SelectorConfig,
    /// Console banner.
    pub branding: BrandingConfig,
    /// Log verbosity.
    pub logging: LoggingConfig,
}

impl InteractionConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scroll;
        for (name, value) in [
            ("scroll.header_threshold", s.header_threshold),
            ("scroll.scroll_top_threshold", s.scroll_top_threshold),
            ("scroll.anchor_offset", s.anchor_offset),
            ("scroll.section_lookahead", s.section_lookahead),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        if self.counter.tick_ms == 0 {
            return Err(ConfigError::Validation(
                "counter.tick_ms must be greater than zero".into(),
            ));
        }
        if self.counter.duration_ms < self.counter.tick_ms {
            return Err(ConfigError::Validation(
                "counter.duration_ms must be at least counter.tick_ms".into(),
            ));
        }
        for (name, value) in [
            ("counter.threshold", self.counter.threshold),
            ("fade_in.threshold", self.fade_in.threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Validation(format!("{name} must be 0.0-1.0")));
            }
        }
        let p = &self.parallax;
        if !(p.scale.is_finite() && p.scale > 0.0) {
            return Err(ConfigError::Validation(
                "parallax.scale must be a positive number".into(),
            ));
        }
        for (name, value) in [
            ("parallax.lift_px", p.lift_px),
            ("parallax.max_tilt_deg", p.max_tilt_deg),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        if crate::logging::parse_level(&self.logging.level).is_none() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of off, error, warn, info, debug, trace",
                self.logging.level
            )));
        }
        if let Some(name) = self.selectors.first_empty() {
            return Err(ConfigError::Validation(format!(
                "selectors.{name} must not be empty"
            )));
        }
        Ok(())
    }
}

/// Scroll thresholds, all in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Offset beyond which the header gets the `scrolled` class.
    pub header_threshold: f64,
    /// Offset beyond which the scroll-to-top button gets `visible`.
    pub scroll_top_threshold: f64,
    /// Space left above an anchor target for the fixed header.
    pub anchor_offset: f64,
    /// Added to the scroll offset before matching it against sections.
    pub section_lookahead: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: 50.0,
            scroll_top_threshold: 300.0,
            anchor_offset: 80.0,
            section_lookahead: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
    /// How long a notification stays before its exit animation starts.
    pub visible_ms: u32,
    /// Length of the exit animation; the element is removed after it.
    pub exit_ms: u32,
    /// Shown after every contact form submission.
    pub contact_message: String,
    /// Shown after every search form submission.
    pub search_message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            visible_ms: 5000,
            exit_ms: 500,
            contact_message: "Thank you for your message! We will contact you shortly.".into(),
            search_message:
                "Searching for properties... This will be connected to a property database."
                    .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    /// Nominal length of one count-up.
    pub duration_ms: u32,
    /// Interval between display updates (16ms ≈ 60fps).
    pub tick_ms: u32,
    /// Visible fraction of the stats container that starts the count.
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            tick_ms: 16,
            threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FadeInConfig {
    /// Visible fraction that reveals an element.
    pub threshold: f64,
    /// Observer root margin, CSS margin syntax.
    pub root_margin: String,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxConfig {
    /// Upward lift applied while hovering, in pixels.
    pub lift_px: f64,
    /// Scale applied while hovering.
    pub scale: f64,
    /// Rotation at the very edge of a tile, in degrees.
    pub max_tilt_deg: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            lift_px: 10.0,
            scale: 1.02,
            max_tilt_deg: 5.0,
        }
    }
}

/// CSS selectors for every element the controller looks up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    pub menu_button: String,
    pub menu_panel: String,
    pub menu_links: String,
    pub anchors: String,
    pub header: String,
    pub scroll_top: String,
    pub contact_form: String,
    pub search_form: String,
    pub fade_in: String,
    pub gallery_items: String,
    pub stats_container: String,
    pub stat_numbers: String,
    pub lazy_images: String,
    pub sections: String,
    pub nav_links: String,
}

impl SelectorConfig {
    fn first_empty(&self) -> Option<&'static str> {
        [
            ("menu_button", &self.menu_button),
            ("menu_panel", &self.menu_panel),
            ("menu_links", &self.menu_links),
            ("anchors", &self.anchors),
            ("header", &self.header),
            ("scroll_top", &self.scroll_top),
            ("contact_form", &self.contact_form),
            ("search_form", &self.search_form),
            ("fade_in", &self.fade_in),
            ("gallery_items", &self.gallery_items),
            ("stats_container", &self.stats_container),
            ("stat_numbers", &self.stat_numbers),
            ("lazy_images", &self.lazy_images),
            ("sections", &self.sections),
            ("nav_links", &self.nav_links),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            menu_button: ".mobile-menu-btn".into(),
            menu_panel: ".nav-menu".into(),
            menu_links: ".nav-menu a".into(),
            anchors: r##"a[href^="#"]"##.into(),
            header: "#header".into(),
            scroll_top: "#scrollTop".into(),
            contact_form: "#contactForm".into(),
            search_form: ".search-form".into(),
            fade_in: ".section-header, .about-content > *, .sold-item, .service-card, .gallery-item"
                .into(),
            gallery_items: ".gallery-item".into(),
            stats_container: ".stats-inline".into(),
            stat_numbers: ".stat-inline-number".into(),
            lazy_images: "img[data-src]".into(),
            sections: "section[id]".into(),
            nav_links: r##".nav-menu a[href^="#"]"##.into(),
        }
    }
}

/// Console banner printed once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandingConfig {
    pub title: String,
    pub tagline: String,
    /// Banner title colour; also the info notification colour.
    pub accent: String,
    pub muted: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            title: "🏡 Marci Metzger Real Estate".into(),
            tagline: "Website designed with excellence in mind".into(),
            accent: "#C9A96E".into(),
            muted: "#6B6B6B".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Maximum level passed to the console.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(InteractionConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<InteractionConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: InteractionConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Parse a TOML overlay from text (the embedded `<script>` block or a file).
///
/// Blank input yields the defaults.
pub fn parse_config(source: &str) -> Result<InteractionConfig, ConfigError> {
    if source.trim().is_empty() {
        return resolve_config(None);
    }
    let overlay: toml::Value = toml::from_str(source)?;
    resolve_config(Some(overlay))
}

/// Load a config file from disk. A missing file is an IO error.
pub fn load_config(path: &Path) -> Result<InteractionConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Interactions Configuration
# ===============================
# All settings are optional. Values shown below are the defaults.
#
# Embed an overlay in a page with:
#   <script type="application/toml" id="site-interactions-config"> ... </script>
#
# Only the keys you want to change need to be present.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Scroll behaviour (CSS pixels)
# ---------------------------------------------------------------------------
[scroll]
# Header gets the `scrolled` class past this offset.
header_threshold = 50.0
# Scroll-to-top button gets the `visible` class past this offset.
scroll_top_threshold = 300.0
# Space left above anchor targets for the fixed header.
anchor_offset = 80.0
# Added to the scroll offset when deciding which nav link is active.
section_lookahead = 100.0

# ---------------------------------------------------------------------------
# Notifications
# ---------------------------------------------------------------------------
[notifications]
visible_ms = 5000
exit_ms = 500
contact_message = "Thank you for your message! We will contact you shortly."
search_message = "Searching for properties... This will be connected to a property database."

# ---------------------------------------------------------------------------
# Stat counters
# ---------------------------------------------------------------------------
[counter]
duration_ms = 2000
# 16ms is roughly one frame at 60fps.
tick_ms = 16
# Fraction of the stats block that must be visible (0.0-1.0).
threshold = 0.5

# ---------------------------------------------------------------------------
# Fade-in on scroll
# ---------------------------------------------------------------------------
[fade_in]
threshold = 0.1
root_margin = "0px 0px -50px 0px"

# ---------------------------------------------------------------------------
# Gallery tile tilt
# ---------------------------------------------------------------------------
[parallax]
lift_px = 10.0
scale = 1.02
max_tilt_deg = 5.0

# ---------------------------------------------------------------------------
# Element selectors
# ---------------------------------------------------------------------------
[selectors]
menu_button = ".mobile-menu-btn"
menu_panel = ".nav-menu"
menu_links = ".nav-menu a"
anchors = 'a[href^="#"]'
header = "#header"
scroll_top = "#scrollTop"
contact_form = "#contactForm"
search_form = ".search-form"
fade_in = ".section-header, .about-content > *, .sold-item, .service-card, .gallery-item"
gallery_items = ".gallery-item"
stats_container = ".stats-inline"
stat_numbers = ".stat-inline-number"
lazy_images = "img[data-src]"
sections = "section[id]"
nav_links = '.nav-menu a[href^="#"]'

# ---------------------------------------------------------------------------
# Console banner
# ---------------------------------------------------------------------------
[branding]
title = "🏡 Marci Metzger Real Estate"
tagline = "Website designed with excellence in mind"
accent = "#C9A96E"
muted = "#6B6B6B"

# ---------------------------------------------------------------------------
# Logging
# ---------------------------------------------------------------------------
[logging]
# One of: off, error, warn, info, debug, trace
level = "warn"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_stock_site() {
        let config = InteractionConfig::default();
        assert_eq!(config.scroll.header_threshold, 50.0);
        assert_eq!(config.scroll.scroll_top_threshold, 300.0);
        assert_eq!(config.scroll.anchor_offset, 80.0);
        assert_eq!(config.scroll.section_lookahead, 100.0);
        assert_eq!(config.notifications.visible_ms, 5000);
        assert_eq!(config.notifications.exit_ms, 500);
        assert_eq!(config.counter.tick_ms, 16);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r#"
[scroll]
anchor_offset = 96.0
"#,
        )
        .unwrap();
        assert_eq!(config.scroll.anchor_offset, 96.0);
        // Untouched keys keep their defaults
        assert_eq!(config.scroll.header_threshold, 50.0);
        assert_eq!(config.selectors.header, "#header");
    }

    #[test]
    fn blank_source_yields_defaults() {
        assert_eq!(parse_config("  \n").unwrap(), InteractionConfig::default());
    }

    #[test]
    fn unknown_key_rejected() {
        let result = parse_config(
            r#"
[scroll]
header_treshold = 10.0
"#,
        );
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_section_rejected() {
        assert!(parse_config("[scrolling]\nheader_threshold = 1.0\n").is_err());
    }

    #[test]
    fn invalid_toml_is_error() {
        assert!(matches!(
            parse_config("this is not valid toml [[["),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r#"
[parallax]
lift_px = 10.0
scale = 1.02
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str("[parallax]\nscale = 1.1\n").unwrap();
        let merged = merge_toml(base, overlay);
        let parallax = merged.get("parallax").unwrap();
        assert_eq!(parallax.get("scale").unwrap().as_float(), Some(1.1));
        assert_eq!(parallax.get("lift_px").unwrap().as_float(), Some(10.0));
    }

    #[test]
    fn validate_negative_threshold() {
        let mut config = InteractionConfig::default();
        config.scroll.header_threshold = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scroll.header_threshold"));
    }

    #[test]
    fn validate_negative_lift() {
        let result = parse_config("[parallax]\nlift_px = -5.0\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("parallax.lift_px"));

        let mut config = InteractionConfig::default();
        config.parallax.max_tilt_deg = -1.0;
        assert!(config.validate().is_err());
        config.parallax.max_tilt_deg = 0.0;
        config.parallax.lift_px = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_non_finite_scale() {
        for value in ["nan", "inf", "-inf", "0.0"] {
            let result = parse_config(&format!("[parallax]\nscale = {value}\n"));
            assert!(
                matches!(result, Err(ConfigError::Validation(_))),
                "scale = {value} accepted"
            );
        }
    }

    #[test]
    fn validate_non_finite_tilt() {
        assert!(parse_config("[parallax]\nmax_tilt_deg = inf\n").is_err());
        assert!(parse_config("[parallax]\nlift_px = nan\n").is_err());
    }

    #[test]
    fn validate_zero_tick() {
        let mut config = InteractionConfig::default();
        config.counter.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_duration_shorter_than_tick() {
        let mut config = InteractionConfig::default();
        config.counter.duration_ms = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_observer_threshold_range() {
        let mut config = InteractionConfig::default();
        config.fade_in.threshold = 1.5;
        assert!(config.validate().is_err());
        config.fade_in.threshold = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_empty_selector() {
        let mut config = InteractionConfig::default();
        config.selectors.stat_numbers = "   ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("selectors.stat_numbers"));
    }

    #[test]
    fn validate_unknown_log_level() {
        let mut config = InteractionConfig::default();
        config.logging.level = "chatty".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
        config.logging.level = "DEBUG".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_rejects_invalid_values() {
        let result = parse_config("[counter]\ntick_ms = 0\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("interactions.toml");
        fs::write(&path, "[notifications]\nvisible_ms = 3000\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.notifications.visible_ms, 3000);
        assert_eq!(config.notifications.exit_ms, 500);
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: InteractionConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, InteractionConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in [
            "[scroll]",
            "[notifications]",
            "[counter]",
            "[fade_in]",
            "[parallax]",
            "[selectors]",
            "[branding]",
            "[logging]",
        ] {
            assert!(content.contains(section), "missing {section}");
        }
    }
}
