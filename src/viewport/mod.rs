//! Viewport-intersection watchers.
//!
//! Three independent watchers, each with its own observer and policy:
//!
//! | Watcher | Threshold | Fires | After firing |
//! |---------|-----------|-------|--------------|
//! | [`fade`] | 0.1, `0px 0px -50px 0px` margin | every intersection | stays observed; the reveal is terminal |
//! | [`counter`] | 0.5 | first intersection of the stats block | container unobserved |
//! | [`lazy`] | default | first intersection of each image | image unobserved |
//!
//! The modules hold the decisions (what to write, whether to keep
//! observing); the binding layer owns the actual `IntersectionObserver`s.

pub mod counter;
pub mod fade;
pub mod lazy;

use crate::config::{CounterConfig, FadeInConfig};

/// Options for one `IntersectionObserver`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<String>,
}

impl ObserverOptions {
    pub fn fade_in(config: &FadeInConfig) -> Self {
        Self {
            threshold: config.threshold,
            root_margin: Some(config.root_margin.clone()),
        }
    }

    pub fn counter(config: &CounterConfig) -> Self {
        Self {
            threshold: config.threshold,
            root_margin: None,
        }
    }

    /// Browser defaults: any pixel visible, no margin.
    pub fn lazy_images() -> Self {
        Self {
            threshold: 0.0,
            root_margin: None,
        }
    }
}

/// What the observer should do with a target after its callback ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Keep,
    Stop,
}
