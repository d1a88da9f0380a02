//! Deferred image loading.

use super::Observation;
use crate::dom::{DEFERRED_SRC_ATTR, Element};
use tracing::trace;

/// Observer callback for one image.
///
/// On intersection, moves `data-src` into `src` and stops observing. An image
/// that lost its `data-src` in the meantime is simply unobserved.
pub fn on_intersection<E: Element>(image: &E, is_intersecting: bool) -> Observation {
    if !is_intersecting {
        return Observation::Keep;
    }
    if let Some(src) = image.attribute(DEFERRED_SRC_ATTR) {
        image.set_attribute("src", &src);
        image.remove_attribute(DEFERRED_SRC_ATTR);
        trace!(src, "deferred image loaded");
    }
    Observation::Stop
}
