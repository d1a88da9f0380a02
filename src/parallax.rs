//! Gallery tile tilt.
//!
//! While the pointer is over a tile, the tile lifts, scales slightly and
//! rotates toward the pointer. Rotation is proportional to the pointer's
//! offset from the tile centre, normalised to `-1.0..=1.0` on each axis, so
//! it never exceeds `max_tilt_deg`. On exit the tile keeps the lift and scale
//! and drops the rotation.

use crate::config::ParallaxConfig;
use crate::dom::Element;
use std::cell::Cell;

/// Tile bounds in viewport coordinates (`getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation in degrees around each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

#[derive(Debug, Clone)]
pub struct ParallaxStyle {
    lift_px: f64,
    scale: f64,
    max_tilt_deg: f64,
}

impl ParallaxStyle {
    pub fn new(config: &ParallaxConfig) -> Self {
        Self {
            lift_px: config.lift_px,
            scale: config.scale,
            max_tilt_deg: config.max_tilt_deg,
        }
    }

    /// Tilt for a pointer at viewport position `(client_x, client_y)`.
    ///
    /// Vertical offset drives `rotateX`, horizontal offset drives `rotateY`.
    /// A zero-sized tile yields no rotation.
    pub fn tilt(&self, rect: TileRect, client_x: f64, client_y: f64) -> Tilt {
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;
        if center_x <= 0.0 || center_y <= 0.0 {
            return Tilt::default();
        }
        let delta_x = (client_x - rect.left - center_x) / center_x;
        let delta_y = (client_y - rect.top - center_y) / center_y;
        Tilt {
            rotate_x: delta_y * self.max_tilt_deg,
            rotate_y: delta_x * self.max_tilt_deg,
        }
    }

    pub fn transform(&self, tilt: Tilt) -> String {
        format!(
            "translateY(-{}px) scale({}) rotateX({}deg) rotateY({}deg)",
            self.lift_px, self.scale, tilt.rotate_x, tilt.rotate_y
        )
    }

    /// Lifted and scaled, no rotation.
    pub fn resting(&self) -> String {
        format!("translateY(-{}px) scale({})", self.lift_px, self.scale)
    }
}

/// Per-tile tracking state. Each tile gets its own; tiles share nothing.
pub struct ParallaxTile<E> {
    element: E,
    style: ParallaxStyle,
    tracking: Cell<bool>,
}

impl<E: Element> ParallaxTile<E> {
    /// `index` is exposed to CSS as `--i` for staggered animations.
    pub fn new(element: E, index: usize, style: ParallaxStyle) -> Self {
        element.set_style("--i", &index.to_string());
        Self {
            element,
            style,
            tracking: Cell::new(false),
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn enter(&self) {
        self.tracking.set(true);
    }

    /// Pointer moved over the tile. Ignored unless tracking. Returns the
    /// tilt applied.
    pub fn pointer_move(&self, rect: TileRect, client_x: f64, client_y: f64) -> Option<Tilt> {
        if !self.tracking.get() {
            return None;
        }
        let tilt = self.style.tilt(rect, client_x, client_y);
        self.element.set_style("transform", &self.style.transform(tilt));
        Some(tilt)
    }

    pub fn leave(&self) {
        self.tracking.set(false);
        self.element.set_style("transform", &self.style.resting());
    }
}
