//! Pixel canvas geometry for 2D animations

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Rectangular drawing surface in pixel coordinates, origin top-left.
///
/// Particles are allowed to drift `margin` pixels past any edge before they
/// count as having left the canvas, so a sprite fully leaves the frame first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport2D {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Viewport2D {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Lower-left corner of the tolerated region
    pub fn min(&self) -> DVec2 {
        DVec2::splat(-self.margin)
    }

    /// Upper-right corner of the tolerated region
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.width + self.margin, self.height + self.margin)
    }

    /// Whether `point` is still inside the canvas plus margin (edges inclusive)
    pub fn contains(&self, point: DVec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

impl Default for Viewport2D {
    fn default() -> Self {
        Self::new(600.0, 400.0, 20.0)
    }
}
