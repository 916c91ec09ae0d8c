//! Tunable display and animation constants
//!
//! None of these carry physical meaning. They are kept here so a host can
//! override them, e.g. from a JSON document where every field is optional.

use common::Viewport2D;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::LabResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoelectricConfig {
    /// Relative current above which the ammeter counts as reading
    pub active_current_threshold: f64,
}

impl Default for PhotoelectricConfig {
    fn default() -> Self {
        Self {
            active_current_threshold: 0.01,
        }
    }
}

/// Compton animation geometry, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Distance travelled per frame by either particle
    pub speed: f64,
    /// Photon counts as hitting the electron within this many pixels
    pub collision_tolerance: f64,
    pub photon_start: DVec2,
    pub electron_start: DVec2,
    pub viewport: Viewport2D,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            collision_tolerance: 10.0,
            photon_start: DVec2::new(100.0, 200.0),
            electron_start: DVec2::new(300.0, 200.0),
            viewport: Viewport2D::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub photoelectric: PhotoelectricConfig,
    pub animation: AnimationConfig,
}

impl LabConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> LabResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
