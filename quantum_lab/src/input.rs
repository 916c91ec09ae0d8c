//! Validated simulation inputs
//!
//! Each struct mirrors one simulation's slider panel. Constructors reject
//! values outside the slider range so the evaluators only ever see the
//! documented domain; `Default` gives the initial slider positions.

use serde::Serialize;

use crate::error::{LabError, LabResult};
use crate::photoelectric::Metal;

/// Closed interval a slider can reach
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Return `value` unchanged if it is finite and in range
    pub fn check(&self, quantity: &'static str, value: f64) -> LabResult<f64> {
        if !value.is_finite() {
            return Err(LabError::NonFinite { quantity });
        }
        if !self.contains(value) {
            return Err(LabError::OutOfRange {
                quantity,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

pub const TEMPERATURE_RANGE: Range = Range::new(1000.0, 8000.0);
pub const WAVELENGTH_RANGE: Range = Range::new(100.0, 850.0);
pub const INTENSITY_RANGE: Range = Range::new(0.0, 1.0);
pub const VOLTAGE_RANGE: Range = Range::new(-5.0, 5.0);
pub const ANGLE_RANGE: Range = Range::new(0.0, 180.0);
pub const ENERGY_RANGE: Range = Range::new(10.0, 500.0);

/// Blackbody temperature in kelvin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlackbodyInput {
    temperature_k: f64,
}

impl BlackbodyInput {
    pub fn new(temperature_k: f64) -> LabResult<Self> {
        Ok(Self {
            temperature_k: TEMPERATURE_RANGE.check("temperature (K)", temperature_k)?,
        })
    }

    /// For temperatures known at compile time to lie in range
    pub(crate) const fn from_constant(temperature_k: f64) -> Self {
        Self { temperature_k }
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }
}

impl Default for BlackbodyInput {
    fn default() -> Self {
        Self { temperature_k: 5800.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhotoelectricInput {
    wavelength_nm: f64,
    intensity: f64,
    voltage_v: f64,
    metal: Metal,
}

impl PhotoelectricInput {
    pub fn new(wavelength_nm: f64, intensity: f64, voltage_v: f64, metal: Metal) -> LabResult<Self> {
        Ok(Self {
            wavelength_nm: WAVELENGTH_RANGE.check("wavelength (nm)", wavelength_nm)?,
            intensity: INTENSITY_RANGE.check("intensity", intensity)?,
            voltage_v: VOLTAGE_RANGE.check("voltage (V)", voltage_v)?,
            metal,
        })
    }

    pub fn wavelength_nm(&self) -> f64 {
        self.wavelength_nm
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn voltage_v(&self) -> f64 {
        self.voltage_v
    }

    pub fn metal(&self) -> Metal {
        self.metal
    }
}

impl Default for PhotoelectricInput {
    fn default() -> Self {
        Self {
            wavelength_nm: 450.0,
            intensity: 0.5,
            voltage_v: 0.0,
            metal: Metal::Sodium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComptonInput {
    angle_deg: f64,
    incident_energy_kev: f64,
}

impl ComptonInput {
    pub fn new(angle_deg: f64, incident_energy_kev: f64) -> LabResult<Self> {
        Ok(Self {
            angle_deg: ANGLE_RANGE.check("scattering angle (deg)", angle_deg)?,
            incident_energy_kev: ENERGY_RANGE.check("incident energy (keV)", incident_energy_kev)?,
        })
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn incident_energy_kev(&self) -> f64 {
        self.incident_energy_kev
    }
}

impl Default for ComptonInput {
    fn default() -> Self {
        Self {
            angle_deg: 45.0,
            incident_energy_kev: 100.0,
        }
    }
}
