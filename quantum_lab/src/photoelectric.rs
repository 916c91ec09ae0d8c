//! Photoelectric Effect
//!
//! Light of a given wavelength strikes a metal plate. Each photon carries
//! `E = hf`; an electron escapes only if that exceeds the metal's work function,
//! leaving with at most `KE_max = hf - W`. A bias voltage across the tube
//! either collects the electrons or pushes them back.

use std::fmt;
use std::str::FromStr;

use common::constants::{C, E_CHARGE, H, NM};
use log::debug;
use serde::Serialize;

use crate::config::PhotoelectricConfig;
use crate::error::LabError;
use crate::input::PhotoelectricInput;

/// Cathode materials available in the metal selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Sodium,
    Calcium,
    Zinc,
    Copper,
    Platinum,
}

impl Metal {
    pub const ALL: [Metal; 5] = [
        Metal::Sodium,
        Metal::Calcium,
        Metal::Zinc,
        Metal::Copper,
        Metal::Platinum,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Metal::Sodium => "sodium",
            Metal::Calcium => "calcium",
            Metal::Zinc => "zinc",
            Metal::Copper => "copper",
            Metal::Platinum => "platinum",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Metal::Sodium => "Sodium (Na)",
            Metal::Calcium => "Calcium (Ca)",
            Metal::Zinc => "Zinc (Zn)",
            Metal::Copper => "Copper (Cu)",
            Metal::Platinum => "Platinum (Pt)",
        }
    }

    /// Work function in electron-volts
    pub fn work_function_ev(&self) -> f64 {
        match self {
            Metal::Sodium => 2.3,
            Metal::Calcium => 2.9,
            Metal::Zinc => 4.3,
            Metal::Copper => 4.7,
            Metal::Platinum => 6.4,
        }
    }

    /// Longest wavelength that still ejects electrons from this metal
    pub fn threshold_wavelength_nm(&self) -> f64 {
        threshold_wavelength_nm(self.work_function_ev())
    }

    pub fn from_id(id: &str) -> Result<Self, LabError> {
        Metal::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| LabError::UnknownMetal(id.to_string()))
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Metal {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metal::from_id(s)
    }
}

/// Derived quantities for one set of photoelectric inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhotoelectricResult {
    pub frequency_hz: f64,
    pub photon_energy_ev: f64,
    /// Maximum kinetic energy of an emitted electron, never negative
    pub kinetic_energy_max_ev: f64,
    /// Reverse bias that just stops the fastest electron (numerically KE_max)
    pub stopping_voltage_v: f64,
    pub emission: bool,
    /// Photocurrent relative to full intensity with no retarding field, in [0, 1]
    pub relative_current: f64,
    /// Whether the ammeter shows a reading
    pub current_active: bool,
    pub threshold_wavelength_nm: f64,
}

/// `f = c / λ`
pub fn photon_frequency_hz(wavelength_nm: f64) -> f64 {
    C / (wavelength_nm * NM)
}

/// `E = hf`, converted from joules to electron-volts
pub fn photon_energy_ev(wavelength_nm: f64) -> f64 {
    H * photon_frequency_hz(wavelength_nm) / E_CHARGE
}

/// `λ_threshold = hc / W`, in nanometres
pub fn threshold_wavelength_nm(work_function_ev: f64) -> f64 {
    H * C / (work_function_ev * E_CHARGE) / NM
}

/// Fraction of the saturated photocurrent reaching the anode.
///
/// A negative (retarding) bias suppresses the current linearly until it
/// reaches the stopping voltage; forward bias does not raise it further.
pub fn relative_current(intensity: f64, voltage_v: f64, stopping_voltage_v: f64, emission: bool) -> f64 {
    if !emission || stopping_voltage_v <= 0.0 {
        return 0.0;
    }

    let retarding = (-voltage_v).max(0.0);
    let bias_factor = (1.0 - retarding / stopping_voltage_v).max(0.0);
    (bias_factor * intensity).clamp(0.0, 1.0)
}

/// Evaluate the photoelectric tube for raw slider values
pub fn evaluate_raw(
    wavelength_nm: f64,
    intensity: f64,
    voltage_v: f64,
    metal: Metal,
    config: &PhotoelectricConfig,
) -> PhotoelectricResult {
    let work_function = metal.work_function_ev();
    let frequency_hz = photon_frequency_hz(wavelength_nm);
    let photon_energy_ev = photon_energy_ev(wavelength_nm);

    let kinetic_energy_max_ev = (photon_energy_ev - work_function).max(0.0);
    let stopping_voltage_v = kinetic_energy_max_ev;
    let emission = photon_energy_ev >= work_function && intensity > 0.0;

    let relative_current = relative_current(intensity, voltage_v, stopping_voltage_v, emission);
    let current_active = relative_current > config.active_current_threshold;

    debug!(
        "photoelectric {metal} at {wavelength_nm:.0} nm: E = {photon_energy_ev:.3} eV, \
         KE_max = {kinetic_energy_max_ev:.3} eV, I_rel = {relative_current:.3}"
    );

    PhotoelectricResult {
        frequency_hz,
        photon_energy_ev,
        kinetic_energy_max_ev,
        stopping_voltage_v,
        emission,
        relative_current,
        current_active,
        threshold_wavelength_nm: metal.threshold_wavelength_nm(),
    }
}

/// Evaluate the photoelectric tube for a validated input set
pub fn evaluate(input: &PhotoelectricInput, config: &PhotoelectricConfig) -> PhotoelectricResult {
    evaluate_raw(
        input.wavelength_nm(),
        input.intensity(),
        input.voltage_v(),
        input.metal(),
        config,
    )
}
