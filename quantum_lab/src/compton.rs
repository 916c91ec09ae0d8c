//! Compton Scattering
//!
//! A photon of energy E₀ scatters off a free electron at rest through angle θ.
//! The photon's wavelength grows by the Compton shift `Δλ = λ_C (1 - cos θ)`,
//! the energy it loses goes to the electron, and momentum conservation fixes
//! the electron's recoil angle φ.

use common::constants::{COMPTON_WAVELENGTH_NM, HC_EV_NM};
use log::debug;
use serde::Serialize;

use crate::input::ComptonInput;

/// Outcome of a single scattering event
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComptonResult {
    pub incident_wavelength_nm: f64,
    pub wavelength_shift_nm: f64,
    pub scattered_wavelength_nm: f64,
    pub scattered_energy_kev: f64,
    /// Kinetic energy handed to the electron, `E₀ - E₁`
    pub electron_energy_kev: f64,
    /// Recoil angle of the electron measured from the incident direction
    pub electron_angle_rad: f64,
    pub electron_angle_deg: f64,
}

/// `λ = hc / E` with E in keV
pub fn wavelength_nm(energy_kev: f64) -> f64 {
    HC_EV_NM / (energy_kev * 1000.0)
}

/// `E = hc / λ`, in keV
pub fn energy_kev(wavelength_nm: f64) -> f64 {
    HC_EV_NM / wavelength_nm / 1000.0
}

/// Compton shift for a scattering angle in radians
pub fn wavelength_shift_nm(angle_rad: f64) -> f64 {
    COMPTON_WAVELENGTH_NM * (1.0 - angle_rad.cos())
}

/// Electron recoil angle from momentum conservation.
///
/// `φ = atan2(sin θ, λ₁/λ₀ - cos θ)`. The two-argument form stays defined at
/// θ = 0 where both arguments vanish (φ = 0, no recoil).
pub fn electron_angle_rad(angle_rad: f64, wavelength_ratio: f64) -> f64 {
    angle_rad.sin().atan2(wavelength_ratio - angle_rad.cos())
}

/// Scatter a photon of `incident_energy_kev` through `angle_deg`
pub fn evaluate_raw(angle_deg: f64, incident_energy_kev: f64) -> ComptonResult {
    let theta = angle_deg.to_radians();

    let incident_wavelength_nm = wavelength_nm(incident_energy_kev);
    let wavelength_shift_nm = wavelength_shift_nm(theta);
    let scattered_wavelength_nm = incident_wavelength_nm + wavelength_shift_nm;
    let scattered_energy_kev = energy_kev(scattered_wavelength_nm);
    let electron_energy_kev = incident_energy_kev - scattered_energy_kev;

    let phi = electron_angle_rad(theta, scattered_wavelength_nm / incident_wavelength_nm);

    debug!(
        "compton θ = {angle_deg:.1}°, E₀ = {incident_energy_kev:.1} keV: \
         λ' = {scattered_wavelength_nm:.5} nm, Ee = {electron_energy_kev:.2} keV, φ = {:.1}°",
        phi.to_degrees()
    );

    ComptonResult {
        incident_wavelength_nm,
        wavelength_shift_nm,
        scattered_wavelength_nm,
        scattered_energy_kev,
        electron_energy_kev,
        electron_angle_rad: phi,
        electron_angle_deg: phi.to_degrees(),
    }
}

pub fn evaluate(input: &ComptonInput) -> ComptonResult {
    evaluate_raw(input.angle_deg(), input.incident_energy_kev())
}
