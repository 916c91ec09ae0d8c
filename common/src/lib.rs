//! Common utilities for the quantum physics lab
//!
//! This crate provides the physical constants, canvas geometry, frame pacing,
//! equation panels and logging setup shared by every simulation.

pub mod clock;
pub mod equations;
pub mod logging;
pub mod viewport;

pub use clock::*;
pub use equations::*;
pub use viewport::*;

/// Physical constants used in simulations
pub mod constants {
    /// Planck constant in J·s
    pub const H: f64 = 6.626_070_15e-34;

    /// Speed of light in m/s
    pub const C: f64 = 299_792_458.0;

    /// Elementary charge in C (also J per eV)
    pub const E_CHARGE: f64 = 1.602_176_634e-19;

    /// First radiation constant as used by the spectrum plot (simplified)
    pub const PLANCK_C1: f64 = 3.741e-16;

    /// Second radiation constant in m·K (simplified)
    pub const PLANCK_C2: f64 = 1.4388e-2;

    /// Wien displacement constant in m·K
    pub const WIEN_B: f64 = 2.897_771_955e-3;

    /// h·c in eV·nm (rounded, as used for photon energies in keV work)
    pub const HC_EV_NM: f64 = 1240.0;

    /// Compton wavelength of the electron in nm: h/(m_e c)
    pub const COMPTON_WAVELENGTH_NM: f64 = 0.00243;

    /// Metres per nanometre
    pub const NM: f64 = 1e-9;
}
