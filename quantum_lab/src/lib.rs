//! Interactive Quantum Physics Lab
//!
//! Closed-form evaluators behind three classic experiments of early quantum
//! physics:
//!
//! - **Blackbody Spectrum**: Planck's law curve and Wien peak for a temperature
//! - **Photoelectric Effect**: photon energy, electron kinetic energy and
//!   photocurrent for light striking a metal
//! - **Compton Scattering**: wavelength shift and recoil of a photon scattering
//!   off a free electron, plus the two-particle animation stepper
//!
//! Every evaluator is a pure function of its inputs and is recomputed from
//! scratch whenever an input changes.

pub mod animation;
pub mod blackbody;
pub mod catalog;
pub mod cli;
pub mod compton;
pub mod config;
pub mod equations;
pub mod error;
pub mod input;
pub mod photoelectric;

pub use error::{LabError, LabResult};
