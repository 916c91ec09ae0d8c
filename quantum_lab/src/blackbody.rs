//! Blackbody Radiation Spectrum
//!
//! Evaluates Planck's radiation law over a fixed wavelength window and locates
//! the emission peak with Wien's displacement law. The curve is normalized per
//! call, so it shows the shape of the spectrum rather than absolute radiance.

use std::fmt;

use common::constants::{NM, PLANCK_C1, PLANCK_C2, WIEN_B};
use log::{debug, warn};
use serde::Serialize;

use crate::input::BlackbodyInput;

/// Shortest sampled wavelength (nm)
pub const MIN_WAVELENGTH_NM: f64 = 200.0;
/// Longest sampled wavelength (nm)
pub const MAX_WAVELENGTH_NM: f64 = 3000.0;
/// Number of samples across the window, endpoints included
pub const SAMPLE_COUNT: usize = 141;

/// Floor for the `exp(C2/λT) - 1` factor
const DENOMINATOR_FLOOR: f64 = 1e-9;

/// Lower edge of the visible region (nm)
pub const VISIBLE_MIN_NM: f64 = 380.0;
/// Upper edge of the visible region (nm)
pub const VISIBLE_MAX_NM: f64 = 780.0;

/// One sample of a spectrum curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumPoint {
    pub wavelength_nm: f64,
    /// Intensity relative to the brightest sample of the same curve, in [0, 1]
    pub normalized_intensity: f64,
}

/// Band of the electromagnetic spectrum containing a wavelength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpectralRegion {
    Ultraviolet,
    Visible,
    Infrared,
}

impl SpectralRegion {
    /// Bucket a wavelength; both edges of the visible band count as visible
    pub fn classify(wavelength_nm: f64) -> Self {
        if wavelength_nm < VISIBLE_MIN_NM {
            SpectralRegion::Ultraviolet
        } else if wavelength_nm <= VISIBLE_MAX_NM {
            SpectralRegion::Visible
        } else {
            SpectralRegion::Infrared
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpectralRegion::Ultraviolet => "Ultraviolet",
            SpectralRegion::Visible => "Visible",
            SpectralRegion::Infrared => "Infrared",
        }
    }
}

impl fmt::Display for SpectralRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quick-pick temperatures offered next to the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperaturePreset {
    Candle,
    Incandescent,
    Sun,
    BlueStar,
}

impl TemperaturePreset {
    pub const ALL: [TemperaturePreset; 4] = [
        TemperaturePreset::Candle,
        TemperaturePreset::Incandescent,
        TemperaturePreset::Sun,
        TemperaturePreset::BlueStar,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TemperaturePreset::Candle => "candle",
            TemperaturePreset::Incandescent => "incandescent",
            TemperaturePreset::Sun => "sun",
            TemperaturePreset::BlueStar => "bluestar",
        }
    }

    pub fn temperature_k(&self) -> f64 {
        match self {
            TemperaturePreset::Candle => 1850.0,
            TemperaturePreset::Incandescent => 3000.0,
            TemperaturePreset::Sun => 5800.0,
            TemperaturePreset::BlueStar => 8000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperaturePreset::Candle => "Candle flame",
            TemperaturePreset::Incandescent => "Incandescent bulb",
            TemperaturePreset::Sun => "Sun's surface",
            TemperaturePreset::BlueStar => "Blue-white star",
        }
    }

    pub fn input(&self) -> BlackbodyInput {
        BlackbodyInput::from_constant(self.temperature_k())
    }
}

/// Everything the spectrum view needs for one temperature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlackbodyResult {
    pub temperature_k: f64,
    pub points: Vec<SpectrumPoint>,
    pub peak_wavelength_nm: f64,
    pub region: SpectralRegion,
}

/// Wavelengths (nm) at which the spectrum is sampled
pub fn sample_wavelengths_nm() -> impl Iterator<Item = f64> {
    let step = (MAX_WAVELENGTH_NM - MIN_WAVELENGTH_NM) / (SAMPLE_COUNT - 1) as f64;
    (0..SAMPLE_COUNT).map(move |i| MIN_WAVELENGTH_NM + i as f64 * step)
}

/// Spectral intensity from Planck's law with the simplified constants.
///
/// `I(λ) = C1 / (λ⁵ (exp(C2/λT) - 1))` with λ in metres. Returns 0 for any
/// non-finite result.
pub fn spectral_intensity(wavelength_m: f64, temperature_k: f64) -> f64 {
    let exponent = PLANCK_C2 / (wavelength_m * temperature_k);
    let denominator = (exponent.exp() - 1.0).max(DENOMINATOR_FLOOR);
    let intensity = PLANCK_C1 / (wavelength_m.powi(5) * denominator);

    if intensity.is_finite() {
        intensity
    } else {
        0.0
    }
}

/// Relative spectrum at `temperature_k`, one point per sampled wavelength.
///
/// Every intensity is divided by the batch maximum, so the brightest sample is
/// exactly 1. If no sample is positive the whole curve is zero.
pub fn spectrum(temperature_k: f64) -> Vec<SpectrumPoint> {
    let raw: Vec<(f64, f64)> = sample_wavelengths_nm()
        .map(|nm| (nm, spectral_intensity(nm * NM, temperature_k)))
        .collect();

    let max = raw.iter().map(|&(_, i)| i).fold(0.0, f64::max);
    if max <= 0.0 {
        warn!("spectrum at T = {temperature_k} K has no positive samples; returning a flat curve");
    }

    raw.into_iter()
        .map(|(wavelength_nm, intensity)| SpectrumPoint {
            wavelength_nm,
            normalized_intensity: if max > 0.0 { intensity / max } else { 0.0 },
        })
        .collect()
}

/// Wien's displacement law: `λ_peak = b / T`, in nanometres
pub fn peak_wavelength_nm(temperature_k: f64) -> f64 {
    WIEN_B / temperature_k / NM
}

/// Full evaluation for a validated temperature
pub fn evaluate(input: &BlackbodyInput) -> BlackbodyResult {
    let temperature_k = input.temperature_k();
    let peak_wavelength_nm = peak_wavelength_nm(temperature_k);
    let region = SpectralRegion::classify(peak_wavelength_nm);

    debug!(
        "blackbody T = {temperature_k:.0} K: peak {peak_wavelength_nm:.1} nm ({region})"
    );

    BlackbodyResult {
        temperature_k,
        points: spectrum(temperature_k),
        peak_wavelength_nm,
        region,
    }
}
