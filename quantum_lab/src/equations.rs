//! Equation panels for each simulation

use common::Equation;

use crate::catalog::Simulation;

// ============================================
// Blackbody Equations
// ============================================

pub const BLACKBODY_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Planck's Law",
        formula: "I(λ,T) = C₁ / (λ⁵ (e^(C₂/λT) - 1))",
        description: "Spectral intensity of a blackbody",
    },
    Equation {
        name: "Wien's Displacement Law",
        formula: "λ_max = b / T",
        description: "Peak wavelength shifts blue as T rises",
    },
];

pub const BLACKBODY_VARIABLES: &[(&str, &str)] = &[
    ("λ", "Wavelength"),
    ("T", "Temperature (K)"),
    ("C₁", "3.741 × 10⁻¹⁶ W·m²"),
    ("C₂", "1.4388 × 10⁻² m·K"),
    ("b", "2.898 × 10⁻³ m·K"),
];

// ============================================
// Photoelectric Equations
// ============================================

pub const PHOTOELECTRIC_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Photon Energy",
        formula: "E = hf = hc/λ",
        description: "Energy of a single photon",
    },
    Equation {
        name: "Einstein's Equation",
        formula: "KE_max = hf - W",
        description: "Energy left after escaping the surface",
    },
    Equation {
        name: "Stopping Voltage",
        formula: "eV₀ = KE_max",
        description: "Reverse bias that halts the fastest electron",
    },
    Equation {
        name: "Threshold Wavelength",
        formula: "λ₀ = hc/W",
        description: "No emission for longer wavelengths",
    },
];

pub const PHOTOELECTRIC_VARIABLES: &[(&str, &str)] = &[
    ("h", "Planck constant (6.626 × 10⁻³⁴ J·s)"),
    ("f", "Light frequency"),
    ("c", "Speed of light"),
    ("W", "Work function of the metal"),
    ("V₀", "Stopping voltage"),
    ("e", "Elementary charge"),
];

// ============================================
// Compton Equations
// ============================================

pub const COMPTON_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Compton Shift",
        formula: "Δλ = λ_C (1 - cos θ)",
        description: "Depends only on the scattering angle",
    },
    Equation {
        name: "Photon Energy",
        formula: "E = hc/λ",
        description: "hc = 1240 eV·nm",
    },
    Equation {
        name: "Energy Conservation",
        formula: "E_e = E₀ - E'",
        description: "Kinetic energy of the recoil electron",
    },
    Equation {
        name: "Recoil Angle",
        formula: "tan φ = sin θ / (λ'/λ₀ - cos θ)",
        description: "From momentum conservation",
    },
];

pub const COMPTON_VARIABLES: &[(&str, &str)] = &[
    ("λ₀, λ'", "Incident and scattered wavelength"),
    ("λ_C", "Compton wavelength (0.00243 nm)"),
    ("θ", "Photon scattering angle"),
    ("φ", "Electron recoil angle"),
    ("E₀, E'", "Incident and scattered photon energy"),
];

/// Equations and variables legend for a simulation
pub fn for_simulation(sim: Simulation) -> (&'static [Equation], &'static [(&'static str, &'static str)]) {
    match sim {
        Simulation::Blackbody => (BLACKBODY_EQUATIONS, BLACKBODY_VARIABLES),
        Simulation::Photoelectric => (PHOTOELECTRIC_EQUATIONS, PHOTOELECTRIC_VARIABLES),
        Simulation::Compton => (COMPTON_EQUATIONS, COMPTON_VARIABLES),
    }
}

/// Rendered equations panel for a simulation
pub fn panel(sim: Simulation) -> String {
    let (equations, variables) = for_simulation(sim);
    common::equations_panel(sim.title(), equations, variables)
}
