//! The landing page: which simulations exist and how they are introduced

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LabError;

/// Difficulty badge shown on a simulation card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Basic => "Basic",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Simulation {
    Blackbody,
    Photoelectric,
    Compton,
}

impl Simulation {
    /// Landing-page order
    pub const ALL: [Simulation; 3] = [
        Simulation::Blackbody,
        Simulation::Photoelectric,
        Simulation::Compton,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Simulation::Blackbody => "blackbody",
            Simulation::Photoelectric => "photoelectric",
            Simulation::Compton => "compton",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Simulation::Blackbody => "Blackbody Spectrum",
            Simulation::Photoelectric => "Photoelectric Effect",
            Simulation::Compton => "Compton Scattering",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Simulation::Blackbody => {
                "Study blackbody radiation and how temperature shifts the distribution of emitted wavelengths."
            }
            Simulation::Photoelectric => {
                "Explore how light ejects electrons from a metal and why it depends on frequency, not brightness."
            }
            Simulation::Compton => {
                "See a photon collide with an electron and come away with a longer wavelength."
            }
        }
    }

    pub fn level(&self) -> Level {
        match self {
            Simulation::Blackbody => Level::Basic,
            Simulation::Photoelectric => Level::Intermediate,
            Simulation::Compton => Level::Advanced,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Simulation::Blackbody => "Thermal",
            Simulation::Photoelectric => "Quantum",
            Simulation::Compton => "Relativistic",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, LabError> {
        Simulation::ALL
            .into_iter()
            .find(|s| s.id().eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| LabError::UnknownSimulation(id.to_string()))
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Simulation {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Simulation::from_id(s)
    }
}

/// Text rendering of the simulation cards
pub fn landing_page() -> String {
    let mut out = String::from("Interactive Quantum Physics Simulations\n\n");
    for (i, sim) in Simulation::ALL.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} [{} · {}]\n   {}\n   run: quantum_lab {}\n\n",
            i + 1,
            sim.title(),
            sim.level(),
            sim.tag(),
            sim.description(),
            sim.id()
        ));
    }
    out
}
