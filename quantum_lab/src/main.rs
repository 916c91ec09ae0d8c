//! Interactive Quantum Physics Lab
//!
//! Without arguments, prints the landing page listing every simulation.
//! With a simulation id as the first argument, runs that simulation with the
//! remaining arguments:
//!
//! - `quantum_lab blackbody [T | candle | incandescent | sun | bluestar]`
//! - `quantum_lab photoelectric [λ nm] [intensity 0..1] [voltage V] [metal]`
//! - `quantum_lab compton [θ deg] [E₀ keV] [--realtime]`
//!
//! Flags: `--json`, `--equations`, `--config <json>`.

use quantum_lab::catalog::{self, Simulation};
use quantum_lab::cli::{self, Options};
use quantum_lab::LabResult;

fn run() -> LabResult<String> {
    let mut args = std::env::args().skip(1);
    let Some(id) = args.next() else {
        return Ok(catalog::landing_page());
    };

    let sim = Simulation::from_id(&id)?;
    let options = Options::parse(args)?;
    cli::run_simulation(sim, &options)
}

fn main() {
    common::logging::init();

    match run() {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
