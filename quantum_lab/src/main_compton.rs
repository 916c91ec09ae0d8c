//! Compton simulation
//!
//! Usage: compton [values...] [--json] [--equations] [--config <json>]

use quantum_lab::catalog::Simulation;

fn main() {
    quantum_lab::cli::main_for(Simulation::Compton);
}
