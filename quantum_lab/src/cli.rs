//! Command-line front end shared by the binaries
//!
//! Every binary takes positional slider values (falling back to the initial
//! slider positions) plus the flags `--json`, `--realtime` and
//! `--config <json>`.

use std::fmt::Write;

use common::FrameClock;
use log::info;
use serde::Serialize;

use crate::animation::{Animation, AnimationSummary, StepOutcome};
use crate::blackbody::{self, BlackbodyResult, TemperaturePreset};
use crate::catalog::Simulation;
use crate::compton::{self, ComptonResult};
use crate::config::LabConfig;
use crate::equations;
use crate::error::{LabError, LabResult};
use crate::input::{BlackbodyInput, ComptonInput, PhotoelectricInput};
use crate::photoelectric::{self, Metal, PhotoelectricResult};

/// Frames after which a headless Compton run gives up
pub const MAX_ANIMATION_FRAMES: u64 = 10_000;

/// JSON shape of a Compton run: the scattering plus where the animation ended
#[derive(Debug, Serialize)]
struct ComptonJson<'a> {
    result: &'a ComptonResult,
    animation: AnimationSummary,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub json: bool,
    pub realtime: bool,
    pub show_equations: bool,
    pub config: LabConfig,
    pub positional: Vec<String>,
}

impl Options {
    /// Parse arguments, excluding the program name
    pub fn parse<I>(args: I) -> LabResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => options.json = true,
                "--realtime" => options.realtime = true,
                "--equations" => options.show_equations = true,
                "--config" => {
                    let json = args.next().ok_or_else(|| LabError::InvalidArgument {
                        name: "--config".to_string(),
                        value: String::new(),
                    })?;
                    options.config = LabConfig::from_json(&json)?;
                }
                _ => options.positional.push(arg),
            }
        }

        Ok(options)
    }

    fn arg(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    fn number(&self, index: usize, name: &str) -> LabResult<Option<f64>> {
        self.arg(index).map(|v| parse_number(name, v)).transpose()
    }
}

pub fn parse_number(name: &str, value: &str) -> LabResult<f64> {
    value.trim().parse::<f64>().map_err(|_| LabError::InvalidArgument {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Temperature from a number or a preset name such as `sun`
fn blackbody_input(options: &Options) -> LabResult<BlackbodyInput> {
    let Some(arg) = options.arg(0) else {
        return Ok(BlackbodyInput::default());
    };

    let preset = TemperaturePreset::ALL
        .into_iter()
        .find(|p| p.id().eq_ignore_ascii_case(arg));
    match preset {
        Some(preset) => Ok(preset.input()),
        None => BlackbodyInput::new(parse_number("temperature", arg)?),
    }
}

fn photoelectric_input(options: &Options) -> LabResult<PhotoelectricInput> {
    let defaults = PhotoelectricInput::default();
    let metal = match options.arg(3) {
        Some(id) => Metal::from_id(id)?,
        None => defaults.metal(),
    };

    PhotoelectricInput::new(
        options.number(0, "wavelength")?.unwrap_or(defaults.wavelength_nm()),
        options.number(1, "intensity")?.unwrap_or(defaults.intensity()),
        options.number(2, "voltage")?.unwrap_or(defaults.voltage_v()),
        metal,
    )
}

fn compton_input(options: &Options) -> LabResult<ComptonInput> {
    let defaults = ComptonInput::default();
    ComptonInput::new(
        options.number(0, "angle")?.unwrap_or(defaults.angle_deg()),
        options.number(1, "energy")?.unwrap_or(defaults.incident_energy_kev()),
    )
}

/// Evaluate one simulation and render its report
pub fn run_simulation(sim: Simulation, options: &Options) -> LabResult<String> {
    info!("running {}", sim.title());

    let mut report = match sim {
        Simulation::Blackbody => {
            let result = blackbody::evaluate(&blackbody_input(options)?);
            if options.json {
                serde_json::to_string_pretty(&result)?
            } else {
                blackbody_report(&result)
            }
        }
        Simulation::Photoelectric => {
            let input = photoelectric_input(options)?;
            let result = photoelectric::evaluate(&input, &options.config.photoelectric);
            if options.json {
                serde_json::to_string_pretty(&result)?
            } else {
                photoelectric_report(&input, &result)
            }
        }
        Simulation::Compton => {
            let input = compton_input(options)?;
            let result = compton::evaluate(&input);
            let animation = animate(&input, options);
            if options.json {
                serde_json::to_string_pretty(&ComptonJson {
                    result: &result,
                    animation,
                })?
            } else {
                let mut text = compton_report(&input, &result);
                let _ = writeln!(text, "Animation stopped after {} frames", animation.frames);
                text
            }
        }
    };

    if options.show_equations && !options.json {
        report.push('\n');
        report.push_str(&equations::panel(sim));
    }

    Ok(report)
}

/// Play the scattering animation to completion, paced at 60 fps if requested
fn animate(input: &ComptonInput, options: &Options) -> AnimationSummary {
    let mut animation = Animation::new(options.config.animation);
    animation.start();

    if !options.realtime {
        animation.run(input, MAX_ANIMATION_FRAMES);
        return animation.summary();
    }

    let mut clock = FrameClock::default();
    while animation.is_running() && clock.frames < MAX_ANIMATION_FRAMES {
        clock.tick();
        if let StepOutcome::Collided(result) = animation.step(input) {
            info!(
                "photon scattered to {:.1}°, electron recoils at {:.1}°",
                input.angle_deg(),
                result.electron_angle_deg
            );
        }
    }
    animation.summary()
}

pub fn blackbody_report(result: &BlackbodyResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Temperature:     {:.0} K", result.temperature_k);
    let _ = writeln!(out, "Peak wavelength: {:.1} nm", result.peak_wavelength_nm);
    let _ = writeln!(out, "Peak region:     {}", result.region);
    let _ = writeln!(out);

    // Every tenth sample as a horizontal bar chart
    for point in result.points.iter().step_by(10) {
        let bar = (point.normalized_intensity * 40.0).round() as usize;
        let _ = writeln!(
            out,
            "{:>6.0} nm |{:<40}| {:.3}",
            point.wavelength_nm,
            "#".repeat(bar),
            point.normalized_intensity
        );
    }
    out
}

pub fn photoelectric_report(input: &PhotoelectricInput, result: &PhotoelectricResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Metal:                {} (W = {:.2} eV)", input.metal(), input.metal().work_function_ev());
    let _ = writeln!(out, "Wavelength:           {:.0} nm", input.wavelength_nm());
    let _ = writeln!(out, "Intensity:            {:.0}%", input.intensity() * 100.0);
    let _ = writeln!(out, "Voltage:              {:+.2} V", input.voltage_v());
    let _ = writeln!(out);
    let _ = writeln!(out, "Frequency:            {:.3e} Hz", result.frequency_hz);
    let _ = writeln!(out, "Photon energy:        {:.3} eV", result.photon_energy_ev);
    let _ = writeln!(out, "Max kinetic energy:   {:.3} eV", result.kinetic_energy_max_ev);
    let _ = writeln!(out, "Stopping voltage:     {:.3} V", result.stopping_voltage_v);
    let _ = writeln!(out, "Threshold wavelength: {:.1} nm", result.threshold_wavelength_nm);
    let _ = writeln!(out, "Emission:             {}", if result.emission { "yes" } else { "no" });
    let _ = writeln!(
        out,
        "Relative current:     {:.1}%{}",
        result.relative_current * 100.0,
        if result.current_active { "" } else { " (no current)" }
    );
    out
}

pub fn compton_report(input: &ComptonInput, result: &ComptonResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "θ = {:.0}°, E₀ = {:.0} keV", input.angle_deg(), input.incident_energy_kev());
    let _ = writeln!(out, "λ₀  = {:.4} nm", result.incident_wavelength_nm);
    let _ = writeln!(out, "Δλ  = {:.5} nm", result.wavelength_shift_nm);
    let _ = writeln!(out, "λ'  = {:.4} nm", result.scattered_wavelength_nm);
    let _ = writeln!(out, "Eγ' = {:.2} keV", result.scattered_energy_kev);
    let _ = writeln!(out, "Ee  = {:.2} keV", result.electron_energy_kev);
    let _ = writeln!(out, "φ   = {:.1}°", result.electron_angle_deg);
    out
}

/// Shared `main` body: parse, run, print, and exit non-zero on error
pub fn main_for(sim: Simulation) {
    common::logging::init();

    let result = Options::parse(std::env::args().skip(1)).and_then(|options| run_simulation(sim, &options));
    match result {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags() {
        let options = Options::parse(args(&["450", "--json", "0.5", "--config", r#"{"photoelectric": {"active_current_threshold": 0.2}}"#])).unwrap();
        assert!(options.json);
        assert!(!options.realtime);
        assert_eq!(options.positional, vec!["450", "0.5"]);
        assert_eq!(options.config.photoelectric.active_current_threshold, 0.2);
    }

    #[test]
    fn test_missing_config_value() {
        assert!(matches!(
            Options::parse(args(&["--config"])),
            Err(LabError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_blackbody_preset_and_number() {
        let sun = Options::parse(args(&["sun"])).unwrap();
        assert_eq!(blackbody_input(&sun).unwrap().temperature_k(), 5800.0);

        let num = Options::parse(args(&["4200"])).unwrap();
        assert_eq!(blackbody_input(&num).unwrap().temperature_k(), 4200.0);

        let bad = Options::parse(args(&["hot"])).unwrap();
        assert!(matches!(blackbody_input(&bad), Err(LabError::InvalidArgument { .. })));

        let cold = Options::parse(args(&["0"])).unwrap();
        assert!(matches!(blackbody_input(&cold), Err(LabError::OutOfRange { .. })));
    }

    #[test]
    fn test_photoelectric_defaults_fill_gaps() {
        let options = Options::parse(args(&["300"])).unwrap();
        let input = photoelectric_input(&options).unwrap();
        assert_eq!(input.wavelength_nm(), 300.0);
        assert_eq!(input.metal(), Metal::Sodium);

        let options = Options::parse(args(&["300", "1", "0", "gold"])).unwrap();
        assert!(matches!(photoelectric_input(&options), Err(LabError::UnknownMetal(_))));
    }

    #[test]
    fn test_reports() {
        let options = Options::parse(args(&["90", "100"])).unwrap();
        let text = run_simulation(Simulation::Compton, &options).unwrap();
        assert!(text.contains("Δλ  = 0.00243 nm"));
        assert!(text.contains("Animation stopped after"));

        let options = Options::parse(args(&["450", "1", "0", "platinum", "--equations"])).unwrap();
        let text = run_simulation(Simulation::Photoelectric, &options).unwrap();
        assert!(text.contains("Emission:             no"));
        assert!(text.contains("Einstein's Equation"));
    }

    #[test]
    fn test_compton_json_includes_animation() {
        let options = Options::parse(args(&["60", "100", "--json"])).unwrap();
        let text = run_simulation(Simulation::Compton, &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["result"]["electron_angle_deg"].as_f64().unwrap() > 0.0);
        assert_eq!(value["animation"]["phase"], "Stopped");
        assert!(value["animation"]["frames"].as_u64().unwrap() > 64);
        assert_eq!(value["animation"]["electron"]["position"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_json_report() {
        let options = Options::parse(args(&["3000", "--json"])).unwrap();
        let text = run_simulation(Simulation::Blackbody, &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["region"], "Infrared");
        assert_eq!(value["points"].as_array().unwrap().len(), blackbody::SAMPLE_COUNT);
    }
}
