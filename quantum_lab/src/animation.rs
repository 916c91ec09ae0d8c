//! Two-particle animation of a Compton scattering event
//!
//! The photon travels right toward a resting electron at constant speed. Once
//! it comes within the collision tolerance the scattering is evaluated with the
//! inputs current at that frame, both particles take off along straight lines
//! at θ and φ, and the animation stops as soon as either leaves the canvas.
//!
//! ```text
//! Idle --start--> InFlight --hit--> Collided --> Scattered --exit--> Stopped
//!   ^                                                                   |
//!   +------------------------------- reset -----------------------------+
//! ```
//!
//! Stepping is cooperative: the host calls [`Animation::step`] once per frame.

use glam::DVec2;
use log::{debug, info};
use serde::Serialize;

use crate::compton::{self, ComptonResult};
use crate::config::AnimationConfig;
use crate::input::ComptonInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Particles parked at their start positions
    Idle,
    /// Photon approaching the stationary electron
    InFlight,
    /// Transient: contact detected, outgoing velocities not yet assigned
    Collided,
    /// Both particles moving along their post-collision lines
    Scattered,
    /// A particle left the canvas; waits for reset or start
    Stopped,
}

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Not running; nothing moved
    Halted,
    Moved,
    /// The photon reached the electron on this frame
    Collided(ComptonResult),
    /// A particle left the canvas on this frame
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl Particle {
    fn at_rest(position: DVec2) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
        }
    }

    fn advance(&mut self) {
        self.position += self.velocity;
    }
}

/// Where an animation ended up, as reported alongside the scattering result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationSummary {
    pub phase: Phase,
    pub frames: u64,
    pub photon: Particle,
    pub electron: Particle,
}

#[derive(Debug, Clone)]
pub struct Animation {
    pub photon: Particle,
    pub electron: Particle,
    phase: Phase,
    /// Scattering evaluated at the moment of contact
    result: Option<ComptonResult>,
    frame: u64,
    config: AnimationConfig,
}

impl Animation {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            photon: Particle::at_rest(config.photon_start),
            electron: Particle::at_rest(config.electron_start),
            phase: Phase::Idle,
            result: None,
            frame: 0,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&ComptonResult> {
        self.result.as_ref()
    }

    /// Frames stepped since the last start or reset
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn summary(&self) -> AnimationSummary {
        AnimationSummary {
            phase: self.phase,
            frames: self.frame,
            photon: self.photon,
            electron: self.electron,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::InFlight | Phase::Collided | Phase::Scattered)
    }

    /// Return both particles to their start positions, at rest
    pub fn reset(&mut self) {
        self.photon = Particle::at_rest(self.config.photon_start);
        self.electron = Particle::at_rest(self.config.electron_start);
        self.phase = Phase::Idle;
        self.result = None;
        self.frame = 0;
        debug!("animation reset");
    }

    /// Reset, then launch the photon toward the electron
    pub fn start(&mut self) {
        self.reset();
        self.photon.velocity = DVec2::new(self.config.speed, 0.0);
        self.phase = Phase::InFlight;
        info!("animation started");
    }

    /// Advance one frame. `input` is read only if contact happens this frame.
    pub fn step(&mut self, input: &ComptonInput) -> StepOutcome {
        if !self.is_running() {
            return StepOutcome::Halted;
        }

        self.frame += 1;
        self.photon.advance();
        self.electron.advance();

        let mut outcome = StepOutcome::Moved;

        if self.phase == Phase::InFlight && self.in_contact() {
            self.phase = Phase::Collided;
            let result = self.scatter(input);
            outcome = StepOutcome::Collided(result);
        }

        debug!(
            "frame {}: photon ({:.1}, {:.1}), electron ({:.1}, {:.1})",
            self.frame,
            self.photon.position.x,
            self.photon.position.y,
            self.electron.position.x,
            self.electron.position.y
        );

        if self.out_of_bounds() {
            self.phase = Phase::Stopped;
            self.photon.velocity = DVec2::ZERO;
            self.electron.velocity = DVec2::ZERO;
            info!("animation stopped after {} frames", self.frame);
            return StepOutcome::Stopped;
        }

        outcome
    }

    /// Step until the animation stops or `max_frames` have run.
    ///
    /// Returns the number of frames stepped.
    pub fn run(&mut self, input: &ComptonInput, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames && self.is_running() {
            self.step(input);
            frames += 1;
        }
        frames
    }

    fn in_contact(&self) -> bool {
        self.photon.position.x >= self.electron.position.x - self.config.collision_tolerance
    }

    fn out_of_bounds(&self) -> bool {
        let viewport = &self.config.viewport;
        !viewport.contains(self.photon.position) || !viewport.contains(self.electron.position)
    }

    /// Collided -> Scattered: evaluate the event and assign outgoing velocities.
    ///
    /// Both directions are measured from the beam line toward +y, which is
    /// downward on the canvas.
    fn scatter(&mut self, input: &ComptonInput) -> ComptonResult {
        debug_assert_eq!(self.phase, Phase::Collided);

        let result = compton::evaluate(input);
        let theta = input.angle_deg().to_radians();
        let phi = result.electron_angle_rad;
        let speed = self.config.speed;

        self.photon.position = self.electron.position;
        self.photon.velocity = DVec2::new(theta.cos(), theta.sin()) * speed;
        self.electron.velocity = DVec2::new(phi.cos(), phi.sin()) * speed;

        info!(
            "collision at frame {}: θ = {:.1}°, φ = {:.1}°, Ee = {:.2} keV",
            self.frame,
            input.angle_deg(),
            result.electron_angle_deg,
            result.electron_energy_kev
        );

        self.result = Some(result);
        self.phase = Phase::Scattered;
        result
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(angle: f64, energy: f64) -> ComptonInput {
        ComptonInput::new(angle, energy).unwrap()
    }

    #[test]
    fn test_idle_does_not_move() {
        let mut anim = Animation::default();
        assert_eq!(anim.phase(), Phase::Idle);
        assert_eq!(anim.step(&input(45.0, 100.0)), StepOutcome::Halted);
        assert_eq!(anim.photon.position, DVec2::new(100.0, 200.0));
        assert_eq!(anim.frame(), 0);
    }

    #[test]
    fn test_collision_frame() {
        // Photon moves 3 px/frame from x = 100; contact at x >= 290, i.e. frame 64
        let mut anim = Animation::default();
        anim.start();
        let inp = input(45.0, 100.0);
        for _ in 0..63 {
            assert_eq!(anim.step(&inp), StepOutcome::Moved);
            assert_eq!(anim.phase(), Phase::InFlight);
        }
        match anim.step(&inp) {
            StepOutcome::Collided(result) => {
                assert_eq!(Some(&result), anim.result());
            }
            other => panic!("expected collision, got {:?}", other),
        }
        assert_eq!(anim.phase(), Phase::Scattered);
        assert_eq!(anim.photon.position, anim.electron.position);
        assert_relative_eq!(anim.photon.velocity.length(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(anim.electron.velocity.length(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_uses_inputs_at_collision_time() {
        let mut anim = Animation::default();
        anim.start();
        anim.run(&input(10.0, 50.0), 10);
        assert!(anim.result().is_none());

        let late = input(120.0, 400.0);
        while anim.phase() == Phase::InFlight {
            anim.step(&late);
        }
        let result = anim.result().unwrap();
        assert_eq!(*result, compton::evaluate(&late));
    }

    #[test]
    fn test_scattered_directions() {
        let mut anim = Animation::default();
        anim.start();
        let inp = input(90.0, 100.0);
        while anim.phase() == Phase::InFlight {
            anim.step(&inp);
        }
        // Photon heads straight down the canvas, electron forward and down
        assert!(anim.photon.velocity.x.abs() < 1e-9);
        assert!(anim.photon.velocity.y > 0.0);
        assert!(anim.electron.velocity.x > 0.0);
        assert!(anim.electron.velocity.y > 0.0);
    }

    #[test]
    fn test_electron_velocity_follows_recoil_angle() {
        let mut anim = Animation::default();
        anim.start();
        let inp = input(60.0, 100.0);
        while anim.phase() == Phase::InFlight {
            anim.step(&inp);
        }
        let phi = compton::evaluate(&inp).electron_angle_rad;
        let expected = DVec2::new(phi.cos(), phi.sin()) * 3.0;
        assert_relative_eq!(anim.electron.velocity.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(anim.electron.velocity.y, expected.y, epsilon = 1e-12);
        assert!(anim.electron.velocity.y > 0.0);
    }

    #[test]
    fn test_runs_to_stop() {
        let mut anim = Animation::default();
        anim.start();
        let frames = anim.run(&input(45.0, 100.0), 10_000);
        assert!(frames < 10_000);
        assert_eq!(anim.phase(), Phase::Stopped);
        assert!(!anim.is_running());
        assert_eq!(anim.step(&input(45.0, 100.0)), StepOutcome::Halted);
    }

    #[test]
    fn test_forward_scatter_exits_right() {
        let mut anim = Animation::default();
        anim.start();
        anim.run(&input(0.0, 100.0), 10_000);
        assert_eq!(anim.phase(), Phase::Stopped);
        assert!(anim.photon.position.x > 620.0);
    }

    #[test]
    fn test_reset_and_restart() {
        let mut anim = Animation::default();
        anim.start();
        anim.run(&input(45.0, 100.0), 100);
        anim.reset();
        assert_eq!(anim.phase(), Phase::Idle);
        assert!(anim.result().is_none());
        assert_eq!(anim.electron.position, DVec2::new(300.0, 200.0));
        assert_eq!(anim.electron.velocity, DVec2::ZERO);

        anim.start();
        assert_eq!(anim.phase(), Phase::InFlight);
        assert_eq!(anim.photon.velocity, DVec2::new(3.0, 0.0));
    }

    #[test]
    fn test_custom_tolerance() {
        let config = AnimationConfig {
            collision_tolerance: 0.0,
            ..AnimationConfig::default()
        };
        let mut anim = Animation::new(config);
        anim.start();
        let inp = input(45.0, 100.0);
        let mut frames = 0;
        while anim.phase() == Phase::InFlight {
            anim.step(&inp);
            frames += 1;
        }
        // Contact now requires x >= 300, reached on frame 67
        assert_eq!(frames, 67);
    }
}
