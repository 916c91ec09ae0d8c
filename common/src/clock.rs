//! Fixed-cadence frame pacing for cooperative animation loops

use std::time::{Duration, Instant};

/// Upper bound on a single frame's elapsed time, so a stalled host does not
/// produce one giant step
pub const MAX_FRAME_TIME: f32 = 0.1;

/// Paces a step function at a fixed frame rate.
///
/// `tick` sleeps until the next frame boundary and reports how long the frame
/// actually took, clamped to [`MAX_FRAME_TIME`].
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
    pub frames: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            frame: Duration::from_secs(1) / fps,
            last: Instant::now(),
            frames: 0,
        }
    }

    /// Wait for the next frame and return the elapsed time in seconds
    pub fn tick(&mut self) -> f32 {
        let target = self.last + self.frame;
        let now = Instant::now();
        if target > now {
            std::thread::sleep(target - now);
        }

        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32().min(MAX_FRAME_TIME);
        self.last = now;
        self.frames += 1;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}
