//! Animation clocks that feed wave time to the samplers.
//!
//! The surface and the cross-section keep independent clocks. Neither is
//! owned by the evaluator; a sampler receives an already computed time
//! through a [`FrameSnapshot`](crate::FrameSnapshot).

/// Time advanced by [`FrameAccumulator`] per frame at speed 1.
pub const FRAME_STEP: f64 = 0.01;

/// A source of wave time.
pub trait Clock {
    /// Advances the clock by one frame and returns the wave time to sample.
    ///
    /// `dt` is the wall time since the previous frame, in seconds.
    fn advance(&mut self, dt: f64, speed: f64) -> f64;

    /// Wave time at `speed` without advancing.
    fn time(&self, speed: f64) -> f64;

    /// Returns to time zero.
    fn reset(&mut self);
}

/// Wall-clock elapsed time, scaled by speed when read.
///
/// Speed multiplies the whole elapsed time, so changing it rescales the
/// entire history and the surface jumps to a new phase.
///
/// ```rust
/// use ripple::{Clock, ElapsedClock};
///
/// let mut clock = ElapsedClock::new();
/// clock.advance(0.5, 1.0);
/// assert_eq!(clock.time(3.0), 1.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElapsedClock {
    elapsed: f64,
}

impl ElapsedClock {
    /// Creates a clock at zero.
    pub const fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Creates a clock that has already run for `elapsed` seconds.
    pub const fn at(elapsed: f64) -> Self {
        Self { elapsed }
    }

    /// Unscaled seconds since start.
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Clock for ElapsedClock {
    fn advance(&mut self, dt: f64, speed: f64) -> f64 {
        self.elapsed += dt;
        self.time(speed)
    }

    fn time(&self, speed: f64) -> f64 {
        self.elapsed * speed
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Per-frame accumulator: each frame adds `FRAME_STEP * speed`.
///
/// Wall time is ignored, so the rate depends on the redraw cadence. The
/// step is added before sampling; the first frame already sees
/// `FRAME_STEP * speed`.
///
/// ```rust
/// use ripple::{Clock, FrameAccumulator};
///
/// let mut clock = FrameAccumulator::new();
/// assert_eq!(clock.advance(1.0 / 60.0, 2.0), 0.02);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameAccumulator {
    time: f64,
    frames: u64,
}

impl FrameAccumulator {
    /// Creates an accumulator at zero.
    pub const fn new() -> Self {
        Self {
            time: 0.0,
            frames: 0,
        }
    }

    /// Number of frames advanced since start.
    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

impl Clock for FrameAccumulator {
    fn advance(&mut self, _dt: f64, speed: f64) -> f64 {
        self.time += FRAME_STEP * speed;
        self.frames += 1;
        self.time
    }

    fn time(&self, _speed: f64) -> f64 {
        self.time
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
