//! Physical parameters for one evaluation.

use core::f64::consts::TAU;

/// Angular velocity used when none is given.
pub const DEFAULT_ANGULAR_VELOCITY: f64 = 2.0;

/// Parameters of the superposed wave field.
///
/// All values are supplied by the caller for every evaluation; nothing is
/// cached between calls. `frequency` and `amplitude` are expected to be
/// positive, but any finite value evaluates without failing.
///
/// # Example
///
/// ```rust
/// use wavefield::{WaveParameters, DEFAULT_ANGULAR_VELOCITY};
///
/// let params = WaveParameters::new(2.0, 0.0, 0.1, 0.5).with_time(1.5);
/// assert_eq!(params.angular_velocity, DEFAULT_ANGULAR_VELOCITY);
/// assert_eq!(params.time, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    /// Spatial frequency `k` (radians per unit distance).
    pub frequency: f64,
    /// Phase step `φ`; source `i` is shifted by `i·φ`.
    pub phase_offset: f64,
    /// Distance attenuation coefficient `α`; `0` disables decay.
    pub damping: f64,
    /// Peak displacement `A` of a single undamped source.
    pub amplitude: f64,
    /// Temporal angular velocity `ω`.
    pub angular_velocity: f64,
    /// Time used by [`crate::evaluate_point`].
    pub time: f64,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            phase_offset: 0.0,
            damping: 0.0,
            amplitude: 1.0,
            angular_velocity: DEFAULT_ANGULAR_VELOCITY,
            time: 0.0,
        }
    }
}

impl WaveParameters {
    /// Creates a parameter set with the default angular velocity and `time = 0`.
    pub fn new(frequency: f64, phase_offset: f64, damping: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            phase_offset,
            damping,
            amplitude,
            ..Self::default()
        }
    }

    /// Sets the spatial frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the phase step between consecutive sources.
    pub fn with_phase_offset(mut self, phase_offset: f64) -> Self {
        self.phase_offset = phase_offset;
        self
    }

    /// Sets the damping coefficient.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Overrides the angular velocity.
    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Sets the evaluation time.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Distance between successive crests, `2π / k`.
    ///
    /// Infinite when the frequency is zero.
    pub fn wavelength(&self) -> f64 {
        TAU / self.frequency
    }

    /// Time between successive crests at a fixed point, `2π / ω`.
    pub fn period(&self) -> f64 {
        TAU / self.angular_velocity
    }

    /// Upper bound on `|total|` for `sources` superposed waves.
    pub fn peak_envelope(&self, sources: usize) -> f64 {
        sources as f64 * self.amplitude.abs()
    }
}
