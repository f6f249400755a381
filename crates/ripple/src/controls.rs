//! The six user-facing parameters and their slider ranges.
//!
//! [`Controls`] is what a control panel edits. It is turned into wave
//! sources and [`WaveParameters`] once per frame; the evaluator never sees
//! the panel values directly.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};
use wavefield::{DEFAULT_ANGULAR_VELOCITY, WaveParameters, WaveSource, symmetric_pair};

use crate::error::{Error, Result};

/// Identifies one of the six controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Distance between the two sources.
    Separation,
    /// Spatial frequency of both sources.
    Frequency,
    /// Phase step between the sources.
    Phase,
    /// Amplitude of each source.
    Gain,
    /// Distance attenuation coefficient.
    Damping,
    /// Time multiplier.
    Speed,
}

impl Param {
    /// Every control, in panel order.
    pub const ALL: [Param; 6] = [
        Param::Separation,
        Param::Frequency,
        Param::Phase,
        Param::Gain,
        Param::Damping,
        Param::Speed,
    ];

    /// Lowercase name used in config files and messages.
    pub const fn name(self) -> &'static str {
        match self {
            Param::Separation => "separation",
            Param::Frequency => "frequency",
            Param::Phase => "phase",
            Param::Gain => "gain",
            Param::Damping => "damping",
            Param::Speed => "speed",
        }
    }

    /// Inclusive `(min, max)` slider range.
    pub const fn range(self) -> (f64, f64) {
        match self {
            Param::Separation => (0.0, 10.0),
            Param::Frequency => (1.0, 20.0),
            Param::Phase => (0.0, TAU),
            Param::Gain => (0.1, 2.0),
            Param::Damping => (0.0, 1.0),
            Param::Speed => (0.0, 5.0),
        }
    }

    /// Initial slider position.
    pub const fn default_value(self) -> f64 {
        match self {
            Param::Separation => 4.0,
            Param::Frequency => 2.0,
            Param::Phase => 0.0,
            Param::Gain => 0.5,
            Param::Damping => 0.1,
            Param::Speed => 1.0,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current values of all six controls.
///
/// # Example
///
/// ```rust
/// use ripple::{Controls, Param};
///
/// let mut controls = Controls::default();
/// let clamped = controls.set(Param::Gain, 5.0).unwrap();
/// assert!(clamped);
/// assert_eq!(controls.gain, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Controls {
    pub separation: f64,
    pub frequency: f64,
    pub phase: f64,
    pub gain: f64,
    pub damping: f64,
    pub speed: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            separation: Param::Separation.default_value(),
            frequency: Param::Frequency.default_value(),
            phase: Param::Phase.default_value(),
            gain: Param::Gain.default_value(),
            damping: Param::Damping.default_value(),
            speed: Param::Speed.default_value(),
        }
    }
}

impl Controls {
    /// Current value of `param`.
    pub const fn get(&self, param: Param) -> f64 {
        match param {
            Param::Separation => self.separation,
            Param::Frequency => self.frequency,
            Param::Phase => self.phase,
            Param::Gain => self.gain,
            Param::Damping => self.damping,
            Param::Speed => self.speed,
        }
    }

    fn slot(&mut self, param: Param) -> &mut f64 {
        match param {
            Param::Separation => &mut self.separation,
            Param::Frequency => &mut self.frequency,
            Param::Phase => &mut self.phase,
            Param::Gain => &mut self.gain,
            Param::Damping => &mut self.damping,
            Param::Speed => &mut self.speed,
        }
    }

    /// Moves a slider, clamping to its range.
    ///
    /// Returns `true` when `value` had to be clamped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] for NaN or infinite values; the control
    /// keeps its previous value.
    pub fn set(&mut self, param: Param, value: f64) -> Result<bool> {
        if !value.is_finite() {
            return Err(Error::NonFinite { param });
        }
        let (min, max) = param.range();
        let clamped = value.clamp(min, max);
        *self.slot(param) = clamped;
        Ok(clamped != value)
    }

    /// Checks every control against its range without modifying anything.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::NonFinite`] or [`Error::OutOfRange`] found,
    /// in panel order.
    pub fn validate(&self) -> Result<()> {
        for param in Param::ALL {
            let value = self.get(param);
            if !value.is_finite() {
                return Err(Error::NonFinite { param });
            }
            let (min, max) = param.range();
            if value < min || value > max {
                return Err(Error::OutOfRange {
                    param,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Source positions for the current separation.
    pub fn sources(&self) -> [WaveSource; 2] {
        symmetric_pair(self.separation)
    }

    /// Wave parameters at wave time `time`.
    ///
    /// Speed is not part of the result; clocks apply it when producing
    /// `time`.
    pub fn wave_parameters(&self, time: f64) -> WaveParameters {
        WaveParameters {
            frequency: self.frequency,
            phase_offset: self.phase,
            damping: self.damping,
            amplitude: self.gain,
            angular_velocity: DEFAULT_ANGULAR_VELOCITY,
            time,
        }
    }
}
