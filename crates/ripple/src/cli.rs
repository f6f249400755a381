//! Command-line interface for `ripple`.
//!
//! # Examples
//!
//! ```bash
//! # Evaluate one point
//! ripple probe --x 0 --y 0
//!
//! # Plot the cross-section at y = 2 after one second of frames
//! ripple slice --slice-y 2 --frames 100
//!
//! # Summarize the surface with the sources further apart
//! ripple --separation 8 surface --elapsed 3
//!
//! # Start from a config file
//! ripple --config ripple.toml slice --format csv
//! ```

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::warn;

use crate::controls::{Controls, Param};
use crate::cross_section::{DEFAULT_STEPS, MAX_STEPS};
use crate::error::Result;
use crate::surface::{DEFAULT_SEGMENTS, DEFAULT_SIZE, MAX_SEGMENTS};

/// Sample and plot two-source wave interference.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ripple",
    author,
    version,
    about = "Sample and plot two-source wave interference",
    long_about = "Evaluates the superposition of two attenuated circular waves. \
                  Probe single points, plot a cross-section, or sample the full surface."
)]
pub struct Cli {
    /// TOML file with initial control values
    #[arg(long, short = 'c', global = true, env = "RIPPLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Slider overrides applied on top of the config file.
///
/// Values outside a slider's range are clamped, as dragging a slider would.
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Distance between the sources [0, 10]
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub separation: Option<f64>,

    /// Spatial frequency [1, 20]
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub frequency: Option<f64>,

    /// Phase step between the sources, radians [0, 2π]
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub phase: Option<f64>,

    /// Amplitude of each source [0.1, 2]
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub gain: Option<f64>,

    /// Distance attenuation [0, 1]
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub damping: Option<f64>,

    /// Time multiplier [0, 5]
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub speed: Option<f64>,
}

impl Overrides {
    fn values(&self) -> [(Param, Option<f64>); 6] {
        [
            (Param::Separation, self.separation),
            (Param::Frequency, self.frequency),
            (Param::Phase, self.phase),
            (Param::Gain, self.gain),
            (Param::Damping, self.damping),
            (Param::Speed, self.speed),
        ]
    }

    /// Applies every given override, returning the controls that were clamped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonFinite`] for NaN or infinite values.
    pub fn apply(&self, controls: &mut Controls) -> Result<Vec<Param>> {
        let mut clamped = Vec::new();
        for (param, value) in self.values() {
            let Some(value) = value else { continue };
            if controls.set(param, value)? {
                warn!(
                    %param,
                    requested = value,
                    applied = controls.get(param),
                    "value clamped to slider range"
                );
                clamped.push(param);
            }
        }
        Ok(clamped)
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Evaluate the field at one point
    Probe(ProbeArgs),

    /// Sample a horizontal cross-section
    Slice(SliceArgs),

    /// Sample the whole surface
    Surface(SurfaceArgs),
}

/// Arguments for `probe`.
#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// X coordinate
    #[arg(long, allow_negative_numbers = true)]
    pub x: f64,

    /// Y coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y: f64,

    /// Wave time (already scaled by speed)
    #[arg(long, short = 't', default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f64,

    /// Output format
    #[arg(long, short = 'f', default_value = "plain")]
    pub format: ProbeFormat,
}

/// Arguments for `slice`.
#[derive(Args, Debug, Clone)]
pub struct SliceArgs {
    /// Y coordinate of the slice line, clamped to [-10, 10]
    #[arg(long, allow_negative_numbers = true)]
    pub slice_y: Option<f64>,

    /// Frames to advance before sampling
    #[arg(long, short = 'n', default_value_t = 1)]
    pub frames: u32,

    /// Sampling intervals across [-10, 10]
    #[arg(
        long,
        default_value_t = DEFAULT_STEPS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_STEPS as u64)
    )]
    pub steps: usize,

    /// Output format
    #[arg(long, short = 'f', default_value = "plot")]
    pub format: SliceFormat,

    /// Plot width in characters
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height in characters
    #[arg(long, default_value_t = 21)]
    pub height: usize,
}

/// Arguments for `surface`.
#[derive(Args, Debug, Clone)]
pub struct SurfaceArgs {
    /// Wall-clock seconds since start; scaled by speed
    #[arg(long, short = 'e', default_value_t = 0.0)]
    pub elapsed: f64,

    /// Segments per side
    #[arg(
        long,
        default_value_t = DEFAULT_SEGMENTS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_SEGMENTS as u64)
    )]
    pub segments: usize,

    /// Side length of the plane
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: f64,

    /// Output format
    #[arg(long, short = 'f', default_value = "summary")]
    pub format: SurfaceFormat,
}

/// Output formats for `probe`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProbeFormat {
    /// Aligned text
    #[default]
    Plain,
    /// JSON object
    Json,
}

/// Output formats for `slice`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SliceFormat {
    /// Character plot
    #[default]
    Plot,
    /// `x,source1,source2,total` rows
    Csv,
    /// JSON document
    Json,
}

/// Output formats for `surface`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurfaceFormat {
    /// Min, max and mean height
    #[default]
    Summary,
    /// `x,y,z` rows for every vertex
    Csv,
    /// Summary as JSON
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}
