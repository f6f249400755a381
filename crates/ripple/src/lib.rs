#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Ripple
//!
//! Drivers that feed the [`wavefield`] evaluator the way an interactive
//! interference demo does:
//!
//! - [`Controls`]: the six sliders (separation, frequency, phase, gain,
//!   damping, speed) with their ranges
//! - [`ElapsedClock`] and [`FrameAccumulator`]: the two animation clocks
//! - [`FrameSnapshot`]: one consistent set of inputs per frame
//! - [`SurfaceGrid`]: dense sampling of the deformed plane
//! - [`CrossSection`]: a 1D slice with per-source curves
//! - [`TextPlot`]: a character rendering of a slice
//!
//! ## Quick start (library)
//!
//! ```rust
//! use ripple::{Clock, Controls, CrossSection, FrameAccumulator, FrameSnapshot, SurfaceGrid};
//!
//! let controls = Controls::default();
//! let mut clock = FrameAccumulator::new();
//!
//! let t = clock.advance(1.0 / 60.0, controls.speed);
//! let frame = FrameSnapshot::capture(&controls, t);
//!
//! let profile = CrossSection::new(0.0).sample(&frame);
//! let surface = SurfaceGrid::new(30.0, 60).sample(&frame);
//!
//! assert_eq!(profile.samples().len(), 201);
//! assert_eq!(surface.heights().len(), 61 * 61);
//! ```
//!
//! ## CLI usage
//!
//! ```bash
//! ripple probe --x 0 --y 0
//! ripple slice --slice-y 2 --frames 100
//! ripple --separation 8 surface --elapsed 3 --format csv
//! ```
//!
//! ## Feature flags
//!
//! - `parallel` (default): sample surface rows on a rayon thread pool

pub mod cli;
pub mod clock;
pub mod config;
pub mod controls;
pub mod cross_section;
pub mod error;
pub mod frame;
pub mod plot;
pub mod surface;

pub use clock::{Clock, ElapsedClock, FRAME_STEP, FrameAccumulator};
pub use config::Config;
pub use controls::{Controls, Param};
pub use cross_section::{CanvasMapping, CrossSection, Profile, ProfileSample};
pub use error::{Error, Result};
pub use frame::FrameSnapshot;
pub use plot::TextPlot;
pub use surface::{Surface, SurfaceGrid, SurfaceStats};
