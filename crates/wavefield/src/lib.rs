#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]

//! # Wavefield
//!
//! Closed-form superposition of circular waves radiating from point sources
//! in a plane.
//!
//! Every source contributes
//!
//! ```text
//! y_i(r, t) = A · e^(-αr) · sin(k·r − ω·t + i·φ)
//! ```
//!
//! where `r` is the distance from the source, `k` the spatial frequency,
//! `ω` the angular velocity, `α` the damping coefficient and `φ` the phase
//! offset. The displacement of the field is the sum of all contributions.
//!
//! The evaluator is a pure function: it keeps no state, owns no clock and
//! can be called from any number of threads at once. Both a dense surface
//! sampler and a 1D cross-section sampler can share it and will see
//! bit-identical values at the same point.
//!
//! ## Example
//!
//! ```rust
//! use wavefield::{evaluate, symmetric_pair, WaveParameters};
//!
//! let sources = symmetric_pair(4.0);
//! let params = WaveParameters::new(2.0, 0.0, 0.0, 0.5);
//!
//! let result = evaluate(0.0, 0.0, 0.0, &sources, &params);
//!
//! // Both sources are 2 units away and in phase.
//! assert_eq!(result.components.len(), 2);
//! assert!((result.total - (-0.7568)).abs() < 1e-4);
//! ```
//!
//! ## Destructive interference
//!
//! ```rust
//! use core::f64::consts::PI;
//! use wavefield::{evaluate, symmetric_pair, WaveParameters};
//!
//! let sources = symmetric_pair(4.0);
//! let params = WaveParameters::new(2.0, PI, 0.0, 0.5);
//!
//! // On the perpendicular bisector a half-cycle offset cancels exactly.
//! let result = evaluate(0.0, 0.0, 0.0, &sources, &params);
//! assert!(result.total.abs() < 1e-12);
//! ```
//!
//! ## no_std
//!
//! Disable the default `std` feature and enable `libm` to build without the
//! standard library. The result vector still needs `alloc`.

extern crate alloc;

mod field;
mod math;
mod params;
mod source;

pub use field::{EvaluationResult, component, evaluate, evaluate_into, evaluate_point, evaluate_total};
pub use params::{DEFAULT_ANGULAR_VELOCITY, WaveParameters};
pub use source::{Point2D, WaveSource, symmetric_pair};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::field::{EvaluationResult, evaluate, evaluate_into, evaluate_total};
    pub use crate::params::{DEFAULT_ANGULAR_VELOCITY, WaveParameters};
    pub use crate::source::{Point2D, WaveSource, symmetric_pair};
}
