//! One frame's worth of inputs to the evaluator.

use wavefield::{Point2D, WaveParameters, WaveSource};

use crate::controls::Controls;

/// Time, parameters and sources frozen for a single frame.
///
/// Every sample taken for a frame reads from the same snapshot, so the
/// surface and the cross-section cannot drift apart mid-frame even when the
/// controls change between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    /// Wave parameters; `params.time` is the frame's wave time, already
    /// scaled by speed.
    pub params: WaveParameters,
    pub sources: [WaveSource; 2],
}

impl FrameSnapshot {
    /// Freezes `controls` at wave time `time`.
    pub fn capture(controls: &Controls, time: f64) -> Self {
        Self {
            params: controls.wave_parameters(time),
            sources: controls.sources(),
        }
    }

    /// Wave time of this frame.
    pub const fn time(&self) -> f64 {
        self.params.time
    }

    /// Evaluates the full result at `(x, y)`.
    pub fn evaluate(&self, x: f64, y: f64) -> wavefield::EvaluationResult {
        wavefield::evaluate_point(Point2D::new(x, y), &self.sources, &self.params)
    }

    /// Total displacement at `(x, y)`.
    pub fn total(&self, x: f64, y: f64) -> f64 {
        wavefield::evaluate_total(x, y, self.time(), &self.sources, &self.params)
    }
}
