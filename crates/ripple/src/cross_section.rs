//! Cross-section sampling driver.
//!
//! Samples the field along the x axis at a fixed `y`, keeping the two
//! per-source curves alongside the composite so all three can be plotted.

use serde::Serialize;
use tracing::debug;

use crate::frame::FrameSnapshot;

/// Default left edge of the slice, in world units.
pub const DEFAULT_X_MIN: f64 = -10.0;
/// Default right edge of the slice.
pub const DEFAULT_X_MAX: f64 = 10.0;
/// Default number of intervals; samples are `steps + 1`.
pub const DEFAULT_STEPS: usize = 200;
/// Largest number of intervals a slice will sample.
pub const MAX_STEPS: usize = 100_000;
/// The slice line is kept inside `[-SLICE_LIMIT, SLICE_LIMIT]`.
pub const SLICE_LIMIT: f64 = 10.0;
/// Default canvas pixels per unit of displacement.
pub const DEFAULT_Y_SCALE: f64 = 50.0;

/// A horizontal line through the field at `y = slice_y`.
///
/// # Example
///
/// ```rust
/// use ripple::{Controls, CrossSection, FrameSnapshot};
///
/// let frame = FrameSnapshot::capture(&Controls::default(), 0.01);
/// let profile = CrossSection::new(0.0).sample(&frame);
/// assert_eq!(profile.samples().len(), 201);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    x_min: f64,
    x_max: f64,
    steps: usize,
    slice_y: f64,
}

impl Default for CrossSection {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl CrossSection {
    /// A slice at `slice_y` over the default span.
    ///
    /// `slice_y` is clamped to `[-SLICE_LIMIT, SLICE_LIMIT]`; NaN becomes 0.
    pub fn new(slice_y: f64) -> Self {
        Self {
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            steps: DEFAULT_STEPS,
            slice_y: clamp_slice(slice_y),
        }
    }

    /// Overrides the sampled span.
    pub fn with_span(mut self, x_min: f64, x_max: f64) -> Self {
        self.x_min = x_min;
        self.x_max = x_max;
        self
    }

    /// Overrides the number of intervals, clamped to `[1, MAX_STEPS]`.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps.clamp(1, MAX_STEPS);
        self
    }

    /// Moves the slice line, clamping as in [`CrossSection::new`].
    pub fn set_slice_y(&mut self, slice_y: f64) {
        self.slice_y = clamp_slice(slice_y);
    }

    /// Y coordinate of the slice line.
    pub const fn slice_y(&self) -> f64 {
        self.slice_y
    }

    /// Number of intervals; samples are `steps + 1`.
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// World x of sample `i`.
    pub fn x_at(&self, i: usize) -> f64 {
        self.x_min + (i as f64 / self.steps as f64) * (self.x_max - self.x_min)
    }

    /// Samples the slice for one frame.
    pub fn sample(&self, frame: &FrameSnapshot) -> Profile {
        let samples: Vec<ProfileSample> = (0..=self.steps)
            .map(|i| {
                let x = self.x_at(i);
                let mut components = [0.0; 2];
                let total = wavefield::evaluate_into(
                    x,
                    self.slice_y,
                    frame.time(),
                    &frame.sources,
                    &frame.params,
                    &mut components,
                );
                ProfileSample {
                    x,
                    total,
                    components,
                }
            })
            .collect();

        debug!(
            samples = samples.len(),
            slice_y = self.slice_y,
            time = frame.time(),
            "sampled cross-section"
        );

        Profile {
            slice_y: self.slice_y,
            time: frame.time(),
            samples,
        }
    }
}

fn clamp_slice(slice_y: f64) -> f64 {
    if slice_y.is_nan() {
        0.0
    } else {
        slice_y.clamp(-SLICE_LIMIT, SLICE_LIMIT)
    }
}

/// One sample of the slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileSample {
    pub x: f64,
    pub total: f64,
    pub components: [f64; 2],
}

/// The sampled slice for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub slice_y: f64,
    pub time: f64,
    samples: Vec<ProfileSample>,
}

impl Profile {
    /// Samples in increasing x order.
    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    /// Displacement of source `index` at every sample; empty for an
    /// unknown index.
    pub fn source_curve(&self, index: usize) -> Vec<f64> {
        if index >= 2 {
            return Vec::new();
        }
        self.samples.iter().map(|s| s.components[index]).collect()
    }

    /// Superposed displacement at every sample.
    pub fn composite_curve(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.total).collect()
    }

    /// Writes `x,source1,source2,total` rows with a header line.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("x,source1,source2,total\n");
        for s in &self.samples {
            out.push_str(&format!(
                "{},{},{},{}\n",
                s.x, s.components[0], s.components[1], s.total
            ));
        }
        out
    }
}

/// Maps samples onto a canvas whose y axis points down.
///
/// Sample `i` lands at `i * width / steps`; a displacement `v` lands at
/// `height / 2 - v * y_scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapping {
    pub width: f64,
    pub height: f64,
    pub y_scale: f64,
    pub steps: usize,
}

impl CanvasMapping {
    /// A `width × height` canvas for `steps` intervals at the default y scale.
    pub fn new(width: f64, height: f64, steps: usize) -> Self {
        Self {
            width,
            height,
            y_scale: DEFAULT_Y_SCALE,
            steps: steps.max(1),
        }
    }

    /// Overrides the canvas units per unit of displacement.
    pub fn with_y_scale(mut self, y_scale: f64) -> Self {
        self.y_scale = y_scale;
        self
    }

    /// Canvas x of sample `i`.
    pub fn canvas_x(&self, i: usize) -> f64 {
        i as f64 * (self.width / self.steps as f64)
    }

    /// Canvas y of displacement `value`.
    pub fn canvas_y(&self, value: f64) -> f64 {
        self.height / 2.0 - value * self.y_scale
    }
}
