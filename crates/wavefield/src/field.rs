//! Superposition of attenuated circular waves.
//!
//! All entry points share [`component`], so the surface path
//! ([`evaluate_total`]), the cross-section path ([`evaluate_into`]) and the
//! general [`evaluate`] agree bit for bit at the same inputs.

use alloc::vec::Vec;

use crate::math::{exp, sin};
use crate::params::WaveParameters;
use crate::source::{Point2D, WaveSource};

/// Displacement of the combined wave and of each source at one point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationResult {
    /// Sum of all components.
    pub total: f64,
    /// One displacement per source, in source order.
    pub components: Vec<f64>,
}

/// Displacement contributed by the source at `index`, observed at
/// distance `r` and time `t`.
///
/// ```text
/// A · e^(-α·r) · sin(k·r − ω·t + index·φ)
/// ```
///
/// `params.time` is ignored; `t` is used instead.
#[inline]
pub fn component(r: f64, index: usize, t: f64, params: &WaveParameters) -> f64 {
    let phi = index as f64 * params.phase_offset;
    let attenuation = exp(-params.damping * r);
    (params.amplitude * attenuation) * sin(params.frequency * r - params.angular_velocity * t + phi)
}

/// Evaluates the field at `(x, y)` and time `t`.
///
/// Never fails for finite input, including points that coincide with a
/// source. Non-finite input propagates as NaN/inf. An empty source list
/// gives a zero total with no components.
///
/// `params.time` is ignored; see [`evaluate_point`] to use it.
///
/// # Example
///
/// ```rust
/// use wavefield::{evaluate, Point2D, WaveParameters};
///
/// let sources = [Point2D::new(0.0, 0.0)];
/// let params = WaveParameters::default();
///
/// // At the source itself there is no attenuation: A·sin(−ω·t).
/// let result = evaluate(0.0, 0.0, 0.5, &sources, &params);
/// assert_eq!(result.total, (-1.0f64).sin());
/// ```
pub fn evaluate(
    x: f64,
    y: f64,
    t: f64,
    sources: &[WaveSource],
    params: &WaveParameters,
) -> EvaluationResult {
    let point = Point2D::new(x, y);
    let components: Vec<f64> = sources
        .iter()
        .enumerate()
        .map(|(i, source)| component(point.distance_to(*source), i, t, params))
        .collect();
    let total = components.iter().fold(0.0, |acc, c| acc + c);

    EvaluationResult { total, components }
}

/// Evaluates the field at `point` and `params.time`.
pub fn evaluate_point(point: Point2D, sources: &[WaveSource], params: &WaveParameters) -> EvaluationResult {
    evaluate(point.x, point.y, params.time, sources, params)
}

/// Total displacement only, without allocating.
///
/// Equal to `evaluate(..).total` for the same inputs.
#[inline]
pub fn evaluate_total(x: f64, y: f64, t: f64, sources: &[WaveSource], params: &WaveParameters) -> f64 {
    let point = Point2D::new(x, y);
    sources.iter().enumerate().fold(0.0, |acc, (i, source)| {
        acc + component(point.distance_to(*source), i, t, params)
    })
}

/// Writes per-source components into `out` and returns the total.
///
/// Only the first `min(out.len(), sources.len())` components are written,
/// but the total always covers every source. Equal to the corresponding
/// fields of [`evaluate`] for the same inputs.
pub fn evaluate_into(
    x: f64,
    y: f64,
    t: f64,
    sources: &[WaveSource],
    params: &WaveParameters,
    out: &mut [f64],
) -> f64 {
    let point = Point2D::new(x, y);
    let mut total = 0.0;
    for (i, source) in sources.iter().enumerate() {
        let value = component(point.distance_to(*source), i, t, params);
        if let Some(slot) = out.get_mut(i) {
            *slot = value;
        }
        total += value;
    }
    total
}
