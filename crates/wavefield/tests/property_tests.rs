#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_precision_loss)]

use core::f64::consts::TAU;

use proptest::prelude::*;
use wavefield::{
    Point2D, WaveParameters, component, evaluate, evaluate_into, evaluate_total, symmetric_pair,
};

fn arb_sources() -> impl Strategy<Value = Vec<Point2D>> {
    prop::collection::vec((-20.0f64..20.0, -20.0f64..20.0), 1..6)
        .prop_map(|points| points.into_iter().map(Point2D::from).collect())
}

// =============================================================================
// Superposition
// =============================================================================

proptest! {
    #[test]
    fn total_is_sum_of_components(
        sources in arb_sources(),
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        t in 0.0f64..100.0,
        frequency in 0.0f64..20.0,
        phase in 0.0f64..TAU,
        damping in 0.0f64..1.0,
        amplitude in 0.1f64..2.0,
    ) {
        let params = WaveParameters::new(frequency, phase, damping, amplitude);
        let result = evaluate(x, y, t, &sources, &params);

        let sum = result.components.iter().fold(0.0, |acc, c| acc + c);
        prop_assert_eq!(result.total, sum);
        prop_assert_eq!(result.components.len(), sources.len());
    }

    #[test]
    fn all_entry_points_agree(
        sources in arb_sources(),
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        t in 0.0f64..100.0,
        frequency in 0.0f64..20.0,
        phase in 0.0f64..TAU,
        damping in 0.0f64..1.0,
    ) {
        let params = WaveParameters::new(frequency, phase, damping, 1.0);
        let result = evaluate(x, y, t, &sources, &params);

        prop_assert_eq!(evaluate_total(x, y, t, &sources, &params), result.total);

        let mut out = vec![0.0; sources.len()];
        let total = evaluate_into(x, y, t, &sources, &params, &mut out);
        prop_assert_eq!(total, result.total);
        prop_assert_eq!(out, result.components);
    }
}

// =============================================================================
// Bounds and stability
// =============================================================================

proptest! {
    #[test]
    fn undamped_components_bounded_by_amplitude(
        sources in arb_sources(),
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        t in 0.0f64..1000.0,
        frequency in 0.0f64..20.0,
        phase in 0.0f64..TAU,
        amplitude in 0.1f64..2.0,
    ) {
        let params = WaveParameters::new(frequency, phase, 0.0, amplitude);
        let result = evaluate(x, y, t, &sources, &params);

        for c in &result.components {
            prop_assert!(c.abs() <= amplitude, "|{}| > {}", c, amplitude);
        }
        prop_assert!(result.total.abs() <= params.peak_envelope(sources.len()) + 1e-12);
    }

    #[test]
    fn finite_inputs_give_finite_output(
        sources in arb_sources(),
        x in -1e6f64..1e6,
        y in -1e6f64..1e6,
        t in -1e6f64..1e6,
        frequency in -50.0f64..50.0,
        phase in -10.0f64..10.0,
        damping in 0.0f64..10.0,
        amplitude in -5.0f64..5.0,
        omega in -10.0f64..10.0,
    ) {
        let params = WaveParameters::new(frequency, phase, damping, amplitude)
            .with_angular_velocity(omega);
        let result = evaluate(x, y, t, &sources, &params);

        prop_assert!(result.total.is_finite(), "total not finite: {}", result.total);
        for c in &result.components {
            prop_assert!(c.is_finite(), "component not finite: {}", c);
        }
    }

    #[test]
    fn evaluation_is_deterministic(
        sources in arb_sources(),
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        t in 0.0f64..100.0,
    ) {
        let params = WaveParameters::new(3.0, 0.7, 0.2, 1.0);
        let a = evaluate(x, y, t, &sources, &params);
        let b = evaluate(x, y, t, &sources, &params);
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// Physical properties
// =============================================================================

proptest! {
    #[test]
    fn coincident_point_is_unattenuated(
        sx in -20.0f64..20.0,
        sy in -20.0f64..20.0,
        index in 0usize..4,
        t in 0.0f64..100.0,
        frequency in 0.0f64..20.0,
        phase in 0.0f64..TAU,
        damping in 0.0f64..1.0,
        amplitude in 0.1f64..2.0,
    ) {
        // Put the probe exactly on source `index`.
        let mut sources = vec![Point2D::new(sx + 5.0, sy - 5.0); 4];
        sources[index] = Point2D::new(sx, sy);

        let params = WaveParameters::new(frequency, phase, damping, amplitude);
        let result = evaluate(sx, sy, t, &sources, &params);

        let expected = amplitude * (phase * index as f64 - 2.0 * t).sin();
        prop_assert_eq!(result.components[index], expected);
    }

    #[test]
    fn symmetric_sources_give_mirror_symmetric_field(
        separation in 0.0f64..10.0,
        x in -10.0f64..10.0,
        t in 0.0f64..100.0,
        frequency in 1.0f64..20.0,
        damping in 0.0f64..1.0,
        amplitude in 0.1f64..2.0,
    ) {
        let sources = symmetric_pair(separation);
        let params = WaveParameters::new(frequency, 0.0, damping, amplitude);

        let right = evaluate(x, 0.0, t, &sources, &params);
        let left = evaluate(-x, 0.0, t, &sources, &params);
        prop_assert_eq!(right.total, left.total);
    }

    #[test]
    fn damping_shrinks_magnitude(
        r in 0.01f64..20.0,
        t in 0.0f64..100.0,
        frequency in 1.0f64..20.0,
        low in 0.0f64..1.0,
        step in 0.01f64..1.0,
    ) {
        let base = WaveParameters::new(frequency, 0.0, low, 1.0);
        let lighter = component(r, 0, t, &base);
        prop_assume!(lighter.abs() > 1e-6);

        let heavier = component(r, 0, t, &base.with_damping(low + step));
        prop_assert!(
            heavier.abs() < lighter.abs(),
            "damping {} -> {}: |{}| !< |{}|",
            low, low + step, heavier, lighter
        );
    }

    #[test]
    fn total_is_periodic_in_time(
        x in -10.0f64..10.0,
        y in -10.0f64..10.0,
        t in 0.0f64..50.0,
        omega in 0.5f64..5.0,
        frequency in 1.0f64..20.0,
        phase in 0.0f64..TAU,
        damping in 0.0f64..1.0,
    ) {
        let sources = symmetric_pair(4.0);
        let params = WaveParameters::new(frequency, phase, damping, 1.0)
            .with_angular_velocity(omega);

        let now = evaluate_total(x, y, t, &sources, &params);
        let later = evaluate_total(x, y, t + params.period(), &sources, &params);
        prop_assert!((now - later).abs() < 1e-9, "{} vs {}", now, later);
    }
}
