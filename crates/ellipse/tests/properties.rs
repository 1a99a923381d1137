//! Property checks for ellipse queries over random inputs.
//!
//! Points are kept a visible margin away from the boundary wherever the
//! closed comparison would otherwise make the outcome depend on rounding.

use ellipse::prelude::*;
use nalgebra::Rotation2;
use proptest::prelude::*;
use std::f64::consts::TAU;

fn arb_ellipse() -> impl Strategy<Value = Ellipse> {
    (
        -50.0..50.0f64,
        -50.0..50.0f64,
        0.05..20.0f64,
        0.05..20.0f64,
        -4.0 * TAU..4.0 * TAU,
    )
        .prop_map(|(cx, cy, rx, ry, rot)| Ellipse::new(cx, cy, rx, ry, rot).unwrap())
}

proptest! {
    #[test]
    fn unrotated_matches_sum_of_squares(
        cx in -10.0..10.0f64,
        cy in -10.0..10.0f64,
        rx in 0.1..10.0f64,
        ry in 0.1..10.0f64,
        a in -25.0..25.0f64,
        b in -25.0..25.0f64,
    ) {
        let e = Ellipse::new(cx, cy, rx, ry, 0.0).unwrap();
        let lhs = (a / rx).powi(2) + (b / ry).powi(2);
        prop_assume!((lhs - 1.0).abs() > 1e-9);
        prop_assert_eq!(e.contains(cx + a, cy + b), lhs <= 1.0);
    }

    #[test]
    fn boundary_points_are_contained(e in arb_ellipse(), t in -100.0..100.0f64) {
        let (x, y) = e.evaluate_parametric(t);
        prop_assert!(e.contains_eps(x, y, 1e-9), "level={}", e.level(x, y));
    }

    #[test]
    fn parametric_is_periodic(e in arb_ellipse(), t in -10.0..10.0f64) {
        let p = e.point_at(t);
        let q = e.point_at(t + TAU);
        prop_assert!((p - q).norm() < 1e-9 * (1.0 + p.norm()));
    }

    #[test]
    fn rotation_round_trips_through_inverse(
        e in arb_ellipse(),
        dx in -30.0..30.0f64,
        dy in -30.0..30.0f64,
    ) {
        let upright = Ellipse::new(e.center_x(), e.center_y(), e.radius_x(), e.radius_y(), 0.0).unwrap();
        let c = e.center();
        let p = c + Vec2::new(dx, dy);
        prop_assume!((e.level_at(p) - 1.0).abs() > 1e-9);
        let q = Rotation2::new(-e.rotation()) * (p - c) + c;
        prop_assert_eq!(e.contains_point(p), upright.contains_point(q));
    }

    #[test]
    fn bounding_box_encloses_and_touches(e in arb_ellipse()) {
        let b = e.bounding_box();
        let s = e.sampled_bounds(4096).unwrap();
        let tol = 1e-9 * (1.0 + e.radius_x().max(e.radius_y()) + e.center().norm());
        prop_assert!(s.x_min >= b.x_min - tol && s.x_max <= b.x_max + tol);
        prop_assert!(s.y_min >= b.y_min - tol && s.y_max <= b.y_max + tol);
        // sampling step 2π/4096 bounds the gap by r·(1 − cos(π/4096))
        let gap = 1e-3 * e.radius_x().max(e.radius_y());
        prop_assert!((b.width() - s.width()).abs() < gap);
        prop_assert!((b.height() - s.height()).abs() < gap);
    }

    #[test]
    fn center_is_inside_and_far_points_are_not(e in arb_ellipse()) {
        prop_assert!(e.contains_point(e.center()));
        let b = e.bounding_box();
        prop_assert!(!e.contains(b.x_max + 1.0, b.y_max + 1.0));
        prop_assert!(!e.contains(b.x_min - 1.0, e.center_y()));
    }

    #[test]
    fn non_positive_radius_is_rejected(r in -10.0..=0.0f64) {
        let is_radius_err = matches!(
            Ellipse::new(0.0, 0.0, r, 1.0, 0.0),
            Err(EllipseError::NonPositiveRadius { axis: Axis::X, .. })
        );
        prop_assert!(is_radius_err);
    }

    #[test]
    fn random_draws_satisfy_invariants(seed in any::<u64>(), index in any::<u64>()) {
        let e = draw_ellipse(&EllipseCfg::default(), ReplayToken { seed, index });
        prop_assert!(e.radius_x() > 0.0 && e.radius_y() > 0.0);
        prop_assert!(e.bounding_box().contains(e.point_at(0.3)));
    }
}
