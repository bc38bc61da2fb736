mod support;

use approx::assert_relative_eq;
use conespiral::errors::GeometryError;
use conespiral::float_types::{PI, Real};
use conespiral::spiral::arc_length_antiderivative;
use conespiral::{Cone, ConicalSpiral};

#[test]
fn cone_default_sampling_is_fifty_by_fifty() {
    let cone = Cone::new(5.0, 10.0).unwrap();
    let sampling = cone.sample();

    assert_eq!(sampling.rings.len(), 50);
    for ring in &sampling.rings {
        assert_eq!(ring.len(), 50);
        // Each ring is closed by endpoint duplication. The angular endpoint
        // is 2π, so the wrap-around is exact only up to rounding.
        let first = ring.first().unwrap();
        let last = ring.last().unwrap();
        assert!(support::approx_eq(first.x, last.x, 1e-9));
        assert!(support::approx_eq(first.y, last.y, 1e-9));
    }

    let bb = support::bounding_box(&sampling.rings);
    // The base ring spans the full diameter; z covers [0, h].
    assert!(support::approx_eq(bb[0], -5.0, 1e-1));
    assert!(support::approx_eq(bb[1], -5.0, 1e-1));
    assert!(support::approx_eq(bb[2], 0.0, 1e-12));
    assert!(support::approx_eq(bb[3], 5.0, 1e-12));
    assert!(support::approx_eq(bb[5], 10.0, 1e-12));
}

#[test]
fn cone_ring_radii_taper_linearly() {
    let cone = Cone::new(4.0, 8.0).unwrap();
    assert_relative_eq!(cone.radius_at(0.0), 4.0);
    assert_relative_eq!(cone.radius_at(4.0), 2.0);
    assert_relative_eq!(cone.radius_at(8.0), 0.0);
}

#[test]
fn apex_marker_emitted_for_degenerate_ring() {
    let cone = Cone::new(5.0, 10.0).unwrap();
    let sampling = cone.sample();

    let apex = sampling
        .apex
        .expect("the degenerate apex ring must produce a point marker");
    assert_relative_eq!(apex.x, 0.0);
    assert_relative_eq!(apex.y, 0.0);
    assert_relative_eq!(apex.z, 10.0);
}

#[test]
fn center_pole_ends_exactly_at_fractional_height() {
    let cone = Cone::new(2.0, 3.5).unwrap();
    let pole = cone.center_pole();

    // 0, 1, 2, 3, then the exact apex height.
    assert_eq!(pole.len(), 5);
    assert_eq!(pole.last().unwrap().z, 3.5);
    assert!(pole.points.iter().all(|p| p.x == 0.0 && p.y == 0.0));
}

#[test]
fn center_pole_integer_height_has_no_duplicate_top() {
    let cone = Cone::new(2.0, 10.0).unwrap();
    let pole = cone.center_pole();

    assert_eq!(pole.len(), 11);
    assert_eq!(pole.last().unwrap().z, 10.0);
}

#[test]
fn spiral_derived_parameters() {
    // r=5, h=10, d=2 => b = 2/(2π) = 1/π, theta_limit = 5π, m = -2/π
    let spiral = ConicalSpiral::from_dimensions(5.0, 10.0, 2.0).unwrap();
    assert_relative_eq!(spiral.growth_rate(), 1.0 / PI);
    assert_relative_eq!(spiral.theta_limit(), 5.0 * PI);
    assert_relative_eq!(spiral.slope(), -2.0 / PI);
}

#[test]
fn spiral_starts_at_apex_and_ends_on_base_circle() {
    let spiral = ConicalSpiral::from_dimensions(5.0, 10.0, 2.0).unwrap();
    let curve = spiral.sample();
    assert_eq!(curve.len(), 400);

    let first = curve.first().unwrap();
    assert_relative_eq!(first.x, 0.0);
    assert_relative_eq!(first.y, 0.0);
    assert_relative_eq!(first.z, 10.0);

    let last = curve.last().unwrap();
    assert_relative_eq!(last.z, 0.0, epsilon = 1e-9);
    let planar = (last.x * last.x + last.y * last.y).sqrt();
    assert_relative_eq!(planar, 5.0, epsilon = 1e-9);
}

#[test]
fn spiral_z_decreases_monotonically() {
    let spiral = ConicalSpiral::from_dimensions(3.0, 12.0, 1.5).unwrap();
    let curve = spiral.sample();
    for pair in curve.points.windows(2) {
        assert!(pair[1].z < pair[0].z);
    }
}

#[test]
fn arc_length_matches_numeric_oracle() {
    let spiral = ConicalSpiral::from_dimensions(5.0, 10.0, 2.0).unwrap();
    let closed = spiral.arc_length();
    let oracle = support::numeric_arc_length(
        spiral.growth_rate(),
        spiral.slope(),
        spiral.theta_limit(),
        200_000,
    );

    assert!(closed.is_finite());
    assert!(closed > 0.0);
    assert_relative_eq!(closed, oracle, max_relative = 1e-6);
}

#[test]
fn arc_length_decreases_with_wider_pitch() {
    // A tighter spiral wraps more, so it is longer.
    let tight = ConicalSpiral::from_dimensions(5.0, 10.0, 2.0)
        .unwrap()
        .arc_length();
    let wide = ConicalSpiral::from_dimensions(5.0, 10.0, 4.0)
        .unwrap()
        .arc_length();
    assert!(tight > wide);
}

#[test]
fn arc_length_antiderivative_is_increasing() {
    let spiral = ConicalSpiral::from_dimensions(5.0, 10.0, 2.0).unwrap();
    let b = spiral.growth_rate();
    let k = spiral.slope();
    assert!(arc_length_antiderivative(b, k, 1.0) > arc_length_antiderivative(b, k, 0.0));
    assert!(arc_length_antiderivative(b, k, 2.0) > arc_length_antiderivative(b, k, 1.0));
}

#[test]
fn support_points_sit_on_height_grid_and_curve() {
    let spiral = ConicalSpiral::from_dimensions(5.0, 10.0, 2.0).unwrap();
    let supports = spiral.support_points(1.0).unwrap();

    // Planes at z = 0..=9; the apex plane itself is excluded.
    assert_eq!(supports.len(), 10);
    for (index, point) in supports.points.iter().enumerate() {
        assert_relative_eq!(point.z, index as Real, epsilon = 1e-9);

        // The planar radius must obey the Archimedean relation at the sweep
        // angle implied by this height.
        let theta = (point.z - 10.0) / spiral.slope();
        let planar = (point.x * point.x + point.y * point.y).sqrt();
        assert_relative_eq!(planar, spiral.growth_rate() * theta, epsilon = 1e-9);
    }
}

#[test]
fn support_points_respect_fractional_steps() {
    let spiral = ConicalSpiral::from_dimensions(5.0, 10.0, 2.0).unwrap();
    let supports = spiral.support_points(2.5).unwrap();

    assert_eq!(supports.len(), 4);
    assert_relative_eq!(supports.points[3].z, 7.5, epsilon = 1e-9);
}

#[test]
fn invalid_parameters_are_rejected() {
    assert_eq!(
        Cone::new(0.0, 10.0),
        Err(GeometryError::NonPositiveRadius(0.0))
    );
    assert_eq!(
        Cone::new(5.0, 0.0),
        Err(GeometryError::NonPositiveHeight(0.0))
    );
    assert_eq!(
        ConicalSpiral::from_dimensions(5.0, 10.0, 0.0),
        Err(GeometryError::NonPositivePitch(0.0))
    );
    assert_eq!(
        ConicalSpiral::from_dimensions(-1.0, 10.0, 2.0),
        Err(GeometryError::NonPositiveRadius(-1.0))
    );
    assert!(Cone::new(Real::NAN, 1.0).is_err());
    assert!(Cone::new(1.0, Real::INFINITY).is_err());

    let spiral = ConicalSpiral::from_dimensions(5.0, 10.0, 2.0).unwrap();
    assert_eq!(
        spiral.support_points(0.0),
        Err(GeometryError::NonPositiveStep(0.0))
    );
    assert_eq!(
        spiral.support_points(-0.5),
        Err(GeometryError::NonPositiveStep(-0.5))
    );
}
