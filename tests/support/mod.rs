//! Test support library
//! Provides helper functions shared across the integration tests.

use conespiral::float_types::Real;
use conespiral::polyline::Polyline3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Returns the approximate bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// for a set of polylines.
pub fn bounding_box(polylines: &[Polyline3]) -> [Real; 6] {
    let mut bounds = [
        Real::MAX,
        Real::MAX,
        Real::MAX,
        Real::MIN,
        Real::MIN,
        Real::MIN,
    ];

    for polyline in polylines {
        for p in &polyline.points {
            if p.x < bounds[0] {
                bounds[0] = p.x;
            }
            if p.y < bounds[1] {
                bounds[1] = p.y;
            }
            if p.z < bounds[2] {
                bounds[2] = p.z;
            }
            if p.x > bounds[3] {
                bounds[3] = p.x;
            }
            if p.y > bounds[4] {
                bounds[4] = p.y;
            }
            if p.z > bounds[5] {
                bounds[5] = p.z;
            }
        }
    }

    bounds
}

/// Independent trapezoidal-rule oracle for the spiral arc length: integrates
/// the curve-length integrand `sqrt(b^2 (t^2 + 1) + k^2)` over `[0, t_end]`.
/// The library itself never integrates numerically; this exists only to check
/// the closed form.
pub fn numeric_arc_length(b: Real, k: Real, t_end: Real, steps: usize) -> Real {
    let dt = t_end / steps as Real;
    let integrand = |t: Real| (b * b * (t * t + 1.0) + k * k).sqrt();

    let mut total = 0.0;
    for i in 0..steps {
        let t0 = dt * i as Real;
        let t1 = dt * (i + 1) as Real;
        total += 0.5 * (integrand(t0) + integrand(t1)) * dt;
    }
    total
}
