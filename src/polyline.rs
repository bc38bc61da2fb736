//! Ordered 3D point sequences produced by the samplers.

use crate::float_types::Real;
use nalgebra::Point3;

/// An ordered polyline in 3D space.
///
/// Produced by the cone, spiral, pole and support-point samplers and consumed
/// by plotting backends as `(x, y, z)` coordinate sequences. A single-point
/// polyline is a valid degenerate case, used for marker-only traces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline3 {
    pub points: Vec<Point3<Real>>,
}

impl Polyline3 {
    #[inline]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    #[inline]
    pub fn from_points(points: Vec<Point3<Real>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&Point3<Real>> {
        self.points.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Point3<Real>> {
        self.points.last()
    }

    /// X coordinates in order, for sinks that want split coordinate arrays.
    pub fn xs(&self) -> impl Iterator<Item = Real> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// Y coordinates in order.
    pub fn ys(&self) -> impl Iterator<Item = Real> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Z coordinates in order.
    pub fn zs(&self) -> impl Iterator<Item = Real> + '_ {
        self.points.iter().map(|p| p.z)
    }

    /// Returns the axis-aligned bounds `[min_x, min_y, min_z, max_x, max_y, max_z]`,
    /// or `None` for an empty polyline.
    pub fn bounding_box(&self) -> Option<[Real; 6]> {
        if self.points.is_empty() {
            return None;
        }

        let mut bounds = [
            Real::MAX,
            Real::MAX,
            Real::MAX,
            Real::MIN,
            Real::MIN,
            Real::MIN,
        ];
        for p in &self.points {
            bounds[0] = bounds[0].min(p.x);
            bounds[1] = bounds[1].min(p.y);
            bounds[2] = bounds[2].min(p.z);
            bounds[3] = bounds[3].max(p.x);
            bounds[4] = bounds[4].max(p.y);
            bounds[5] = bounds[5].max(p.z);
        }
        Some(bounds)
    }
}

/// `count` evenly spaced values over `[start, stop]`.
///
/// The final value is forced to equal `stop` exactly, so endpoint-sensitive
/// samplers (apex ring, spiral terminus) land on the boundary rather than one
/// rounding error away from it.
pub(crate) fn linspace(start: Real, stop: Real, count: usize) -> Vec<Real> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / ((count - 1) as Real);
            let mut values: Vec<Real> =
                (0..count).map(|i| start + step * i as Real).collect();
            values[count - 1] = stop;
            values
        },
    }
}
