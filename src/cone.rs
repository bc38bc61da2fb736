//! Right-circular cone surface sampling.

use crate::errors::GeometryError;
use crate::float_types::{Real, TAU, tolerance};
use crate::polyline::{Polyline3, linspace};
use nalgebra::Point3;

/// Number of stacked circles used by [`Cone::sample`].
pub const DEFAULT_RING_LEVELS: usize = 50;
/// Number of angular samples per circle used by [`Cone::sample`].
pub const DEFAULT_RING_SEGMENTS: usize = 50;

/// A right-circular cone with its base circle on the XY plane and its apex
/// on the +Z axis at `z = height`.
///
/// Radius and height should be in the same unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    radius: Real,
    height: Real,
}

/// Stacked-circle approximation of a cone's lateral surface.
///
/// A zero-radius circle degenerates to a single point that no line renderer
/// will show, so the apex is reported separately for explicit marking.
#[derive(Debug, Clone, PartialEq)]
pub struct ConeRings {
    /// One closed circle per sampled height, base first.
    pub rings: Vec<Polyline3>,
    /// Present when a sampled ring collapsed to within tolerance of the axis.
    pub apex: Option<Point3<Real>>,
}

impl Cone {
    /// Validates `radius > 0` and `height > 0` (both finite).
    pub fn new(radius: Real, height: Real) -> Result<Self, GeometryError> {
        if !radius.is_finite() {
            return Err(GeometryError::NonFinite("radius", radius));
        }
        if !height.is_finite() {
            return Err(GeometryError::NonFinite("height", height));
        }
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        if height <= 0.0 {
            return Err(GeometryError::NonPositiveHeight(height));
        }
        Ok(Self { radius, height })
    }

    #[inline]
    pub const fn radius(&self) -> Real {
        self.radius
    }

    #[inline]
    pub const fn height(&self) -> Real {
        self.height
    }

    /// Radius of the surface circle at height `z`: tapers linearly from the
    /// base radius at `z = 0` down to zero at the apex.
    #[inline]
    pub fn radius_at(&self, z: Real) -> Real {
        self.radius - z * (self.radius / self.height)
    }

    /// Samples the lateral surface as `levels` circles at evenly spaced
    /// heights over `[0, height]`, each circle sampled at `segments` angles
    /// over `[0, 2π]` inclusive (so every ring is closed by endpoint
    /// duplication).
    pub fn rings(&self, levels: usize, segments: usize) -> ConeRings {
        let phi = linspace(0.0, TAU, segments);

        let mut rings = Vec::with_capacity(levels);
        let mut apex = None;

        for z in linspace(0.0, self.height, levels) {
            let radius = self.radius_at(z);
            let points = phi
                .iter()
                .map(|&angle| Point3::new(radius * angle.cos(), radius * angle.sin(), z))
                .collect();
            rings.push(Polyline3::from_points(points));

            // A ring this small renders as nothing; record it as a point.
            if radius.abs() <= tolerance() {
                apex = Some(Point3::new(0.0, 0.0, z));
            }
        }

        ConeRings { rings, apex }
    }

    /// [`Cone::rings`] with the stock 50×50 sampling.
    #[inline]
    pub fn sample(&self) -> ConeRings {
        self.rings(DEFAULT_RING_LEVELS, DEFAULT_RING_SEGMENTS)
    }

    /// Vertical reference line through the cone's axis: one point per unit of
    /// height, with the final point always landing exactly on the apex height
    /// even when `height` is not a whole number.
    pub fn center_pole(&self) -> Polyline3 {
        let mut points = Vec::new();
        let mut index = 0usize;
        loop {
            let z = index as Real;
            if z >= self.height {
                break;
            }
            points.push(Point3::new(0.0, 0.0, z));
            index += 1;
        }
        points.push(Point3::new(0.0, 0.0, self.height));
        Polyline3::from_points(points)
    }
}
