//! Archimedean spiral wound around a cone's lateral surface.

use crate::cone::Cone;
use crate::errors::GeometryError;
use crate::float_types::{Real, TAU};
use crate::polyline::{Polyline3, linspace};
use nalgebra::Point3;

/// Number of parameter samples used by [`ConicalSpiral::sample`].
pub const DEFAULT_SPIRAL_SAMPLES: usize = 400;

/// An Archimedean spiral (plan-view radius grows linearly with the sweep
/// angle) traced on the lateral surface of a [`Cone`], descending from the
/// apex to the base circle.
///
/// `pitch` is the horizontal distance between successive crossings of the
/// X axis in plan view; it controls how tightly the spiral winds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicalSpiral {
    cone: Cone,
    pitch: Real,
}

impl ConicalSpiral {
    /// Validates `pitch > 0` (finite); the cone carries its own validation.
    pub fn new(cone: Cone, pitch: Real) -> Result<Self, GeometryError> {
        if !pitch.is_finite() {
            return Err(GeometryError::NonFinite("pitch", pitch));
        }
        if pitch <= 0.0 {
            return Err(GeometryError::NonPositivePitch(pitch));
        }
        Ok(Self { cone, pitch })
    }

    /// Convenience constructor validating all three scalars at once.
    pub fn from_dimensions(
        radius: Real,
        height: Real,
        pitch: Real,
    ) -> Result<Self, GeometryError> {
        Self::new(Cone::new(radius, height)?, pitch)
    }

    #[inline]
    pub const fn cone(&self) -> Cone {
        self.cone
    }

    #[inline]
    pub const fn pitch(&self) -> Real {
        self.pitch
    }

    /// Radial growth rate per radian of sweep: `b = pitch / 2π`.
    #[inline]
    pub fn growth_rate(&self) -> Real {
        self.pitch / TAU
    }

    /// Sweep angle at which the spiral reaches the base radius.
    #[inline]
    pub fn theta_limit(&self) -> Real {
        self.cone.radius() / self.growth_rate()
    }

    /// Vertical slope `m` of `z(θ) = m·θ + h`. Negative: the curve starts at
    /// the apex (`θ = 0`) and ends on the base circle (`θ = theta_limit`).
    #[inline]
    pub fn slope(&self) -> Real {
        -self.cone.height() * self.growth_rate() / self.cone.radius()
    }

    /// Point on the spiral at sweep angle `theta`.
    #[inline]
    pub fn point_at(&self, theta: Real) -> Point3<Real> {
        let b = self.growth_rate();
        Point3::new(
            b * theta * theta.cos(),
            b * theta * theta.sin(),
            self.slope() * theta + self.cone.height(),
        )
    }

    /// Samples the curve at `samples` evenly spaced sweep angles over
    /// `[0, theta_limit]`.
    pub fn sample_with(&self, samples: usize) -> Polyline3 {
        let points = linspace(0.0, self.theta_limit(), samples)
            .into_iter()
            .map(|theta| self.point_at(theta))
            .collect();
        Polyline3::from_points(points)
    }

    /// [`ConicalSpiral::sample_with`] at the stock 400 samples.
    #[inline]
    pub fn sample(&self) -> Polyline3 {
        self.sample_with(DEFAULT_SPIRAL_SAMPLES)
    }

    /// Total length of the spiral from apex to base, evaluated in closed
    /// form. Finite and positive for every valid spiral, and monotonically
    /// decreasing in the pitch (a tighter spiral wraps more, so it is
    /// longer).
    pub fn arc_length(&self) -> Real {
        let b = self.growth_rate();
        let m = self.slope();
        arc_length_antiderivative(b, m, self.theta_limit())
            - arc_length_antiderivative(b, m, 0.0)
    }

    /// Points where the spiral crosses the horizontal planes
    /// `z = 0, delta_h, 2·delta_h, … < height`, found by inverting the linear
    /// `z(θ)` relation. Used to place discrete support markers along the
    /// curve at fixed vertical intervals, e.g. for fabrication reference.
    pub fn support_points(&self, delta_h: Real) -> Result<Polyline3, GeometryError> {
        if !delta_h.is_finite() {
            return Err(GeometryError::NonFinite("delta_h", delta_h));
        }
        if delta_h <= 0.0 {
            return Err(GeometryError::NonPositiveStep(delta_h));
        }

        let height = self.cone.height();
        let slope = self.slope();

        let mut points = Vec::new();
        let mut index = 0usize;
        loop {
            let z = delta_h * index as Real;
            if z >= height {
                break;
            }
            let theta = (z - height) / slope;
            points.push(self.point_at(theta));
            index += 1;
        }
        Ok(Polyline3::from_points(points))
    }
}

/// Antiderivative of the curve-length integrand `√(b²(t²+1) + k²)` for the
/// parametrized curve `(b·t·cos t, b·t·sin t, k·t)`, evaluated at `t`.
///
/// ```text
/// L(t) = ((k² + b²)·ln(√(b²(t²+1)+k²) + b·t) + b·t·√(b²(t²+1)+k²)) / (2b)
/// ```
///
/// Callers take the difference of two evaluations; the value at a single `t`
/// is meaningful only up to the integration constant. Requires `b ≠ 0`.
pub fn arc_length_antiderivative(b: Real, k: Real, t: Real) -> Real {
    let sqr = (b * b * (t * t + 1.0) + k * k).sqrt();
    ((k * k + b * b) * (sqr + b * t).ln() + b * t * sqr) / (2.0 * b)
}
