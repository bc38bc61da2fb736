//! Geometry parameter validation errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the ways a set of cone/spiral parameters can be invalid.
///
/// Every constructor validates its scalars up front, so no internal
/// arithmetic can divide by zero or take the logarithm of a non-positive
/// value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (NonPositiveRadius) The cone base radius must be strictly positive
    NonPositiveRadius(Real),
    /// (NonPositiveHeight) The cone height must be strictly positive
    NonPositiveHeight(Real),
    /// (NonPositivePitch) The spiral pitch must be strictly positive
    NonPositivePitch(Real),
    /// (NonPositiveStep) The support-point height step must be strictly positive
    NonPositiveStep(Real),
    /// (NonFinite) The named parameter is NaN or infinite
    NonFinite(&'static str, Real),
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::NonPositiveRadius(value) => write!(f, "(NonPositiveRadius) The cone base radius must be strictly positive, got: {}", value),
            GeometryError::NonPositiveHeight(value) => write!(f, "(NonPositiveHeight) The cone height must be strictly positive, got: {}", value),
            GeometryError::NonPositivePitch(value) => write!(f, "(NonPositivePitch) The spiral pitch must be strictly positive, got: {}", value),
            GeometryError::NonPositiveStep(value) => write!(f, "(NonPositiveStep) The support-point height step must be strictly positive, got: {}", value),
            GeometryError::NonFinite(name, value) => write!(f, "(NonFinite) The parameter '{}' is not finite: {}", name, value),
        }
    }
}
