//! Geometry and plot assembly for a right-circular cone with an Archimedean
//! spiral traced on its lateral surface.
//!
//! The mathematical core is closed form: parametric samplers for the cone
//! shell (stacked circles), the spiral, a vertical reference pole and the
//! spiral's plane-crossing support points, plus the analytic arc length of
//! the spiral. A thin retained [`Figure`](plot::Figure) layer carries trace
//! styles, grid/axis configuration and legend deduplication to whatever
//! backend renders them.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render [`Figure`](plot::Figure)s to SVG documents
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Example
//! ```
//! use conespiral::{ConicalSpiral, Figure};
//!
//! let spiral = ConicalSpiral::from_dimensions(5.0, 10.0, 2.0)?;
//! let figure = Figure::cone_and_spiral(&spiral);
//! assert!(spiral.arc_length() > 0.0);
//! assert!(!figure.traces.is_empty());
//! # Ok::<(), conespiral::errors::GeometryError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod polyline;
pub mod cone;
pub mod spiral;
pub mod plot;

#[cfg(feature = "svg-io")]
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use cone::{Cone, ConeRings};
pub use plot::Figure;
pub use polyline::Polyline3;
pub use spiral::ConicalSpiral;
