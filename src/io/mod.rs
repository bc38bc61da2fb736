//! Rendering backends.
//!
//! Each backend consumes a [`Figure`](crate::plot::Figure) through its public
//! trace list and produces an output handle of its own; the geometry side of
//! the crate knows nothing about any of them.

pub mod svg;
