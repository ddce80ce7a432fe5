//! Hex grid rendering core.
//!
//! Pure geometry from tile list to drawable polygons: axial-to-pixel
//! projection, bounds normalization into positive drawing space, hexagon
//! vertex generation, and terrain coloring. No I/O and no randomness — the
//! SVG writer and any other drawing backend sit on top of this.

pub mod color;
pub mod hexagon;
pub mod layout;
pub mod pipeline;

pub use layout::{Bounds, Point, axial_to_pixel};
pub use pipeline::{Polygon, RenderError, render};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
