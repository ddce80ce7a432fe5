//! Render pipeline — tiles in, drawable polygons out.

use super::color;
use super::hexagon;
use super::layout::{Bounds, Point, axial_to_pixel};
use crate::tile::Tile;

/// Error returned by [`render`].
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The hex size is not a finite, strictly positive number.
    #[error("invalid hex size: {0}")]
    InvalidHexSize(f64),
}

/// A single drawable hexagon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Corner points, clockwise in screen coordinates.
    pub points: [Point; 6],
    /// Fill color, `#rrggbb`.
    pub fill: &'static str,
    /// Outline color.
    pub stroke: &'static str,
}

impl Polygon {
    /// Corner list in SVG `points`-attribute form: `"x1,y1 x2,y2 ..."`.
    #[must_use]
    pub fn points_attr(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert tiles into drawable polygons, one per tile, in input order.
///
/// Projects every tile center onto the pixel plane, shifts the whole grid so
/// the smallest center coordinate on each axis sits at exactly `hex_size`,
/// and emits a colored hexagon around each adjusted center. The result is
/// deterministic and every vertex coordinate is non-negative.
///
/// An empty tile list renders to an empty polygon list; no bounds are
/// computed for it.
///
/// # Errors
///
/// Returns [`RenderError::InvalidHexSize`] when `hex_size` is not finite or
/// not strictly positive.
pub fn render(tiles: &[Tile], hex_size: f64) -> Result<Vec<Polygon>, RenderError> {
    if !hex_size.is_finite() || hex_size <= 0.0 {
        return Err(RenderError::InvalidHexSize(hex_size));
    }
    if tiles.is_empty() {
        return Ok(Vec::new());
    }

    let centers: Vec<Point> = tiles
        .iter()
        .map(|tile| axial_to_pixel(tile.x, tile.y, hex_size))
        .collect();
    let Some(bounds) = Bounds::of(centers.iter().copied()) else {
        return Ok(Vec::new());
    };

    Ok(tiles
        .iter()
        .zip(&centers)
        .map(|(tile, center)| Polygon {
            points: hexagon::corners(bounds.normalize(*center, hex_size), hex_size),
            fill: color::fill_for(tile.kind),
            stroke: color::STROKE,
        })
        .collect())
}
