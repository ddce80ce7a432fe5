//! Terrain fill colors.

use crate::tile::TerrainKind;

/// Stroke color for every hexagon outline.
pub const STROKE: &str = "black";

/// Fill color for a terrain kind.
///
/// Total over the enum; unrecognized labels arrive as
/// [`TerrainKind::Unknown`] and render neutral gray instead of failing.
#[must_use]
pub fn fill_for(kind: TerrainKind) -> &'static str {
    match kind {
        TerrainKind::Lake => "#1f77b4",
        TerrainKind::Forest => "#2ca02c",
        TerrainKind::Mountain => "#7f7f7f",
        TerrainKind::Desert => "#dbb700",
        TerrainKind::Plains => "#8c564b",
        TerrainKind::Hills => "#bcbd22",
        TerrainKind::Unknown => "#cccccc",
    }
}
