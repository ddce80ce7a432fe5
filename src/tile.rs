//! Terrain domain model — tiles, terrain kinds, and generation requests.

use serde::{Deserialize, Serialize};

/// Terrain classification for a single hex tile.
///
/// The enum is closed: labels the generation service emits map onto the six
/// named kinds, and anything else lands on [`TerrainKind::Unknown`] rather
/// than failing. Downstream mappings (fill colors, wire labels) are total
/// over all variants by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainKind {
    Lake,
    Forest,
    Mountain,
    Desert,
    Plains,
    Hills,
    /// Any unrecognized terrain label.
    #[serde(other)]
    Unknown,
}

impl TerrainKind {
    /// Parse a wire label. Unrecognized labels become [`TerrainKind::Unknown`].
    ///
    /// Labels are matched exactly; the service emits them lowercase.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "lake" => Self::Lake,
            "forest" => Self::Forest,
            "mountain" => Self::Mountain,
            "desert" => Self::Desert,
            "plains" => Self::Plains,
            "hills" => Self::Hills,
            _ => Self::Unknown,
        }
    }

    /// Canonical lowercase wire label for this kind.
    #[must_use]
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Lake => "lake",
            Self::Forest => "forest",
            Self::Mountain => "mountain",
            Self::Desert => "desert",
            Self::Plains => "plains",
            Self::Hills => "hills",
            Self::Unknown => "unknown",
        }
    }
}

/// One hex tile on the axial grid. Immutable once received.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Axial column.
    pub x: i32,
    /// Axial row.
    pub y: i32,
    /// Terrain classification.
    #[serde(rename = "terrain_type")]
    pub kind: TerrainKind,
}

/// Parameters for a terrain generation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainRequest {
    /// Number of land hexagons to generate. Sources reject zero.
    pub total_land_hexagons: u32,
    /// Ask the service to store the generated terrain. Sources without a
    /// store accept and ignore this.
    pub persist: bool,
}

#[cfg(test)]
#[path = "tile_test.rs"]
mod tests;
