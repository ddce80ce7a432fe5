//! Protobuf codec for the terrain generation service contract.
//!
//! The wire messages are hand-written prost structs with explicit field tags
//! rather than build-script codegen; the contract is three small messages and
//! keeping them in plain Rust makes the mapping to domain types auditable.

use prost::Message;

use crate::tile::{TerrainKind, TerrainRequest, Tile};

/// Error returned by the decode functions.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw bytes could not be decoded as a protobuf message.
    #[error("failed to decode protobuf message: {0}")]
    Decode(#[from] prost::DecodeError),
    /// The hexagon count on the wire is negative.
    #[error("invalid hexagon count on wire: {0}")]
    InvalidHexagonCount(i32),
}

/// Encode a terrain request into protobuf bytes.
///
/// Counts above `i32::MAX` saturate; the wire field is a signed int32.
#[must_use]
pub fn encode_request(request: &TerrainRequest) -> Vec<u8> {
    let wire = WireTerrainRequest {
        total_land_hexagons: i32::try_from(request.total_land_hexagons).unwrap_or(i32::MAX),
        persist: request.persist,
    };
    encode_message(&wire)
}

/// Decode protobuf bytes into a terrain request.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed bytes and
/// [`CodecError::InvalidHexagonCount`] when the count field is negative.
pub fn decode_request(bytes: &[u8]) -> Result<TerrainRequest, CodecError> {
    let wire = WireTerrainRequest::decode(bytes)?;
    let total_land_hexagons = u32::try_from(wire.total_land_hexagons)
        .map_err(|_| CodecError::InvalidHexagonCount(wire.total_land_hexagons))?;
    Ok(TerrainRequest {
        total_land_hexagons,
        persist: wire.persist,
    })
}

/// Encode a tile list into protobuf response bytes.
#[must_use]
pub fn encode_response(tiles: &[Tile]) -> Vec<u8> {
    let wire = WireTerrainResponse {
        tiles: tiles.iter().map(tile_to_wire).collect(),
    };
    encode_message(&wire)
}

/// Decode protobuf response bytes into a tile list.
///
/// Tiles with an unrecognized terrain label decode to
/// [`TerrainKind::Unknown`]; only structurally invalid bytes are an error.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed bytes.
pub fn decode_response(bytes: &[u8]) -> Result<Vec<Tile>, CodecError> {
    let wire = WireTerrainResponse::decode(bytes)?;
    Ok(wire.tiles.into_iter().map(wire_to_tile).collect())
}

fn encode_message(wire: &impl Message) -> Vec<u8> {
    let mut out = Vec::with_capacity(wire.encoded_len());
    // Encoding into a growable Vec<u8> is infallible; the only error prost
    // can return here is `BufferTooSmall`.
    wire.encode(&mut out).unwrap_or_default();
    out
}

fn tile_to_wire(tile: &Tile) -> WireTile {
    WireTile {
        x: tile.x,
        y: tile.y,
        terrain_type: tile.kind.as_label().to_owned(),
    }
}

fn wire_to_tile(wire: WireTile) -> Tile {
    Tile {
        x: wire.x,
        y: wire.y,
        kind: TerrainKind::from_label(&wire.terrain_type),
    }
}

#[derive(Clone, PartialEq, Message)]
struct WireTile {
    #[prost(int32, tag = "1")]
    x: i32,
    #[prost(int32, tag = "2")]
    y: i32,
    #[prost(string, tag = "3")]
    terrain_type: String,
}

#[derive(Clone, PartialEq, Message)]
struct WireTerrainRequest {
    #[prost(int32, tag = "1")]
    total_land_hexagons: i32,
    #[prost(bool, tag = "2")]
    persist: bool,
}

#[derive(Clone, PartialEq, Message)]
struct WireTerrainResponse {
    #[prost(message, repeated, tag = "1")]
    tiles: Vec<WireTile>,
}

#[cfg(test)]
#[path = "wire_test.rs"]
mod tests;
