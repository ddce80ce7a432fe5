//! Hex terrain fetch-and-render pipeline.
//!
//! Terrain arrives as a list of tiles on an axial hex grid, produced by a
//! generation service. This crate owns the narrow async boundary to that
//! service ([`source`]), its protobuf contract ([`wire`]), a bundled local
//! generator ([`island`]), and the pure geometry that turns tiles into
//! colored hexagon polygons ([`render`]) and SVG documents ([`svg`]).
//!
//! The rendering core is deterministic and does no I/O: the same tiles and
//! hex size always produce the same polygons, in tile order.

pub mod island;
pub mod render;
pub mod source;
pub mod svg;
pub mod tile;
pub mod wire;
