//! Terrain source abstraction — the narrow boundary to a terrain provider.

use crate::tile::{TerrainRequest, Tile};

/// Errors produced by terrain sources.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The request violates the generation contract.
    #[error("invalid terrain request: {0}")]
    InvalidRequest(String),
}

/// Async boundary to a terrain provider. Enables mocking in tests and keeps
/// callers independent of where tiles actually come from.
#[async_trait::async_trait]
pub trait TerrainSource: Send + Sync {
    /// Fetch the tile list for a generation request.
    ///
    /// Repeated calls with the same request are independent; a deterministic
    /// source returns the same tiles every time.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidRequest`] when the request parameters
    /// violate the generation contract.
    async fn fetch_terrain(&self, request: &TerrainRequest) -> Result<Vec<Tile>, SourceError>;
}
