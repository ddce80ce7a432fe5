//! Bundled island generator — flood-fill terrain with neighbor-affinity
//! weighting.
//!
//! Reproduces the generation service's algorithm locally: a breadth-first
//! flood fill from the origin guarantees one contiguous island with unique
//! coordinates, and each tile's kind is drawn from a weighted distribution
//! biased by the kinds already placed next to it, so terrain comes out in
//! clumps rather than noise.

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::source::{SourceError, TerrainSource};
use crate::tile::{TerrainKind, TerrainRequest, Tile};

/// Axial neighbor offsets.
const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, -1), (-1, 1)];

/// Kinds the generator can place, in affinity-row order.
const GENERATABLE: [TerrainKind; 6] = [
    TerrainKind::Mountain,
    TerrainKind::Hills,
    TerrainKind::Forest,
    TerrainKind::Plains,
    TerrainKind::Desert,
    TerrainKind::Lake,
];

/// Local [`TerrainSource`] producing a contiguous island around the origin.
///
/// A fresh RNG is drawn per call, so an unseeded generator gives a new island
/// every time while a seeded one is fully deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct IslandGenerator {
    seed: Option<u64>,
}

impl IslandGenerator {
    /// Generator with OS-seeded randomness.
    #[must_use]
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Generator that produces the same island on every call.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

#[async_trait::async_trait]
impl TerrainSource for IslandGenerator {
    async fn fetch_terrain(&self, request: &TerrainRequest) -> Result<Vec<Tile>, SourceError> {
        if request.total_land_hexagons == 0 {
            return Err(SourceError::InvalidRequest(
                "total_land_hexagons must be greater than 0".to_owned(),
            ));
        }
        if request.persist {
            tracing::debug!("persist requested but no store is attached; ignoring");
        }

        let started = Instant::now();
        let total = usize::try_from(request.total_land_hexagons).unwrap_or(usize::MAX);
        let mut rng = self.rng();
        let tiles = generate_island(total, &mut rng);

        tracing::info!(
            tiles = tiles.len(),
            seeded = self.seed.is_some(),
            elapsed_s = started.elapsed().as_secs_f64(),
            "terrain generation complete"
        );
        Ok(tiles)
    }
}

/// Flood fill outward from `(0, 0)` until `total` tiles are placed.
///
/// Every placed tile enqueues all six neighbors, so the frontier never runs
/// dry before the count is reached and the island is contiguous by
/// construction.
fn generate_island(total: usize, rng: &mut StdRng) -> Vec<Tile> {
    let mut tiles: Vec<Tile> = Vec::with_capacity(total);
    let mut placed: HashMap<(i32, i32), TerrainKind> = HashMap::new();
    let mut frontier: VecDeque<(i32, i32)> = VecDeque::from([(0, 0)]);

    while let Some((x, y)) = frontier.pop_front() {
        if tiles.len() >= total {
            break;
        }
        if placed.contains_key(&(x, y)) {
            continue;
        }

        let neighbors: Vec<TerrainKind> = NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|(dx, dy)| placed.get(&(x + dx, y + dy)).copied())
            .collect();
        let kind = choose_kind(&neighbors, rng);

        placed.insert((x, y), kind);
        tiles.push(Tile { x, y, kind });
        tracing::debug!(x, y, kind = kind.as_label(), "placed tile");

        for (dx, dy) in NEIGHBOR_OFFSETS {
            frontier.push_back((x + dx, y + dy));
        }
    }

    tiles
}

/// Draw a kind weighted by affinity with the already-placed neighbors.
///
/// No neighbors, or neighbors whose affinities all sum to zero, fall back to
/// a uniform draw.
fn choose_kind(neighbors: &[TerrainKind], rng: &mut StdRng) -> TerrainKind {
    if neighbors.is_empty() {
        return GENERATABLE[rng.random_range(0..GENERATABLE.len())];
    }

    let weights: Vec<f64> = (0..GENERATABLE.len())
        .map(|candidate| {
            neighbors
                .iter()
                .map(|neighbor| affinity_row(*neighbor)[candidate])
                .sum()
        })
        .collect();

    // WeightedIndex rejects an all-zero weight vector.
    match WeightedIndex::new(&weights) {
        Ok(dist) => GENERATABLE[dist.sample(rng)],
        Err(_) => GENERATABLE[rng.random_range(0..GENERATABLE.len())],
    }
}

/// Affinity of each candidate kind (in [`GENERATABLE`] order) for growing
/// next to `neighbor`. Each row sums to 1.
fn affinity_row(neighbor: TerrainKind) -> [f64; 6] {
    match neighbor {
        TerrainKind::Mountain => [0.4, 0.3, 0.1, 0.1, 0.1, 0.0],
        TerrainKind::Hills => [0.3, 0.3, 0.2, 0.1, 0.1, 0.0],
        TerrainKind::Forest => [0.1, 0.2, 0.4, 0.2, 0.0, 0.1],
        TerrainKind::Plains => [0.1, 0.1, 0.2, 0.4, 0.1, 0.1],
        TerrainKind::Desert => [0.1, 0.1, 0.0, 0.1, 0.6, 0.1],
        TerrainKind::Lake => [0.0, 0.0, 0.1, 0.1, 0.1, 0.7],
        TerrainKind::Unknown => [0.0; 6],
    }
}

#[cfg(test)]
#[path = "island_test.rs"]
mod tests;
