use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use hexvista::island::IslandGenerator;
use hexvista::render;
use hexvista::source::{SourceError, TerrainSource};
use hexvista::svg;
use hexvista::tile::TerrainRequest;
use hexvista::wire;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("terrain fetch failed: {0}")]
    Source(#[from] SourceError),
    #[error("render failed: {0}")]
    Render(#[from] render::RenderError),
    #[error("terrain payload decode failed: {0}")]
    Codec(#[from] wire::CodecError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Standalone SVG document.
    Svg,
    /// Tile list as JSON.
    Json,
    /// Tile list as protobuf response bytes.
    Pb,
}

#[derive(Parser, Debug)]
#[command(name = "hexvista", about = "Generate and render hexagonal terrain maps")]
struct Cli {
    /// Number of land hexagons to generate.
    #[arg(long, env = "HEXVISTA_TILES", default_value_t = 250)]
    tiles: u32,

    /// Hexagon radius in pixels.
    #[arg(long, env = "HEXVISTA_HEX_SIZE", default_value_t = 20.0)]
    hex_size: f64,

    /// SVG canvas width.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// SVG canvas height.
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// RNG seed; omit for a fresh island each run.
    #[arg(long)]
    seed: Option<u64>,

    /// Render tiles from a protobuf response dump instead of generating.
    #[arg(long)]
    load: Option<PathBuf>,

    /// Output file, or - for stdout.
    #[arg(long, default_value = "-")]
    out: String,

    /// Output format.
    #[arg(long, value_enum, default_value = "svg")]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let tiles = match &cli.load {
        Some(path) => {
            let tiles = wire::decode_response(&std::fs::read(path)?)?;
            tracing::info!(tiles = tiles.len(), path = %path.display(), "loaded terrain dump");
            tiles
        }
        None => {
            let generator = match cli.seed {
                Some(seed) => IslandGenerator::seeded(seed),
                None => IslandGenerator::new(),
            };
            let request = TerrainRequest {
                total_land_hexagons: cli.tiles,
                persist: false,
            };
            generator.fetch_terrain(&request).await?
        }
    };

    let output = match cli.format {
        Format::Svg => {
            let polygons = render::render(&tiles, cli.hex_size)?;
            svg::document(cli.width, cli.height, &polygons).into_bytes()
        }
        Format::Json => {
            let mut bytes = serde_json::to_vec_pretty(&tiles)?;
            bytes.push(b'\n');
            bytes
        }
        Format::Pb => wire::encode_response(&tiles),
    };

    write_output(&cli.out, &output)?;
    tracing::info!(tiles = tiles.len(), format = ?cli.format, "render complete");
    Ok(())
}

fn write_output(out: &str, bytes: &[u8]) -> Result<(), CliError> {
    if out == "-" {
        std::io::stdout().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
        tracing::info!(path = out, "wrote output");
    }
    Ok(())
}
