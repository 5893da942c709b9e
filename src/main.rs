use std::error::Error;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tile_mapgen::ascii::write_ascii_map;
use tile_mapgen::verify::verify_map;
use tile_mapgen::{generate_from_seed, MapGenParams};

#[derive(Parser, Debug)]
#[command(name = "tile_mapgen")]
#[command(about = "Generate a walled ASCII map tile with roads, terrain and buildings")]
struct Args {
    /// Random seed (derived from the current time if not specified)
    seed: Option<u64>,
}

/// Seconds since the UNIX epoch.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Diagnostics go to stderr; stdout carries only the map
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(time_seed);
    info!(seed, "generating map");

    let map = generate_from_seed(&MapGenParams::default(), seed)?;

    for failure in verify_map(&map).failures() {
        warn!(category = %failure.category, "{}", failure.message);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_ascii_map(&map.tiles, &mut out)?;

    Ok(())
}
