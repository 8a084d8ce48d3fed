//! hailstone - counts future path crossings and reconstructs the rock
//!
//! Usage: hailstone <input> [--min N --max N] [--config settings.json]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use hailstone_engine::domain::loader;
use hailstone_engine::{Settings, StormCore, TestArea};

#[derive(Parser, Debug)]
#[command(name = "hailstone", version, about = "Hailstone crossings and rock reconstruction")]
struct Args {
    /// Hailstones: `px, py, pz @ vx, vy, vz` lines or a JSON array of records
    input: PathBuf,

    /// Settings JSON (testArea, parallel)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lower bound of a square test area
    #[arg(long, allow_hyphen_values = true, requires = "max")]
    min: Option<i64>,

    /// Upper bound of a square test area
    #[arg(long, allow_hyphen_values = true, requires = "min")]
    max: Option<i64>,

    /// Evaluate pairs on the calling thread only
    #[arg(long)]
    sequential: bool,

    /// Print the parsed hailstones as JSON and exit
    #[arg(long)]
    emit_json: bool,
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
    Ok(())
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if let (Some(min), Some(max)) = (args.min, args.max) {
        settings.test_area = TestArea::square(min, max);
    }
    if args.sequential {
        settings.parallel = false;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let settings = load_settings(&args)?;
    let particles = loader::load_path(&args.input)
        .with_context(|| format!("invalid input {}", args.input.display()))?;

    if args.emit_json {
        println!("{}", loader::to_json(&particles)?);
        return Ok(());
    }

    let storm = StormCore::new(particles, settings);
    println!("Part 1: {}", storm.crossing_count()?);

    let rock = storm.reconstruct_rock().context("could not reconstruct the rock")?;
    println!("Part 2: {}", rock.position_sum());
    Ok(())
}
