//! Level preview CLI: run one generation and print the result as ASCII,
//! together with the spawn point and the determinism fingerprint.

mod seed;

use anyhow::{Context, Result};
use cavegen::mapgen::{self, GeneratedLevel, GenerationParams};
use cavegen::types::{CellState, Pos};
use clap::Parser;
use std::fs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the generation run; derived from system time when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// Path to a JSON file with generation parameters
    #[arg(short, long)]
    params: Option<String>,
    /// Level width in cells
    #[arg(long)]
    width: Option<usize>,
    /// Level height in cells
    #[arg(long)]
    height: Option<usize>,
    /// Forced-wall margin thickness
    #[arg(long)]
    border_width: Option<usize>,
    /// Initial wall probability in percent (0-100)
    #[arg(long)]
    density: Option<u32>,
    /// Number of smoothing passes
    #[arg(long)]
    smoothing_passes: Option<u32>,
    /// Minimum connected-region size kept by cleanup (0 disables cleanup)
    #[arg(long)]
    min_region_size: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let params = resolve_params(&args)?;
    let seed = args.seed.unwrap_or_else(seed::generate_runtime_seed);
    let level = mapgen::generate_level(params, seed)
        .context("generation parameters were rejected")?;

    print!("{}", render_ascii(&level));
    match level.spawn_point() {
        Some(spawn) => println!("Spawn point: ({}, {})", spawn.x, spawn.y),
        None => println!("Spawn point: none (no open cell has a fully open neighborhood)"),
    }
    println!("Seed: {seed}");
    println!("Fingerprint: {:016x}", level.fingerprint());

    Ok(())
}

fn resolve_params(args: &Args) -> Result<GenerationParams> {
    let mut params = match &args.params {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read params file: {path}"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse params file: {path}"))?
        }
        None => GenerationParams::default(),
    };

    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    if let Some(border_width) = args.border_width {
        params.border_width = border_width;
    }
    if let Some(density) = args.density {
        params.density = density;
    }
    if let Some(smoothing_passes) = args.smoothing_passes {
        params.smoothing_passes = smoothing_passes;
    }
    if let Some(min_region_size) = args.min_region_size {
        params.min_region_size = min_region_size;
    }

    Ok(params)
}

fn render_ascii(level: &GeneratedLevel) -> String {
    let spawn = level.spawn_point();
    let mut out = String::with_capacity((level.width + 1) * level.height);
    for y in 0..level.height as i32 {
        for x in 0..level.width as i32 {
            let pos = Pos { y, x };
            let glyph = if spawn == Some(pos) {
                '@'
            } else {
                match level.cell_at(pos) {
                    CellState::Wall => '#',
                    CellState::Open => '.',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
