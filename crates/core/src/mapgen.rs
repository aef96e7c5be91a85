//! Procedural cave-level generation domain split into coherent submodules.

pub mod model;
pub mod params;

mod generator;
mod grid;
mod masks;
mod regions;
mod spawn;

pub use generator::LevelGenerator;
pub use grid::Grid;
pub use masks::neighbor_mask;
pub use model::GeneratedLevel;
pub use params::{GenerationParams, ParamsError};
pub use regions::{find_all_regions, find_region};
pub use spawn::SPAWN_NOT_FOUND;

pub fn generate_level(params: GenerationParams, seed: u64) -> Result<GeneratedLevel, ParamsError> {
    Ok(LevelGenerator::new(params)?.generate(seed))
}
