pub mod mapgen;
pub mod types;

pub use mapgen::{GeneratedLevel, GenerationParams, LevelGenerator, ParamsError};
pub use types::*;
