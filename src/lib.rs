mod block;
mod engine;
mod error;
mod grid;
mod partition;
mod pattern;
mod rule;
pub mod utils;

pub use block::{Block, Cell};
pub use engine::CrittersEngine;
pub use error::{CrittersError, Result};
pub use grid::Grid;
pub use partition::{block_cells, Partition};
pub use pattern::{random_fill, Direction, Pattern, Region, Scattering};
pub use rule::RuleTable;
