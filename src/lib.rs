#![warn(clippy::all)]

mod config;
mod error;
mod grid;
mod utils;

pub use config::{CliOptions, Config};
pub use error::MalformedInputError;
pub use grid::{Cell, Grid, Snapshot};
pub use utils::{load_grid, parse_generations, parse_grid, render_generation, render_picture};
