mod parse_grid;
mod render;

pub use parse_grid::{load_grid, parse_generations, parse_grid};
pub use render::{render_generation, render_picture};
