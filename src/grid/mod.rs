mod cell;
mod engine;
mod snapshot;

pub use cell::Cell;
pub use engine::Grid;
pub(crate) use engine::checked_cell_count;
pub use snapshot::Snapshot;
