use super::Cell;
use std::fmt;

/// Read-only view of one generation of a [`Grid`](super::Grid).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot<'a> {
    rows: usize,
    columns: usize,
    cells: &'a [Cell],
}

impl<'a> Snapshot<'a> {
    pub(super) fn new(rows: usize, columns: usize, cells: &'a [Cell]) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [Cell]> {
        self.cells.chunks_exact(self.columns)
    }

    /// Row-major `0`/`1` states.
    pub fn to_states(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.state()).collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
