use super::{Cell, Snapshot};
use crate::{Config, MalformedInputError};
use std::fmt;

/// Fixed-size Game of Life field surrounded by an implicit border of dead cells.
///
/// Two buffers of the same shape are kept; every generation is computed from
/// `cells_curr` into `cells_next` and then the buffers are swapped.
#[derive(Clone, Debug)]
pub struct Grid {
    cells_curr: Vec<Cell>,
    cells_next: Vec<Cell>,
    rows: usize,
    columns: usize,
    generation: u64,
}

impl Grid {
    /// All cells dead. Panics if either dimension is zero or the cell count
    /// does not fit in memory.
    pub fn blank(rows: usize, columns: usize) -> Self {
        let len = checked_cell_count(rows, columns).unwrap_or_else(|e| panic!("{}", e));
        Self::with_cells(rows, columns, vec![Cell::Dead; len])
    }

    /// Builds a grid from row-major cells, checking them against the declared size.
    pub fn from_cells(
        rows: usize,
        columns: usize,
        cells: Vec<Cell>,
    ) -> Result<Self, MalformedInputError> {
        let expected = checked_cell_count(rows, columns)?;
        if cells.len() != expected {
            return Err(MalformedInputError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self::with_cells(rows, columns, cells))
    }

    /// Builds a grid from rows of `0`/`1` states.
    pub fn from_rows<I, R>(rows: usize, columns: usize, data: I) -> Result<Self, MalformedInputError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        checked_cell_count(rows, columns)?;
        let mut cells = Vec::new();
        let mut found = 0;
        for (row, states) in data.into_iter().enumerate() {
            found += 1;
            if row >= rows {
                continue;
            }
            let states = states.as_ref();
            if states.len() != columns {
                return Err(MalformedInputError::RowLength {
                    row,
                    expected: columns,
                    found: states.len(),
                });
            }
            for (column, &value) in states.iter().enumerate() {
                let cell = Cell::from_state(value)
                    .ok_or(MalformedInputError::InvalidState { row, column, value })?;
                cells.push(cell);
            }
        }
        if found != rows {
            return Err(MalformedInputError::RowCount {
                expected: rows,
                found,
            });
        }
        Ok(Self::with_cells(rows, columns, cells))
    }

    /// Fills the grid with random cells, each alive with probability `fill_rate`.
    /// A random seed is generated when `seed` is `None`.
    pub fn random(rows: usize, columns: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::blank(rows, columns);
        for cell in result.cells_curr.iter_mut() {
            *cell = Cell::from(rng.gen_bool(fill_rate));
        }
        result
    }

    /// [`Grid::random`] with the default seed and fill rate.
    pub fn random_default(rows: usize, columns: usize) -> Self {
        Self::random(
            rows,
            columns,
            Some(Config::DEFAULT_SEED),
            Config::DEFAULT_FILL_RATE,
        )
    }

    fn with_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Self {
        Self {
            cells_next: vec![Cell::Dead; cells.len()],
            cells_curr: cells,
            rows,
            columns,
            generation: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of generations computed since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.snapshot().population()
    }

    fn index(&self, column: i64, row: i64) -> Option<usize> {
        let column = usize::try_from(column).ok().filter(|&c| c < self.columns)?;
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        Some(column + row * self.columns)
    }

    /// Returns `1` for a living cell and `0` otherwise.
    ///
    /// Any coordinate outside the grid reads as dead.
    pub fn get_cell(&self, column: i64, row: i64) -> u8 {
        match self.index(column, row) {
            Some(idx) => self.cells_curr[idx].state(),
            None => 0,
        }
    }

    /// Panics if the cell is outside the grid or `value` is not `0` or `1`.
    pub fn set_cell(&mut self, column: usize, row: usize, value: u8) {
        assert!(
            column < self.columns && row < self.rows,
            "cell (column {}, row {}) is outside of the {}x{} grid",
            column,
            row,
            self.rows,
            self.columns
        );
        let cell = Cell::from_state(value)
            .unwrap_or_else(|| panic!("cell state must be 0 or 1, got {}", value));
        self.cells_curr[column + row * self.columns] = cell;
    }

    /// Number of living cells among the 8 surrounding ones, in `0..=8`.
    pub fn count_living_neighbors(&self, row: i64, column: i64) -> u8 {
        let mut count = 0;
        for dr in -1..=1i64 {
            for dc in -1..=1i64 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                count += self.get_cell(column.saturating_add(dc), row.saturating_add(dr));
            }
        }
        count
    }

    /// Replaces the current generation with the next one.
    ///
    /// Neighbors are counted on the current buffer only; the results go to the
    /// other buffer.
    pub fn compute_next_generation(&mut self) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let neibs = self.count_living_neighbors(row as i64, column as i64);
                let idx = column + row * self.columns;
                self.cells_next[idx] = self.cells_curr[idx].next(neibs);
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
    }

    /// Computes `generations` generations, passing each one to `on_generation`
    /// together with its number (counted since construction).
    ///
    /// `advance(0, ..)` does nothing.
    pub fn advance<F>(&mut self, generations: u64, mut on_generation: F)
    where
        F: FnMut(u64, Snapshot<'_>),
    {
        for _ in 0..generations {
            self.compute_next_generation();
            on_generation(self.generation, self.snapshot());
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.rows, self.columns, &self.cells_curr)
    }

    /// Multiline summary of the grid state.
    pub fn stats(&self) -> String {
        format!(
            "size: {}x{}\ngeneration: {}\npopulation: {}\n",
            self.rows,
            self.columns,
            self.generation,
            self.population()
        )
    }
}

/// Grids are equal when they hold the same cells, whatever their generation.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.cells_curr == other.cells_curr
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}

/// Number of cells in a `rows x columns` grid, rejecting empty grids and
/// sizes that cannot be allocated.
pub(crate) fn checked_cell_count(
    rows: usize,
    columns: usize,
) -> Result<usize, MalformedInputError> {
    if rows == 0 || columns == 0 {
        return Err(MalformedInputError::ZeroDimension { rows, columns });
    }
    rows.checked_mul(columns)
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<Cell>())
        .ok_or(MalformedInputError::TooLarge { rows, columns })
}
