use crate::grid::checked_cell_count;
use crate::{Cell, Grid, MalformedInputError};
use std::path::Path;

/// Reads a grid file from disk, see [`parse_grid`] for the format.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, MalformedInputError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| MalformedInputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_grid(&data)
}

/// Parses a grid written as
///
/// ```text
/// <rows> <columns>
/// <row 0>
/// ...
/// ```
///
/// where every row holds `columns` symbols, `1` for alive and `0` for dead,
/// optionally separated by whitespace. Blank lines after the last row are ignored.
pub fn parse_grid(data: &str) -> Result<Grid, MalformedInputError> {
    let mut lines = data.lines();
    let header = lines
        .by_ref()
        .find(|line| !line.trim().is_empty())
        .ok_or(MalformedInputError::MissingHeader)?;
    let (rows, columns) = parse_header(header)?;
    checked_cell_count(rows, columns)?;

    let mut body = lines.collect::<Vec<_>>();
    while body.last().is_some_and(|line| line.trim().is_empty()) {
        body.pop();
    }

    // grows with the rows actually present, never with the declared size
    let mut cells = Vec::new();
    for (row, line) in body.iter().enumerate().take(rows) {
        parse_row(line, row, columns, &mut cells)?;
    }
    if body.len() != rows {
        return Err(MalformedInputError::RowCount {
            expected: rows,
            found: body.len(),
        });
    }
    Grid::from_cells(rows, columns, cells)
}

fn parse_header(line: &str) -> Result<(usize, usize), MalformedInputError> {
    let mut numbers = line.split_whitespace().map(|s| s.parse::<usize>());
    match (numbers.next(), numbers.next(), numbers.next()) {
        (Some(Ok(rows)), Some(Ok(columns)), None) => Ok((rows, columns)),
        _ => Err(MalformedInputError::InvalidHeader {
            line: line.to_string(),
        }),
    }
}

fn parse_row(
    line: &str,
    row: usize,
    columns: usize,
    cells: &mut Vec<Cell>,
) -> Result<(), MalformedInputError> {
    let mut found = 0;
    for symbol in line.chars().filter(|c| !c.is_whitespace()) {
        let cell = Cell::from_symbol(symbol).ok_or(MalformedInputError::InvalidSymbol {
            row,
            column: found,
            symbol,
        })?;
        if found < columns {
            cells.push(cell);
        }
        found += 1;
    }
    if found != columns {
        return Err(MalformedInputError::RowLength {
            row,
            expected: columns,
            found,
        });
    }
    Ok(())
}

/// Parses a generation count; negative numbers are rejected rather than clamped.
pub fn parse_generations(text: &str) -> Result<u64, MalformedInputError> {
    let text = text.trim();
    let count = text
        .parse::<i64>()
        .map_err(|source| MalformedInputError::InvalidGenerations {
            text: text.to_string(),
            source,
        })?;
    u64::try_from(count).map_err(|_| MalformedInputError::NegativeGenerations(count))
}
