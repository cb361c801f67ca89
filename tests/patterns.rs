#[cfg(test)]
mod tests {
    use gol_grid::{load_grid, parse_grid, render_picture, Grid};
    use std::path::PathBuf;

    const SEED: u64 = 42;
    const FILL_RATE: f64 = 0.3;

    fn pattern(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("patterns")
            .join(name)
    }

    /// Straightforward copy-then-write step on nested vectors.
    fn reference_step(cells: &[Vec<u8>]) -> Vec<Vec<u8>> {
        let (h, w) = (cells.len() as i64, cells[0].len() as i64);
        let get = |y: i64, x: i64| {
            if (0..h).contains(&y) && (0..w).contains(&x) {
                cells[y as usize][x as usize]
            } else {
                0
            }
        };
        let mut next = cells.to_vec();
        for y in 0..h {
            for x in 0..w {
                let neibs = get(y - 1, x - 1)
                    + get(y - 1, x)
                    + get(y - 1, x + 1)
                    + get(y, x - 1)
                    + get(y, x + 1)
                    + get(y + 1, x - 1)
                    + get(y + 1, x)
                    + get(y + 1, x + 1);
                next[y as usize][x as usize] = match (get(y, x), neibs) {
                    (1, 2) | (1, 3) | (0, 3) => 1,
                    _ => 0,
                };
            }
        }
        next
    }

    fn cells_of(life: &Grid) -> Vec<Vec<u8>> {
        let snapshot = life.snapshot();
        snapshot
            .iter_rows()
            .map(|row| row.iter().map(|c| c.state()).collect())
            .collect()
    }

    fn assert_matches_reference(life: &Grid, expected: &[Vec<u8>]) {
        let actual = cells_of(life);
        if actual != expected {
            let expected = Grid::from_rows(life.rows(), life.columns(), expected).unwrap();
            panic!(
                "Mismatch at generation {}:\n{}\nexpected:\n{}",
                life.generation(),
                render_picture(life.snapshot()),
                render_picture(expected.snapshot())
            );
        }
    }

    #[test]
    fn test_consistency_with_reference() {
        for (rows, columns) in [(1, 1), (1, 7), (9, 1), (16, 16), (23, 41)] {
            let mut life = Grid::random(rows, columns, Some(SEED), FILL_RATE);
            let mut expected = cells_of(&life);
            for _ in 0..40 {
                life.compute_next_generation();
                expected = reference_step(&expected);
                assert_matches_reference(&life, &expected);
            }
        }
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let mut life = load_grid(pattern("glider.txt")).unwrap();
        let initial = cells_of(&life);
        for k in 1..=4 {
            life.advance(4, |_, _| ());
            let shifted = cells_of(&life);
            for y in 0..8 {
                for x in 0..8 {
                    let expected = if y >= k && x >= k { initial[y - k][x - k] } else { 0 };
                    assert_eq!(shifted[y][x], expected, "k={} y={} x={}", k, y, x);
                }
            }
            assert_eq!(life.population(), 5);
        }
    }

    #[test]
    fn test_blinker_file() {
        let mut life = load_grid(pattern("blinker.txt")).unwrap();
        let initial = life.clone();
        let mut snapshots = vec![];
        life.advance(2, |_, snapshot| snapshots.push(snapshot.to_string()));
        assert_eq!(snapshots[0], "00000\n00100\n00100\n00100\n00000");
        assert_eq!(snapshots[1], initial.to_string());
        assert_eq!(life, initial);
    }

    #[test]
    fn test_block_file_stays_put() {
        let mut life = load_grid(pattern("block.txt")).unwrap();
        let initial = life.to_string();
        let mut snapshots = vec![];
        life.advance(5, |generation, snapshot| {
            snapshots.push((generation, snapshot.to_string()))
        });
        assert_eq!(snapshots.len(), 5);
        for (i, (generation, snapshot)) in snapshots.iter().enumerate() {
            assert_eq!(*generation, i as u64 + 1);
            assert_eq!(snapshot, &initial);
        }
    }

    #[test]
    fn test_short_row_file_is_rejected() {
        assert!(load_grid(pattern("short_row.txt")).is_err());
    }

    #[test]
    fn test_runs_are_deterministic() {
        let run = || {
            let mut life = Grid::random(30, 50, Some(SEED), FILL_RATE);
            let mut snapshots = vec![];
            life.advance(60, |generation, snapshot| {
                snapshots.push((generation, snapshot.to_states()))
            });
            snapshots
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_advance_zero_on_loaded_grid() {
        let data = "3 3\n0 1 0\n0 1 0\n0 1 0\n";
        let mut life = parse_grid(data).unwrap();
        let mut emitted = vec![];
        life.advance(0, |generation, _| emitted.push(generation));
        assert!(emitted.is_empty());
        assert_eq!(life, parse_grid(data).unwrap());
    }

    #[test]
    fn test_load_from_written_file() {
        let path =
            std::env::temp_dir().join(format!("gol_grid_test_{}.txt", std::process::id()));
        std::fs::write(&path, "2 3\n1 1 1\n0 0 0\n").unwrap();
        let life = load_grid(&path);
        std::fs::write(&path, "2 3\n1 1 1\n0 2 0\n").unwrap();
        let broken = load_grid(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(life.unwrap().to_string(), "111\n000");
        assert!(broken.is_err());
    }
}
