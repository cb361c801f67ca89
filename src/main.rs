#![warn(clippy::all)]

//! Loads a grid file, runs the requested number of generations and prints
//! every one of them.

use anyhow::{bail, Context, Result};
use gol_grid::{load_grid, parse_generations, render_generation, CliOptions, Config};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let options = CliOptions::parse(&args)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let path = match options.path {
        Some(path) => path,
        None => PathBuf::from(prompt(&mut input, Config::FILE_PROMPT)?),
    };
    let mut grid =
        load_grid(&path).with_context(|| format!("failed to load {}", path.display()))?;

    let generations = match options.generations {
        Some(text) => text,
        None => prompt(&mut input, Config::GENERATIONS_PROMPT)?,
    };
    let generations = parse_generations(&generations)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if options.print_initial {
        render_generation(&mut out, grid.generation(), grid.snapshot())?;
    }
    let mut written = Ok(());
    grid.advance(generations, |generation, snapshot| {
        if written.is_ok() {
            written = render_generation(&mut out, generation, snapshot);
        }
    });
    written.context("failed to write to stdout")?;
    out.flush()?;

    if options.print_stats {
        eprint!("{}", grid.stats());
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input while waiting for an answer to {:?}", message.trim());
    }
    Ok(line.trim().to_string())
}
