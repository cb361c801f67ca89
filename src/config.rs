use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub struct Config;

impl Config {
    pub const ALIVE_SYMBOL: char = '1';
    pub const DEAD_SYMBOL: char = '0';

    pub const DEFAULT_SEED: u64 = 42;
    pub const DEFAULT_FILL_RATE: f64 = 0.3;

    pub const FILE_PROMPT: &'static str = "Please enter a valid file name: ";
    pub const GENERATIONS_PROMPT: &'static str = "How many generations to compute: ";
}

/// Command line of the `gol_grid` binary.
///
/// Positional arguments that are missing get prompted for on stdin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub path: Option<PathBuf>,
    /// Kept as text so that a negative count is reported as malformed input
    /// rather than as a usage error.
    pub generations: Option<String>,
    pub print_initial: bool,
    pub print_stats: bool,
}

impl CliOptions {
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut options = Self::default();
        let mut positional = Vec::new();
        let mut only_positional = false;
        for arg in args {
            match arg.as_str() {
                _ if only_positional => positional.push(arg.clone()),
                "--" => only_positional = true,
                "--initial" => options.print_initial = true,
                "--stats" => options.print_stats = true,
                // a lone negative number is a generation count, not a flag
                other if other.starts_with('-') && other.parse::<i64>().is_err() => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
                _ => positional.push(arg.clone()),
            }
        }
        if positional.len() > 2 {
            return Err(anyhow!(
                "too many arguments, usage: gol_grid [FILE] [GENERATIONS] [--initial] [--stats]"
            ));
        }
        let mut positional = positional.into_iter();
        options.path = positional.next().map(PathBuf::from);
        options.generations = positional.next();
        Ok(options)
    }
}
