use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use aoc::runner::DEFAULT_YEAR;
use aoc::{logger, Config};

#[derive(Parser, Debug)]
#[command(version, about = "Line-oriented Advent of Code solutions")]
struct Cli {
    /// Day number to run; every solved day of the year when omitted
    #[arg(short, long)]
    day: Option<u8>,

    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    year: u16,

    /// Input file, instead of <DATA_DIR>/<YEAR>/<NN>.txt
    #[arg(short, long, requires = "day")]
    file: Option<PathBuf>,

    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            year: cli.year,
            day: cli.day,
            file: cli.file,
            data_dir: cli.data_dir,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = Config::from(cli);
    let results = aoc::run(&config).with_context(|| match config.day {
        Some(day) => format!("day {} of {} failed", day, config.year),
        None => format!("running {} failed", config.year),
    })?;

    let single = config.day.is_some();
    for (solution, (part1, part2)) in results {
        if !single {
            println!("Day {}: {}", solution.day, solution.title);
        }
        println!("Part 1: {}", part1);
        println!("Part 2: {}", part2);
    }
    Ok(())
}
