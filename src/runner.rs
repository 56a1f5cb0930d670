use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::solutions::{self, Solution};
use crate::{Answer, Error, Result};

pub const DEFAULT_YEAR: u16 = 2021;

#[derive(Debug, Clone)]
pub struct Config {
    pub year: u16,
    /// `None` runs every solved day of `year`.
    pub day: Option<u8>,
    /// Overrides the input path derived from `data_dir`.
    pub file: Option<PathBuf>,
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            year: DEFAULT_YEAR,
            day: None,
            file: None,
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// `<data_dir>/<year>/<NN>.txt` unless a file was given explicitly.
    pub fn input_path(&self, day: u8) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => self
                .data_dir
                .join(self.year.to_string())
                .join(format!("{:02}.txt", day)),
        }
    }
}

pub fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

pub fn load_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn execute(solution: &Solution, input: &str) -> Result<Answer> {
    let start = Instant::now();
    let answer = (solution.solve)(input)?;
    info!(
        year = solution.year,
        day = solution.day,
        "finished in {}",
        format_duration(start.elapsed())
    );
    Ok(answer)
}

/// Runs the selected solutions in day order.
///
/// Every input is read before any solution runs, so a missing file reports nothing.
pub fn run(config: &Config) -> Result<Vec<(&'static Solution, Answer)>> {
    let selected: Vec<&'static Solution> = match config.day {
        Some(day) => vec![solutions::find(config.year, day)?],
        None => solutions::for_year(config.year).collect(),
    };
    if selected.is_empty() {
        return Err(Error::InvalidSelector {
            year: config.year,
            day: None,
        });
    }

    let inputs = selected
        .iter()
        .map(|s| {
            let path = config.input_path(s.day);
            debug!(day = s.day, path = %path.display(), "loading input");
            load_input(&path)
        })
        .collect::<Result<Vec<_>>>()?;

    selected
        .into_iter()
        .zip(inputs)
        .map(|(s, input)| Ok((s, execute(s, &input)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use indoc::indoc;
    use tempfile::TempDir;

    fn data_dir() -> anyhow::Result<TempDir> {
        let dir = tempfile::tempdir()?;
        let year = dir.path().join("2021");
        fs::create_dir(&year)?;
        fs::write(
            year.join("01.txt"),
            indoc! {"
                199
                200
                208
                210
                200
                207
                240
                269
                260
                263
            "},
        )?;
        fs::write(
            year.join("02.txt"),
            "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n",
        )?;
        Ok(dir)
    }

    #[test]
    fn test_input_path() {
        let config = Config::default();
        assert_eq!(config.input_path(2), PathBuf::from("data/2021/02.txt"));
        let config = Config {
            year: 2020,
            ..Config::default()
        };
        assert_eq!(config.input_path(1), PathBuf::from("data/2020/01.txt"));
        let config = Config {
            file: Some(PathBuf::from("elsewhere.txt")),
            ..Config::default()
        };
        assert_eq!(config.input_path(2), PathBuf::from("elsewhere.txt"));
    }

    #[test]
    fn test_run_one_day() -> anyhow::Result<()> {
        let dir = data_dir()?;
        let config = Config {
            day: Some(2),
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let results = run(&config)?;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.day, 2);
        assert_eq!(results[0].1, (150, 900));
        Ok(())
    }

    #[test]
    fn test_run_whole_year() -> anyhow::Result<()> {
        let dir = data_dir()?;
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let answers: Vec<Answer> = run(&config)?.into_iter().map(|(_, a)| a).collect();
        assert_eq!(answers, [(7, 5), (150, 900)]);
        Ok(())
    }

    #[test]
    fn test_file_override() -> anyhow::Result<()> {
        let dir = data_dir()?;
        let config = Config {
            year: 2020,
            day: Some(1),
            file: Some(dir.path().join("expenses")),
            ..Config::default()
        };
        fs::write(config.input_path(1), "1721\n979\n366\n299\n675\n1456\n")?;
        assert_eq!(run(&config)?[0].1, (514579, 241861950));
        Ok(())
    }

    #[test]
    fn test_year_selects_data_dir() -> anyhow::Result<()> {
        let dir = data_dir()?;
        fs::create_dir(dir.path().join("2020"))?;
        fs::write(
            dir.path().join("2020/01.txt"),
            "1721\n979\n366\n299\n675\n1456\n",
        )?;
        let config = Config {
            year: 2020,
            day: Some(1),
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        assert_eq!(run(&config)?[0].1, (514579, 241861950));
        Ok(())
    }

    #[test]
    fn test_missing_input() {
        let config = Config {
            day: Some(1),
            data_dir: PathBuf::from("/nonexistent/aoc-data"),
            ..Config::default()
        };
        assert!(matches!(run(&config), Err(Error::Io { .. })));
    }

    #[test]
    fn test_unknown_day() {
        let config = Config {
            day: Some(25),
            ..Config::default()
        };
        assert!(matches!(
            run(&config),
            Err(Error::InvalidSelector {
                year: 2021,
                day: Some(25)
            })
        ));
    }

    #[test]
    fn test_unknown_year() {
        let config = Config {
            year: 1999,
            ..Config::default()
        };
        assert!(matches!(
            run(&config),
            Err(Error::InvalidSelector {
                year: 1999,
                day: None
            })
        ));
    }

    #[test]
    fn test_parse_failure_reports_nothing() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::create_dir(dir.path().join("2021"))?;
        fs::write(dir.path().join("2021/01.txt"), "1\n2\nx\n")?;
        let config = Config {
            day: Some(1),
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        assert!(matches!(run(&config), Err(Error::Parse { line: 3, .. })));
        Ok(())
    }
}
