use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// Parses every line of `input` into a record.
///
/// Surrounding whitespace is stripped before `parse` sees a line and trailing blank lines are
/// ignored. The first line `parse` rejects aborts the whole input.
pub fn parse_lines<T>(
    input: &str,
    parse: fn(&str) -> std::result::Result<T, String>,
) -> Result<Vec<T>> {
    input
        .trim_end()
        .lines()
        .enumerate()
        .map(|(i, line)| {
            parse(line.trim()).map_err(|reason| Error::Parse {
                line: i + 1,
                content: line.to_string(),
                reason,
            })
        })
        .collect()
}

pub fn parse_integer(s: &str) -> std::result::Result<i64, String> {
    s.parse::<i64>()
        .map_err(|e| format!("expected an integer: {}", e))
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Down,
    Up,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Instruction {
    pub direction: Direction,
    pub magnitude: i64,
}

static INSTRUCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+) +([0-9]+)$").expect("valid instruction pattern"));

impl FromStr for Instruction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Instruction, String> {
        let caps = INSTRUCTION
            .captures(s)
            .ok_or_else(|| "expected `<direction> <magnitude>`".to_string())?;
        let direction = match &caps[1] {
            "forward" => Direction::Forward,
            "down" => Direction::Down,
            "up" => Direction::Up,
            other => return Err(format!("expected forward/down/up, got {}", other)),
        };
        let magnitude = caps[2]
            .parse::<i64>()
            .map_err(|e| format!("bad magnitude {}: {}", &caps[2], e))?;
        Ok(Instruction {
            direction,
            magnitude,
        })
    }
}
