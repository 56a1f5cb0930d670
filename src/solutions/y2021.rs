use crate::parse::{parse_integer, parse_lines, Direction, Instruction};
use crate::{Answer, Error, Result};

pub fn day1(input: &str) -> Result<Answer> {
    let depths = parse_lines(input, parse_integer)?;
    Ok((
        count_increases(&depths) as i64,
        count_window_increases(&depths) as i64,
    ))
}

pub fn count_increases(depths: &[i64]) -> usize {
    depths.windows(2).filter(|w| w[1] > w[0]).count()
}

/// Counts the 3-wide windows whose sum is larger than the previous window's.
///
/// Consecutive windows share two terms, so only the entering and leaving values matter.
pub fn count_window_increases(depths: &[i64]) -> usize {
    depths.windows(4).filter(|w| w[3] > w[0]).count()
}

pub fn day2(input: &str) -> Result<Answer> {
    let moves = parse_lines(input, str::parse::<Instruction>)?;
    let direct = moves.iter().try_fold(Position::default(), Position::steer)?;
    let aimed = moves
        .iter()
        .try_fold(Position::default(), Position::steer_with_aim)?;
    Ok((direct.product()?, aimed.product()?))
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Position {
    pub horizontal: i64,
    pub depth: i64,
    pub aim: i64,
}

fn checked(value: Option<i64>, what: &'static str) -> Result<i64> {
    value.ok_or(Error::Overflow { what })
}

impl Position {
    pub fn steer(self, m: &Instruction) -> Result<Position> {
        let x = m.magnitude;
        Ok(match m.direction {
            Direction::Down => Position {
                depth: checked(self.depth.checked_add(x), "depth")?,
                ..self
            },
            Direction::Up => Position {
                depth: checked(self.depth.checked_sub(x), "depth")?,
                ..self
            },
            Direction::Forward => Position {
                horizontal: checked(self.horizontal.checked_add(x), "horizontal position")?,
                ..self
            },
        })
    }

    pub fn steer_with_aim(self, m: &Instruction) -> Result<Position> {
        let x = m.magnitude;
        Ok(match m.direction {
            Direction::Down => Position {
                aim: checked(self.aim.checked_add(x), "aim")?,
                ..self
            },
            Direction::Up => Position {
                aim: checked(self.aim.checked_sub(x), "aim")?,
                ..self
            },
            Direction::Forward => Position {
                horizontal: checked(self.horizontal.checked_add(x), "horizontal position")?,
                depth: checked(
                    self.aim
                        .checked_mul(x)
                        .and_then(|d| self.depth.checked_add(d)),
                    "depth",
                )?,
                ..self
            },
        })
    }

    pub fn product(&self) -> Result<i64> {
        checked(self.horizontal.checked_mul(self.depth), "position product")
    }
}
