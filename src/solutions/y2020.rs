use crate::ksum::find_subset;
use crate::parse::{parse_integer, parse_lines};
use crate::{Answer, Result};

pub const EXPENSE_TARGET: i64 = 2020;

pub fn day1(input: &str) -> Result<Answer> {
    let expenses = parse_lines(input, parse_integer)?;
    let part1 = find_subset(&expenses, 2, EXPENSE_TARGET)?.product()?;
    let part2 = find_subset(&expenses, 3, EXPENSE_TARGET)?.product()?;
    Ok((part1, part2))
}
