pub mod y2020;
pub mod y2021;

use crate::{Answer, Error, Result};

pub type SolveFn = fn(&str) -> Result<Answer>;

#[derive(Debug, Copy, Clone)]
pub struct Solution {
    pub year: u16,
    pub day: u8,
    pub title: &'static str,
    pub solve: SolveFn,
}

/// Every solved puzzle, ordered by year then day.
pub const ALL_SOLUTIONS: &[Solution] = &[
    Solution {
        year: 2020,
        day: 1,
        title: "Report Repair",
        solve: y2020::day1,
    },
    Solution {
        year: 2021,
        day: 1,
        title: "Sonar Sweep",
        solve: y2021::day1,
    },
    Solution {
        year: 2021,
        day: 2,
        title: "Dive!",
        solve: y2021::day2,
    },
];

pub fn find(year: u16, day: u8) -> Result<&'static Solution> {
    ALL_SOLUTIONS
        .iter()
        .find(|s| s.year == year && s.day == day)
        .ok_or(Error::InvalidSelector {
            year,
            day: Some(day),
        })
}

pub fn for_year(year: u16) -> impl Iterator<Item = &'static Solution> {
    ALL_SOLUTIONS.iter().filter(move |s| s.year == year)
}
