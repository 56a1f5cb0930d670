pub mod error;
pub mod ksum;
pub mod logger;
pub mod parse;
pub mod runner;
pub mod solutions;

pub use error::{Error, Result};
pub use runner::{run, Config};
pub use solutions::{Solution, ALL_SOLUTIONS};

/// Part 1 and part 2, in that order.
pub type Answer = (i64, i64);
