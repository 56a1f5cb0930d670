use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}: {content:?}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("no {k} values sum to {target}")]
    NotFound { k: usize, target: i64 },

    #[error("{what} does not fit in 64 bits")]
    Overflow { what: &'static str },

    #[error(
        "no solution exists for {year}{}",
        .day.map(|d| format!(" day {d}")).unwrap_or_default()
    )]
    InvalidSelector { year: u16, day: Option<u8> },
}

pub type Result<T> = std::result::Result<T, Error>;
