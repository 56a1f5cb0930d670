//! Search for `k` entries of a list that add up to a target.
//!
//! A subset is a set of `k` distinct positions in the input. The same value may appear more than
//! once in a subset when it occurs at more than one position, but a position is never reused.
//! When several subsets match, the one whose positions come first in lexicographic order wins.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Error, Result};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Subset {
    /// Positions in the input, strictly increasing.
    pub indices: Vec<usize>,
    pub values: Vec<i64>,
}

impl Subset {
    pub fn product(&self) -> Result<i64> {
        self.values
            .iter()
            .try_fold(1i64, |acc, &v| acc.checked_mul(v))
            .ok_or(Error::Overflow {
                what: "subset product",
            })
    }
}

pub fn find_subset(values: &[i64], k: usize, target: i64) -> Result<Subset> {
    if k == 0 {
        return Err(Error::NotFound { k, target });
    }

    // Every position holding a value, in ascending order.
    let mut positions: FxHashMap<i64, Vec<usize>> = FxHashMap::default();
    for (i, &v) in values.iter().enumerate() {
        positions.entry(v).or_default().push(i);
    }

    let mut chosen = Vec::with_capacity(k);
    if !search(values, &positions, 0, k, target, &mut chosen) {
        return Err(Error::NotFound { k, target });
    }
    debug!(k, target, indices = ?chosen, "found subset");
    Ok(Subset {
        values: chosen.iter().map(|&i| values[i]).collect(),
        indices: chosen,
    })
}

fn search(
    values: &[i64],
    positions: &FxHashMap<i64, Vec<usize>>,
    start: usize,
    k: usize,
    target: i64,
    chosen: &mut Vec<usize>,
) -> bool {
    if k == 1 {
        let first = positions.get(&target).and_then(|at| {
            let p = at.partition_point(|&i| i < start);
            at.get(p).copied()
        });
        return match first {
            Some(i) => {
                chosen.push(i);
                true
            }
            None => false,
        };
    }

    for i in start..values.len().saturating_sub(k - 1) {
        let Some(rest) = target.checked_sub(values[i]) else {
            continue;
        };
        chosen.push(i);
        if search(values, positions, i + 1, k - 1, rest, chosen) {
            return true;
        }
        chosen.pop();
    }
    false
}
