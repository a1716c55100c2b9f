use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Cell, FruitKinds, FruitSource, Grid, find_all_matches};

/// Upper bound on re-roll passes made by [`ensure_no_initial_matches`].
pub const MAX_FILL_ITERATIONS: usize = 100;

/// Outcome of the initial-fill guarantee.
///
/// `converged == false` is a soft anomaly: the board is used as it is and may
/// still contain a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReport {
    /// Number of re-roll passes performed.
    pub iterations: usize,
    pub converged: bool,
}

/// Fills every cell of `grid` with a uniformly random kind, column by column.
pub fn populate<S>(grid: &mut Grid, kinds: FruitKinds, source: &mut S)
where
    S: FruitSource + ?Sized,
{
    let size = grid.size();
    for col in 0..size {
        for row in 0..size {
            grid.spawn(Cell::new(col, row), kinds.random(source));
        }
    }
}

/// Re-rolls matched cells until the board holds no match.
///
/// Each pass scans the whole grid and replaces every matched token with a new
/// one of a different kind, leaving other cells alone. Replacing one cell can
/// complete a new run next to it, which the following pass picks up. Gives up
/// after [`MAX_FILL_ITERATIONS`] passes.
pub fn ensure_no_initial_matches<S>(
    grid: &mut Grid,
    kinds: FruitKinds,
    source: &mut S,
) -> FillReport
where
    S: FruitSource + ?Sized,
{
    for iterations in 0..MAX_FILL_ITERATIONS {
        let matches = find_all_matches(grid);
        if matches.is_empty() {
            return FillReport {
                iterations,
                converged: true,
            };
        }
        for cell in &matches {
            if let Some(old) = grid.kind_at(*cell) {
                grid.spawn(*cell, kinds.reroll(old, source));
            }
        }
    }

    let converged = find_all_matches(grid).is_empty();
    if !converged {
        warn!(
            iterations = MAX_FILL_ITERATIONS,
            size = grid.size(),
            kinds = kinds.count(),
            "initial fill still has matches, using board as is"
        );
    }
    FillReport {
        iterations: MAX_FILL_ITERATIONS,
        converged,
    }
}
