//! Steps of a cascade, applied directly to a [`Grid`].
//!
//! The [`Board`](crate::Board) sequences these with presentation waits in
//! between; [`resolve_cascade`] runs them back to back for callers that have
//! no presentation at all.

use crate::{Cell, Fall, FruitKinds, FruitSource, Grid, MatchSet, ScoreSink, find_all_matches};

/// Empties every matched cell.
pub fn destroy_matches(grid: &mut Grid, matches: &MatchSet) {
    for cell in matches {
        grid.take(*cell);
    }
}

/// Applies gravity to every column and refills the gaps at the top.
///
/// Returns every token that ends up on a new row: survivors that fell and new
/// tokens, whose `from_row` starts at the grid height so that they enter from
/// above the board (the i-th new token of a column starts `i` rows higher).
pub fn collapse_and_refill<S>(grid: &mut Grid, kinds: FruitKinds, source: &mut S) -> Vec<Fall>
where
    S: FruitSource + ?Sized,
{
    let size = grid.size();
    let mut falls = vec![];
    for col in 0..size {
        falls.extend(grid.collapse_column(col));
        let survivors = grid.column_height(col);
        for (i, row) in (survivors..size).enumerate() {
            let Some(token) = grid.spawn(Cell::new(col, row), kinds.random(source)) else {
                continue;
            };
            falls.push(Fall {
                token: token.id(),
                col,
                from_row: size + i,
                to_row: row,
            });
        }
    }
    falls
}

/// Runs detect, score, destroy, collapse and refill until the grid settles.
///
/// `chain` starts at 1 and grows by one per cleared step. Returns the number of
/// steps that cleared something.
pub fn resolve_cascade<S, K>(
    grid: &mut Grid,
    kinds: FruitKinds,
    source: &mut S,
    scorer: &mut K,
) -> usize
where
    S: FruitSource + ?Sized,
    K: ScoreSink + ?Sized,
{
    let mut chain = 0;
    loop {
        let matches = find_all_matches(grid);
        if matches.is_empty() {
            return chain;
        }
        chain += 1;
        scorer.report_match(matches.len(), chain);
        destroy_matches(grid, &matches);
        collapse_and_refill(grid, kinds, source);
    }
}

#[cfg(test)]
mod tests {
    use crate::{FruitKind, MatchReport};

    use super::*;

    struct Cycle(Vec<u8>, usize);

    impl FruitSource for Cycle {
        fn uniform(&mut self, upper: u8) -> u8 {
            let value = self.0[self.1 % self.0.len()];
            self.1 += 1;
            value % upper
        }
    }

    fn kind(grid: &Grid, col: usize, row: usize) -> Option<u8> {
        grid.kind_at(Cell::new(col, row)).map(FruitKind::index)
    }

    #[test]
    fn test_refill_spawns_above_the_board() {
        let kinds = FruitKinds::new(7).unwrap();
        let mut grid = Grid::from_kind_rows(&[
            [0, 1, 2, 3, 4, 0],
            [3, 4, 0, 1, 2, 3],
            [1, 2, 3, 4, 0, 1],
            [4, 0, 1, 2, 3, 4],
            [2, 3, 4, 0, 1, 2],
            [0, 1, 2, 3, 4, 0],
        ]);
        grid.take(Cell::new(2, 0));
        grid.take(Cell::new(2, 3));

        let falls = collapse_and_refill(&mut grid, kinds, &mut Cycle(vec![5, 6], 0));

        assert!(grid.is_full());
        // Column 2 bottom to top was 2 4 1 3 0 2; rows 0 and 3 removed.
        let column: Vec<_> = (0..6).map(|row| kind(&grid, 2, row)).collect();
        assert_eq!(
            column,
            [Some(4), Some(1), Some(0), Some(2), Some(5), Some(6)]
        );

        let spawned: Vec<_> = falls
            .iter()
            .filter(|f| f.from_row >= 6)
            .map(|f| (f.from_row, f.to_row))
            .collect();
        assert_eq!(spawned, [(6, 4), (7, 5)]);
        assert!(falls.iter().all(|f| f.col == 2 && f.distance() > 0));
    }

    #[test]
    fn test_resolve_counts_chain() {
        let kinds = FruitKinds::new(7).unwrap();
        let mut grid = Grid::from_kind_rows(&[
            [0, 1, 2, 3, 4, 0],
            [3, 4, 0, 1, 2, 3],
            [1, 2, 3, 4, 0, 1],
            [4, 6, 6, 2, 3, 4],
            [2, 3, 4, 6, 6, 2],
            [5, 5, 5, 2, 4, 0],
        ]);
        let mut reports: Vec<MatchReport> = vec![];
        let steps = resolve_cascade(
            &mut grid,
            kinds,
            &mut Cycle(vec![0, 1, 2, 3, 4, 0, 1], 0),
            &mut reports,
        );

        assert_eq!(steps, 2);
        assert_eq!(reports, [MatchReport::new(3, 1), MatchReport::new(4, 2)]);
        assert!(find_all_matches(&grid).is_empty());
        assert!(grid.is_full());
    }
}
