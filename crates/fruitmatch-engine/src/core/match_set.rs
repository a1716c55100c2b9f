use std::collections::{BTreeSet, btree_set};

use super::{MIN_MATCH_LEN, cell::Cell, fruit::FruitKind, grid::Grid};

/// Cells covered by at least one run of [`MIN_MATCH_LEN`] or more same-kind
/// tokens.
///
/// A cell that sits on both a horizontal and a vertical run appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    cells: BTreeSet<Cell>,
}

impl MatchSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Cell;
    type IntoIter = btree_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Scans every row and column for runs of [`MIN_MATCH_LEN`] or more
/// identical kinds.
///
/// Empty cells break runs and are never matched. An empty result means the
/// board is settled.
///
/// # Example
///
/// ```
/// use fruitmatch_engine::{Cell, Grid, find_all_matches};
///
/// let grid = Grid::from_kind_rows(&[
///     [3, 4, 5, 6, 7, 8],
///     [4, 5, 6, 7, 8, 3],
///     [5, 6, 7, 8, 3, 4],
///     [6, 7, 8, 3, 4, 5],
///     [7, 8, 3, 4, 5, 6],
///     [0, 0, 0, 1, 1, 2],
/// ]);
/// let matches = find_all_matches(&grid);
/// assert_eq!(matches.len(), 3);
/// assert!(matches.contains(Cell::new(2, 0)));
/// assert!(!matches.contains(Cell::new(3, 0)));
/// ```
#[must_use]
pub fn find_all_matches(grid: &Grid) -> MatchSet {
    let size = grid.size();
    let mut cells = BTreeSet::new();
    for row in 0..size {
        collect_runs(grid, (0..size).map(|col| Cell::new(col, row)), &mut cells);
    }
    for col in 0..size {
        collect_runs(grid, (0..size).map(|row| Cell::new(col, row)), &mut cells);
    }
    MatchSet { cells }
}

fn collect_runs<I>(grid: &Grid, line: I, matched: &mut BTreeSet<Cell>)
where
    I: IntoIterator<Item = Cell>,
{
    let mut run = Vec::with_capacity(grid.size());
    let mut run_kind: Option<FruitKind> = None;
    for cell in line {
        let kind = grid.kind_at(cell);
        if kind.is_none() || kind != run_kind {
            flush_run(&mut run, matched);
            run_kind = kind;
        }
        if kind.is_some() {
            run.push(cell);
        }
    }
    flush_run(&mut run, matched);
}

fn flush_run(run: &mut Vec<Cell>, matched: &mut BTreeSet<Cell>) {
    if run.len() >= MIN_MATCH_LEN {
        matched.extend(run.iter().copied());
    }
    run.clear();
}
