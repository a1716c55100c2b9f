use std::fmt;

use super::{
    cell::Cell,
    fruit::{FruitKind, Token, TokenId},
};

/// A token that changed rows during a column collapse or refill.
///
/// `from_row` may be at or above the grid height for freshly spawned tokens,
/// which enter the board from above the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fall {
    pub token: TokenId,
    pub col: usize,
    pub from_row: usize,
    pub to_row: usize,
}

impl Fall {
    /// Number of rows travelled.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.from_row - self.to_row
    }
}

/// Square matrix of optional tokens.
///
/// Cells are addressed by [`Cell`] with row 0 at the bottom. Reads outside
/// the grid return `None` and writes outside it are ignored; nothing else is
/// validated, so callers keep the board invariants themselves.
///
/// The grid also hands out [`TokenId`]s, so every token spawned into it gets a
/// handle that is unique for the lifetime of the grid.
///
/// # Example
///
/// ```
/// use fruitmatch_engine::{Cell, Grid};
///
/// // Rows are given top row first.
/// let grid = Grid::from_kind_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]);
/// assert_eq!(grid.kind_at(Cell::new(0, 0)).map(|k| k.index()), Some(2));
/// assert!(grid.get(Cell::new(3, 0)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Token>>,
    next_id: u64,
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            next_id: 0,
        }
    }

    /// Builds a fully populated grid from fruit indices, top row first.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square.
    #[must_use]
    pub fn from_kind_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[u8]>,
    {
        let size = rows.len();
        let mut grid = Self::new(size);
        for (i, kinds) in rows.iter().enumerate() {
            let kinds = kinds.as_ref();
            assert_eq!(kinds.len(), size, "grid rows must form a square");
            let row = size - 1 - i;
            for (col, &kind) in kinds.iter().enumerate() {
                grid.spawn(Cell::new(col, row), FruitKind::new(kind));
            }
        }
        grid
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.size && cell.row < self.size
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.size + cell.col)
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&Token> {
        self.index(cell).and_then(|i| self.cells[i].as_ref())
    }

    #[must_use]
    pub fn kind_at(&self, cell: Cell) -> Option<FruitKind> {
        self.get(cell).map(Token::kind)
    }

    /// Stores `token` at `cell`, rewriting its coordinates to match.
    ///
    /// Out-of-range cells are ignored.
    pub fn set(&mut self, cell: Cell, token: Option<Token>) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = token.map(|mut token| {
                token.move_to(cell);
                token
            });
        }
    }

    /// Removes and returns the token at `cell`.
    pub fn take(&mut self, cell: Cell) -> Option<Token> {
        self.index(cell).and_then(|i| self.cells[i].take())
    }

    /// Creates a new token of `kind` at `cell`, replacing whatever was there.
    ///
    /// Returns `None` (and spawns nothing) if `cell` is out of range.
    pub fn spawn(&mut self, cell: Cell, kind: FruitKind) -> Option<Token> {
        let i = self.index(cell)?;
        let token = Token::new(TokenId::new(self.next_id), kind, cell);
        self.next_id += 1;
        self.cells[i] = Some(token);
        Some(token)
    }

    /// Exchanges the contents of two cells, updating token coordinates.
    ///
    /// Does nothing unless both cells are in range.
    pub fn swap(&mut self, a: Cell, b: Cell) {
        let (Some(ia), Some(ib)) = (self.index(a), self.index(b)) else {
            return;
        };
        self.cells.swap(ia, ib);
        for (i, cell) in [(ia, a), (ib, b)] {
            if let Some(token) = &mut self.cells[i] {
                token.move_to(cell);
            }
        }
    }

    /// Compacts the tokens of one column towards row 0.
    ///
    /// Surviving tokens keep their relative order; each lands on the row equal
    /// to its index among the survivors, and every cell above them becomes
    /// empty. Returns the tokens that actually moved.
    pub fn collapse_column(&mut self, col: usize) -> Vec<Fall> {
        let mut falls = vec![];
        if col >= self.size {
            return falls;
        }
        let mut write_row = 0;
        for read_row in 0..self.size {
            let Some(token) = self.take(Cell::new(col, read_row)) else {
                continue;
            };
            if read_row != write_row {
                falls.push(Fall {
                    token: token.id(),
                    col,
                    from_row: read_row,
                    to_row: write_row,
                });
            }
            self.set(Cell::new(col, write_row), Some(token));
            write_row += 1;
        }
        falls
    }

    /// Number of occupied cells in `col` counted from row 0 up to the first gap.
    #[must_use]
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.size)
            .take_while(|&row| self.get(Cell::new(col, row)).is_some())
            .count()
    }

    /// Whether every cell holds a token.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterates over every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let size = self.size;
        (0..size).flat_map(move |col| (0..size).map(move |row| Cell::new(col, row)))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.cells.iter().flatten()
    }

    /// Fruit kinds row by row, top row first. Empty cells are `None`.
    #[must_use]
    pub fn kind_rows(&self) -> Vec<Vec<Option<FruitKind>>> {
        (0..self.size)
            .rev()
            .map(|row| {
                (0..self.size)
                    .map(|col| self.kind_at(Cell::new(col, row)))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.kind_rows() {
            let mut sep = "";
            for kind in row {
                let ch = kind.map_or('.', FruitKind::as_char);
                write!(f, "{sep}{ch}")?;
                sep = " ";
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
