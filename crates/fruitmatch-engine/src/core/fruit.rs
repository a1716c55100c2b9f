use serde::{Deserialize, Serialize};

use crate::ConfigError;

use super::cell::Cell;

/// Source of uniformly distributed fruit indices.
///
/// Every random decision the board makes (initial fill, re-rolls during the
/// fill guarantee, refills after a clear) goes through this trait, so a
/// scripted source makes a whole cascade reproducible.
pub trait FruitSource {
    /// Returns a value in `[0, upper)`. `upper` is never zero.
    fn uniform(&mut self, upper: u8) -> u8;
}

/// Type of a fruit, an index in `[0, FruitKinds::count())`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct FruitKind(u8);

impl FruitKind {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Single character used by the text rendering of a [`Grid`](super::Grid).
    ///
    /// Kinds 0-9 render as digits, anything above as lowercase letters.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from_digit(u32::from(self.0), 36).unwrap_or('?')
    }
}

/// Number of distinct fruit kinds in play.
///
/// At least [`FruitKinds::MIN`] kinds are required: the re-roll formula needs
/// a second kind to move to, and fewer kinds make accidental three-in-a-row
/// refills too likely to keep cascades short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FruitKinds(u8);

impl FruitKinds {
    pub const MIN: u8 = 4;

    pub fn new(count: u8) -> Result<Self, ConfigError> {
        if count < Self::MIN {
            return Err(ConfigError::TooFewFruitKinds {
                min: Self::MIN,
                got: count,
            });
        }
        Ok(Self(count))
    }

    #[must_use]
    pub const fn count(self) -> u8 {
        self.0
    }

    /// Draws a uniformly random kind.
    pub fn random<S>(self, source: &mut S) -> FruitKind
    where
        S: FruitSource + ?Sized,
    {
        FruitKind(source.uniform(self.0))
    }

    /// Draws a kind guaranteed to differ from `old`.
    ///
    /// Computed as `(old + offset) mod count` with `offset` in `[1, count - 1]`.
    #[expect(clippy::cast_possible_truncation)]
    pub fn reroll<S>(self, old: FruitKind, source: &mut S) -> FruitKind
    where
        S: FruitSource + ?Sized,
    {
        let offset = 1 + u16::from(source.uniform(self.0 - 1));
        let next = (u16::from(old.0) + offset) % u16::from(self.0);
        FruitKind(next as u8)
    }
}

/// Stable handle of a token, used by presentation to track a fruit while it
/// moves between cells.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("#{_0}")]
#[serde(transparent)]
pub struct TokenId(u64);

impl TokenId {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// A fruit resting in (or moving into) one grid cell.
///
/// The grid keeps `cell` equal to the coordinates the token is stored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    kind: FruitKind,
    cell: Cell,
}

impl Token {
    pub(crate) const fn new(id: TokenId, kind: FruitKind, cell: Cell) -> Self {
        Self { id, kind, cell }
    }

    #[must_use]
    pub const fn id(&self) -> TokenId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> FruitKind {
        self.kind
    }

    #[must_use]
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    #[must_use]
    pub const fn col(&self) -> usize {
        self.cell.col
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.cell.row
    }

    pub(crate) fn move_to(&mut self, cell: Cell) {
        self.cell = cell;
    }
}
