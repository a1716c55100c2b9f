use serde::{Deserialize, Serialize};

use crate::Cell;

use super::animation::WorldPos;

/// Direction of a swipe in grid space. `Up` increases the row index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Column and row offset of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// The neighbour of `cell`, or `None` if it would leave the first
    /// quadrant. The upper bound is left to the board.
    #[must_use]
    pub fn step(self, cell: Cell) -> Option<Cell> {
        let (dcol, drow) = self.delta();
        cell.offset(dcol, drow)
    }
}

/// A request to exchange two neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapIntent {
    pub source: Cell,
    pub target: Cell,
}

/// Turns a drag into a [`SwapIntent`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeGesture {
    /// Shortest drag, in world units, that counts as a swipe.
    pub min_distance: f32,
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self {
            min_distance: Self::DEFAULT_MIN_DISTANCE,
        }
    }
}

impl SwipeGesture {
    pub const DEFAULT_MIN_DISTANCE: f32 = 0.3;

    #[must_use]
    pub const fn new(min_distance: f32) -> Self {
        Self { min_distance }
    }

    /// Direction of a drag by `(dx, dy)`, or `None` if it is too short.
    ///
    /// The axis with the larger displacement wins; equal displacements count
    /// as vertical.
    #[must_use]
    pub fn direction(&self, dx: f32, dy: f32) -> Option<Direction> {
        if dx.hypot(dy) < self.min_distance {
            return None;
        }
        let direction = if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        Some(direction)
    }

    #[must_use]
    pub fn intent(&self, source: Cell, dx: f32, dy: f32) -> Option<SwapIntent> {
        let target = self.direction(dx, dy)?.step(source)?;
        Some(SwapIntent { source, target })
    }

    /// Intent for a drag between two world positions.
    #[must_use]
    pub fn intent_between(&self, source: Cell, from: WorldPos, to: WorldPos) -> Option<SwapIntent> {
        self.intent(source, to.x - from.x, to.y - from.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_axis_wins() {
        let gesture = SwipeGesture::default();
        assert_eq!(gesture.direction(1.0, 0.2), Some(Direction::Right));
        assert_eq!(gesture.direction(-1.0, 0.9), Some(Direction::Left));
        assert_eq!(gesture.direction(0.1, 0.5), Some(Direction::Up));
        assert_eq!(gesture.direction(0.4, -0.6), Some(Direction::Down));
    }

    #[test]
    fn test_tie_is_vertical() {
        let gesture = SwipeGesture::default();
        assert_eq!(gesture.direction(0.5, 0.5), Some(Direction::Up));
        assert_eq!(gesture.direction(0.5, -0.5), Some(Direction::Down));
    }

    #[test]
    fn test_short_drag_is_ignored() {
        let gesture = SwipeGesture::default();
        assert_eq!(gesture.direction(0.2, 0.2), None);
        assert_eq!(gesture.intent(Cell::new(2, 2), 0.1, 0.0), None);
        // Neither axis reaches the threshold on its own, but the drag does.
        assert_eq!(gesture.direction(0.25, 0.25), Some(Direction::Up));
    }

    #[test]
    fn test_intent_targets_neighbour() {
        let gesture = SwipeGesture::default();
        let source = Cell::new(3, 4);
        assert_eq!(
            gesture.intent(source, 1.0, 0.0),
            Some(SwapIntent {
                source,
                target: Cell::new(4, 4),
            })
        );
        assert_eq!(
            gesture.intent(source, 0.0, -1.0).map(|i| i.target),
            Some(Cell::new(3, 3))
        );
    }

    #[test]
    fn test_intent_edges() {
        let gesture = SwipeGesture::default();
        assert_eq!(gesture.intent(Cell::new(0, 3), -1.0, 0.0), None);
        assert_eq!(gesture.intent(Cell::new(3, 0), 0.0, -1.0), None);
        // Past the far edge the board rejects the swap instead.
        assert_eq!(
            gesture.intent(Cell::new(5, 5), 1.0, 0.0).map(|i| i.target),
            Some(Cell::new(6, 5))
        );
    }

    #[test]
    fn test_intent_between_positions() {
        let gesture = SwipeGesture::new(0.5);
        let from = WorldPos::new(1.0, 1.0);
        assert_eq!(
            gesture.intent_between(Cell::new(1, 1), from, WorldPos::new(1.0, 1.4)),
            None
        );
        assert_eq!(
            gesture
                .intent_between(Cell::new(1, 1), from, WorldPos::new(1.0, 1.6))
                .map(|i| i.target),
            Some(Cell::new(1, 2))
        );
    }
}
