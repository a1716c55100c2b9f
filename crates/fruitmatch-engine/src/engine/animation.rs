use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Cell, TokenId};

/// Extra wait after every batch of falling tokens.
pub(crate) const SETTLE_MARGIN: Duration = Duration::from_millis(50);
/// Additional fall time per world unit travelled.
pub(crate) const FALL_SECS_PER_UNIT: f32 = 0.02;

/// Position in world space, used only by presentation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

/// Maps grid coordinates to world positions.
///
/// The grid is centred horizontally on the world origin and sits half a unit
/// below it vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    origin: WorldPos,
    spacing: f32,
}

impl Layout {
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(size: usize, spacing: f32) -> Self {
        let extent = size.saturating_sub(1) as f32 * spacing;
        Self {
            origin: WorldPos::new(-extent / 2.0, -extent / 2.0 - 0.5),
            spacing,
        }
    }

    /// World position of a cell centre. Rows at or above the grid height are
    /// valid and describe spawn points above the visible board.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn grid_to_world(&self, col: usize, row: usize) -> WorldPos {
        WorldPos::new(
            self.origin.x + col as f32 * self.spacing,
            self.origin.y + row as f32 * self.spacing,
        )
    }

    /// Nearest cell centre to `pos`, or `None` if it falls outside a
    /// `size × size` grid.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn world_to_cell(&self, pos: WorldPos, size: usize) -> Option<Cell> {
        let col = ((pos.x - self.origin.x) / self.spacing).round();
        let row = ((pos.y - self.origin.y) / self.spacing).round();
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        let cell = Cell::new(col as usize, row as usize);
        (cell.col < size && cell.row < size).then_some(cell)
    }

    /// Time a token takes to fall `rows` cells.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fall_duration(&self, base: Duration, rows: usize) -> Duration {
        let distance = rows as f32 * self.spacing;
        let travel = Duration::try_from_secs_f32(distance * FALL_SECS_PER_UNIT)
            .unwrap_or(Duration::MAX);
        base.saturating_add(travel)
    }
}

/// An in-flight visual move of one token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTask {
    token: TokenId,
    from: WorldPos,
    to: WorldPos,
    duration: Duration,
    elapsed: Duration,
}

impl MoveTask {
    #[must_use]
    pub fn new(token: TokenId, from: WorldPos, to: WorldPos, duration: Duration) -> Self {
        Self {
            token,
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn token(&self) -> TokenId {
        self.token
    }

    #[must_use]
    pub fn from(&self) -> WorldPos {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> WorldPos {
        self.to
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fraction of the move completed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn position(&self) -> WorldPos {
        self.from.lerp(self.to, self.progress())
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }
}

/// Every pending visual task of a board, tracked in one place.
///
/// The board treats this as a barrier: a phase only advances once all moves
/// are done and the delay timer has run out. Completed moves are dropped, so a
/// token without a task rests at its grid position.
#[derive(Debug, Clone, Default)]
pub struct Animations {
    moves: Vec<MoveTask>,
    delay: Duration,
}

impl Animations {
    /// Queues a move. Zero-length moves complete immediately and are not kept.
    pub fn push_move(&mut self, task: MoveTask) {
        if !task.is_done() {
            self.moves.push(task);
        }
    }

    /// Extends the delay timer to at least `delay`.
    pub fn wait(&mut self, delay: Duration) {
        self.delay = self.delay.max(delay);
    }

    pub fn advance(&mut self, dt: Duration) {
        for task in &mut self.moves {
            task.advance(dt);
        }
        self.moves.retain(|task| !task.is_done());
        self.delay = self.delay.saturating_sub(dt);
    }

    /// Completes everything at once.
    pub fn finish_all(&mut self) {
        self.moves.clear();
        self.delay = Duration::ZERO;
    }

    /// Discards all pending work and returns how many moves were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.moves.len();
        self.finish_all();
        dropped
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.moves.is_empty() && self.delay.is_zero()
    }

    pub fn moves(&self) -> impl Iterator<Item = &MoveTask> + '_ {
        self.moves.iter()
    }

    /// Current animated position of `token`, if it is moving.
    #[must_use]
    pub fn position_of(&self, token: TokenId) -> Option<WorldPos> {
        self.moves
            .iter()
            .find(|task| task.token == token)
            .map(MoveTask::position)
    }
}
