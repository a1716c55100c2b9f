use std::time::Duration;

use tracing::{debug, info};

use crate::{Cell, ConfigError, FruitSource, RejectedSwap, clamp_grid_size};

use super::{
    board::Board,
    config::SessionConfig,
    fruit_generator::{BoardSeed, FruitGenerator},
    initial_fill::FillReport,
    scoring::GameStats,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Menu,
    Playing,
    GameOver,
}

/// Elapsed time after `frames` frames at `fps`, without accumulating rounding.
fn frames_to_duration(frames: u64, fps: u64) -> Duration {
    const NANOS_PER_SEC: u64 = 1_000_000_000;
    let secs = frames / fps;
    let nanos = (frames % fps) * NANOS_PER_SEC / fps;
    Duration::from_secs(secs) + Duration::from_nanos(nanos)
}

/// A timed game: menu, countdown, and game over around one [`Board`].
#[derive(Debug, Clone)]
pub struct GameSession<S = FruitGenerator> {
    board: Board<S>,
    stats: GameStats,
    session_state: SessionState,
    selected_size: usize,
    final_score: Option<usize>,
    game_duration: Duration,
    fps: u64,
    total_frames: u64,
    play_frames: u64,
}

impl GameSession<FruitGenerator> {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, FruitGenerator::new())
    }

    pub fn with_seed(config: SessionConfig, seed: BoardSeed) -> Result<Self, ConfigError> {
        Self::with_source(config, FruitGenerator::with_seed(seed))
    }
}

impl<S> GameSession<S>
where
    S: FruitSource,
{
    /// Creates a session sitting in the menu, with no board dealt.
    pub fn with_source(config: SessionConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::with_source(config.board, source)?,
            stats: GameStats::new(),
            session_state: SessionState::Menu,
            selected_size: clamp_grid_size(config.board.grid_size),
            final_score: None,
            game_duration: config.game_duration,
            fps: config.fps,
            total_frames: 0,
            play_frames: 0,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    /// Board edge used by the current or next game.
    #[must_use]
    pub fn selected_size(&self) -> usize {
        self.selected_size
    }

    /// Score of the most recently finished game.
    #[must_use]
    pub fn final_score(&self) -> Option<usize> {
        self.final_score
    }

    #[must_use]
    pub fn fps(&self) -> u64 {
        self.fps
    }

    #[must_use]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Play time elapsed in the current game.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        frames_to_duration(self.play_frames, self.fps)
    }

    #[must_use]
    pub fn time_remaining(&self) -> Duration {
        self.game_duration.saturating_sub(self.elapsed())
    }

    /// Remaining time in whole seconds, rounded up.
    #[must_use]
    pub fn remaining_seconds(&self) -> u64 {
        let remaining = self.time_remaining();
        remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
    }

    pub fn show_menu(&mut self) {
        self.board.clear_board();
        self.session_state = SessionState::Menu;
    }

    /// Deals a new board of the given size and starts the countdown.
    pub fn start_game(&mut self, grid_size: usize) -> FillReport {
        self.selected_size = clamp_grid_size(grid_size);
        self.stats = GameStats::new();
        self.play_frames = 0;
        let report = self.board.initialize_board(self.selected_size);
        self.session_state = SessionState::Playing;
        info!(
            size = self.selected_size,
            duration_secs = self.game_duration.as_secs(),
            "game started"
        );
        report
    }

    /// Starts another game with the last selected size.
    pub fn play_again(&mut self) -> FillReport {
        self.start_game(self.selected_size)
    }

    pub fn try_swap(&mut self, first: Cell, second: Cell) -> Result<(), RejectedSwap> {
        if !self.session_state.is_playing() {
            debug!(state = ?self.session_state, "swap outside of play");
            return Err(RejectedSwap::NotPlaying);
        }
        self.board.try_swap(first, second)
    }

    /// Advances the board by one frame and runs the countdown.
    ///
    /// After game over the board keeps resolving, so a cascade that was in
    /// flight still adds to the final score.
    pub fn increment_frame(&mut self) {
        let dt = frames_to_duration(self.total_frames + 1, self.fps)
            - frames_to_duration(self.total_frames, self.fps);
        self.total_frames += 1;
        self.board.tick(dt, &mut self.stats);

        match self.session_state {
            SessionState::Menu => {}
            SessionState::Playing => {
                self.play_frames += 1;
                if self.time_remaining().is_zero() {
                    self.end_game();
                }
            }
            SessionState::GameOver => self.final_score = Some(self.stats.score()),
        }
    }

    /// Stops accepting swaps and records the final score.
    pub fn end_game(&mut self) {
        if !self.session_state.is_playing() {
            return;
        }
        self.session_state = SessionState::GameOver;
        self.final_score = Some(self.stats.score());
        info!(
            score = self.stats.score(),
            longest_chain = self.stats.longest_chain(),
            settling = self.board.is_busy(),
            "game over"
        );
    }
}
