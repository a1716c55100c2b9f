use chrono::{DateTime, Utc};
use fruitmatch_engine::{BoardSeed, FillReport, GameStats};
use serde::{Deserialize, Serialize};

/// Outcome of one headless game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedSession {
    /// Timestamp when the game finished (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Seed used for the initial board and every refill
    pub seed: BoardSeed,
    /// Board edge after clamping
    pub grid_size: usize,
    /// How the initial board was dealt
    pub fill: FillReport,
    /// Final game statistics, including cascades that settled after the timer
    pub final_stats: GameStats,
    /// Frames simulated, including the ones spent settling after game over
    pub frames: u64,
    pub swaps: SwapCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapCounts {
    /// Swaps the board accepted (including ones that reverted)
    pub accepted: usize,
    /// Swaps turned away, e.g. aimed past the edge of the board
    pub rejected: usize,
}
