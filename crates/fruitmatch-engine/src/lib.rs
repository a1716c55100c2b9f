pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a swap attempt was turned away.
///
/// A rejected swap never changes the board and never marks it busy, so callers
/// that only care about the happy path can drop the error.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum RejectedSwap {
    #[display("board is still resolving a previous swap")]
    Busy,
    #[display("no board is in play")]
    NoBoard,
    #[display("swap coordinates are outside the grid")]
    OutOfBounds,
    #[display("swap involves an empty cell")]
    EmptyCell,
    #[display("session is not in the playing state")]
    NotPlaying,
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("at least {min} fruit kinds are required, got {got}")]
    TooFewFruitKinds { min: u8, got: u8 },
    #[display("tile spacing must be positive with finite fall times, got {spacing}")]
    InvalidTileSpacing { spacing: f32 },
    #[display("frame rate must be positive")]
    ZeroFps,
}
