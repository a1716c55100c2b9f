//! Board resolution and game flow.
//!
//! This module drives the core data structures through a game:
//!
//! - [`Board`] - Owns the grid, validates swaps, and resolves cascades
//! - [`GameSession`] - Menu, countdown and game over around one board
//! - [`GameStats`] / [`ScoreSink`] - Chain-weighted scoring
//! - [`FruitGenerator`] / [`BoardSeed`] - Deterministic fruit generation
//! - [`SwipeGesture`] - Turns drags into swap requests
//! - [`Animations`] - Pending presentation work the board waits on
//!
//! # Resolution Flow
//!
//! A swap is resolved as follows:
//!
//! 1. [`Board::try_swap`] validates the request and exchanges the tokens
//! 2. Once the swap animation is done, the board scans for matches
//! 3. No match: the swap is undone and the board becomes idle after the
//!    reverse animation
//! 4. Otherwise matched cells are cleared and reported with chain index 1
//! 5. Columns collapse, empty cells refill from above, and the scan repeats
//!    with the next chain index until nothing matches
//!
//! Callers either call [`Board::tick`] once per frame or [`Board::settle`] to
//! skip presentation entirely. Both end in the same grid.
//!
//! # Example
//!
//! ```
//! use fruitmatch_engine::{BoardSeed, Cell, GameSession, SessionConfig};
//!
//! let mut session = GameSession::with_seed(SessionConfig::default(), BoardSeed::new(7)).unwrap();
//! session.start_game(6);
//!
//! // Accepted or not, the swap never stops the clock.
//! let _ = session.try_swap(Cell::new(0, 0), Cell::new(0, 1));
//!
//! for _ in 0..60 {
//!     session.increment_frame();
//! }
//! assert_eq!(session.remaining_seconds(), 59);
//! ```

pub use self::{
    animation::{Animations, Layout, MoveTask, WorldPos},
    board::*,
    cascade::*,
    config::*,
    fruit_generator::*,
    gesture::*,
    initial_fill::*,
    scoring::*,
    session::*,
};

mod animation;
mod board;
mod cascade;
mod config;
mod fruit_generator;
mod gesture;
mod initial_fill;
mod scoring;
mod session;
