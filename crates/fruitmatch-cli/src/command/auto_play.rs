use std::path::PathBuf;

use chrono::Utc;
use fruitmatch_engine::{
    Board, BoardSeed, Cell, Direction, FruitSource, GameSession, SwipeGesture, find_all_matches,
};
use rand::{Rng as _, SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg32;
use tracing::{debug, info};

use crate::{
    schema::record::{RecordedSession, SwapCounts},
    util::Output,
};

use super::BoardArg;

/// Frames a finished game may spend settling before it is cut off.
const MAX_SETTLE_FRAMES: u64 = 10_000;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    #[clap(flatten)]
    board: BoardArg,
    /// Number of games to play; game `i` uses seed `seed + i`
    #[arg(long, default_value_t = 1)]
    games: u64,
    /// Stop swapping after this many accepted swaps and let the timer run out
    #[arg(long)]
    max_swaps: Option<usize>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let AutoPlayArg {
        board: board_arg,
        games,
        max_swaps,
        output,
    } = arg;

    let config = board_arg.load_config()?;
    let base_seed = board_arg.seed();
    let size = board_arg.grid_size.unwrap_or(config.board.grid_size);

    let mut records = vec![];
    for game in 0..*games {
        let seed = BoardSeed::new(base_seed.value().wrapping_add(game));
        let mut session = GameSession::with_seed(config, seed)?;
        let mut player = AutoPlayer::new(seed);
        let fill = session.start_game(size);
        let mut swaps = SwapCounts::default();

        while session.session_state().is_playing() {
            let budget_left = max_swaps.is_none_or(|max| swaps.accepted < max);
            if budget_left && !session.board().is_busy() {
                if let Some((first, second)) = player.choose_swap(session.board()) {
                    match session.try_swap(first, second) {
                        Ok(()) => swaps.accepted += 1,
                        Err(reason) => {
                            debug!(%first, %second, %reason, "player swap rejected");
                            swaps.rejected += 1;
                        }
                    }
                }
            }
            session.increment_frame();
        }

        let mut settle_frames = 0;
        while session.board().is_busy() && settle_frames < MAX_SETTLE_FRAMES {
            session.increment_frame();
            settle_frames += 1;
        }

        let stats = session.stats().clone();
        info!(
            game,
            %seed,
            score = stats.score(),
            accepted = swaps.accepted,
            "auto-play game finished"
        );
        records.push(RecordedSession {
            recorded_at: Utc::now(),
            seed,
            grid_size: session.selected_size(),
            fill,
            final_stats: stats,
            frames: session.total_frames(),
            swaps,
        });
    }

    Output::save_json(&records, output.as_deref())
}

/// Greedy scripted player: takes the first swap that completes a run,
/// otherwise swipes a random token in a random direction.
#[derive(Debug, Clone)]
struct AutoPlayer {
    rng: Pcg32,
    gesture: SwipeGesture,
}

impl AutoPlayer {
    fn new(seed: BoardSeed) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed.value().rotate_left(32)),
            gesture: SwipeGesture::default(),
        }
    }

    fn choose_swap<S>(&mut self, board: &Board<S>) -> Option<(Cell, Cell)>
    where
        S: FruitSource,
    {
        let grid = board.grid()?;
        for source in grid.cells() {
            for direction in [Direction::Right, Direction::Up] {
                let Some(target) = direction.step(source).filter(|t| grid.contains(*t)) else {
                    continue;
                };
                let mut trial = grid.clone();
                trial.swap(source, target);
                if !find_all_matches(&trial).is_empty() {
                    return Some((source, target));
                }
            }
        }
        self.random_swipe(grid.size())
    }

    /// A drag from a random cell, as a player would make it on screen.
    fn random_swipe(&mut self, size: usize) -> Option<(Cell, Cell)> {
        let source = Cell::new(
            self.rng.random_range(0..size),
            self.rng.random_range(0..size),
        );
        let direction = Direction::ALL.choose(&mut self.rng)?;
        let (dcol, drow) = direction.delta();
        let length = self.rng.random_range(0.5..1.0_f32);
        #[expect(clippy::cast_precision_loss)]
        let (dx, dy) = (dcol as f32 * length, drow as f32 * length);
        let intent = self.gesture.intent(source, dx, dy)?;
        Some((intent.source, intent.target))
    }
}
