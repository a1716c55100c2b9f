use std::time::Duration;

use tracing::debug;

use crate::{
    BoardConfig, Cell, ConfigError, FruitKinds, FruitSource, Grid, MatchSet, RejectedSwap,
    ScoreSink, Token, clamp_grid_size, find_all_matches,
};

use super::{
    animation::{Animations, Layout, MoveTask, SETTLE_MARGIN, WorldPos},
    cascade,
    fruit_generator::{BoardSeed, FruitGenerator},
    initial_fill::{self, FillReport},
};

/// What the board is currently waiting for.
///
/// Every variant except `Idle` keeps the board busy. A phase only advances
/// once every pending animation of the previous step has finished, so each
/// match scan sees a grid with all prior mutations committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum BoardPhase {
    /// Settled; swaps are accepted.
    #[default]
    Idle,
    /// The two tokens have been exchanged and are moving into place.
    Swapping { first: Cell, second: Cell },
    /// The swap produced no match and has been undone.
    Reverting,
    /// Matched cells of cascade step `chain` have been emptied.
    Clearing { chain: usize },
    /// Columns of step `chain` have collapsed and refilled; tokens are falling.
    Falling { chain: usize },
}

impl BoardPhase {
    #[must_use]
    pub fn is_busy(self) -> bool {
        !self.is_idle()
    }
}

/// Owns the grid and resolves swaps and cascades.
///
/// The board is a single-threaded state machine driven by [`Board::tick`].
/// Grid mutations happen at phase boundaries; between them the board waits
/// for its [`Animations`] to drain. While busy, [`Board::try_swap`] is
/// rejected.
///
/// # Example
///
/// ```
/// use fruitmatch_engine::{Board, BoardConfig, BoardSeed, Cell, GameStats};
///
/// let mut board = Board::with_seed(BoardConfig::default(), BoardSeed::new(1)).unwrap();
/// let report = board.initialize_board(3);
/// assert!(report.converged);
/// assert_eq!(board.size(), Some(6));
///
/// let mut stats = GameStats::new();
/// if board.try_swap(Cell::new(0, 0), Cell::new(1, 0)).is_ok() {
///     board.settle(&mut stats);
/// }
/// assert!(!board.is_busy());
/// assert!(board.find_all_matches().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Board<S = FruitGenerator> {
    config: BoardConfig,
    kinds: FruitKinds,
    source: S,
    grid: Option<Grid>,
    layout: Layout,
    phase: BoardPhase,
    animations: Animations,
    last_fill: Option<FillReport>,
}

impl Board<FruitGenerator> {
    /// Creates an empty board with a randomly seeded generator.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, FruitGenerator::new())
    }

    pub fn with_seed(config: BoardConfig, seed: BoardSeed) -> Result<Self, ConfigError> {
        Self::with_source(config, FruitGenerator::with_seed(seed))
    }
}

impl<S> Board<S>
where
    S: FruitSource,
{
    /// Creates an empty board. Call [`Board::initialize_board`] to deal fruits.
    pub fn with_source(config: BoardConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            kinds: FruitKinds::new(config.fruit_kinds)?,
            layout: Layout::new(clamp_grid_size(config.grid_size), config.tile_spacing),
            config,
            source,
            grid: None,
            phase: BoardPhase::Idle,
            animations: Animations::default(),
            last_fill: None,
        })
    }

    /// Adopts a prepared grid as is, without the initial-fill guarantee.
    ///
    /// Useful for puzzles and replays; the grid size is not clamped.
    pub fn with_grid(config: BoardConfig, source: S, grid: Grid) -> Result<Self, ConfigError> {
        let mut board = Self::with_source(config, source)?;
        board.layout = Layout::new(grid.size(), config.tile_spacing);
        board.grid = Some(grid);
        Ok(board)
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Edge length of the current board, if one is in play.
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        self.grid.as_ref().map(Grid::size)
    }

    #[must_use]
    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    #[must_use]
    pub fn animations(&self) -> &Animations {
        &self.animations
    }

    /// Report of the most recent [`Board::initialize_board`].
    #[must_use]
    pub fn last_fill(&self) -> Option<FillReport> {
        self.last_fill
    }

    /// Deals a fresh board of `size × size` fruits with no initial match.
    ///
    /// `size` is clamped into `[6, 8]`. Any previous board is cleared first,
    /// including a resolution that is still in flight.
    pub fn initialize_board(&mut self, size: usize) -> FillReport {
        self.clear_board();

        let size = clamp_grid_size(size);
        let mut grid = Grid::new(size);
        initial_fill::populate(&mut grid, self.kinds, &mut self.source);
        let report =
            initial_fill::ensure_no_initial_matches(&mut grid, self.kinds, &mut self.source);
        debug!(size, iterations = report.iterations, "board initialized");

        self.layout = Layout::new(size, self.config.tile_spacing);
        self.grid = Some(grid);
        self.last_fill = Some(report);
        report
    }

    /// Destroys every token and releases the grid.
    ///
    /// Safe to call mid-resolution: pending animations are discarded and the
    /// board becomes idle.
    pub fn clear_board(&mut self) {
        let dropped = self.animations.clear();
        if self.phase.is_busy() || dropped > 0 {
            debug!(phase = ?self.phase, dropped, "aborting in-flight resolution");
        }
        self.phase = BoardPhase::Idle;
        self.grid = None;
    }

    /// Token at `(col, row)`, or `None` for empty or out-of-range cells.
    #[must_use]
    pub fn get_tile(&self, col: usize, row: usize) -> Option<&Token> {
        self.grid.as_ref()?.get(Cell::new(col, row))
    }

    #[must_use]
    pub fn grid_to_world(&self, col: usize, row: usize) -> WorldPos {
        self.layout.grid_to_world(col, row)
    }

    /// Cell under a world position, for picking the token a drag starts on.
    #[must_use]
    pub fn cell_at_world(&self, pos: WorldPos) -> Option<Cell> {
        self.layout.world_to_cell(pos, self.size()?)
    }

    /// Where presentation should draw `token` right now.
    #[must_use]
    pub fn token_position(&self, token: &Token) -> WorldPos {
        self.animations
            .position_of(token.id())
            .unwrap_or_else(|| self.grid_to_world(token.col(), token.row()))
    }

    #[must_use]
    pub fn find_all_matches(&self) -> MatchSet {
        self.grid.as_ref().map(find_all_matches).unwrap_or_default()
    }

    fn check_swap(&self, first: Cell, second: Cell) -> Result<(), RejectedSwap> {
        if self.is_busy() {
            return Err(RejectedSwap::Busy);
        }
        let grid = self.grid.as_ref().ok_or(RejectedSwap::NoBoard)?;
        if !grid.contains(first) || !grid.contains(second) {
            return Err(RejectedSwap::OutOfBounds);
        }
        if grid.get(first).is_none() || grid.get(second).is_none() {
            return Err(RejectedSwap::EmptyCell);
        }
        Ok(())
    }

    /// Exchanges two tokens and starts resolving the result.
    ///
    /// On success the exchange is already committed to the grid and the board
    /// is busy until the swap is either reverted (no match) or its cascade
    /// settles. Adjacency is not checked here; the gesture layer only produces
    /// neighbouring cells.
    pub fn try_swap(&mut self, first: Cell, second: Cell) -> Result<(), RejectedSwap> {
        self.check_swap(first, second).inspect_err(|reason| {
            debug!(%first, %second, %reason, "swap rejected");
        })?;
        if let Some(grid) = &mut self.grid {
            grid.swap(first, second);
        }
        self.animate_exchange(first, second);
        self.phase = BoardPhase::Swapping { first, second };
        Ok(())
    }

    /// Advances animations by `dt` and then every phase whose wait is over.
    pub fn tick<K>(&mut self, dt: Duration, scorer: &mut K)
    where
        K: ScoreSink + ?Sized,
    {
        self.animations.advance(dt);
        while self.phase.is_busy() && self.animations.is_idle() {
            self.advance_phase(scorer);
        }
    }

    /// Runs the current resolution to completion, skipping every wait.
    pub fn settle<K>(&mut self, scorer: &mut K)
    where
        K: ScoreSink + ?Sized,
    {
        while self.phase.is_busy() {
            self.animations.finish_all();
            self.advance_phase(scorer);
        }
        self.animations.finish_all();
    }

    fn advance_phase<K>(&mut self, scorer: &mut K)
    where
        K: ScoreSink + ?Sized,
    {
        let Some(grid) = &mut self.grid else {
            self.phase = BoardPhase::Idle;
            return;
        };
        match self.phase {
            BoardPhase::Idle => {}
            BoardPhase::Swapping { first, second } => {
                if find_all_matches(grid).is_empty() {
                    grid.swap(first, second);
                    self.animate_exchange(first, second);
                    self.phase = BoardPhase::Reverting;
                } else {
                    self.begin_cascade_step(1, scorer);
                }
            }
            BoardPhase::Reverting => self.phase = BoardPhase::Idle,
            BoardPhase::Clearing { chain } => self.collapse_and_refill(chain),
            BoardPhase::Falling { chain } => self.begin_cascade_step(chain + 1, scorer),
        }
    }

    fn begin_cascade_step<K>(&mut self, chain: usize, scorer: &mut K)
    where
        K: ScoreSink + ?Sized,
    {
        let Some(grid) = &mut self.grid else {
            return;
        };
        let matches = find_all_matches(grid);
        if matches.is_empty() {
            debug!(steps = chain - 1, "cascade settled");
            self.phase = BoardPhase::Idle;
            return;
        }
        debug!(chain, matched = matches.len(), "clearing matches");
        scorer.report_match(matches.len(), chain);
        cascade::destroy_matches(grid, &matches);
        self.animations.wait(self.config.timings.post_match_delay);
        self.phase = BoardPhase::Clearing { chain };
    }

    fn collapse_and_refill(&mut self, chain: usize) {
        let Some(grid) = &mut self.grid else {
            return;
        };
        let falls = cascade::collapse_and_refill(grid, self.kinds, &mut self.source);

        let base = self.config.timings.fall;
        let mut longest = Duration::ZERO;
        for fall in falls {
            let duration = self.layout.fall_duration(base, fall.distance());
            longest = longest.max(duration);
            self.animations.push_move(MoveTask::new(
                fall.token,
                self.layout.grid_to_world(fall.col, fall.from_row),
                self.layout.grid_to_world(fall.col, fall.to_row),
                duration,
            ));
        }
        self.animations.wait(longest.saturating_add(SETTLE_MARGIN));
        self.phase = BoardPhase::Falling { chain };
    }

    /// Schedules the visual exchange of the tokens now resting at `first` and
    /// `second`.
    fn animate_exchange(&mut self, first: Cell, second: Cell) {
        let Some(grid) = &self.grid else {
            return;
        };
        let duration = self.config.timings.swap;
        for (to, from) in [(first, second), (second, first)] {
            if let Some(token) = grid.get(to) {
                self.animations.push_move(MoveTask::new(
                    token.id(),
                    self.layout.grid_to_world(from.col, from.row),
                    self.layout.grid_to_world(to.col, to.row),
                    duration,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{FruitKind, GameStats, MatchReport, Timings};

    use super::*;

    /// Replays a fixed list of draws, wrapping around when exhausted.
    #[derive(Debug, Clone)]
    struct Script(Vec<u8>, usize);

    impl FruitSource for Script {
        fn uniform(&mut self, upper: u8) -> u8 {
            let value = self.0[self.1 % self.0.len()];
            self.1 += 1;
            value % upper
        }
    }

    const FRAME: Duration = Duration::from_millis(16);

    fn config() -> BoardConfig {
        BoardConfig {
            fruit_kinds: 7,
            ..BoardConfig::default()
        }
    }

    /// No two equal neighbours anywhere.
    fn quiet_grid() -> Grid {
        Grid::from_kind_rows(&[
            [0, 1, 2, 3, 4, 0],
            [3, 4, 0, 1, 2, 3],
            [1, 2, 3, 4, 0, 1],
            [4, 0, 1, 2, 3, 4],
            [2, 3, 4, 0, 1, 2],
            [0, 1, 2, 3, 4, 0],
        ])
    }

    /// Swapping (2, 0) with (3, 0) completes a run of three 5s in row 0.
    /// After the collapse, row 1 lines up four 6s.
    fn chain_grid() -> Grid {
        Grid::from_kind_rows(&[
            [0, 1, 2, 3, 4, 0],
            [3, 4, 0, 1, 2, 3],
            [1, 2, 3, 4, 0, 1],
            [4, 6, 6, 2, 3, 4],
            [2, 3, 4, 6, 6, 2],
            [5, 5, 2, 5, 4, 0],
        ])
    }

    fn chain_board(timings: Timings) -> Board<Script> {
        let config = BoardConfig {
            timings,
            ..config()
        };
        let refills = Script(vec![0, 1, 2, 3, 4, 0, 1], 0);
        Board::with_grid(config, refills, chain_grid()).unwrap()
    }

    fn kinds(board: &Board<Script>) -> Vec<Vec<Option<FruitKind>>> {
        board.grid().unwrap().kind_rows()
    }

    fn assert_coordinates_consistent(grid: &Grid) {
        for cell in grid.cells() {
            if let Some(token) = grid.get(cell) {
                assert_eq!(token.cell(), cell);
            }
        }
    }

    #[test]
    fn test_initialize_clamps_size() {
        let mut board = Board::with_seed(config(), BoardSeed::new(5)).unwrap();
        assert_eq!(board.last_fill(), None);
        assert_eq!(board.config().fruit_kinds, 7);
        let report = board.initialize_board(3);
        assert_eq!(board.size(), Some(6));
        assert_eq!(board.last_fill(), Some(report));
        board.initialize_board(20);
        assert_eq!(board.size(), Some(8));
        board.initialize_board(7);
        assert_eq!(board.size(), Some(7));
    }

    #[test]
    fn test_initialized_board_is_settled_and_full() {
        for (seed, size) in (0..50).zip([6, 7, 8].into_iter().cycle()) {
            let mut board = Board::with_seed(config(), BoardSeed::new(seed)).unwrap();
            let report = board.initialize_board(size);
            assert!(report.converged);
            assert!(board.find_all_matches().is_empty());
            let grid = board.grid().unwrap();
            assert!(grid.is_full());
            assert_coordinates_consistent(grid);
            assert!(!board.is_busy());
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let mut a = Board::with_seed(config(), BoardSeed::new(99)).unwrap();
        let mut b = Board::with_seed(config(), BoardSeed::new(99)).unwrap();
        a.initialize_board(8);
        b.initialize_board(8);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_clear_board_releases_grid() {
        let mut board = Board::with_seed(config(), BoardSeed::new(1)).unwrap();
        board.initialize_board(6);
        board.clear_board();
        assert!(board.grid().is_none());
        assert!(board.get_tile(0, 0).is_none());
        assert_eq!(
            board.try_swap(Cell::new(0, 0), Cell::new(1, 0)),
            Err(RejectedSwap::NoBoard)
        );
    }

    #[test]
    fn test_get_tile_out_of_range() {
        let board = Board::with_grid(config(), Script(vec![0], 0), quiet_grid()).unwrap();
        assert!(board.get_tile(6, 0).is_none());
        assert!(board.get_tile(0, 6).is_none());
        assert_eq!(board.get_tile(5, 5).unwrap().kind(), FruitKind::new(0));
    }

    #[test]
    fn test_swap_without_match_reverts() {
        let mut board = Board::with_grid(config(), Script(vec![0], 0), quiet_grid()).unwrap();
        let before = kinds(&board);
        let mut reports: Vec<MatchReport> = vec![];

        board.try_swap(Cell::new(0, 0), Cell::new(1, 0)).unwrap();
        assert!(board.is_busy());
        // The exchange is committed immediately.
        assert_eq!(board.get_tile(0, 0).unwrap().kind(), FruitKind::new(1));

        board.settle(&mut reports);

        assert!(!board.is_busy());
        assert!(reports.is_empty());
        assert_eq!(kinds(&board), before);
        assert_coordinates_consistent(board.grid().unwrap());
    }

    #[test]
    fn test_revert_waits_for_both_animations() {
        let mut board = Board::with_grid(config(), Script(vec![0], 0), quiet_grid()).unwrap();
        let mut reports: Vec<MatchReport> = vec![];
        board.try_swap(Cell::new(0, 0), Cell::new(1, 0)).unwrap();

        // Swap takes 200ms, then the revert another 200ms.
        board.tick(Duration::from_millis(199), &mut reports);
        assert!(board.phase().is_swapping());
        board.tick(Duration::from_millis(1), &mut reports);
        assert_eq!(board.phase(), BoardPhase::Reverting);
        board.tick(Duration::from_millis(199), &mut reports);
        assert!(board.is_busy());
        board.tick(Duration::from_millis(1), &mut reports);
        assert!(!board.is_busy());
        assert_eq!(kinds(&board), quiet_grid().kind_rows());
    }

    #[test]
    fn test_rejected_swaps_change_nothing() {
        let mut board = Board::with_grid(config(), Script(vec![0], 0), quiet_grid()).unwrap();
        let before = kinds(&board);

        assert_eq!(
            board.try_swap(Cell::new(5, 0), Cell::new(6, 0)),
            Err(RejectedSwap::OutOfBounds)
        );
        assert_eq!(
            board.try_swap(Cell::new(0, 6), Cell::new(0, 5)),
            Err(RejectedSwap::OutOfBounds)
        );
        assert!(!board.is_busy());

        if let Some(grid) = &mut board.grid {
            grid.take(Cell::new(3, 3));
        }
        assert_eq!(
            board.try_swap(Cell::new(3, 2), Cell::new(3, 3)),
            Err(RejectedSwap::EmptyCell)
        );
        assert!(!board.is_busy());

        let mut rows = before.clone();
        rows[2][3] = None;
        assert_eq!(kinds(&board), rows);
    }

    #[test]
    fn test_swap_rejected_while_busy() {
        let mut board = Board::with_grid(config(), Script(vec![0], 0), quiet_grid()).unwrap();
        board.try_swap(Cell::new(0, 0), Cell::new(1, 0)).unwrap();
        let during = kinds(&board);
        let phase = board.phase();

        assert_eq!(
            board.try_swap(Cell::new(2, 2), Cell::new(2, 3)),
            Err(RejectedSwap::Busy)
        );
        assert_eq!(kinds(&board), during);
        assert_eq!(board.phase(), phase);
    }

    #[test]
    fn test_chain_scoring() {
        let mut board = chain_board(Timings::default());
        let mut reports: Vec<MatchReport> = vec![];

        board.try_swap(Cell::new(2, 0), Cell::new(3, 0)).unwrap();
        board.settle(&mut reports);

        assert_eq!(reports, [MatchReport::new(3, 1), MatchReport::new(4, 2)]);
        assert!(!board.is_busy());
        assert!(board.find_all_matches().is_empty());
        let grid = board.grid().unwrap();
        assert!(grid.is_full());
        assert_coordinates_consistent(grid);
    }

    #[test]
    fn test_ticking_matches_settling() {
        let mut settled = chain_board(Timings::default());
        let mut ticked = chain_board(Timings::default());
        let mut settled_reports: Vec<MatchReport> = vec![];
        let mut ticked_reports: Vec<MatchReport> = vec![];

        settled.try_swap(Cell::new(2, 0), Cell::new(3, 0)).unwrap();
        settled.settle(&mut settled_reports);

        ticked.try_swap(Cell::new(2, 0), Cell::new(3, 0)).unwrap();
        let mut frames = 0;
        while ticked.is_busy() {
            ticked.tick(FRAME, &mut ticked_reports);
            frames += 1;
            assert!(frames < 1000, "cascade did not settle");
        }

        assert_eq!(ticked_reports, settled_reports);
        assert_eq!(ticked.grid(), settled.grid());
        assert!(frames > 1);
    }

    #[test]
    fn test_cascade_phases_in_order() {
        let mut board = chain_board(Timings::default());
        let mut stats = GameStats::new();
        board.try_swap(Cell::new(2, 0), Cell::new(3, 0)).unwrap();

        let mut phases = vec![board.phase()];
        while board.is_busy() {
            board.tick(FRAME, &mut stats);
            if phases.last() != Some(&board.phase()) {
                phases.push(board.phase());
            }
        }

        assert_eq!(
            phases,
            [
                BoardPhase::Swapping {
                    first: Cell::new(2, 0),
                    second: Cell::new(3, 0),
                },
                BoardPhase::Clearing { chain: 1 },
                BoardPhase::Falling { chain: 1 },
                BoardPhase::Clearing { chain: 2 },
                BoardPhase::Falling { chain: 2 },
                BoardPhase::Idle,
            ]
        );
        assert_eq!(stats.score(), 3 + 8);
    }

    #[test]
    fn test_cells_are_empty_while_clearing() {
        let mut board = chain_board(Timings::default());
        let mut reports: Vec<MatchReport> = vec![];
        board.try_swap(Cell::new(2, 0), Cell::new(3, 0)).unwrap();
        while !board.phase().is_clearing() {
            board.tick(FRAME, &mut reports);
        }
        for col in 0..3 {
            assert!(board.get_tile(col, 0).is_none());
        }
        assert!(board.get_tile(3, 0).is_some());
    }

    #[test]
    fn test_spawned_tokens_fall_from_above() {
        let mut board = chain_board(Timings::default());
        let mut reports: Vec<MatchReport> = vec![];
        board.try_swap(Cell::new(2, 0), Cell::new(3, 0)).unwrap();
        while !board.phase().is_falling() {
            board.tick(FRAME, &mut reports);
        }

        let top = board.get_tile(0, 5).unwrap();
        let pos = board.token_position(top);
        assert!(pos.y > board.grid_to_world(0, 5).y);
        assert!(board.animations().position_of(top.id()).is_some());
    }

    #[test]
    fn test_instant_timings_skip_to_falling() {
        let mut board = chain_board(Timings::INSTANT);
        let mut reports: Vec<MatchReport> = vec![];
        board.try_swap(Cell::new(2, 0), Cell::new(3, 0)).unwrap();
        board.tick(Duration::ZERO, &mut reports);
        assert_eq!(board.phase(), BoardPhase::Falling { chain: 1 });
        assert_eq!(reports, [MatchReport::new(3, 1)]);
    }

    #[test]
    fn test_clear_board_aborts_cascade() {
        let mut board = chain_board(Timings::default());
        let mut reports: Vec<MatchReport> = vec![];
        board.try_swap(Cell::new(2, 0), Cell::new(3, 0)).unwrap();
        while !board.phase().is_falling() {
            board.tick(FRAME, &mut reports);
        }
        assert!(board.animations().moves().count() > 0);

        board.clear_board();

        assert!(!board.is_busy());
        assert!(board.animations().is_idle());
        assert!(board.grid().is_none());
        board.tick(FRAME, &mut reports);
        assert_eq!(reports, [MatchReport::new(3, 1)]);

        let report = board.initialize_board(6);
        assert!(report.converged);
        assert!(board.try_swap(Cell::new(0, 0), Cell::new(0, 1)).is_ok());
    }

    #[test]
    fn test_every_swap_settles_cleanly() {
        for seed in 0..20 {
            let mut board = Board::with_seed(config(), BoardSeed::new(seed)).unwrap();
            board.initialize_board(7);
            let mut stats = GameStats::new();
            for col in 0..6 {
                for row in 0..7 {
                    if board
                        .try_swap(Cell::new(col, row), Cell::new(col + 1, row))
                        .is_ok()
                    {
                        board.settle(&mut stats);
                        assert!(board.find_all_matches().is_empty());
                        assert!(board.grid().unwrap().is_full());
                    }
                }
            }
        }
    }

    #[test]
    fn test_huge_spacing_still_settles() {
        let config = BoardConfig {
            tile_spacing: 1.0e37,
            ..config()
        };
        assert!(config.validate().is_ok());
        let refills = Script(vec![0, 1, 2, 3, 4, 0, 1], 0);
        let mut board = Board::with_grid(config, refills, chain_grid()).unwrap();
        let mut reports: Vec<MatchReport> = vec![];

        board.try_swap(Cell::new(2, 0), Cell::new(3, 0)).unwrap();
        board.settle(&mut reports);

        assert_eq!(reports, [MatchReport::new(3, 1), MatchReport::new(4, 2)]);
        assert!(!board.is_busy());
    }

    #[test]
    fn test_cell_at_world() {
        let mut board = Board::with_seed(config(), BoardSeed::new(1)).unwrap();
        assert!(board.cell_at_world(WorldPos::default()).is_none());
        board.initialize_board(6);
        let pos = board.grid_to_world(4, 2);
        assert_eq!(board.cell_at_world(pos), Some(Cell::new(4, 2)));
    }
}
