use serde::{Deserialize, Serialize};

/// Receives one report per cascade step.
///
/// `chain` is 1 for the first clear triggered by a swap and grows by one for
/// every further clear within the same cascade. The board never reads a
/// score back.
pub trait ScoreSink {
    fn report_match(&mut self, matched: usize, chain: usize);
}

/// A single cascade step as seen by a [`ScoreSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub matched: usize,
    pub chain: usize,
}

impl MatchReport {
    #[must_use]
    pub const fn new(matched: usize, chain: usize) -> Self {
        Self { matched, chain }
    }

    /// Points awarded for this step: cleared fruits times chain index.
    #[must_use]
    pub const fn points(&self) -> usize {
        self.matched * self.chain
    }
}

/// Records every report in order.
impl ScoreSink for Vec<MatchReport> {
    fn report_match(&mut self, matched: usize, chain: usize) {
        self.push(MatchReport::new(matched, chain));
    }
}

/// Cumulative score and clear statistics for one game.
///
/// # Example
///
/// ```
/// use fruitmatch_engine::{GameStats, ScoreSink as _};
///
/// let mut stats = GameStats::new();
/// stats.report_match(3, 1);
/// stats.report_match(4, 2);
///
/// assert_eq!(stats.score(), 3 + 8);
/// assert_eq!(stats.cleared_fruits(), 7);
/// assert_eq!(stats.longest_chain(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    score: usize,
    cleared_fruits: usize,
    cascade_steps: usize,
    cascades: usize,
    longest_chain: usize,
    chain_multiplier: usize,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            cleared_fruits: 0,
            cascade_steps: 0,
            cascades: 0,
            longest_chain: 0,
            chain_multiplier: 1,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Total number of fruits removed by matches.
    #[must_use]
    pub const fn cleared_fruits(&self) -> usize {
        self.cleared_fruits
    }

    /// Number of reports received (one per cleared cascade step).
    #[must_use]
    pub const fn cascade_steps(&self) -> usize {
        self.cascade_steps
    }

    /// Number of cascades started, i.e. reports with chain index 1.
    #[must_use]
    pub const fn cascades(&self) -> usize {
        self.cascades
    }

    #[must_use]
    pub const fn longest_chain(&self) -> usize {
        self.longest_chain
    }

    /// Chain index of the most recent report, shown as the multiplier.
    #[must_use]
    pub const fn chain_multiplier(&self) -> usize {
        self.chain_multiplier
    }
}

impl ScoreSink for GameStats {
    fn report_match(&mut self, matched: usize, chain: usize) {
        self.chain_multiplier = chain;
        self.score += MatchReport::new(matched, chain).points();
        self.cleared_fruits += matched;
        self.cascade_steps += 1;
        if chain == 1 {
            self.cascades += 1;
        }
        self.longest_chain = self.longest_chain.max(chain);
    }
}
