//! Adversarial search: the strategy trait, the two classic tree-search
//! algorithms (negamax and SSS*), leaf evaluation, and a random baseline.

mod heuristic;
mod negamax;
mod random;
mod sss;

pub use heuristic::{Heuristic, TerminalOnly, ThreatHeuristic};
pub use negamax::Negamax;
pub use random::RandomStrategy;
pub use sss::Sss;

use crate::error::SearchError;
use crate::game::GameState;

/// An assessment of a position from the perspective of the side to move.
/// Higher is better; zero is a draw or a neutral position.
pub type Score = i32;

// Defined so the two bounds negate to each other; i32::MIN is never used.
pub const BEST_SCORE: Score = i32::MAX;
pub const WORST_SCORE: Score = -BEST_SCORE;

/// A chosen move and its evaluation for the side that searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: usize,
    pub score: Score,
}

/// A move-selection algorithm for the side to move.
///
/// Strategies may mutate the passed state through `apply_move`/`undo_move`
/// while searching, but every mutation must be reverted before returning;
/// the caller's state is unchanged on both success and error.
pub trait SearchStrategy: Send {
    fn search(&mut self, state: &mut GameState) -> Result<SearchResult, SearchError>;

    /// Display name of the algorithm.
    fn name(&self) -> &'static str;
}

/// The selectable search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Negamax,
    Sss,
    Random,
}

impl AlgorithmKind {
    /// Build a boxed strategy with the given depth budget. `Random` ignores
    /// the depth.
    pub fn build(self, depth: usize) -> Box<dyn SearchStrategy> {
        match self {
            AlgorithmKind::Negamax => Box::new(Negamax::new(depth)),
            AlgorithmKind::Sss => Box::new(Sss::new(depth)),
            AlgorithmKind::Random => Box::new(RandomStrategy::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Negamax => "Negamax",
            AlgorithmKind::Sss => "SSS*",
            AlgorithmKind::Random => "Random",
        }
    }
}
