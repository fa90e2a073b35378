use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::SearchError;
use crate::game::GameState;

use super::{SearchResult, SearchStrategy};

/// Picks uniformly at random from the legal moves. A baseline opponent, not
/// a search; the reported score is always neutral.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for RandomStrategy {
    fn search(&mut self, state: &mut GameState) -> Result<SearchResult, SearchError> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(SearchResult {
            column: moves[index],
            score: 0,
        })
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}
