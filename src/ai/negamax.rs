use crate::error::SearchError;
use crate::game::GameState;

use super::{Heuristic, Score, SearchResult, SearchStrategy, TerminalOnly, BEST_SCORE, WORST_SCORE};

/// Depth-limited negamax with alpha-beta pruning.
///
/// Moves are examined in ascending column order and ties are broken toward
/// the first maximum, so equal-scored positions always yield the lowest
/// winning column. The search walks the caller's state with
/// `with_move`, leaving it unchanged on return.
pub struct Negamax {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl Negamax {
    /// Search `depth` plies deep with the original binary evaluation.
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(TerminalOnly))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        Negamax {
            depth: depth.max(1),
            heuristic,
        }
    }

    fn negamax(
        &self,
        state: &mut GameState,
        depth: usize,
        mut alpha: Score,
        beta: Score,
    ) -> Result<Score, SearchError> {
        if state.is_terminal() {
            return Ok(state.score(state.current_player()));
        }
        if depth == 0 {
            return Ok(self.heuristic.evaluate(state, state.current_player()));
        }

        let mut best = WORST_SCORE;
        for col in state.legal_moves() {
            let value = -state.with_move(col, |s| self.negamax(s, depth - 1, -beta, -alpha))??;
            if value > best {
                best = value;
            }
            if value > alpha {
                alpha = value;
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}

impl SearchStrategy for Negamax {
    fn search(&mut self, state: &mut GameState) -> Result<SearchResult, SearchError> {
        let legal = state.legal_moves();
        if legal.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let mut alpha = WORST_SCORE;
        let beta = BEST_SCORE;
        let mut best: Option<SearchResult> = None;

        for col in legal {
            let score =
                -state.with_move(col, |s| self.negamax(s, self.depth - 1, -beta, -alpha))??;
            if best.map_or(true, |b| score > b.score) {
                best = Some(SearchResult { column: col, score });
            }
            if score > alpha {
                alpha = score;
            }
        }

        best.ok_or(SearchError::NoLegalMoves)
    }

    fn name(&self) -> &'static str {
        "Negamax"
    }
}
