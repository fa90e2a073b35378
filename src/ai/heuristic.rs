use crate::game::{Cell, GameState, Player};

use super::Score;

/// Static evaluation of a depth-limit leaf from one player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, state: &GameState, perspective: Player) -> Score;
}

/// The minimal evaluation the original game shipped with: a lost position
/// scores heavily negative, everything else is neutral. With this heuristic
/// the search sees nothing beyond forced wins and losses inside its depth.
pub struct TerminalOnly;

impl Heuristic for TerminalOnly {
    fn evaluate(&self, state: &GameState, perspective: Player) -> Score {
        state.score(perspective)
    }
}

/// Window directions scanned by [`ThreatHeuristic`]: horizontal, vertical,
/// and both diagonals, anchored at the window's first cell.
const WINDOW_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Threat-counting evaluation: every 4-cell window on the board is scored by
/// how close each side is to completing it, plus a small bonus for occupying
/// the center column.
pub struct ThreatHeuristic;

impl ThreatHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> Score {
        if own == 3 && empty == 1 {
            50
        } else if own == 2 && empty == 2 {
            10
        } else if opp == 3 && empty == 1 {
            -80
        } else if opp == 2 && empty == 2 {
            -10
        } else {
            0
        }
    }
}

impl Heuristic for ThreatHeuristic {
    fn evaluate(&self, state: &GameState, perspective: Player) -> Score {
        let board = state.board();
        let rows = board.rows() as i32;
        let cols = board.cols() as i32;
        let own_cell = perspective.cell();
        let opp_cell = perspective.other().cell();
        let mut score = 0;

        let center = board.cols() / 2;
        for row in 0..board.rows() {
            match board.get(row, center) {
                c if c == own_cell => score += 3,
                c if c == opp_cell => score -= 3,
                _ => {}
            }
        }

        for row in 0..rows {
            for col in 0..cols {
                for &(dr, dc) in &WINDOW_DIRECTIONS {
                    let end_r = row + 3 * dr;
                    let end_c = col + 3 * dc;
                    if end_r < 0 || end_r >= rows || end_c < 0 || end_c >= cols {
                        continue;
                    }

                    let mut own = 0;
                    let mut opp = 0;
                    let mut empty = 0;
                    for i in 0..4 {
                        let cell =
                            board.get((row + i * dr) as usize, (col + i * dc) as usize);
                        if cell == own_cell {
                            own += 1;
                        } else if cell == opp_cell {
                            opp += 1;
                        } else {
                            empty += 1;
                        }
                    }
                    score += Self::score_window(own, opp, empty);
                }
            }
        }

        score
    }
}
