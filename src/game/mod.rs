//! Core Connect Four game logic: board representation, player types, and the
//! mutate-and-backtrack game state consumed by search.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, LOSS_SCORE};

#[cfg(test)]
pub(crate) mod testing {
    /// A 42-move sequence that fills the default board without any
    /// four-in-a-row: columns built in pairs, bottom halves first, so every
    /// row alternates owners and every column stacks at most three alike.
    pub fn drawn_game_sequence() -> Vec<usize> {
        let mut seq = Vec::new();
        for (a, b) in [(0, 1), (2, 3), (4, 5)] {
            for _ in 0..3 {
                seq.push(a);
                seq.push(b);
            }
        }
        for _ in 0..3 {
            seq.push(6);
            seq.push(0);
        }
        for (a, b) in [(1, 2), (3, 4), (5, 6)] {
            for _ in 0..3 {
                seq.push(a);
                seq.push(b);
            }
        }
        seq
    }
}
