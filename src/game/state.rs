use super::{Board, MoveError, Player};

/// Evaluation of a position that the perspective player has lost. Large
/// enough to dominate any heuristic sum.
pub const LOSS_SCORE: i32 = -100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Full game state: board, side to move, move counter, and the outcome once
/// the game has ended. Mutated in place; search backtracks with `undo_move`
/// instead of copying the board at every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    move_count: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create the initial state for a board of the given dimensions.
    pub fn new(rows: usize, cols: usize, starting_player: Player) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: starting_player,
            move_count: 0,
            outcome: None,
        }
    }

    /// Default 6x7 game with Red to move.
    pub fn initial() -> Self {
        GameState::new(
            super::board::DEFAULT_ROWS,
            super::board::DEFAULT_COLS,
            Player::Red,
        )
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The player who completed four-in-a-row, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(p)) => Some(p),
            _ => None,
        }
    }

    /// Columns open to the side to move, ascending. Empty once the game is
    /// over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    /// Drop the current player's token and flip the turn. The state is
    /// untouched on error.
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self.board.drop_piece(column, self.current_player.cell())?;

        if self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.move_count += 1;
        self.current_player = self.current_player.other();
        Ok(())
    }

    /// Revert one move: remove the top token of `column` and give the turn
    /// back. Callers are expected to undo the column they last applied;
    /// `with_move` enforces that pairing.
    pub fn undo_move(&mut self, column: usize) -> Result<(), MoveError> {
        self.board.undo_piece(column)?;
        self.move_count -= 1;
        self.current_player = self.current_player.other();
        // The position before any reachable move is never terminal.
        self.outcome = None;
        Ok(())
    }

    /// Apply a move, run `f`, and undo the move again. The scoped pairing
    /// guarantees search cannot leave the state mutated.
    pub fn with_move<T>(
        &mut self,
        column: usize,
        f: impl FnOnce(&mut GameState) -> T,
    ) -> Result<T, MoveError> {
        self.apply_move(column)?;
        let result = f(self);
        self.undo_move(column)?;
        Ok(result)
    }

    /// Minimal evaluation from the perspective of `player`: a heavy loss if
    /// the opponent has completed four-in-a-row, zero otherwise.
    pub fn score(&self, player: Player) -> i32 {
        if self.board.has_four_in_a_row(player.other().cell()) {
            LOSS_SCORE
        } else {
            0
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    use crate::game::testing::drawn_game_sequence;

    #[test]
    fn initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state.move_count(), 0);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn apply_move_flips_turn_and_counts() {
        let mut state = GameState::initial();
        state.apply_move(3).unwrap();

        assert_eq!(state.current_player(), Player::Yellow);
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.board().get(5, 3), Cell::Red);

        state.apply_move(3).unwrap();
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state.move_count(), 2);
        assert_eq!(state.board().get(4, 3), Cell::Yellow);
    }

    #[test]
    fn failed_move_leaves_state_untouched() {
        let mut state = GameState::initial();
        let snapshot = state.clone();
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidColumn));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn undo_restores_prior_state() {
        let mut state = GameState::initial();
        for col in [3, 3, 2, 4] {
            state.apply_move(col).unwrap();
        }

        let snapshot = state.clone();
        state.apply_move(5).unwrap();
        state.undo_move(5).unwrap();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn undo_reopens_a_won_game() {
        let mut state = GameState::initial();
        // Red stacks column 0, Yellow column 1.
        for _ in 0..3 {
            state.apply_move(0).unwrap();
            state.apply_move(1).unwrap();
        }
        state.apply_move(0).unwrap();
        assert!(state.is_terminal());

        state.undo_move(0).unwrap();
        assert!(!state.is_terminal());
        assert_eq!(state.current_player(), Player::Red);
    }

    #[test]
    fn with_move_applies_and_reverts() {
        let mut state = GameState::initial();
        let snapshot = state.clone();

        let seen = state
            .with_move(2, |s| (s.current_player(), s.move_count()))
            .unwrap();
        assert_eq!(seen, (Player::Yellow, 1));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn with_move_propagates_illegal_move() {
        let mut state = GameState::initial();
        let err = state.with_move(7, |_| ()).unwrap_err();
        assert_eq!(err, MoveError::InvalidColumn);
    }

    #[test]
    fn vertical_four_wins_the_game() {
        let mut state = GameState::initial();
        // Red takes column 0 four times; Yellow answers in column 1.
        for _ in 0..3 {
            state.apply_move(0).unwrap();
            state.apply_move(1).unwrap();
        }
        state.apply_move(0).unwrap();

        assert!(state.board().has_four_in_a_row(Cell::Red));
        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(Player::Red));
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn moves_after_game_over_rejected() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state.apply_move(0).unwrap();
            state.apply_move(1).unwrap();
        }
        state.apply_move(0).unwrap();
        assert_eq!(state.apply_move(2), Err(MoveError::GameOver));
    }

    #[test]
    fn full_board_without_four_is_a_draw() {
        let mut state = GameState::initial();
        let seq = drawn_game_sequence();
        assert_eq!(seq.len(), 42);

        for (i, &col) in seq.iter().enumerate() {
            assert!(!state.is_terminal(), "terminal after {i} moves");
            state.apply_move(col).unwrap();
        }

        assert_eq!(state.move_count(), 42);
        assert!(state.board().is_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn score_is_binary_lose_or_zero() {
        let mut state = GameState::initial();
        assert_eq!(state.score(Player::Red), 0);
        assert_eq!(state.score(Player::Yellow), 0);

        for _ in 0..3 {
            state.apply_move(0).unwrap();
            state.apply_move(1).unwrap();
        }
        state.apply_move(0).unwrap();

        // Red completed four-in-a-row: Yellow is defeated.
        assert_eq!(state.score(Player::Yellow), LOSS_SCORE);
        assert_eq!(state.score(Player::Red), 0);
    }
}
