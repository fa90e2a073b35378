//! The match loop: alternates the two agents on one authoritative game state
//! until it is terminal, then reports who won.

use crate::error::AgentError;
use crate::game::{GameOutcome, GameState, Player};
use crate::players::Agent;

/// How a finished match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won(Player),
    Draw,
}

/// Drives a single match. The controller owns the authoritative state and
/// lends it to whichever agent is to move; agents return a column, the
/// controller validates it by applying it.
pub struct MatchController {
    state: GameState,
    red: Box<dyn Agent>,
    yellow: Box<dyn Agent>,
    history: Vec<usize>,
}

impl MatchController {
    pub fn new(state: GameState, red: Box<dyn Agent>, yellow: Box<dyn Agent>) -> Self {
        MatchController {
            state,
            red,
            yellow,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Columns played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn agent_name(&self, player: Player) -> &str {
        match player {
            Player::Red => self.red.name(),
            Player::Yellow => self.yellow.name(),
        }
    }

    /// The final outcome, once the match is over.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.state.outcome().map(|outcome| match outcome {
            GameOutcome::Winner(player) => MatchOutcome::Won(player),
            GameOutcome::Draw => MatchOutcome::Draw,
        })
    }

    /// Ask the current agent for one move and apply it. Returns the outcome
    /// when the match has ended; calling again on a finished match returns
    /// the same outcome without consulting the agents.
    pub fn play_turn(&mut self) -> Result<Option<MatchOutcome>, AgentError> {
        if let Some(outcome) = self.outcome() {
            return Ok(Some(outcome));
        }

        let agent = match self.state.current_player() {
            Player::Red => &mut self.red,
            Player::Yellow => &mut self.yellow,
        };
        let column = agent.select_move(&mut self.state)?;

        self.state
            .apply_move(column)
            .map_err(|source| AgentError::IllegalMove { column, source })?;
        self.history.push(column);

        Ok(self.outcome())
    }

    /// Play turns until the match ends.
    pub fn run(&mut self) -> Result<MatchOutcome, AgentError> {
        loop {
            if let Some(outcome) = self.play_turn()? {
                return Ok(outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AlgorithmKind;
    use crate::game::testing::drawn_game_sequence;
    use crate::players::SearchAgent;

    /// Plays a fixed column script.
    struct ScriptedAgent {
        moves: Vec<usize>,
    }

    impl ScriptedAgent {
        fn new(moves: &[usize]) -> Self {
            ScriptedAgent {
                moves: moves.iter().rev().copied().collect(),
            }
        }
    }

    impl Agent for ScriptedAgent {
        fn select_move(&mut self, _state: &mut GameState) -> Result<usize, AgentError> {
            self.moves.pop().ok_or(AgentError::InputClosed)
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    /// Split an alternating move sequence into per-side scripts.
    fn scripted_pair(sequence: &[usize]) -> (Box<dyn Agent>, Box<dyn Agent>) {
        let first: Vec<usize> = sequence.iter().step_by(2).copied().collect();
        let second: Vec<usize> = sequence.iter().skip(1).step_by(2).copied().collect();
        (
            Box::new(ScriptedAgent::new(&first)),
            Box::new(ScriptedAgent::new(&second)),
        )
    }

    #[test]
    fn vertical_four_wins_for_red() {
        let sequence = [0, 1, 0, 1, 0, 1, 0];
        let (red, yellow) = scripted_pair(&sequence);
        let mut controller = MatchController::new(GameState::initial(), red, yellow);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, MatchOutcome::Won(Player::Red));
        assert_eq!(controller.history(), &sequence);
        assert!(controller.state().is_terminal());
    }

    #[test]
    fn scripted_draw_game() {
        let sequence = drawn_game_sequence();
        let (red, yellow) = scripted_pair(&sequence);
        let mut controller = MatchController::new(GameState::initial(), red, yellow);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, MatchOutcome::Draw);
        assert_eq!(controller.history().len(), 42);
    }

    #[test]
    fn finished_match_is_absorbing() {
        let (red, yellow) = scripted_pair(&[0, 1, 0, 1, 0, 1, 0]);
        let mut controller = MatchController::new(GameState::initial(), red, yellow);
        controller.run().unwrap();

        // Scripts are exhausted, but no agent is consulted anymore.
        let outcome = controller.play_turn().unwrap();
        assert_eq!(outcome, Some(MatchOutcome::Won(Player::Red)));
        assert_eq!(controller.history().len(), 7);
    }

    #[test]
    fn starting_player_is_configurable() {
        let (first, second) = scripted_pair(&[0, 1, 0, 1, 0, 1, 0]);
        // Yellow starts, so the winning vertical stack belongs to Yellow.
        let state = GameState::new(6, 7, Player::Yellow);
        let mut controller = MatchController::new(state, second, first);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, MatchOutcome::Won(Player::Yellow));
    }

    #[test]
    fn illegal_scripted_move_is_reported() {
        let red = Box::new(ScriptedAgent::new(&[9]));
        let yellow = Box::new(ScriptedAgent::new(&[]));
        let mut controller = MatchController::new(GameState::initial(), red, yellow);

        assert!(matches!(
            controller.play_turn(),
            Err(AgentError::IllegalMove { column: 9, .. })
        ));
    }

    #[test]
    fn search_agents_finish_a_match() {
        let red = Box::new(SearchAgent::from_kind(AlgorithmKind::Negamax, 2));
        let yellow = Box::new(SearchAgent::from_kind(AlgorithmKind::Sss, 2));
        let mut controller = MatchController::new(GameState::initial(), red, yellow);

        let outcome = controller.run().unwrap();
        assert!(matches!(
            outcome,
            MatchOutcome::Won(_) | MatchOutcome::Draw
        ));
        assert_eq!(controller.agent_name(Player::Red), "Negamax");
        assert_eq!(controller.agent_name(Player::Yellow), "SSS*");
    }
}
