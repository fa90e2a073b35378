use crate::ai::{AlgorithmKind, SearchStrategy};
use crate::error::AgentError;
use crate::game::GameState;

use super::Agent;

/// An AI player: owns a search strategy and plays whatever it returns.
/// Search errors pass through unchanged.
pub struct SearchAgent {
    strategy: Box<dyn SearchStrategy>,
}

impl SearchAgent {
    pub fn new(strategy: Box<dyn SearchStrategy>) -> Self {
        SearchAgent { strategy }
    }

    pub fn from_kind(kind: AlgorithmKind, depth: usize) -> Self {
        SearchAgent {
            strategy: kind.build(depth),
        }
    }
}

impl Agent for SearchAgent {
    fn select_move(&mut self, state: &mut GameState) -> Result<usize, AgentError> {
        let result = self.strategy.search(state)?;
        Ok(result.column)
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}
