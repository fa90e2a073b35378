//! Move producers: a human reading lines from an input source, or a search
//! strategy. The controller treats both uniformly through [`Agent`].

mod human;
mod search;

pub use human::{HumanAgent, InputSource, StdinInput};
pub use search::SearchAgent;

use crate::error::AgentError;
use crate::game::GameState;

/// One side of a match. `select_move` may walk the state through
/// apply/undo while thinking but must return it unchanged; the controller
/// applies the chosen column itself.
pub trait Agent: Send {
    fn select_move(&mut self, state: &mut GameState) -> Result<usize, AgentError>;

    /// Display name of this player.
    fn name(&self) -> &str;
}
