use std::io::{self, BufRead, Write};

use crate::error::{AgentError, InputError};
use crate::game::GameState;

use super::Agent;

/// Where a human's column choices come from. The source owns all prompting
/// and error display; the agent only parses and validates.
pub trait InputSource: Send {
    /// Prompt for and read one line. `None` means the source is closed.
    fn request_line(&mut self, state: &GameState) -> io::Result<Option<String>>;

    /// The previous line was rejected; let the source tell the user why.
    fn report_invalid(&mut self, error: &InputError);
}

/// Console input: prompts on stdout with the open columns, reads stdin.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn request_line(&mut self, state: &GameState) -> io::Result<Option<String>> {
        let open: Vec<String> = state
            .legal_moves()
            .iter()
            .map(|c| (c + 1).to_string())
            .collect();
        print!(
            "{} to move (columns {}): ",
            state.current_player().name(),
            open.join(", ")
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report_invalid(&mut self, error: &InputError) {
        println!("{error}, try again");
    }
}

/// A human player: reads a 1-based column number and retries until the input
/// names a playable column. The game state is never mutated.
pub struct HumanAgent {
    name: String,
    input: Box<dyn InputSource>,
}

impl HumanAgent {
    pub fn new(name: impl Into<String>, input: Box<dyn InputSource>) -> Self {
        HumanAgent {
            name: name.into(),
            input,
        }
    }

    /// Parse a line as a 1-based column and check it against the board.
    /// Returns the 0-based column on success.
    fn parse_column(line: &str, state: &GameState) -> Result<usize, InputError> {
        let trimmed = line.trim();
        let number: usize = trimmed
            .parse()
            .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
        if number < 1 || number > state.board().cols() {
            return Err(InputError::OutOfRange(number));
        }
        let column = number - 1;
        if state.board().is_column_full(column) {
            return Err(InputError::ColumnFull(number));
        }
        Ok(column)
    }
}

impl Agent for HumanAgent {
    fn select_move(&mut self, state: &mut GameState) -> Result<usize, AgentError> {
        loop {
            let line = self
                .input
                .request_line(state)?
                .ok_or(AgentError::InputClosed)?;
            match Self::parse_column(&line, state) {
                Ok(column) => return Ok(column),
                Err(error) => self.input.report_invalid(&error),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Test double fed from a fixed list of lines; counts rejections.
    struct ScriptedInput {
        lines: Vec<String>,
        rejections: Arc<AtomicUsize>,
    }

    impl ScriptedInput {
        fn new(lines: &[&str]) -> Self {
            ScriptedInput {
                lines: lines.iter().rev().map(|s| s.to_string()).collect(),
                rejections: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn rejection_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.rejections)
        }
    }

    impl InputSource for ScriptedInput {
        fn request_line(&mut self, _state: &GameState) -> io::Result<Option<String>> {
            Ok(self.lines.pop())
        }

        fn report_invalid(&mut self, _error: &InputError) {
            self.rejections.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn accepts_a_valid_column() {
        let mut agent = HumanAgent::new("Human", Box::new(ScriptedInput::new(&["4"])));
        let mut state = GameState::initial();
        assert_eq!(agent.select_move(&mut state).unwrap(), 3);
    }

    #[test]
    fn retries_until_input_is_valid() {
        let mut state = GameState::initial();
        // Fill column 3 so "4" is rejected as full.
        for _ in 0..6 {
            state.apply_move(3).unwrap();
        }

        let input = ScriptedInput::new(&["abc", "0", "9", "4", "2"]);
        let rejections = input.rejection_counter();
        let mut agent = HumanAgent::new("Human", Box::new(input));

        let snapshot = state.clone();
        assert_eq!(agent.select_move(&mut state).unwrap(), 1);
        assert_eq!(state, snapshot);
        assert_eq!(rejections.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn rejections_are_classified() {
        let state = GameState::initial();
        assert_eq!(
            HumanAgent::parse_column("x", &state),
            Err(InputError::NotANumber("x".to_string()))
        );
        assert_eq!(
            HumanAgent::parse_column("8", &state),
            Err(InputError::OutOfRange(8))
        );
        assert_eq!(
            HumanAgent::parse_column("0", &state),
            Err(InputError::OutOfRange(0))
        );
        assert_eq!(HumanAgent::parse_column(" 7 ", &state), Ok(6));
    }

    #[test]
    fn closed_source_is_an_error() {
        let mut agent = HumanAgent::new("Human", Box::new(ScriptedInput::new(&[])));
        let mut state = GameState::initial();
        assert!(matches!(
            agent.select_move(&mut state),
            Err(AgentError::InputClosed)
        ));
    }

    #[test]
    fn full_column_is_rejected() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state.apply_move(0).unwrap();
        }
        assert_eq!(
            HumanAgent::parse_column("1", &state),
            Err(InputError::ColumnFull(1))
        );
    }
}
