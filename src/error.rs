use std::path::PathBuf;

use crate::game::MoveError;

/// Errors surfaced by the search algorithms. Both variants indicate the
/// caller broke an invariant: search is never invoked on a terminal state,
/// and a depth-bounded search over a finite tree always resolves the root.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("no legal moves in the searched position")]
    NoLegalMoves,

    #[error("open list exhausted before the root was solved")]
    SearchExhausted,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Rejected human input. Always recovered locally by re-prompting; column
/// numbers are reported 1-based, as entered.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("column {0} is out of range")]
    OutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors a player can raise while producing a move, or the controller while
/// applying one.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("input source closed before a move was chosen")]
    InputClosed,

    #[error("agent chose illegal column {column}: {source}")]
    IllegalMove { column: usize, source: MoveError },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
