//! Terminal UI: an interactive board with a column cursor, plus per-side
//! controls to hand either color to a search algorithm.

mod app;
mod game_view;

pub use app::App;
