//! # Connect Four Duel
//!
//! A Connect Four game driven by classic adversarial search. Moves are
//! chosen by a human at the keyboard or by one of two interchangeable
//! game-tree algorithms — depth-limited negamax and Stockman's SSS* — built
//! on a shared mutate-and-backtrack game state.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, game state with apply/undo
//! - [`ai`] — Search strategies (negamax, SSS*, random) and leaf evaluation
//! - [`players`] — Human and AI move producers behind one trait
//! - [`controller`] — The match loop and outcome reporting
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod players;
pub mod ui;
