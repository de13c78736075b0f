//! Core game types: players, boards, moves, modes and game state.
//!
//! Everything here is a plain value. States are built once by
//! `GameState::new` and replaced, never mutated, by the rules engine.

pub mod player;
pub mod board;
pub mod config;
pub mod action;
pub mod state;

pub use player::{mark_symbol, Mark, Player};
pub use board::{line_winner, Destinations, MainBoard, SubBoard, BOARD_CELLS, WINNING_LINES};
pub use config::GameMode;
pub use action::Move;
pub use state::GameState;
