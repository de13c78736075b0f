//! Rules engines.
//!
//! `RulesEngine` is the seam between game state and game rules:
//! - which sub-boards may be played
//! - whether a move is accepted
//! - how an accepted move produces the next state
//! - when the game has ended
//!
//! `StandardRules` implements the recursive Ultimate Tic-Tac-Toe rule set.
//! `rules_for` picks the engine for a `GameMode`.

pub mod engine;
pub mod standard;

pub use engine::{GameResult, RulesEngine};
pub use standard::{rules_for, StandardRules};
