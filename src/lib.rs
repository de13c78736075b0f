//! # ultimate-ttt
//!
//! A pure rules engine for Ultimate Tic-Tac-Toe: nine tic-tac-toe
//! sub-boards arranged in a 3×3 main board.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: A `GameState` is a small `Copy` value. Every
//!    transition returns a new state; nothing is mutated in place.
//!
//! 2. **Total Transitions**: An illegal move is not an error. `apply_move`
//!    returns the input unchanged, and any index (even out of range) is
//!    accepted by the signature and simply judged illegal.
//!
//! 3. **One Acceptance Predicate**: `check_move` decides legality.
//!    `is_legal_move`, `apply_move` and `legal_moves` all go through it.
//!
//! ## Quick Start
//!
//! ```
//! use ultimate_ttt::{apply_move, create_initial_state, is_legal_move, legal_destinations};
//! use ultimate_ttt::core::{GameMode, Player};
//!
//! let state = create_initial_state(GameMode::Normal);
//! assert_eq!(legal_destinations(&state).len(), 9);
//!
//! // X plays cell 0 of the center sub-board, sending O to sub-board 0.
//! let state = apply_move(&state, 4, 0);
//! assert_eq!(state.current_player(), Player::O);
//! assert_eq!(legal_destinations(&state).as_slice(), &[0]);
//! assert!(!is_legal_move(&state, 4, 1));
//!
//! // Illegal moves are no-ops.
//! assert_eq!(apply_move(&state, 4, 1), state);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, boards, moves, modes, game state
//! - `rules`: the `RulesEngine` trait and the standard rule set
//! - `error`: move rejection reasons and snapshot errors
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Destinations, GameMode, GameState, MainBoard, Mark, Move, Player, SubBoard,
};

pub use crate::rules::{rules_for, GameResult, RulesEngine, StandardRules};

pub use crate::error::{MoveError, SnapshotError, SnapshotResult};

/// Create the initial state of a game in the given mode.
#[must_use]
pub fn create_initial_state(mode: GameMode) -> GameState {
    GameState::new(mode)
}

/// Sub-boards the player to move may play in, ascending. Empty once the game is over.
#[must_use]
pub fn legal_destinations(state: &GameState) -> Destinations {
    state.legal_destinations()
}

/// Check whether a move would be accepted by `apply_move`.
#[must_use]
pub fn is_legal_move(state: &GameState, sub_board: usize, cell: usize) -> bool {
    state.is_legal_move(sub_board, cell)
}

/// Apply a move and return the next state, or `state` unchanged if the move is illegal.
#[must_use]
pub fn apply_move(state: &GameState, sub_board: usize, cell: usize) -> GameState {
    state.apply_move(sub_board, cell)
}
