//! Rules engine trait and game results.
//!
//! A rules engine decides:
//! - which sub-boards the current player may play in
//! - whether a move is acceptable, and why not
//! - how an accepted move produces the next state
//! - when the game has ended
//!
//! Engines never mutate a `GameState`. Every transition returns a new value,
//! and rejection returns the input unchanged.

use tracing::trace;

use crate::core::{Destinations, GameState, Move, Player};
use crate::error::MoveError;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// A player completed a line of sub-boards.
    Winner(Player),
    /// Every sub-board is full and nobody won.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_destinations`: return empty once the game is over
/// - `check_move`: the single acceptance predicate; every other entry point
///   goes through it so they can never disagree
/// - `try_apply_move`: must return `Err` exactly when `check_move` does, and
///   must be deterministic
pub trait RulesEngine {
    /// Sub-boards the current player may play in, ascending.
    fn legal_destinations(&self, state: &GameState) -> Destinations;

    /// Check a move, explaining why it would be rejected.
    ///
    /// Must be total: any index, including out-of-range ones, yields
    /// `Ok` or `Err`, never a panic.
    fn check_move(&self, state: &GameState, sub_board: usize, cell: usize) -> Result<(), MoveError>;

    /// Apply a move, or report why it was rejected.
    fn try_apply_move(
        &self,
        state: &GameState,
        sub_board: usize,
        cell: usize,
    ) -> Result<GameState, MoveError>;

    // === Convenience Methods ===

    /// Check whether a move would be accepted.
    fn is_legal_move(&self, state: &GameState, sub_board: usize, cell: usize) -> bool {
        self.check_move(state, sub_board, cell).is_ok()
    }

    /// Apply a move; an illegal move returns an unchanged copy of `state`.
    fn apply_move(&self, state: &GameState, sub_board: usize, cell: usize) -> GameState {
        match self.try_apply_move(state, sub_board, cell) {
            Ok(next) => next,
            Err(err) => {
                trace!(sub_board, cell, %err, "move rejected");
                *state
            }
        }
    }

    /// Enumerate every accepted move, ascending by (sub-board, cell).
    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        self.legal_destinations(state)
            .into_iter()
            .filter_map(|index| state.sub_board(index).map(|board| (index, board)))
            .flat_map(|(index, board)| board.empty_cells().map(move |cell| Move::new(index, cell)))
            .filter(|mv| self.is_legal_move(state, mv.sub_board, mv.cell))
            .collect()
    }

    /// Check if the game has ended.
    ///
    /// Returns `Some(result)` for a win or a draw, `None` if play continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if let Some(winner) = state.winner() {
            Some(GameResult::Winner(winner))
        } else if state.is_draw() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::O);
        assert!(!result.is_winner(Player::X));
        assert!(result.is_winner(Player::O));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Player::X));
        assert!(!draw.is_winner(Player::O));
    }
}
