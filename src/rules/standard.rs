//! Standard Ultimate Tic-Tac-Toe rules.
//!
//! - X moves first; players alternate.
//! - A move into cell *k* of any sub-board sends the opponent to sub-board *k*.
//! - If that sub-board is full, the opponent may play in any non-full
//!   sub-board instead.
//! - A sub-board is won by three of a player's marks in a line. A won
//!   sub-board stays playable until it is full.
//! - The game is won by three won sub-boards in a line.

use smallvec::smallvec;
use tracing::{debug, info, instrument};

use crate::core::{Destinations, GameMode, GameState};
use crate::error::MoveError;

use super::engine::RulesEngine;

/// The standard recursive rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRules;

/// Select the rules engine for a game mode.
///
/// Every mode currently plays by `StandardRules`.
#[must_use]
pub fn rules_for(mode: GameMode) -> StandardRules {
    match mode {
        GameMode::Normal | GameMode::Survival => StandardRules,
    }
}

impl StandardRules {
    /// Place the current player's mark and derive the next state.
    ///
    /// Only called after `check_move` accepted the move.
    fn transition(state: &GameState, sub_board: usize, cell: usize) -> GameState {
        let player = state.current_player();
        let board = state.board().with_move(sub_board, cell, player);

        // The opponent is sent to the sub-board matching the cell just
        // played, unless the game is decided or that sub-board is full.
        let forced = match board.sub_board(cell) {
            Some(target) if board.winner().is_none() && !target.is_full() => Some(cell),
            _ => None,
        };

        let next = GameState::from_parts(
            board,
            player.opponent(),
            forced,
            state.move_count() + 1,
            state.mode(),
        );

        let was_won = state.sub_board(sub_board).and_then(|b| b.winner());
        let now_won = next.sub_board(sub_board).and_then(|b| b.winner());
        if was_won.is_none() {
            if let Some(winner) = now_won {
                debug!(sub_board, %winner, "sub-board won");
            }
        }
        if let Some(winner) = next.winner() {
            info!(%winner, moves = next.move_count(), "game won");
        }

        next
    }
}

impl RulesEngine for StandardRules {
    fn legal_destinations(&self, state: &GameState) -> Destinations {
        if state.is_game_over() {
            return Destinations::new();
        }

        let open = state.board().non_full();
        match state.forced_sub_board() {
            Some(forced) if open.contains(&forced) => smallvec![forced],
            // No constraint, or the forced sub-board filled up.
            _ => open,
        }
    }

    fn check_move(&self, state: &GameState, sub_board: usize, cell: usize) -> Result<(), MoveError> {
        if state.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let board = state
            .sub_board(sub_board)
            .ok_or(MoveError::SubBoardOutOfRange(sub_board))?;
        match board.cell(cell) {
            None => return Err(MoveError::CellOutOfRange(cell)),
            Some(Some(_)) => return Err(MoveError::CellOccupied { sub_board, cell }),
            Some(None) => {}
        }

        if !self.legal_destinations(state).contains(&sub_board) {
            return Err(MoveError::SubBoardNotAllowed { sub_board });
        }

        Ok(())
    }

    #[instrument(level = "debug", skip(self, state), fields(player = %state.current_player()))]
    fn try_apply_move(
        &self,
        state: &GameState,
        sub_board: usize,
        cell: usize,
    ) -> Result<GameState, MoveError> {
        self.check_move(state, sub_board, cell)?;

        let next = Self::transition(state, sub_board, cell);
        debug!(
            moves = next.move_count(),
            forced = ?next.forced_sub_board(),
            "move applied"
        );
        Ok(next)
    }
}
