//! Error types.
//!
//! The engine itself never fails: an illegal move is a no-op transition.
//! `MoveError` explains *why* a move was rejected, for callers that ask.
//! `SnapshotError` covers encoding and decoding saved game states.

use derive_more::{Display, Error, From};

use crate::core::board::BOARD_CELLS;

/// Reason a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The main board already has a winner.
    #[display("game is over")]
    GameOver,
    /// Sub-board index outside 0-8.
    #[display("sub-board {_0} is out of range (0-{})", BOARD_CELLS - 1)]
    SubBoardOutOfRange(#[error(not(source))] usize),
    /// Cell index outside 0-8.
    #[display("cell {_0} is out of range (0-{})", BOARD_CELLS - 1)]
    CellOutOfRange(#[error(not(source))] usize),
    /// The target cell already holds a mark.
    #[display("cell {cell} of sub-board {sub_board} is already marked")]
    CellOccupied {
        /// Sub-board index.
        sub_board: usize,
        /// Cell index within the sub-board.
        cell: usize,
    },
    /// The sub-board is not among the legal destinations.
    #[display("sub-board {sub_board} is not playable this turn")]
    SubBoardNotAllowed {
        /// Sub-board index.
        sub_board: usize,
    },
}

/// Failure to encode or decode a saved `GameState`.
#[derive(Debug, Display, Error, From)]
pub enum SnapshotError {
    /// Binary encoding or decoding failed.
    #[display("snapshot codec error: {_0}")]
    Codec(bincode::Error),
    /// The decoded fields break a game invariant.
    #[display("inconsistent game state: {_0}")]
    #[from(ignore)]
    InconsistentState(#[error(not(source))] String),
}

impl SnapshotError {
    /// Create an `InconsistentState` error.
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::InconsistentState(message.into())
    }
}

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
