//! Move representation: a sub-board index plus a cell index.
//!
//! A `Move` does not name the player; the mark placed is always that of the
//! state's current player. Indices are plain `usize` so that any caller
//! input can be represented, including out-of-range values, which the
//! rules reject.

use serde::{Deserialize, Serialize};

/// A single placement: cell `cell` of sub-board `sub_board`.
///
/// ## Example
///
/// ```
/// use ultimate_ttt::core::Move;
///
/// let mv = Move::new(4, 0);
/// assert_eq!(mv.sub_board, 4);
/// assert_eq!(mv.cell, 0);
/// assert_eq!(mv.to_string(), "4/0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Index of the sub-board in the main grid.
    pub sub_board: usize,

    /// Index of the cell within the sub-board.
    /// Also names the sub-board the opponent is sent to.
    pub cell: usize,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(sub_board: usize, cell: usize) -> Self {
        Self { sub_board, cell }
    }
}

impl From<(usize, usize)> for Move {
    fn from((sub_board, cell): (usize, usize)) -> Self {
        Self::new(sub_board, cell)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.sub_board, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_from_tuple() {
        assert_eq!(Move::from((7, 2)), Move::new(7, 2));
    }

    #[test]
    fn test_move_ordering_is_row_major() {
        let mut moves = vec![Move::new(1, 0), Move::new(0, 8), Move::new(0, 1)];
        moves.sort();
        assert_eq!(moves, vec![Move::new(0, 1), Move::new(0, 8), Move::new(1, 0)]);
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(3, 5);
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"sub_board":3,"cell":5}"#);
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
