//! Player symbols and cell marks.
//!
//! ## Player
//!
//! The two sides of the game. `X` always moves first.
//!
//! ## Mark
//!
//! The content of a single cell: a player's symbol or empty (`None`).
//! A mark never changes once it is set.

use serde::{Deserialize, Serialize};

/// One of the two player symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Player {
    /// The player who moves first in every game.
    pub const FIRST: Player = Player::X;

    /// Get the other player.
    ///
    /// ```
    /// use ultimate_ttt::core::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol used when rendering boards.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of one cell (or one macro cell): a player's symbol, or `None` when empty.
pub type Mark = Option<Player>;

/// Render a mark as a single character, `.` for empty.
#[must_use]
pub fn mark_symbol(mark: Mark) -> char {
    mark.map_or('.', Player::symbol)
}
