//! Game state: the board plus whose turn it is and where they may play.
//!
//! ## GameState
//!
//! An immutable value. A game starts from `GameState::new` and every later
//! state is produced by applying a move to the previous one; nothing mutates
//! a state in place. Rejected moves hand back an equal copy of the input.
//!
//! ## Snapshots
//!
//! `GameState` implements `Serialize`/`Deserialize`. Deserializing checks
//! every invariant that can be checked without move history, so a decoded
//! state is always one the engine could have produced:
//!
//! - cached sub-board winners and full flags match the cells
//! - the main-board winner matches the macro cells
//! - `is_game_over` is set exactly when the main board has a winner
//! - a forced sub-board is in range, not full, and only present mid-game
//! - the move counter equals the number of marks, and the player to move
//!   follows from its parity

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::board::{Destinations, MainBoard, SubBoard, BOARD_CELLS};
use super::config::GameMode;
use super::player::{Mark, Player};
use crate::error::{MoveError, SnapshotError, SnapshotResult};
use crate::rules::{rules_for, GameResult, RulesEngine};

/// Complete state of one Ultimate Tic-Tac-Toe game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: MainBoard,
    current_player: Player,
    forced_sub_board: Option<usize>,
    move_count: u32,
    is_game_over: bool,
    mode: GameMode,
}

impl GameState {
    /// Create the initial state of a game.
    ///
    /// Nine empty sub-boards, X to move, no forced sub-board, zero moves.
    ///
    /// ```
    /// use ultimate_ttt::core::{GameMode, GameState, Player};
    ///
    /// let state = GameState::new(GameMode::Normal);
    /// assert_eq!(state.current_player(), Player::X);
    /// assert_eq!(state.forced_sub_board(), None);
    /// assert_eq!(state.move_count(), 0);
    /// assert!(!state.is_game_over());
    /// ```
    #[must_use]
    pub const fn new(mode: GameMode) -> Self {
        Self {
            board: MainBoard::new(),
            current_player: Player::FIRST,
            forced_sub_board: None,
            move_count: 0,
            is_game_over: false,
            mode,
        }
    }

    /// Assemble a state after a move. The game-over flag is derived from
    /// the board so it cannot disagree with the main-board winner.
    pub(crate) fn from_parts(
        board: MainBoard,
        current_player: Player,
        forced_sub_board: Option<usize>,
        move_count: u32,
        mode: GameMode,
    ) -> Self {
        Self {
            board,
            current_player,
            forced_sub_board,
            move_count,
            is_game_over: board.winner().is_some(),
            mode,
        }
    }

    // === Accessors ===

    /// The main board.
    #[must_use]
    pub fn board(&self) -> &MainBoard {
        &self.board
    }

    /// Get a sub-board, or `None` if the index is out of range.
    #[must_use]
    pub fn sub_board(&self, index: usize) -> Option<&SubBoard> {
        self.board.sub_board(index)
    }

    /// The player whose mark the next accepted move places.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The sub-board the next move was sent to, if any.
    ///
    /// `None` means free choice among non-full sub-boards. A forced index
    /// that has since become full is lifted by `legal_destinations`.
    #[must_use]
    pub fn forced_sub_board(&self) -> Option<usize> {
        self.forced_sub_board
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// True exactly when the main board has a winner.
    ///
    /// A drawn game (every sub-board full, no winner) is *not* over by this
    /// flag; see `is_draw`.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// The mode this game was created with.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The overall winner, if any.
    #[must_use]
    pub fn winner(&self) -> Mark {
        self.board.winner()
    }

    /// Every sub-board is full and nobody won.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.board.winner().is_none() && self.board.is_full()
    }

    /// The final result, or `None` while the game can continue.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        rules_for(self.mode).is_terminal(self)
    }

    // === Rules ===

    /// Sub-boards the current player may play in, ascending.
    #[must_use]
    pub fn legal_destinations(&self) -> Destinations {
        rules_for(self.mode).legal_destinations(self)
    }

    /// Check a move, explaining why it would be rejected.
    pub fn check_move(&self, sub_board: usize, cell: usize) -> Result<(), MoveError> {
        rules_for(self.mode).check_move(self, sub_board, cell)
    }

    /// Check whether a move would be accepted.
    #[must_use]
    pub fn is_legal_move(&self, sub_board: usize, cell: usize) -> bool {
        rules_for(self.mode).is_legal_move(self, sub_board, cell)
    }

    /// Apply a move, returning the next state; an illegal move returns `self` unchanged.
    #[must_use]
    pub fn apply_move(&self, sub_board: usize, cell: usize) -> GameState {
        rules_for(self.mode).apply_move(self, sub_board, cell)
    }

    /// Apply a move, or report why it was rejected.
    pub fn try_apply_move(&self, sub_board: usize, cell: usize) -> Result<GameState, MoveError> {
        rules_for(self.mode).try_apply_move(self, sub_board, cell)
    }

    /// Every accepted move, in ascending (sub-board, cell) order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        rules_for(self.mode).legal_moves(self)
    }

    // === Snapshots ===

    /// Encode this state as a compact binary snapshot.
    pub fn to_bytes(&self) -> SnapshotResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    ///
    /// Fails if the bytes are malformed or describe a state that breaks a
    /// game invariant.
    pub fn from_bytes(bytes: &[u8]) -> SnapshotResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        match (self.winner(), self.forced_sub_board) {
            (Some(winner), _) => writeln!(f, "{winner} wins after {} moves", self.move_count),
            (None, Some(forced)) => {
                writeln!(f, "{} to move in sub-board {forced}", self.current_player)
            }
            (None, None) => writeln!(f, "{} to move anywhere", self.current_player),
        }
    }
}

/// Wire shape of a `GameState`, validated on the way in.
#[derive(Deserialize)]
struct RawGameState {
    board: MainBoard,
    current_player: Player,
    forced_sub_board: Option<usize>,
    move_count: u32,
    is_game_over: bool,
    mode: GameMode,
}

impl TryFrom<RawGameState> for GameState {
    type Error = SnapshotError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let has_winner = raw.board.winner().is_some();
        if raw.is_game_over != has_winner {
            return Err(SnapshotError::inconsistent(format!(
                "game-over flag {} but main board winner is {:?}",
                raw.is_game_over,
                raw.board.winner()
            )));
        }

        let marks = raw.board.mark_count();
        if raw.move_count as usize != marks {
            return Err(SnapshotError::inconsistent(format!(
                "move counter {} but {marks} marks on the board",
                raw.move_count
            )));
        }

        let expected_player = if raw.move_count % 2 == 0 {
            Player::FIRST
        } else {
            Player::FIRST.opponent()
        };
        if raw.current_player != expected_player {
            return Err(SnapshotError::inconsistent(format!(
                "{} to move after {} moves",
                raw.current_player, raw.move_count
            )));
        }

        if let Some(forced) = raw.forced_sub_board {
            if forced >= BOARD_CELLS {
                return Err(SnapshotError::inconsistent(format!(
                    "forced sub-board {forced} is out of range"
                )));
            }
            if has_winner {
                return Err(SnapshotError::inconsistent(
                    "forced sub-board set after the game was won",
                ));
            }
            if raw.board.sub_board(forced).is_some_and(SubBoard::is_full) {
                return Err(SnapshotError::inconsistent(format!(
                    "forced sub-board {forced} is already full"
                )));
            }
        }

        Ok(GameState {
            board: raw.board,
            current_player: raw.current_player,
            forced_sub_board: raw.forced_sub_board,
            move_count: raw.move_count,
            is_game_over: raw.is_game_over,
            mode: raw.mode,
        })
    }
}
