//! Sub-boards, the main board, and the shared line check.
//!
//! Both levels of the game are 3×3 grids indexed 0-8 in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! A `SubBoard` holds nine cell marks. The `MainBoard` holds nine sub-boards
//! and treats each sub-board's winner as a "macro cell" when looking for the
//! overall winner, using the same line check as the sub-boards.
//!
//! Derived attributes (winners, fullness) are cached, and are only ever
//! recomputed together with the cells they derive from.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{mark_symbol, Mark, Player};
use crate::error::SnapshotError;

/// Number of cells in a sub-board, and of sub-boards in the main board.
pub const BOARD_CELLS: usize = 9;

/// The eight winning triples, checked in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Ascending set of sub-board indices.
///
/// Holds at most nine entries, so it never allocates.
pub type Destinations = SmallVec<[usize; BOARD_CELLS]>;

/// Find the winner of a 3×3 grid of marks.
///
/// Returns the shared mark of the first complete line in `WINNING_LINES`
/// order, or `None` if no line holds three identical non-empty marks.
///
/// ```
/// use ultimate_ttt::core::{line_winner, Player};
///
/// let x = Some(Player::X);
/// let cells = [x, x, x, None, None, None, None, None, None];
/// assert_eq!(line_winner(&cells), Some(Player::X));
/// assert_eq!(line_winner(&[None; 9]), None);
/// ```
#[must_use]
pub fn line_winner(cells: &[Mark; BOARD_CELLS]) -> Mark {
    WINNING_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Some(player) if cells[b] == Some(player) && cells[c] == Some(player) => Some(player),
        _ => None,
    })
}

// =============================================================================
// SubBoard
// =============================================================================

/// One of the nine inner tic-tac-toe grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSubBoard")]
pub struct SubBoard {
    cells: [Mark; BOARD_CELLS],
    winner: Mark,
    is_full: bool,
}

impl SubBoard {
    /// An empty sub-board: no marks, no winner, not full.
    pub const EMPTY: SubBoard = SubBoard {
        cells: [None; BOARD_CELLS],
        winner: None,
        is_full: false,
    };

    /// Create an empty sub-board.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a sub-board from its cells, deriving winner and fullness.
    #[must_use]
    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self {
            cells,
            winner: line_winner(&cells),
            is_full: cells.iter().all(Option::is_some),
        }
    }

    /// Return a copy with `player`'s mark placed at `cell`.
    ///
    /// Winner and fullness are recomputed from the new cells. The caller
    /// guarantees that `cell` is in range and empty.
    #[must_use]
    pub(crate) fn with_mark(&self, cell: usize, player: Player) -> Self {
        debug_assert!(self.cells[cell].is_none(), "cell {cell} already marked");
        let mut cells = self.cells;
        cells[cell] = Some(player);
        Self::from_cells(cells)
    }

    /// Get the mark at `cell`, or `None` if the index is out of range.
    #[must_use]
    pub fn cell(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied()
    }

    /// All nine cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    /// Check whether `cell` is in range and holds no mark.
    #[must_use]
    pub fn is_cell_empty(&self, cell: usize) -> bool {
        matches!(self.cell(cell), Some(None))
    }

    /// Iterate over the indices of empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_none())
            .map(|(i, _)| i)
    }

    /// Number of marks placed on this sub-board.
    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|mark| mark.is_some()).count()
    }

    /// The player holding a complete line here, if any.
    #[must_use]
    pub fn winner(&self) -> Mark {
        self.winner
    }

    /// Check whether every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.is_full
    }

    /// Render one row (0-2) of this sub-board as three characters.
    fn row_symbols(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        self.cells[row * 3..row * 3 + 3].iter().map(|&mark| mark_symbol(mark))
    }
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let line: String = self.row_symbols(row).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Wire shape of a `SubBoard`, validated on the way in.
#[derive(Deserialize)]
struct RawSubBoard {
    cells: [Mark; BOARD_CELLS],
    winner: Mark,
    is_full: bool,
}

impl TryFrom<RawSubBoard> for SubBoard {
    type Error = SnapshotError;

    fn try_from(raw: RawSubBoard) -> Result<Self, Self::Error> {
        let board = SubBoard::from_cells(raw.cells);
        if board.winner != raw.winner {
            return Err(SnapshotError::inconsistent(format!(
                "sub-board winner {:?} does not match its cells ({:?})",
                raw.winner, board.winner
            )));
        }
        if board.is_full != raw.is_full {
            return Err(SnapshotError::inconsistent(format!(
                "sub-board full flag {} does not match its cells",
                raw.is_full
            )));
        }
        Ok(board)
    }
}

// =============================================================================
// MainBoard
// =============================================================================

/// The outer grid of nine sub-boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMainBoard")]
pub struct MainBoard {
    boards: [SubBoard; BOARD_CELLS],
    winner: Mark,
}

impl MainBoard {
    /// Create a main board of nine empty sub-boards.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boards: [SubBoard::EMPTY; BOARD_CELLS],
            winner: None,
        }
    }

    /// Build a main board from its sub-boards, deriving the overall winner.
    #[must_use]
    pub fn from_sub_boards(boards: [SubBoard; BOARD_CELLS]) -> Self {
        let winner = line_winner(&Self::macro_cells_of(&boards));
        Self { boards, winner }
    }

    /// Return a copy with `player`'s mark placed at (`sub_board`, `cell`).
    ///
    /// Only the targeted sub-board is rebuilt; the overall winner is then
    /// recomputed from the macro cells. The caller guarantees that both
    /// indices are in range and the cell is empty.
    #[must_use]
    pub(crate) fn with_move(&self, sub_board: usize, cell: usize, player: Player) -> Self {
        let mut boards = self.boards;
        boards[sub_board] = boards[sub_board].with_mark(cell, player);
        Self::from_sub_boards(boards)
    }

    fn macro_cells_of(boards: &[SubBoard; BOARD_CELLS]) -> [Mark; BOARD_CELLS] {
        boards.map(|board| board.winner())
    }

    /// Each sub-board's winner, treated as a cell of the outer grid.
    #[must_use]
    pub fn macro_cells(&self) -> [Mark; BOARD_CELLS] {
        Self::macro_cells_of(&self.boards)
    }

    /// Get a sub-board, or `None` if the index is out of range.
    #[must_use]
    pub fn sub_board(&self, index: usize) -> Option<&SubBoard> {
        self.boards.get(index)
    }

    /// All nine sub-boards in row-major order.
    #[must_use]
    pub fn sub_boards(&self) -> &[SubBoard; BOARD_CELLS] {
        &self.boards
    }

    /// The player holding a complete line of macro cells, if any.
    #[must_use]
    pub fn winner(&self) -> Mark {
        self.winner
    }

    /// Indices of sub-boards that still have an empty cell, ascending.
    #[must_use]
    pub fn non_full(&self) -> Destinations {
        self.boards
            .iter()
            .enumerate()
            .filter(|(_, board)| !board.is_full())
            .map(|(i, _)| i)
            .collect()
    }

    /// Check whether every sub-board is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.boards.iter().all(SubBoard::is_full)
    }

    /// Total marks placed across all sub-boards.
    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.boards.iter().map(SubBoard::mark_count).sum()
    }
}

impl Default for MainBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MainBoard {
    /// Renders the 9×9 grid of cells, with sub-boards separated by rules.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for band in 0..3 {
            if band > 0 {
                writeln!(f, "---+---+---")?;
            }
            for row in 0..3 {
                let line = (0..3)
                    .map(|col| self.boards[band * 3 + col].row_symbols(row).collect::<String>())
                    .collect::<Vec<_>>()
                    .join("|");
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Wire shape of a `MainBoard`, validated on the way in.
#[derive(Deserialize)]
struct RawMainBoard {
    boards: [SubBoard; BOARD_CELLS],
    winner: Mark,
}

impl TryFrom<RawMainBoard> for MainBoard {
    type Error = SnapshotError;

    fn try_from(raw: RawMainBoard) -> Result<Self, Self::Error> {
        let board = MainBoard::from_sub_boards(raw.boards);
        if board.winner != raw.winner {
            return Err(SnapshotError::inconsistent(format!(
                "main board winner {:?} does not match the sub-board winners ({:?})",
                raw.winner, board.winner
            )));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Mark = Some(Player::X);
    const O: Mark = Some(Player::O);
    const E: Mark = None;

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let mut cells = [E; BOARD_CELLS];
            for i in line {
                cells[i] = O;
            }
            assert_eq!(line_winner(&cells), O, "line {line:?}");
        }
    }

    #[test]
    fn test_no_winner_without_complete_line() {
        // X O X / X O O / O X X
        let cells = [X, O, X, X, O, O, O, X, X];
        assert_eq!(line_winner(&cells), None);

        let cells = [X, X, E, E, E, E, E, E, E];
        assert_eq!(line_winner(&cells), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let cells = [X, X, O, E, E, E, E, E, E];
        assert_eq!(line_winner(&cells), None);
    }

    #[test]
    fn test_empty_sub_board() {
        let board = SubBoard::new();
        assert_eq!(board.winner(), None);
        assert!(!board.is_full());
        assert_eq!(board.mark_count(), 0);
        assert_eq!(board.empty_cells().count(), BOARD_CELLS);
        assert_eq!(board, SubBoard::default());
    }

    #[test]
    fn test_with_mark_recomputes_winner() {
        let board = SubBoard::new()
            .with_mark(0, Player::X)
            .with_mark(1, Player::X);
        assert_eq!(board.winner(), None);

        let won = board.with_mark(2, Player::X);
        assert_eq!(won.winner(), X);
        assert!(!won.is_full());
        assert_eq!(won.cell(2), Some(X));
        // The original value is untouched.
        assert_eq!(board.cell(2), Some(None));
    }

    #[test]
    fn test_with_mark_recomputes_full() {
        let cells = [X, O, X, X, O, O, O, X, E];
        let board = SubBoard::from_cells(cells);
        assert!(!board.is_full());

        let filled = board.with_mark(8, Player::X);
        assert!(filled.is_full());
        assert_eq!(filled.winner(), None);
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = SubBoard::new();
        assert_eq!(board.cell(9), None);
        assert!(!board.is_cell_empty(9));
        assert!(board.is_cell_empty(8));
    }

    #[test]
    fn test_main_board_winner_from_macro_cells() {
        let won_by_x = SubBoard::from_cells([X, X, X, E, E, E, E, E, E]);
        let mut boards = [SubBoard::EMPTY; BOARD_CELLS];
        boards[2] = won_by_x;
        boards[4] = won_by_x;
        assert_eq!(MainBoard::from_sub_boards(boards).winner(), None);

        boards[6] = won_by_x;
        let main = MainBoard::from_sub_boards(boards);
        assert_eq!(main.winner(), X);
        assert_eq!(main.macro_cells()[4], X);
    }

    #[test]
    fn test_main_board_non_full_is_ascending() {
        let full = SubBoard::from_cells([X, O, X, X, O, O, O, X, X]);
        let mut boards = [SubBoard::EMPTY; BOARD_CELLS];
        boards[1] = full;
        boards[5] = full;
        let main = MainBoard::from_sub_boards(boards);

        assert_eq!(main.non_full().as_slice(), &[0, 2, 3, 4, 6, 7, 8]);
        assert!(!main.is_full());
        assert_eq!(main.mark_count(), 18);
    }

    #[test]
    fn test_with_move_touches_one_sub_board() {
        let main = MainBoard::new();
        let next = main.with_move(4, 0, Player::X);

        assert_eq!(next.sub_board(4).and_then(|b| b.cell(0)), Some(X));
        assert_eq!(next.mark_count(), 1);
        for i in (0..BOARD_CELLS).filter(|&i| i != 4) {
            assert_eq!(next.sub_board(i), main.sub_board(i));
        }
    }

    #[test]
    fn test_display_layout() {
        let main = MainBoard::new().with_move(0, 0, Player::X).with_move(8, 8, Player::O);
        let rendered = main.to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "X..|...|...");
        assert_eq!(lines[3], "---+---+---");
        assert_eq!(lines[10], "...|...|..O");
    }

    #[test]
    fn test_sub_board_deserialize_rejects_stale_winner() {
        let json = r#"{"cells":[null,null,null,null,null,null,null,null,null],"winner":"X","is_full":false}"#;
        let result: Result<SubBoard, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_sub_board_serialization() {
        let board = SubBoard::from_cells([X, X, X, O, O, E, E, E, E]);
        let json = serde_json::to_string(&board).unwrap();
        let back: SubBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
