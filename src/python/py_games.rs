//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{GameMode, GameState};

use super::py_core::{mark_to_py, PyMove};

/// Python wrapper for GameState.
///
/// Immutable: `apply_move` returns a new `Game`.
#[pyclass(name = "Game", frozen)]
#[derive(Clone, Copy, Debug)]
pub struct PyGame {
    state: GameState,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - mode: "normal" or "survival"
    #[new]
    #[pyo3(signature = (mode = "normal"))]
    fn new(mode: &str) -> PyResult<Self> {
        let mode: GameMode = mode
            .parse()
            .map_err(|_| PyValueError::new_err(format!("unknown game mode: {mode:?}")))?;
        Ok(Self {
            state: GameState::new(mode),
        })
    }

    /// Sub-boards the player to move may play in, ascending.
    fn legal_destinations(&self) -> Vec<usize> {
        self.state.legal_destinations().into_vec()
    }

    /// Every legal move.
    fn legal_moves(&self) -> Vec<PyMove> {
        self.state.legal_moves().into_iter().map(PyMove).collect()
    }

    /// Check whether a move would be accepted.
    fn is_legal_move(&self, sub_board: usize, cell: usize) -> bool {
        self.state.is_legal_move(sub_board, cell)
    }

    /// Apply a move. Illegal moves return an equal, unchanged game.
    fn apply_move(&self, sub_board: usize, cell: usize) -> Self {
        Self {
            state: self.state.apply_move(sub_board, cell),
        }
    }

    /// Apply a move, raising ValueError with the reason if it is illegal.
    fn try_apply_move(&self, sub_board: usize, cell: usize) -> PyResult<Self> {
        self.state
            .try_apply_move(sub_board, cell)
            .map(|state| Self { state })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Marks of one sub-board, row-major: "X", "O" or None.
    fn cells(&self, sub_board: usize) -> PyResult<Vec<Option<String>>> {
        let board = self
            .state
            .sub_board(sub_board)
            .ok_or_else(|| PyValueError::new_err(format!("sub-board {sub_board} is out of range")))?;
        Ok(board.cells().iter().map(|&mark| mark_to_py(mark)).collect())
    }

    /// Winner of each sub-board, row-major.
    fn sub_board_winners(&self) -> Vec<Option<String>> {
        self.state
            .board()
            .macro_cells()
            .iter()
            .map(|&mark| mark_to_py(mark))
            .collect()
    }

    /// Player to move: "X" or "O".
    #[getter]
    fn current_player(&self) -> String {
        self.state.current_player().to_string()
    }

    /// Sub-board the player to move was sent to, if any.
    #[getter]
    fn forced_sub_board(&self) -> Option<usize> {
        self.state.forced_sub_board()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[getter]
    fn is_draw(&self) -> bool {
        self.state.is_draw()
    }

    #[getter]
    fn winner(&self) -> Option<String> {
        mark_to_py(self.state.winner())
    }

    #[getter]
    fn mode(&self) -> String {
        self.state.mode().to_string()
    }

    /// Encode the game as a binary snapshot.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self
            .state
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Decode a snapshot produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(data: &[u8]) -> PyResult<Self> {
        GameState::from_bytes(data)
            .map(|state| Self { state })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.state == other.state
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.state.hash(&mut hasher);
        hasher.finish()
    }

    fn __str__(&self) -> String {
        self.state.to_string()
    }

    fn __repr__(&self) -> String {
        let status = match (self.state.winner(), self.state.is_draw()) {
            (Some(winner), _) => format!("won by {winner}"),
            (None, true) => "draw".to_string(),
            (None, false) => "ongoing".to_string(),
        };
        format!(
            "Game(mode={}, moves={}, to_move={}, status={})",
            self.state.mode(),
            self.state.move_count(),
            self.state.current_player(),
            status
        )
    }
}
