//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Mark, Move};

/// Render a mark the way Python callers see it: `"X"`, `"O"` or `None`.
pub(crate) fn mark_to_py(mark: Mark) -> Option<String> {
    mark.map(|player| player.to_string())
}

/// Python wrapper for Move.
#[pyclass(name = "Move", frozen)]
#[derive(Clone, Copy, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Create a move at cell `cell` of sub-board `sub_board`.
    #[new]
    fn new(sub_board: usize, cell: usize) -> Self {
        Self(Move::new(sub_board, cell))
    }

    #[getter]
    fn sub_board(&self) -> usize {
        self.0.sub_board
    }

    #[getter]
    fn cell(&self) -> usize {
        self.0.cell
    }

    fn __repr__(&self) -> String {
        format!("Move({}, {})", self.0.sub_board, self.0.cell)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.sub_board.wrapping_mul(9).wrapping_add(self.0.cell) as u64
    }
}
