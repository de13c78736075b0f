//! Python bindings for the ultimate-ttt rules engine.
//!
//! Exposes an immutable `Game` value so a Python presentation layer can
//! hold the current state and replace it after each click.
//!
//! # Quick Start
//!
//! ```python
//! import ultimate_ttt as uttt
//!
//! game = uttt.Game("normal")
//! game.legal_destinations()      # [0, 1, ..., 8]
//!
//! game = game.apply_move(4, 0)   # X plays center board, cell 0
//! game.current_player            # "O"
//! game.legal_destinations()      # [0]
//!
//! game.apply_move(4, 1) == game  # illegal moves are no-ops
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// ultimate_ttt: Ultimate Tic-Tac-Toe rules engine.
#[pymodule]
fn ultimate_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMove>()?;
    m.add_class::<PyGame>()?;

    Ok(())
}
