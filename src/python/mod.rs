//! Python bindings for the Amazons rules engine.
//!
//! Lets a Python front end (tkinter board, notebook, training script)
//! drive the Rust engine instead of carrying its own copy of the rules.
//!
//! # Quick Start
//!
//! ```python
//! import amazons
//!
//! game = amazons.Game()
//! game.select_piece(0, 3)
//! game.apply_move(0, 3, 5, 3)
//! winner = game.apply_arrow(5, 8)   # None while the game goes on
//!
//! print(game.side_to_move)          # "black"
//! print(game.board())               # 10x10 int8 numpy array
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// amazons: Game of the Amazons rules engine.
#[pymodule]
fn amazons(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;

    m.add("EMPTY", EMPTY)?;
    m.add("WHITE", WHITE)?;
    m.add("BLACK", BLACK)?;
    m.add("ARROW", ARROW)?;

    Ok(())
}
