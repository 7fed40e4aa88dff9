//! Python bindings for the Dog engine.
//!
//! Exposes the benchmark harness surface. States travel as JSON strings in
//! the same shape `serde` produces on the Rust side.
//!
//! # Quick Start
//!
//! ```python
//! import dog_engine
//!
//! game = dog_engine.Dog(seed=42)
//! actions = game.get_list_action()
//! game.apply_action(actions[0] if actions else None)
//! state = game.get_state()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// dog_engine: rules engine for the Dog marble race card game.
#[pymodule]
fn dog_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyAction>()?;
    m.add_class::<PyDog>()?;
    Ok(())
}
