//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{DogConfig, GameState, PlayerId};
use crate::game::Dog;

use super::py_core::{to_py_err, PyAction, PyPlayerId};

fn state_to_json(state: &GameState) -> PyResult<String> {
    serde_json::to_string(state).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Python wrapper for the Dog engine.
#[pyclass(name = "Dog")]
pub struct PyDog {
    game: Dog,
}

#[pymethods]
impl PyDog {
    /// Create a table and deal the first game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> PyResult<Self> {
        let game = Dog::new(DogConfig::default().with_seed(seed)).map_err(to_py_err)?;
        Ok(Self { game })
    }

    /// Start over with the configured seed.
    fn reset(&mut self) {
        self.game.reset();
    }

    /// Full state as JSON.
    fn get_state(&self) -> PyResult<String> {
        state_to_json(self.game.state())
    }

    /// Replace the state with a JSON snapshot.
    fn set_state(&mut self, json: &str) -> PyResult<()> {
        let state: GameState =
            serde_json::from_str(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        self.game.set_state(state).map_err(to_py_err)
    }

    /// Legal actions of the active player.
    fn get_list_action(&self) -> Vec<PyAction> {
        self.game.get_list_action().into_iter().map(PyAction).collect()
    }

    /// Apply an action, or pass with None.
    #[pyo3(signature = (action = None))]
    fn apply_action(&mut self, action: Option<PyAction>) -> PyResult<()> {
        self.game
            .apply_action(action.as_ref().map(|a| &a.0))
            .map_err(to_py_err)
    }

    /// State as seen by one player, as JSON.
    fn get_player_view(&self, player: u8) -> PyResult<String> {
        state_to_json(&self.game.get_player_view(PlayerId::new(player)))
    }

    #[getter]
    fn active_player(&self) -> PyPlayerId {
        PyPlayerId(self.game.state().active_player)
    }

    /// The winner, once the game is over.
    fn winner(&self) -> Option<PyPlayerId> {
        self.game.winner().map(PyPlayerId)
    }

    fn __repr__(&self) -> String {
        let state = self.game.state();
        format!(
            "Dog(round={}, active={}, phase={:?})",
            state.round, state.active_player, state.phase
        )
    }
}
