//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, DogError, PlayerId};

pub(crate) fn to_py_err(err: DogError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Parse an action from its JSON form.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        serde_json::from_str(json)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// The card played, e.g. "♠A" or "JKR".
    #[getter]
    fn card(&self) -> String {
        self.0.card.to_string()
    }

    #[getter]
    fn pos_from(&self) -> Option<u8> {
        self.0.pos_from.map(|c| c.0)
    }

    #[getter]
    fn pos_to(&self) -> Option<u8> {
        self.0.pos_to.map(|c| c.0)
    }

    /// Rank a joker is played as, if any.
    #[getter]
    fn card_swap(&self) -> Option<String> {
        self.0.card_swap.map(|c| c.to_string())
    }

    fn __repr__(&self) -> String {
        format!("Action({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
