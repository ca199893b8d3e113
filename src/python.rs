use crate::algorithm::route_solver::{RouteSolver, ShortcutCandidate};
use pyo3::prelude::*;

#[pyclass]
pub struct PyRouteSolver {
    inner: RouteSolver<i64>,
}

#[pymethods]
impl PyRouteSolver {
    #[new]
    fn new(edges: Vec<(usize, usize, i64)>, shortcuts: Vec<(usize, i64, usize)>) -> PyResult<Self> {
        let shortcuts: Vec<ShortcutCandidate<i64>> = shortcuts.into_iter().map(Into::into).collect();
        let inner = RouteSolver::from_edges(&edges, &shortcuts)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        Ok(PyRouteSolver { inner })
    }

    /// Returns `(cost, path)` or `None` when no shortcut is usable
    fn solve(&self, start: usize, exits: Vec<usize>) -> PyResult<Option<(i64, Vec<usize>)>> {
        let route = self
            .inner
            .solve(start, &exits)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        Ok(route.map(|r| (r.cost, r.path)))
    }
}

#[pymodule]
fn shortcut_sssp_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyRouteSolver>()?;
    Ok(())
}
