//! Bipartite matching and vertex cover bindings.

use pyo3::prelude::*;

#[pyfunction]
pub fn bipartite_matching(n: usize, m: usize, edges: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    rectkit::api::bipartite_matching(n, m, &edges)
}

#[pyfunction]
pub fn bipartite_vertex_cover(n: usize, m: usize, edges: Vec<(usize, usize)>) -> (Vec<usize>, Vec<usize>) {
    rectkit::api::bipartite_vertex_cover(n, m, &edges)
}

#[pyfunction]
pub fn bipartite_independent_set(n: usize, m: usize, edges: Vec<(usize, usize)>) -> (Vec<usize>, Vec<usize>) {
    rectkit::api::bipartite_independent_set(n, m, &edges)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bipartite_matching, m)?)?;
    m.add_function(wrap_pyfunction!(bipartite_vertex_cover, m)?)?;
    m.add_function(wrap_pyfunction!(bipartite_independent_set, m)?)?;
    Ok(())
}
