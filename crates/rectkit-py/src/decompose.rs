//! Minimum rectangular decomposition bindings.

use crate::common::{map_err, path_from_py, rect_to_py, PyPath, PyRect};
use pyo3::prelude::*;

#[pyfunction]
pub fn decompose_region(paths: Vec<PyPath>, clockwise: bool) -> PyResult<Vec<PyRect>> {
    let paths: Vec<rectkit::Path> = paths.into_iter().map(path_from_py).collect();
    let rects = rectkit::api::decompose_region(&paths, clockwise).map_err(map_err)?;
    Ok(rects.into_iter().map(rect_to_py).collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(decompose_region, m)?)?;
    Ok(())
}
