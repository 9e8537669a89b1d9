//! Clipping bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{line_from_py, line_to_py, path_from_py, path_to_py, rect_from_py, PyLine, PyPath, PyRect};
use pyo3::prelude::*;

#[pyfunction]
pub fn clip_line(window: PyRect, line: PyLine) -> (PyLine, bool) {
    let (clipped, visible) = rectkit::api::clip_line(rect_from_py(window), line_from_py(line));
    (line_to_py(clipped), visible)
}

#[pyfunction]
pub fn clip_polygon(window: PyRect, path: PyPath) -> PyPath {
    let clipped = rectkit::api::clip_polygon(rect_from_py(window), &path_from_py(path));
    path_to_py(&clipped)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(clip_line, m)?)?;
    m.add_function(wrap_pyfunction!(clip_polygon, m)?)?;
    Ok(())
}
