//! Raster contour extraction bindings.

use crate::common::{map_err, path_to_py, PyPath};
use pyo3::prelude::*;
use rectkit::Grid;

#[pyfunction]
pub fn get_contours(height: usize, width: usize, data: Vec<f64>, clockwise: bool) -> PyResult<Vec<PyPath>> {
    let grid = Grid::from_row_major(height, width, data).map_err(map_err)?;
    let paths = rectkit::api::get_contours(&grid, clockwise);
    Ok(paths.iter().map(|p| path_to_py(p)).collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_contours, m)?)?;
    Ok(())
}
