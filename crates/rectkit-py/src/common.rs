//! Python <-> `rectkit` type conversions shared by every binding module.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rectkit::{Line, Path, Point, Rect};
use std::error::Error;

pub type PyPoint = (f64, f64);
pub type PyLine = (PyPoint, PyPoint);
pub type PyRect = (f64, f64, f64, f64);
pub type PyPath = Vec<PyPoint>;

pub fn point_from_py(p: PyPoint) -> Point {
    Point::new(p.0, p.1)
}

pub fn point_to_py(p: Point) -> PyPoint {
    (p.x, p.y)
}

pub fn line_from_py(l: PyLine) -> Line {
    Line { a: point_from_py(l.0), b: point_from_py(l.1) }
}

pub fn line_to_py(l: Line) -> PyLine {
    (point_to_py(l.a), point_to_py(l.b))
}

pub fn rect_from_py(r: PyRect) -> Rect {
    Rect::new(r.0, r.1, r.2, r.3)
}

pub fn rect_to_py(r: Rect) -> PyRect {
    (r.llx, r.lly, r.urx, r.ury)
}

pub fn path_from_py(p: PyPath) -> Path {
    p.into_iter().map(point_from_py).collect()
}

pub fn path_to_py(p: &[Point]) -> PyPath {
    p.iter().map(|&pt| point_to_py(pt)).collect()
}

pub fn map_err<E: Error>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}
