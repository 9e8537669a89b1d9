//! Geometry primitives: points, lines, axis-aligned rectangles, and the
//! dense raster consumed by contour extraction.

mod grid;
mod tol;
mod types;

pub use grid::{Grid, RasterError};
pub use tol::{approx_eq, is_zero, EPS};
pub use types::{component, point_eq, point_is_zero, Line, Path, Point, Rect};
