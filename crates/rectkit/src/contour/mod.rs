//! Raster-to-orthogonal-polygon contour extraction.

mod extract;

pub use extract::get_contours;
