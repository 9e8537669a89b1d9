//! Rectilinear geometry toolkit: clipping, raster contour extraction,
//! minimum rectangular decomposition, and the bipartite matching / König
//! cover machinery that backs the decomposer.

pub mod api;
pub mod clip;
pub mod contour;
pub mod decompose;
pub mod geom;
pub mod interval;
pub mod matching;
pub mod polygon;

#[cfg(test)]
mod testutil;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Grid, Line, Path, Point, RasterError, Rect};

/// Common imports for quick access to the library's six operations.
pub mod prelude {
    pub use crate::clip::{clip_line, clip_polygon};
    pub use crate::contour::get_contours;
    pub use crate::decompose::{decompose_region, DecomposeError};
    pub use crate::geom::{Grid, Line, Path, Point, RasterError, Rect};
    pub use crate::matching::{bipartite_independent_set, bipartite_matching, bipartite_vertex_cover};
    pub use crate::polygon::PolygonError;
}
