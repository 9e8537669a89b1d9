//! Curated re-export surface for the crate's public operations.
//!
//! `lib.rs` exposes the same items through `prelude`; this module groups
//! them by concern instead, which reads better from documentation and
//! downstream `use rectkit::api::*` call sites that want everything at once.

// Clipping
pub use crate::clip::{clip_line, clip_polygon};
// Raster contour extraction
pub use crate::contour::get_contours;
// Minimum rectangular decomposition
pub use crate::decompose::{decompose_region, DecomposeError};
// Geometry primitives
pub use crate::geom::{Grid, Line, Path, Point, RasterError, Rect};
// Bipartite matching and König cover/independent set
pub use crate::matching::{
    bipartite_independent_set, bipartite_matching, bipartite_vertex_cover, validate_bipartite_input,
    MatchingError,
};
// Polygon validation
pub use crate::polygon::PolygonError;

