//! Per-vertex concavity classification for orthogonal polygons.

use crate::geom::{approx_eq, Point};

/// Classifies the corner at `cur` (with ring neighbors `prev` and `next`)
/// as concave (`Some(true)`) or convex (`Some(false)`), or `None` if the
/// three points are collinear and `cur` is not a real corner.
///
/// The baseline formula below is correct for a counter-clockwise polygon;
/// `clockwise` inverts it. (Tracing a plain rectangle counter-clockwise and
/// classifying its corners by hand confirms the baseline is uninverted for
/// that winding, and needs exactly one inversion for the clockwise trace.)
pub(crate) fn classify(prev: Point, cur: Point, next: Point, clockwise: bool) -> Option<bool> {
    let concave = if approx_eq(prev.x, cur.x) {
        if approx_eq(next.x, cur.x) {
            return None;
        }
        let dir0 = prev.y < cur.y;
        let dir1 = cur.x < next.x;
        dir0 == dir1
    } else {
        if approx_eq(next.y, cur.y) {
            return None;
        }
        let dir0 = prev.x < cur.x;
        let dir1 = cur.y < next.y;
        dir0 != dir1
    };
    Some(if clockwise { !concave } else { concave })
}
