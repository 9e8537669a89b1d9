//! Side extraction and interval-tree indexing for chord discovery.
//!
//! A concave vertex resolves itself by shooting a ray toward the polygon's
//! interior and finding the nearest side it would hit. A ray traveling
//! along the X axis can only hit a side that itself varies in X at some
//! fixed Y (a "horizontal" side); a ray along Y can only hit a "vertical"
//! side. Each side list is indexed by an interval tree keyed on the span
//! the ray's fixed coordinate must fall inside, so the candidate sides for
//! a given ray are a single point-stab query away.

use crate::geom::Point;
use crate::interval::IntervalTree;
use crate::polygon::{PolygonError, RingArena, VertexId};

#[derive(Clone, Copy)]
pub(super) struct Side {
    pub(super) start: VertexId,
    pub(super) end: VertexId,
    pub(super) fixed: f64,
}

pub(super) struct SideIndex {
    pub(super) horizontal: Vec<Side>,
    pub(super) vertical: Vec<Side>,
    horizontal_tree: IntervalTree<usize>,
    vertical_tree: IntervalTree<usize>,
}

impl SideIndex {
    /// Fails with `PolygonError::DiagonalSide` if a ring edge shares
    /// neither coordinate between its endpoints — input orthogonality is
    /// already rejected before a ring is ever built, so this only fires if
    /// a chord split or bisection computed a bad target point.
    pub(super) fn build(arena: &RingArena) -> Result<Self, PolygonError> {
        let mut horizontal = Vec::new();
        let mut vertical = Vec::new();
        let mut horizontal_tree = IntervalTree::new();
        let mut vertical_tree = IntervalTree::new();

        for start in 0..arena.len() as VertexId {
            let end = arena.next(start);
            let a = arena.point(start);
            let b = arena.point(end);
            if crate::geom::approx_eq(a.y, b.y) {
                let (lo, hi) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
                let idx = horizontal.len();
                horizontal.push(Side { start, end, fixed: a.y });
                horizontal_tree.insert(lo, hi, idx);
            } else if crate::geom::approx_eq(a.x, b.x) {
                let (lo, hi) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
                let idx = vertical.len();
                vertical.push(Side { start, end, fixed: a.x });
                vertical_tree.insert(lo, hi, idx);
            } else {
                return Err(PolygonError::DiagonalSide { a, b });
            }
        }

        Ok(SideIndex { horizontal, vertical, horizontal_tree, vertical_tree })
    }

    /// Candidate horizontal sides whose X-span contains `x` (hit by a
    /// vertical ray at that X).
    pub(super) fn horizontal_at(&self, x: f64) -> Vec<usize> {
        self.horizontal_tree.collect_point(x)
    }

    /// Candidate vertical sides whose Y-span contains `y` (hit by a
    /// horizontal ray at that Y).
    pub(super) fn vertical_at(&self, y: f64) -> Vec<usize> {
        self.vertical_tree.collect_point(y)
    }
}

/// The interior point on `side` at the given fixed-axis coordinate.
pub(super) fn side_point_horizontal(side: &Side, x: f64) -> Point {
    Point::new(x, side.fixed)
}

pub(super) fn side_point_vertical(side: &Side, y: f64) -> Point {
    Point::new(side.fixed, y)
}
