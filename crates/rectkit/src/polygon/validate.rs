//! Structural validation of polygon input: every loop must be a simple,
//! axis-aligned ring with no duplicate or diagonal edges, and no two loops
//! may cross (they may still share vertices, e.g. a hole touching the
//! outer boundary).

use std::fmt;

use crate::geom::{point_eq, Path, Point};

#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    TooFewVertices { path_index: usize, len: usize },
    NonOrthogonalEdge { path_index: usize, vertex_index: usize },
    DuplicateVertex { path_index: usize, vertex_index: usize },
    SelfIntersecting { path_a: usize, path_b: usize },
    /// A `Side` derived internally from the vertex ring (after chord
    /// splicing) shares neither coordinate between its endpoints. Input
    /// orthogonality is already rejected by `NonOrthogonalEdge` before a
    /// ring is ever built; this variant instead guards the ring-derived
    /// `Side` abstraction itself, so a bisection or split that computed a
    /// bad target point surfaces as a recoverable error rather than
    /// corrupting the decomposition silently.
    DiagonalSide { a: Point, b: Point },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::TooFewVertices { path_index, len } => write!(
                f,
                "loop {path_index} has only {len} vertices; an orthogonal polygon needs at least 4"
            ),
            PolygonError::NonOrthogonalEdge { path_index, vertex_index } => write!(
                f,
                "loop {path_index} has a non-axis-aligned edge at vertex {vertex_index}"
            ),
            PolygonError::DuplicateVertex { path_index, vertex_index } => write!(
                f,
                "loop {path_index} has a duplicate vertex at index {vertex_index}"
            ),
            PolygonError::SelfIntersecting { path_a, path_b } => {
                if path_a == path_b {
                    write!(f, "loop {path_a} self-intersects")
                } else {
                    write!(f, "loops {path_a} and {path_b} cross")
                }
            }
            PolygonError::DiagonalSide { a, b } => {
                write!(f, "ring-derived side from {a:?} to {b:?} is not axis-aligned")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

/// Validates that every loop is a simple orthogonal polygon and that no
/// two loops cross at a non-vertex point.
pub fn validate_paths(paths: &[Path]) -> Result<(), PolygonError> {
    for (pi, path) in paths.iter().enumerate() {
        if path.len() < 4 {
            return Err(PolygonError::TooFewVertices { path_index: pi, len: path.len() });
        }
        let n = path.len();
        for i in 0..n {
            let cur = path[i];
            let next = path[(i + 1) % n];
            if point_eq(cur, next) {
                return Err(PolygonError::DuplicateVertex { path_index: pi, vertex_index: i });
            }
            let axis_aligned = crate::geom::approx_eq(cur.x, next.x) || crate::geom::approx_eq(cur.y, next.y);
            if !axis_aligned {
                return Err(PolygonError::NonOrthogonalEdge { path_index: pi, vertex_index: i });
            }
        }
    }

    let mut sides: Vec<(usize, (f64, f64), f64, bool)> = Vec::new(); // (path_index, (lo,hi), fixed, vertical)
    for (pi, path) in paths.iter().enumerate() {
        let n = path.len();
        for i in 0..n {
            let a = path[i];
            let b = path[(i + 1) % n];
            if crate::geom::approx_eq(a.x, b.x) {
                let (lo, hi) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
                sides.push((pi, (lo, hi), a.x, true));
            } else {
                let (lo, hi) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
                sides.push((pi, (lo, hi), a.y, false));
            }
        }
    }

    for i in 0..sides.len() {
        for j in (i + 1)..sides.len() {
            let (pa, (lo_a, hi_a), fixed_a, vert_a) = sides[i];
            let (pb, (lo_b, hi_b), fixed_b, vert_b) = sides[j];
            if vert_a != vert_b {
                // A vertical side at x=fixed_a spanning [lo_a,hi_a] crosses a
                // horizontal side at y=fixed_b spanning [lo_b,hi_b] iff each
                // fixed coordinate lies strictly inside the other's span.
                let (vx, vy_lo, vy_hi, hy, hx_lo, hx_hi) = if vert_a {
                    (fixed_a, lo_a, hi_a, fixed_b, lo_b, hi_b)
                } else {
                    (fixed_b, lo_b, hi_b, fixed_a, lo_a, hi_a)
                };
                if hx_lo < vx && vx < hx_hi && vy_lo < hy && hy < vy_hi {
                    return Err(PolygonError::SelfIntersecting { path_a: pa, path_b: pb });
                }
            } else if crate::geom::approx_eq(fixed_a, fixed_b) {
                // Collinear sides on the same line: overlapping (not just
                // touching at an endpoint) is also a crossing.
                let overlap = lo_a < hi_b - crate::geom::EPS && lo_b < hi_a - crate::geom::EPS;
                if overlap {
                    return Err(PolygonError::SelfIntersecting { path_a: pa, path_b: pb });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    fn square(llx: f64, lly: f64, urx: f64, ury: f64) -> Path {
        vec![
            Point::new(llx, lly),
            Point::new(urx, lly),
            Point::new(urx, ury),
            Point::new(llx, ury),
        ]
    }

    #[test]
    fn simple_square_is_valid() {
        assert!(validate_paths(&[square(0.0, 0.0, 1.0, 1.0)]).is_ok());
    }

    #[test]
    fn diagonal_edge_is_rejected() {
        let bad = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0), Point::new(1.0, -1.0)];
        assert!(matches!(
            validate_paths(&[bad]),
            Err(PolygonError::NonOrthogonalEdge { .. })
        ));
    }

    #[test]
    fn crossing_loops_are_rejected() {
        let a = square(0.0, 0.0, 4.0, 4.0);
        let b = square(2.0, 2.0, 6.0, 6.0);
        assert!(matches!(
            validate_paths(&[a, b]),
            Err(PolygonError::SelfIntersecting { .. })
        ));
    }

    #[test]
    fn nested_hole_is_valid() {
        let outer = square(0.0, 0.0, 4.0, 4.0);
        let hole = square(1.0, 1.0, 2.0, 2.0);
        assert!(validate_paths(&[outer, hole]).is_ok());
    }
}
