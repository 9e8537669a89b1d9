//! Minimum rectangular decomposition of orthogonal polygons (with holes)
//! via candidate-chord discovery, a bipartite crossing-graph independent
//! set (Lipski-Imai), and a single-direction cleanup pass for whatever
//! concave vertices the independent set left behind.

mod chord;
mod sides;

use std::collections::HashSet;
use std::fmt;

use crate::geom::{point_eq, Path, Rect, EPS};
use crate::matching::bipartite_independent_set;
use crate::polygon::{validate_paths, PolygonError, RingArena, VertexId};

use chord::{horizontal_candidate, horizontal_span, vertical_candidate, vertical_span, Diagonal};
use sides::{Side, SideIndex};

#[derive(Clone, Debug, PartialEq)]
pub enum DecomposeError {
    Polygon(PolygonError),
    /// A concave vertex's inward ray found no candidate side to land on.
    /// This indicates an unbounded or otherwise malformed input that
    /// slipped past `validate_paths`.
    NoChordTarget { vertex: Path },
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecomposeError::Polygon(e) => write!(f, "{e}"),
            DecomposeError::NoChordTarget { vertex } => {
                write!(f, "concave vertex near {vertex:?} has no candidate chord target")
            }
        }
    }
}

impl std::error::Error for DecomposeError {}

impl From<PolygonError> for DecomposeError {
    fn from(e: PolygonError) -> Self {
        DecomposeError::Polygon(e)
    }
}

/// Decomposes the region bounded by `paths` (an outer boundary plus zero
/// or more holes) into the minimum number of non-overlapping rectangles.
///
/// `clockwise` selects the input's winding convention; see `get_contours`
/// for which of the two this library treats as a hole versus an outer
/// boundary.
pub fn decompose_region(paths: &[Path], clockwise: bool) -> Result<Vec<Rect>, DecomposeError> {
    validate_paths(paths)?;

    let owned: Vec<Vec<_>> = paths.to_vec();
    let mut arena = RingArena::from_paths(&owned, clockwise);

    let concave_vertices = |arena: &RingArena| -> Vec<VertexId> {
        (0..arena.len() as VertexId).filter(|&v| arena.is_concave(v)).collect()
    };

    // Round 1: candidate chords from every original concave vertex, keep
    // only the maximum subset that doesn't cross (independent set of the
    // bipartite crossing graph).
    let index = SideIndex::build(&arena)?;
    let reflex = concave_vertices(&arena);

    let mut hdiagonals = Vec::new();
    let mut vdiagonals = Vec::new();
    for &v in &reflex {
        if let Some(d) = horizontal_candidate(&arena, &index, v) {
            hdiagonals.push(d);
        }
        if let Some(d) = vertical_candidate(&arena, &index, v) {
            vdiagonals.push(d);
        }
    }

    let crossings = build_crossings(&arena, &hdiagonals, &vdiagonals);
    let (keep_h, keep_v) = bipartite_independent_set(hdiagonals.len(), vdiagonals.len(), &crossings);

    let selected_h: Vec<Diagonal> = keep_h.iter().map(|&i| hdiagonals[i]).collect();
    let selected_v: Vec<Diagonal> = keep_v.iter().map(|&i| vdiagonals[i]).collect();

    let mut applied: HashSet<VertexId> = HashSet::new();
    apply_on_sides(&mut arena, &index.vertical, &selected_h, &mut applied);
    apply_on_sides(&mut arena, &index.horizontal, &selected_v, &mut applied);

    // Round 2: resolve whatever concave vertices remain (those whose
    // candidate chord crossed one that won the independent set) with a
    // single vertical-direction cut each. No crossing check is needed here
    // — by construction these cuts no longer compete with anything.
    let index2 = SideIndex::build(&arena)?;
    let leftover = concave_vertices(&arena);
    let mut cleanup = Vec::new();
    for &v in &leftover {
        match vertical_candidate(&arena, &index2, v) {
            Some(d) => cleanup.push(d),
            None => {
                let p = arena.point(v);
                return Err(DecomposeError::NoChordTarget { vertex: vec![p] });
            }
        }
    }
    let mut applied2: HashSet<VertexId> = HashSet::new();
    apply_on_sides(&mut arena, &index2.horizontal, &cleanup, &mut applied2);

    Ok(find_regions(&arena))
}

fn build_crossings(arena: &RingArena, hdiagonals: &[Diagonal], vdiagonals: &[Diagonal]) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for (hi, h) in hdiagonals.iter().enumerate() {
        let (h_lo, h_hi, h_y) = horizontal_span(arena, h);
        for (vi, v) in vdiagonals.iter().enumerate() {
            let (v_lo, v_hi, v_x) = vertical_span(arena, v);
            if h_lo + EPS < v_x && v_x < h_hi - EPS && v_lo + EPS < h_y && h_y < v_hi - EPS {
                edges.push((hi, vi));
            }
        }
    }
    edges
}

/// Applies each diagonal in `diagonals` by splitting the ring from its
/// origin to a vertex on `sides[diagonal.target_side]`, bisecting the
/// side first if the landing point isn't already a vertex. Diagonals
/// landing on the same side are applied in sorted order along that side
/// so repeated bisection doesn't corrupt ordering. An origin already
/// present in `applied` is skipped, since a vertex resolved by one
/// diagonal can't coherently take a second (see `DESIGN.md`).
fn apply_on_sides(arena: &mut RingArena, sides: &[Side], diagonals: &[Diagonal], applied: &mut HashSet<VertexId>) {
    use std::collections::HashMap;

    let mut by_side: HashMap<usize, Vec<Diagonal>> = HashMap::new();
    for &d in diagonals {
        if applied.contains(&d.origin) {
            continue;
        }
        by_side.entry(d.target_side).or_default().push(d);
    }

    for (side_idx, mut group) in by_side {
        let side = sides[side_idx];
        group.sort_by(|a, b| {
            position_along(side, a.target_point)
                .partial_cmp(&position_along(side, b.target_point))
                .unwrap()
        });

        let side_end_point = arena.point(side.end);
        let mut cursor = side.start;
        for d in group {
            if applied.contains(&d.origin) {
                continue;
            }
            let target = if point_eq(arena.point(cursor), d.target_point) {
                cursor
            } else if point_eq(side_end_point, d.target_point) {
                side.end
            } else {
                let new_v = arena.bisect_after(cursor, d.target_point);
                cursor = new_v;
                new_v
            };
            arena.split(d.origin, target);
            applied.insert(d.origin);
        }
    }
}

fn position_along(side: Side, p: crate::geom::Point) -> f64 {
    // A vertical side (fixed X) varies in Y; a horizontal side (fixed Y)
    // varies in X. `fixed` matches one coordinate exactly, so whichever
    // coordinate of `p` differs from it is the varying one.
    if crate::geom::approx_eq(p.x, side.fixed) {
        p.y
    } else {
        p.x
    }
}

fn find_regions(arena: &RingArena) -> Vec<Rect> {
    arena
        .rings()
        .into_iter()
        .map(|ring| {
            let mut llx = f64::INFINITY;
            let mut lly = f64::INFINITY;
            let mut urx = f64::NEG_INFINITY;
            let mut ury = f64::NEG_INFINITY;
            for v in ring {
                let p = arena.point(v);
                llx = llx.min(p.x);
                lly = lly.min(p.y);
                urx = urx.max(p.x);
                ury = ury.max(p.y);
            }
            Rect::new(llx, lly, urx, ury)
        })
        .collect()
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

    fn total_area(rects: &[Rect]) -> f64 {
        rects.iter().map(Rect::area).sum()
    }

    #[test]
    fn plain_rectangle_decomposes_to_itself() {
        let rects = decompose_region(&[square(0.0, 0.0, 4.0, 3.0)], false).unwrap();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].area(), 12.0);
    }

    #[test]
    fn literal_scenario_trivial_rect_is_clockwise() {
        let path = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 1.0), Point::new(1.0, 0.0)];
        let rects = decompose_region(&[path], true).unwrap();
        assert_eq!(rects, vec![Rect::new(0.0, 0.0, 1.0, 1.0)]);
    }

    #[test]
    fn l_shape_decomposes_into_two_rectangles_with_matching_area() {
        // L-shape of area 2*3 + 1*1 = 7 (CCW).
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        let rects = decompose_region(&[path], false).unwrap();
        assert_eq!(rects.len(), 2);
        assert_eq!(total_area(&rects), 7.0);
        assert!(crate::testutil::box_overlap(&rects).is_empty());
    }

    #[test]
    fn plus_sign_decomposes_into_three_rectangles() {
        // A plus sign: a 3-wide horizontal bar crossing a 3-tall vertical
        // bar, both 1 unit thick, total area 3+3-1=5, minimally 3 rects.
        let path = vec![
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(3.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 3.0),
            Point::new(1.0, 3.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let rects = decompose_region(&[path], false).unwrap();
        assert_eq!(rects.len(), 3);
        assert_eq!(total_area(&rects), 5.0);
        assert!(crate::testutil::box_overlap(&rects).is_empty());
    }

    #[test]
    fn donut_subtracts_hole_area() {
        let outer = square(0.0, 0.0, 4.0, 4.0);
        let hole = vec![
            Point::new(1.0, 1.0),
            Point::new(1.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(3.0, 1.0),
        ];
        let rects = decompose_region(&[outer, hole], false).unwrap();
        assert_eq!(total_area(&rects), 16.0 - 4.0);
        assert!(crate::testutil::box_overlap(&rects).is_empty());
    }

    #[test]
    fn literal_scenario_donut_matches_expected_rect_count_and_area() {
        // Literal scenario 4: outer (0,0),(0,4),(4,4),(4,0) (clockwise),
        // hole (1,1),(2,1),(2,2),(1,2) ⇒ 4 rectangles, total area 15.
        let outer = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(4.0, 4.0),
            Point::new(4.0, 0.0),
        ];
        let hole = vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(1.0, 2.0),
        ];
        let rects = decompose_region(&[outer, hole], true).unwrap();
        assert_eq!(rects.len(), 4);
        assert_eq!(total_area(&rects), 15.0);
        assert!(crate::testutil::box_overlap(&rects).is_empty());
    }

    #[test]
    fn raster_to_contours_to_decompose_matches_l_shape_scenario() {
        // Literal scenario 2: raster [[1,0,1],[1,1,1]] (H=2, W=3) ->
        // GetContours -> DecomposeRegion ⇒ 3 rectangles, total area 5.
        let data = vec![1.0, 0.0, 1.0, 1.0, 1.0, 1.0];
        let grid = crate::geom::Grid::from_row_major(2, 3, data).unwrap();
        let paths = crate::contour::get_contours(&grid, false);
        assert_eq!(paths.len(), 1);
        let rects = decompose_region(&paths, false).unwrap();
        assert_eq!(rects.len(), 3);
        assert_eq!(total_area(&rects), 5.0);
        assert!(crate::testutil::box_overlap(&rects).is_empty());
    }

    #[test]
    fn clockwise_input_decomposes_identically_in_area() {
        let mut path = square(0.0, 0.0, 4.0, 3.0);
        path.reverse();
        let rects = decompose_region(&[path], true).unwrap();
        assert_eq!(total_area(&rects), 12.0);
    }

    fn l_shape() -> Path {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
        ]
    }

    fn plus_sign() -> Path {
        vec![
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(3.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 3.0),
            Point::new(1.0, 3.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ]
    }

    /// The 8 symmetries of the square lattice, as a vertex-coordinate map
    /// plus whether that map reverses a CCW path's winding (every
    /// reflection does; every proper rotation doesn't).
    fn lattice_symmetry(which: u8) -> (fn(Point) -> Point, bool) {
        match which % 8 {
            0 => (|p| Point::new(p.x, p.y), false),
            1 => (|p| Point::new(-p.y, p.x), false),
            2 => (|p| Point::new(-p.x, -p.y), false),
            3 => (|p| Point::new(p.y, -p.x), false),
            4 => (|p| Point::new(-p.x, p.y), true),
            5 => (|p| Point::new(p.x, -p.y), true),
            6 => (|p| Point::new(p.y, p.x), true),
            _ => (|p| Point::new(-p.y, -p.x), true),
        }
    }

    fn apply_symmetry(path: &Path, which: u8) -> Path {
        let (map, reverses) = lattice_symmetry(which);
        let mut out: Path = path.iter().map(|&p| map(p)).collect();
        if reverses {
            out.reverse();
        }
        out
    }

    proptest::proptest! {
        /// Decomposition is a geometric property, not a coordinate-system
        /// artifact: rotating or reflecting the input by a lattice symmetry
        /// must leave the total decomposed area and rectangle count
        /// unchanged.
        #[test]
        fn decomposition_is_invariant_under_lattice_symmetry(
            shape_idx in 0u8..3,
            which in 0u8..8,
        ) {
            let base = match shape_idx {
                0 => square(0.0, 0.0, 4.0, 3.0),
                1 => l_shape(),
                _ => plus_sign(),
            };
            let baseline = decompose_region(&[base.clone()], false).unwrap();

            let transformed = apply_symmetry(&base, which);
            let rects = decompose_region(&[transformed], false).unwrap();

            proptest::prop_assert!((total_area(&rects) - total_area(&baseline)).abs() < 1e-9);
            proptest::prop_assert_eq!(rects.len(), baseline.len());
            proptest::prop_assert!(crate::testutil::box_overlap(&rects).is_empty());
        }
    }
}
