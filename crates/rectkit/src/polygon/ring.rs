//! Arena-backed doubly-linked vertex rings for the decomposer.
//!
//! The original algorithm links vertices with raw cyclic pointers; here
//! every vertex lives in one `Vec` and rings are threaded through `u32`
//! indices, so splitting a ring (or merging two, to join a hole into the
//! outer boundary) is just reassigning four `prev`/`next` slots instead of
//! juggling pointer lifetimes.

use crate::geom::Point;

use super::concavity;

pub(crate) type VertexId = u32;

#[derive(Clone, Copy)]
struct Vertex {
    point: Point,
    prev: VertexId,
    next: VertexId,
}

/// All vertices of every ring in a polygon (outer boundary plus holes),
/// threaded together only through `prev`/`next`; ring membership is
/// implicit in the links, not tracked separately.
pub(crate) struct RingArena {
    vertices: Vec<Vertex>,
}

impl RingArena {
    /// Builds an arena from closed loops, linking each loop into a cycle.
    /// `clockwise` sets the traversal direction used when walking `paths`
    /// into `prev`/`next` links, matching the same flag used for concavity
    /// classification.
    pub(crate) fn from_paths(paths: &[Vec<Point>], clockwise: bool) -> Self {
        let mut vertices = Vec::new();
        for path in paths {
            let base = vertices.len() as VertexId;
            let n = path.len() as VertexId;
            for (i, &point) in path.iter().enumerate() {
                let i = i as VertexId;
                // Clockwise input is walked in reverse so every ring is
                // threaded in the same logical (counter-clockwise) sense
                // internally; `is_concave` then never needs its own
                // clockwise flag.
                let (prev, next) = if clockwise {
                    (base + (i + 1) % n, base + (i + n - 1) % n)
                } else {
                    (base + (i + n - 1) % n, base + (i + 1) % n)
                };
                vertices.push(Vertex { point, prev, next });
            }
        }
        RingArena { vertices }
    }

    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn point(&self, v: VertexId) -> Point {
        self.vertices[v as usize].point
    }

    pub(crate) fn next(&self, v: VertexId) -> VertexId {
        self.vertices[v as usize].next
    }

    pub(crate) fn prev(&self, v: VertexId) -> VertexId {
        self.vertices[v as usize].prev
    }

    /// Classifies `v`'s corner using the polygon's current (possibly
    /// post-split) local topology. Baseline classification always treats
    /// the ring as traversed counter-clockwise, because `from_paths` has
    /// already normalized clockwise input into reverse traversal order.
    pub(crate) fn is_concave(&self, v: VertexId) -> bool {
        let prev = self.point(self.prev(v));
        let cur = self.point(v);
        let next = self.point(self.next(v));
        concavity::classify(prev, cur, next, false).unwrap_or(false)
    }

    /// Inserts a new vertex at `point`, splicing it into the ring between
    /// `a` and `a`'s current next neighbor. Used to bisect a side before
    /// joining a chord to a point in its interior.
    pub(crate) fn bisect_after(&mut self, a: VertexId, point: Point) -> VertexId {
        let b = self.next(a);
        let id = self.vertices.len() as VertexId;
        self.vertices.push(Vertex { point, prev: a, next: b });
        self.vertices[a as usize].next = id;
        self.vertices[b as usize].prev = id;
        id
    }

    /// Splits the chord `a` -> `b` into the ring(s), duplicating both
    /// endpoints. If `a` and `b` are on the same ring this cuts it into
    /// two; if they are on different rings (an outer boundary and a hole)
    /// this merges them into one. Returns the two new duplicate vertices.
    pub(crate) fn split(&mut self, a: VertexId, b: VertexId) -> (VertexId, VertexId) {
        let a_point = self.point(a);
        let b_point = self.point(b);
        let a_prev = self.prev(a);
        let b_prev = self.prev(b);

        let a_dup = self.vertices.len() as VertexId;
        self.vertices.push(Vertex { point: a_point, prev: a_prev, next: b });
        let b_dup = a_dup + 1;
        self.vertices.push(Vertex { point: b_point, prev: b_prev, next: a });

        self.vertices[a_prev as usize].next = a_dup;
        self.vertices[b as usize].prev = a_dup;

        self.vertices[b_prev as usize].next = b_dup;
        self.vertices[a as usize].prev = b_dup;

        (a_dup, b_dup)
    }

    /// Walks every ring once, grouping vertices by connected component.
    pub(crate) fn rings(&self) -> Vec<Vec<VertexId>> {
        let mut visited = vec![false; self.vertices.len()];
        let mut rings = Vec::new();
        for start in 0..self.vertices.len() as VertexId {
            if visited[start as usize] {
                continue;
            }
            let mut ring = Vec::new();
            let mut cur = start;
            loop {
                visited[cur as usize] = true;
                ring.push(cur);
                cur = self.next(cur);
                if cur == start {
                    break;
                }
            }
            rings.push(ring);
        }
        rings
    }
}
