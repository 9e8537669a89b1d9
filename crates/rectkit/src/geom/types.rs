//! Point, line, and axis-aligned rectangle primitives.

use super::tol::{approx_eq, is_zero, EPS};
use nalgebra::Vector2;

/// A point in the plane. An alias rather than a newtype so callers get
/// `nalgebra`'s arithmetic (`+`, `-`, scalar `*`) for free.
pub type Point = Vector2<f64>;

pub fn point_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

pub fn point_is_zero(p: Point) -> bool {
    is_zero(p.x) && is_zero(p.y)
}

/// The coordinate of `p` along the given axis: `x` if `vertical` is false
/// (a horizontal side varies in `x`), `y` if `vertical` is true.
pub fn component(p: Point, vertical: bool) -> f64 {
    if vertical {
        p.y
    } else {
        p.x
    }
}

/// A line segment from `a` to `b`, parametrized as `p(t) = a*(1-t) + b*t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub fn new(ax: f64, ay: f64, bx: f64, by: f64) -> Self {
        Line {
            a: Point::new(ax, ay),
            b: Point::new(bx, by),
        }
    }

    pub fn position(&self, t: f64) -> Point {
        self.a * (1.0 - t) + self.b * t
    }

    pub fn delta(&self) -> Point {
        self.b - self.a
    }
}

/// An axis-aligned rectangle, `llx <= urx` and `lly <= ury` when valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub llx: f64,
    pub lly: f64,
    pub urx: f64,
    pub ury: f64,
}

impl Rect {
    pub fn new(llx: f64, lly: f64, urx: f64, ury: f64) -> Self {
        Rect { llx, lly, urx, ury }
    }

    pub fn is_valid(&self) -> bool {
        self.urx >= self.llx && self.ury >= self.lly
    }

    pub fn area(&self) -> f64 {
        debug_assert!(self.is_valid(), "area of invalid rect {:?}", self);
        (self.urx - self.llx) * (self.ury - self.lly)
    }

    pub fn contains_point(&self, p: Point, tol: f64) -> bool {
        self.llx - tol <= p.x
            && p.x <= self.urx + tol
            && self.lly - tol <= p.y
            && p.y <= self.ury + tol
    }

    /// True if `self` and `other` overlap with positive area (touching at an
    /// edge or corner does not count).
    pub fn overlaps_strictly(&self, other: &Rect) -> bool {
        self.llx < other.urx - EPS
            && other.llx < self.urx - EPS
            && self.lly < other.ury - EPS
            && other.lly < self.ury - EPS
    }
}

/// A closed path: an ordered list of vertices, implicitly closed back to
/// the first point.
pub type Path = Vec<Point>;
