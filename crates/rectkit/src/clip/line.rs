//! Liang-Barsky line clipping against an axis-aligned window.

use crate::geom::{is_zero, point_is_zero, Line, Point, Rect};

/// The live `[tE, tL]` interval of parameter values still known to be
/// inside the window, for a line `p(t) = a*(1-t) + b*t`.
struct TInterval {
    te: f64,
    tl: f64,
}

impl TInterval {
    fn new() -> Self {
        TInterval { te: 0.0, tl: 1.0 }
    }

    /// Clips `t = a/d` against the current interval. `d` is the edge's
    /// extent along one axis, `a` the offset from the boundary being
    /// tested. Returns false once the interval becomes empty.
    fn clip_t(&mut self, a: f64, d: f64) -> bool {
        if is_zero(d) {
            return a <= 0.0;
        }
        let t = a / d;
        if d > 0.0 {
            if t > self.tl {
                return false;
            }
            if t > self.te {
                self.te = t;
            }
        } else {
            if t < self.te {
                return false;
            }
            if t < self.tl {
                self.tl = t;
            }
        }
        true
    }

    fn clip_range(&mut self, lo: f64, hi: f64, a: f64, d: f64) -> bool {
        self.clip_t(lo - a, d) && self.clip_t(a - hi, -d)
    }
}

/// Clips `line` to `window`, returning the clipped segment and whether any
/// part of it survived. Degenerate (zero-length) lines are kept whole if
/// their single point lies inside the window.
pub fn clip_line(window: Rect, line: Line) -> (Line, bool) {
    let d = line.delta();
    if point_is_zero(d) {
        return if window.contains_point(line.a, 1e-9) {
            (line, true)
        } else {
            (Line { a: Point::zeros(), b: Point::zeros() }, false)
        };
    }

    let mut t = TInterval::new();
    let inside = t.clip_range(window.llx, window.urx, line.a.x, d.x)
        && t.clip_range(window.lly, window.ury, line.a.y, d.y);
    if !inside {
        return (Line { a: Point::zeros(), b: Point::zeros() }, false);
    }

    let a = line.position(t.te);
    let b = line.position(t.tl);
    debug_assert!(window.contains_point(a, 1e-9), "entry point {:?} outside {:?}", a, window);
    debug_assert!(window.contains_point(b, 1e-9), "exit point {:?} outside {:?}", b, window);
    (Line { a, b }, true)
}
