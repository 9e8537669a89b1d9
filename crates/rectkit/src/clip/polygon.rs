//! Liang-Barsky-Foley polygon clipping against an axis-aligned window.

use crate::geom::{is_zero, point_eq, Path, Point, Rect};

const INFINITY: f64 = f64::MAX;

/// Clips a closed polygon `path` to `window`, returning the (possibly
/// empty) clipped path. Self-intersecting or degenerate results are not
/// rejected here; this is a pure geometric operation with no failure mode.
pub fn clip_polygon(window: Rect, path: &[Point]) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    let n = path.len();

    let ll = Point::new(window.llx, window.lly);
    let ur = Point::new(window.urx, window.ury);

    let mut clipped: Path = Vec::with_capacity(n);

    for i in 0..n {
        let p0 = path[i];
        let p1 = path[(i + 1) % n];
        let delta = p1 - p0;

        // Which window edge the ray from p0 along delta would reach first,
        // per axis.
        let (in_x, out_x) = if delta.x > 0.0 || (is_zero(delta.x) && p0.x > ur.x) {
            (ll.x, ur.x)
        } else {
            (ur.x, ll.x)
        };
        let (in_y, out_y) = if delta.y > 0.0 || (is_zero(delta.y) && p0.y > ur.y) {
            (ll.y, ur.y)
        } else {
            (ur.y, ll.y)
        };

        let t_out_x = if !is_zero(delta.x) {
            (out_x - p0.x) / delta.x
        } else if ll.x <= p0.x && p0.x <= ur.x {
            INFINITY
        } else {
            -INFINITY
        };
        let t_out_y = if !is_zero(delta.y) {
            (out_y - p0.y) / delta.y
        } else if ll.y <= p0.y && p0.y <= ur.y {
            INFINITY
        } else {
            -INFINITY
        };

        let (t_out1, t_out2, out1_is_x) = if t_out_x < t_out_y {
            (t_out_x, t_out_y, true)
        } else {
            (t_out_y, t_out_x, false)
        };

        if t_out2 <= 0.0 {
            continue;
        }

        let t_in_x = if !is_zero(delta.x) {
            (in_x - p0.x) / delta.x
        } else {
            -INFINITY
        };
        let t_in_y = if !is_zero(delta.y) {
            (in_y - p0.y) / delta.y
        } else {
            -INFINITY
        };
        let (t_in2, in2_is_x) = if t_in_x < t_in_y {
            (t_in_y, false)
        } else {
            (t_in_x, true)
        };

        if t_out1 < t_in2 {
            // No visible segment on this edge, but it may cross the
            // intermediate corner region of the window.
            if t_out1 > 0.0 && t_out1 <= 1.0 {
                let corner = if in2_is_x {
                    Point::new(in_x, out_y)
                } else {
                    Point::new(out_x, in_y)
                };
                clipped.push(corner);
            }
        } else if t_out1 > 0.0 && t_in2 <= 1.0 {
            if t_in2 >= 0.0 {
                let entry = if in2_is_x {
                    Point::new(in_x, p0.y + t_in_x * delta.y)
                } else {
                    Point::new(p0.x + t_in_y * delta.x, in_y)
                };
                clipped.push(entry);
            }

            if t_out1 <= 1.0 {
                let exit = if out1_is_x {
                    Point::new(out_x, p0.y + t_out_x * delta.y)
                } else {
                    Point::new(p0.x + t_out_y * delta.x, out_y)
                };
                clipped.push(exit);
            } else {
                clipped.push(p1);
            }
        }

        if t_out2 > 0.0 && t_out2 <= 1.0 {
            clipped.push(Point::new(out_x, out_y));
        }
    }

    trim_repeats(clipped)
}

fn trim_repeats(path: Path) -> Path {
    let mut out: Path = Vec::with_capacity(path.len());
    for p in path {
        if out.last().map_or(true, |&last| !point_eq(last, p)) {
            out.push(p);
        }
    }
    if out.len() > 1 && point_eq(out[0], *out.last().unwrap()) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(llx: f64, lly: f64, urx: f64, ury: f64) -> Path {
        vec![
            Point::new(llx, lly),
            Point::new(urx, lly),
            Point::new(urx, ury),
            Point::new(llx, ury),
        ]
    }

    #[test]
    fn polygon_fully_inside_window_is_unchanged() {
        let window = Rect::new(-10.0, -10.0, 10.0, 10.0);
        let path = square(0.0, 0.0, 2.0, 2.0);
        let clipped = clip_polygon(window, &path);
        assert_eq!(clipped.len(), 4);
    }

    #[test]
    fn polygon_fully_outside_window_clips_to_empty() {
        let window = Rect::new(0.0, 0.0, 1.0, 1.0);
        let path = square(10.0, 10.0, 12.0, 12.0);
        let clipped = clip_polygon(window, &path);
        assert!(clipped.is_empty());
    }

    #[test]
    fn polygon_straddling_window_is_clamped() {
        let window = Rect::new(0.0, 0.0, 2.0, 2.0);
        let path = square(-1.0, -1.0, 3.0, 3.0);
        let clipped = clip_polygon(window, &path);
        assert!(!clipped.is_empty());
        for p in &clipped {
            assert!(window.contains_point(*p, 1e-6));
        }
    }

    proptest::proptest! {
        /// Every vertex of a clipped polygon lies within the window, for
        /// any window and any (possibly self-intersecting) input polygon.
        #[test]
        fn every_clipped_vertex_is_inside_window(
            llx in -20.0f64..20.0, w in 0.1f64..20.0,
            lly in -20.0f64..20.0, h in 0.1f64..20.0,
            xs in proptest::collection::vec(-40.0f64..40.0, 3..12),
            ys in proptest::collection::vec(-40.0f64..40.0, 3..12),
        ) {
            let window = Rect::new(llx, lly, llx + w, lly + h);
            let n = xs.len().min(ys.len());
            let path: Path = (0..n).map(|i| Point::new(xs[i], ys[i])).collect();
            let clipped = clip_polygon(window, &path);
            for p in &clipped {
                proptest::prop_assert!(window.contains_point(*p, 1e-6));
            }
        }
    }
}
