//! Test-only oracles. Not part of the public API (see `DESIGN.md`).

use crate::geom::Rect;

/// Sweep-line pairwise overlap finder for axis-aligned rectangles, used as
/// an independent check that `decompose_region`'s output rectangles never
/// overlap. Returns `(i, j)` index pairs with `i < j`.
pub(crate) fn box_overlap(boxes: &[Rect]) -> Vec<(usize, usize)> {
    #[derive(Clone, Copy)]
    enum Kind {
        Add,
        Remove,
    }

    struct Event {
        x: f64,
        kind: Kind,
        index: usize,
    }

    let mut events: Vec<Event> = Vec::with_capacity(boxes.len() * 2);
    for (i, b) in boxes.iter().enumerate() {
        events.push(Event { x: b.llx.min(b.urx), kind: Kind::Add, index: i });
        events.push(Event { x: b.llx.max(b.urx), kind: Kind::Remove, index: i });
    }
    // Removes before adds at the same X, so two boxes that only touch along
    // a shared edge are never simultaneously active (which would otherwise
    // report a decomposition's adjacent, correctly non-overlapping tiles
    // as overlapping).
    events.sort_by(|a, b| {
        a.x.partial_cmp(&b.x).unwrap().then_with(|| match (a.kind, b.kind) {
            (Kind::Remove, Kind::Add) => std::cmp::Ordering::Less,
            (Kind::Add, Kind::Remove) => std::cmp::Ordering::Greater,
            _ => std::cmp::Ordering::Equal,
        })
    });

    let mut active: Vec<usize> = Vec::new();
    let mut overlaps = Vec::new();
    for event in &events {
        match event.kind {
            Kind::Add => {
                let eb = boxes[event.index];
                for &q in &active {
                    if boxes[q].overlaps_strictly(&eb) {
                        let pair = if q < event.index { (q, event.index) } else { (event.index, q) };
                        overlaps.push(pair);
                    }
                }
                active.push(event.index);
            }
            Kind::Remove => {
                if let Some(pos) = active.iter().position(|&i| i == event.index) {
                    active.remove(pos);
                }
            }
        }
    }
    overlaps.sort_unstable();
    overlaps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_overlapping_pair() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, 1.0, 3.0, 3.0);
        assert_eq!(box_overlap(&[a, b]), vec![(0, 1)]);
    }

    #[test]
    fn disjoint_boxes_have_no_overlap() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(5.0, 5.0, 6.0, 6.0);
        assert!(box_overlap(&[a, b]).is_empty());
    }

    #[test]
    fn touching_edges_do_not_count_as_overlap() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(1.0, 0.0, 2.0, 1.0);
        assert!(box_overlap(&[a, b]).is_empty());
    }
}
