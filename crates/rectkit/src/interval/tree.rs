//! Arena-backed augmented interval tree supporting closed-interval
//! point-stab queries and delete-by-identity.
//!
//! The tree is a plain (unbalanced) binary search tree keyed on the
//! interval's low endpoint, augmented at each node with the maximum high
//! endpoint across its subtree so a point-stab query can prune entire
//! branches. Nothing here requires balance for correctness, only for
//! worst-case complexity, and chord counts in a rectilinear polygon are
//! small enough that skipping rotations keeps the code simple without
//! mattering in practice.

use std::collections::HashMap;

/// Identifies a previously-inserted interval so it can be deleted later.
/// Monotonically increasing, so two intervals with identical extents still
/// compare distinct — required for the tree to behave correctly when a
/// polygon has several cogrid sides at the same coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntervalId(u64);

struct Node<T> {
    low: f64,
    high: f64,
    id: IntervalId,
    payload: T,
    max_high: f64,
    left: Option<u32>,
    right: Option<u32>,
    parent: Option<u32>,
}

/// An interval tree over `[low, high]` (closed) intervals, each carrying a
/// `Copy` payload (typically an index into a side-by-side `Vec`).
pub struct IntervalTree<T> {
    nodes: Vec<Option<Node<T>>>,
    root: Option<u32>,
    free: Vec<u32>,
    index_of: HashMap<IntervalId, u32>,
    next_id: u64,
}

impl<T: Copy> Default for IntervalTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> IntervalTree<T> {
    pub fn new() -> Self {
        IntervalTree {
            nodes: Vec::new(),
            root: None,
            free: Vec::new(),
            index_of: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn insert(&mut self, low: f64, high: f64, payload: T) -> IntervalId {
        debug_assert!(low <= high, "interval low {low} exceeds high {high}");
        let id = IntervalId(self.next_id);
        self.next_id += 1;

        let slot = Node {
            low,
            high,
            id,
            payload,
            max_high: high,
            left: None,
            right: None,
            parent: None,
        };
        let idx = self.alloc(slot);
        self.index_of.insert(id, idx);

        match self.root {
            None => self.root = Some(idx),
            Some(root) => self.bst_insert(root, idx),
        }
        self.fix_max_to_root(idx);
        id
    }

    pub fn delete(&mut self, id: IntervalId) {
        let Some(idx) = self.index_of.remove(&id) else {
            debug_assert!(false, "deleting unknown interval id");
            return;
        };
        self.delete_node(idx);
    }

    /// Visits every interval containing `x` (closed endpoints). `visit`
    /// returning `true` stops the search early; the return value reports
    /// whether any interval matched.
    pub fn query_point(&self, x: f64, mut visit: impl FnMut(T) -> bool) -> bool {
        let mut matched = false;
        self.query_point_at(self.root, x, &mut visit, &mut matched);
        matched
    }

    pub fn collect_point(&self, x: f64) -> Vec<T> {
        let mut out = Vec::new();
        self.query_point(x, |t| {
            out.push(t);
            false
        });
        out
    }

    fn query_point_at(
        &self,
        node: Option<u32>,
        x: f64,
        visit: &mut impl FnMut(T) -> bool,
        matched: &mut bool,
    ) {
        let Some(idx) = node else { return };
        let n = self.node(idx);

        if let Some(left) = n.left {
            if self.node(left).max_high >= x {
                self.query_point_at(Some(left), x, visit, matched);
            }
        }

        if n.low <= x && x <= n.high {
            *matched = true;
            if visit(n.payload) {
                return;
            }
        }

        if x >= n.low {
            self.query_point_at(n.right, x, visit, matched);
        }
    }

    fn node(&self, idx: u32) -> &Node<T> {
        self.nodes[idx as usize].as_ref().expect("dangling node index")
    }

    fn node_mut(&mut self, idx: u32) -> &mut Node<T> {
        self.nodes[idx as usize].as_mut().expect("dangling node index")
    }

    fn alloc(&mut self, node: Node<T>) -> u32 {
        if let Some(idx) = self.free.pop() {
            self.nodes[idx as usize] = Some(node);
            idx
        } else {
            self.nodes.push(Some(node));
            (self.nodes.len() - 1) as u32
        }
    }

    fn bst_insert(&mut self, mut cur: u32, new: u32) {
        loop {
            let go_left = self.node(new).low < self.node(cur).low;
            let child = if go_left {
                self.node(cur).left
            } else {
                self.node(cur).right
            };
            match child {
                Some(next) => cur = next,
                None => {
                    if go_left {
                        self.node_mut(cur).left = Some(new);
                    } else {
                        self.node_mut(cur).right = Some(new);
                    }
                    self.node_mut(new).parent = Some(cur);
                    return;
                }
            }
        }
    }

    /// Recomputes `max_high` along the path from `idx` up to the root.
    fn fix_max_to_root(&mut self, mut idx: u32) {
        loop {
            self.recompute_max(idx);
            match self.node(idx).parent {
                Some(p) => idx = p,
                None => return,
            }
        }
    }

    fn recompute_max(&mut self, idx: u32) {
        let n = self.node(idx);
        let mut max = n.high;
        if let Some(l) = n.left {
            max = max.max(self.node(l).max_high);
        }
        if let Some(r) = n.right {
            max = max.max(self.node(r).max_high);
        }
        self.node_mut(idx).max_high = max;
    }

    fn delete_node(&mut self, idx: u32) {
        let (left, right, parent) = {
            let n = self.node(idx);
            (n.left, n.right, n.parent)
        };

        match (left, right) {
            (None, None) => self.replace_child(parent, idx, None),
            (Some(l), None) => {
                self.node_mut(l).parent = parent;
                self.replace_child(parent, idx, Some(l));
                self.fix_max_to_root(parent.unwrap_or(l));
            }
            (None, Some(r)) => {
                self.node_mut(r).parent = parent;
                self.replace_child(parent, idx, Some(r));
                self.fix_max_to_root(parent.unwrap_or(r));
            }
            (Some(_), Some(r)) => {
                // Successor = leftmost node of the right subtree.
                let mut succ = r;
                while let Some(l) = self.node(succ).left {
                    succ = l;
                }
                // Detach the successor from its current spot first.
                let succ_parent = self.node(succ).parent;
                let succ_right = self.node(succ).right;
                if succ != r {
                    self.replace_child(succ_parent, succ, succ_right);
                    if let Some(sr) = succ_right {
                        self.node_mut(sr).parent = succ_parent;
                    }
                    self.node_mut(succ).right = Some(r);
                    self.node_mut(r).parent = Some(succ);
                }
                self.node_mut(succ).left = left;
                if let Some(l) = left {
                    self.node_mut(l).parent = Some(succ);
                }
                self.node_mut(succ).parent = parent;
                self.replace_child(parent, idx, Some(succ));
                let fix_from = if succ != r { succ_parent.unwrap_or(succ) } else { succ };
                self.fix_max_to_root(fix_from);
            }
        }

        self.nodes[idx as usize] = None;
        self.free.push(idx);
    }

    fn replace_child(&mut self, parent: Option<u32>, old: u32, new: Option<u32>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let n = self.node_mut(p);
                if n.left == Some(old) {
                    n.left = new;
                } else {
                    debug_assert_eq!(n.right, Some(old));
                    n.right = new;
                }
            }
        }
    }
}
