//! Augmented interval tree for closed-interval point-stab queries.

mod tree;

pub use tree::{IntervalId, IntervalTree};
