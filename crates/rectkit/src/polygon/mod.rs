//! Internal orthogonal polygon model: validation, concavity
//! classification, and the arena-backed vertex ring used by the
//! decomposer. Nothing here is part of the public API; it exists to
//! support `decompose`.

mod concavity;
mod ring;
mod validate;

pub use validate::{validate_paths, PolygonError};

pub(crate) use ring::{RingArena, VertexId};
