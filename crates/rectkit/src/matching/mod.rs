//! Bipartite matching (Hopcroft-Karp) and the minimum vertex cover /
//! maximum independent set it supports via König's theorem.

mod hopcroft_karp;
mod konig;

pub use hopcroft_karp::{bipartite_matching, validate_bipartite_input, MatchingError, Side};
pub use konig::{bipartite_independent_set, bipartite_vertex_cover};
