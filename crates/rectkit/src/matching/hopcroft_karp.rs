//! Maximum bipartite matching via Hopcroft-Karp, O(E sqrt(V)).

use std::fmt;

/// An edge endpoint fell outside its declared vertex range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchingError {
    pub side: Side,
    pub index: usize,
    pub bound: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for MatchingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Side::Left => "left",
            Side::Right => "right",
        };
        write!(
            f,
            "{} endpoint {} out of range (0..{})",
            side, self.index, self.bound
        )
    }
}

impl std::error::Error for MatchingError {}

/// Checks that every edge endpoint lies within its declared range, without
/// running the matching. `bipartite_matching` itself assumes this already
/// holds and panics on violation instead; callers who would rather get a
/// `Result` validate up front with this.
pub fn validate_bipartite_input(n: usize, m: usize, edges: &[(usize, usize)]) -> Result<(), MatchingError> {
    for &(l, r) in edges {
        if l >= n {
            return Err(MatchingError { side: Side::Left, index: l, bound: n });
        }
        if r >= m {
            return Err(MatchingError { side: Side::Right, index: r, bound: m });
        }
    }
    Ok(())
}

const UNMATCHED: i64 = -1;

struct Solver {
    adj_left: Vec<Vec<usize>>,
    match_left: Vec<i64>,
    match_right: Vec<i64>,
    dist: Vec<u32>,
}

impl Solver {
    fn new(n: usize, m: usize, edges: &[(usize, usize)]) -> Self {
        let mut adj_left = vec![Vec::new(); n];
        for &(l, r) in edges {
            assert!(l < n, "left endpoint {l} out of range (0..{n})");
            assert!(r < m, "right endpoint {r} out of range (0..{m})");
            adj_left[l].push(r);
        }
        Solver {
            adj_left,
            match_left: vec![UNMATCHED; n],
            match_right: vec![UNMATCHED; m],
            dist: vec![u32::MAX; n],
        }
    }

    /// Layers unmatched left vertices by BFS distance; returns the distance
    /// to the nearest unmatched right vertex, or `None` if none is
    /// reachable (matching is already maximum).
    fn bfs(&mut self) -> Option<u32> {
        let mut queue = std::collections::VecDeque::new();
        for v in 0..self.match_left.len() {
            if self.match_left[v] == UNMATCHED {
                self.dist[v] = 0;
                queue.push_back(v);
            } else {
                self.dist[v] = u32::MAX;
            }
        }
        let mut found_free_right_at = None;
        while let Some(v) = queue.pop_front() {
            if found_free_right_at.is_some_and(|d| self.dist[v] >= d) {
                continue;
            }
            for &u in &self.adj_left[v] {
                let pu = self.match_right[u];
                if pu == UNMATCHED {
                    if found_free_right_at.is_none() {
                        found_free_right_at = Some(self.dist[v] + 1);
                    }
                } else {
                    let pu = pu as usize;
                    if self.dist[pu] == u32::MAX {
                        self.dist[pu] = self.dist[v] + 1;
                        queue.push_back(pu);
                    }
                }
            }
        }
        found_free_right_at
    }

    fn dfs(&mut self, v: usize, dmax: u32) -> bool {
        for i in 0..self.adj_left[v].len() {
            let u = self.adj_left[v][i];
            let pu = self.match_right[u];
            let dpu = if pu == UNMATCHED { dmax } else { self.dist[pu as usize] };
            if dpu == self.dist[v] + 1 && (pu == UNMATCHED || self.dfs(pu as usize, dmax)) {
                self.match_left[v] = u as i64;
                self.match_right[u] = v as i64;
                return true;
            }
        }
        self.dist[v] = u32::MAX;
        false
    }
}

/// Computes a maximum matching between a left component of size `n` and a
/// right component of size `m`, given edges as `(left, right)` index pairs.
///
/// Panics if an endpoint falls outside its declared range; call
/// `validate_bipartite_input` first if that should be a recoverable error
/// instead.
pub fn bipartite_matching(n: usize, m: usize, edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    if edges.is_empty() {
        return Vec::new();
    }
    let mut solver = Solver::new(n, m, edges);

    loop {
        let Some(dmax) = solver.bfs() else { break };
        for v in 0..n {
            if solver.match_left[v] == UNMATCHED {
                solver.dfs(v, dmax);
            }
        }
    }

    (0..n)
        .filter_map(|l| {
            let r = solver.match_left[l];
            (r != UNMATCHED).then_some((l, r as usize))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_matching_on_complete_bipartite() {
        let edges: Vec<(usize, usize)> = (0..3).flat_map(|l| (0..3).map(move |r| (l, r))).collect();
        let m = bipartite_matching(3, 3, &edges);
        assert_eq!(m.len(), 3);
        let mut lefts: Vec<usize> = m.iter().map(|&(l, _)| l).collect();
        lefts.sort_unstable();
        assert_eq!(lefts, vec![0, 1, 2]);
    }

    #[test]
    fn literal_scenario_matches_expected_size() {
        let edges = vec![
            (0, 0), (0, 1), (0, 3),
            (1, 0), (1, 1), (1, 2),
            (2, 1), (2, 2), (2, 3),
            (3, 0), (3, 2), (3, 3),
        ];
        let m = bipartite_matching(4, 4, &edges);
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn matching_respects_sparse_edges() {
        let edges = vec![(0, 0), (1, 0), (1, 1)];
        let m = bipartite_matching(2, 2, &edges);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn empty_edge_list_yields_empty_matching() {
        assert!(bipartite_matching(3, 3, &[]).is_empty());
    }

    #[test]
    fn validator_catches_out_of_range_endpoint() {
        let err = validate_bipartite_input(2, 2, &[(2, 0)]).unwrap_err();
        assert_eq!(err.side, Side::Left);
    }

    #[test]
    #[should_panic]
    fn matching_panics_on_out_of_range_endpoint() {
        bipartite_matching(2, 2, &[(5, 0)]);
    }

    proptest::proptest! {
        /// A matching is maximal: for every edge, at least one endpoint is
        /// already matched (otherwise that edge would augment it further).
        /// Every matched pair must also be a real edge, and no vertex is
        /// matched twice.
        #[test]
        fn matching_is_maximal_and_consistent(
            n in 1usize..8, m in 1usize..8,
            raw_edges in proptest::collection::vec((0usize..8, 0usize..8), 0..30),
        ) {
            let edges: Vec<(usize, usize)> = raw_edges
                .into_iter()
                .filter(|&(l, r)| l < n && r < m)
                .collect();
            let matching = bipartite_matching(n, m, &edges);

            let mut left_used = vec![false; n];
            let mut right_used = vec![false; m];
            for &(l, r) in &matching {
                proptest::prop_assert!(edges.contains(&(l, r)));
                proptest::prop_assert!(!left_used[l]);
                proptest::prop_assert!(!right_used[r]);
                left_used[l] = true;
                right_used[r] = true;
            }

            for &(l, r) in &edges {
                proptest::prop_assert!(left_used[l] || right_used[r]);
            }
        }
    }
}
