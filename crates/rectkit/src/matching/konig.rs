//! Minimum vertex cover and maximum independent set for bipartite graphs,
//! built from a maximum matching via König's theorem.
//!
//! The cover construction walks alternating paths from unmatched left
//! vertices, but the adjacency lists it walks deliberately omit each
//! vertex's own matching edge the first time it is encountered — including
//! it would let the walk immediately re-cross back over the edge the
//! matching already accounts for, double-counting it. A duplicate copy of
//! the same matched edge (if the input repeats an edge) is not exempted a
//! second time: only the first occurrence is skipped.

use super::hopcroft_karp::bipartite_matching;

fn build_adjacency(
    n: usize,
    m: usize,
    edges: &[(usize, usize)],
    match_left: &[i64],
) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
    let mut adj_left = vec![Vec::new(); n];
    let mut adj_right = vec![Vec::new(); m];
    let mut match_count = vec![0u32; n];

    for &(l, r) in edges {
        let matched = match_left[l] == r as i64;
        if matched {
            let seen = match_count[l];
            match_count[l] += 1;
            if seen == 0 {
                continue;
            }
        }
        adj_left[l].push(r);
        adj_right[r].push(l);
    }
    (adj_left, adj_right)
}

/// Walks an alternating path from `v` (on the side the caller's arrays
/// describe), marking every vertex it passes through as covered. Does
/// nothing if `v` is already covered or is itself matched, since König's
/// construction only starts from unmatched vertices.
fn alternating_walk(
    v: usize,
    adj: &[Vec<usize>],
    own_match: &[i64],
    own_cover: &mut [u8],
    other_match: &[i64],
    other_cover: &mut [u8],
) -> Vec<usize> {
    if own_cover[v] != 0 || own_match[v] >= 0 {
        return Vec::new();
    }
    let mut list = Vec::new();
    let mut cur = v as i64;
    while cur >= 0 {
        let cv = cur as usize;
        own_cover[cv] = 1;
        let mut next: i64 = -1;
        for &u in &adj[cv] {
            if other_cover[u] != 0 {
                continue;
            }
            next = u as i64;
        }
        if next < 0 {
            break;
        }
        let next = next as usize;
        other_cover[next] = 1;
        list.push(next);
        cur = other_match[next];
    }
    list
}

/// Computes a minimum vertex cover of the bipartite graph `(n, m, edges)`
/// via a maximum matching (Hopcroft-Karp) and König's theorem.
///
/// Returns `(left, right)`, the sorted indices of covering vertices on each
/// side.
pub fn bipartite_vertex_cover(n: usize, m: usize, edges: &[(usize, usize)]) -> (Vec<usize>, Vec<usize>) {
    let matching = bipartite_matching(n, m, edges);

    let mut match_left = vec![-1i64; n];
    let mut match_right = vec![-1i64; m];
    for &(l, r) in &matching {
        match_left[l] = r as i64;
        match_right[r] = l as i64;
    }

    let (adj_left, adj_right) = build_adjacency(n, m, edges, &match_left);

    let mut cover_left = vec![0u8; n];
    let mut cover_right = vec![0u8; m];

    let mut right: Vec<usize> = Vec::new();
    for i in 0..n {
        right.extend(alternating_walk(i, &adj_left, &match_left, &mut cover_left, &match_right, &mut cover_right));
    }
    let mut left: Vec<usize> = Vec::new();
    for i in 0..m {
        left.extend(alternating_walk(i, &adj_right, &match_right, &mut cover_right, &match_left, &mut cover_left));
    }

    for i in 0..n {
        if cover_left[i] == 0 && match_left[i] >= 0 {
            cover_right[match_left[i] as usize] = 1;
            cover_left[i] = 1;
            left.push(i);
        }
    }

    left.sort_unstable();
    right.sort_unstable();
    (left, right)
}

fn complement(mut list: Vec<usize>, n: usize) -> Vec<usize> {
    list.sort_unstable();
    let mut result = Vec::with_capacity(n - list.len());
    let mut it = list.into_iter().peekable();
    for i in 0..n {
        if it.peek() == Some(&i) {
            it.next();
        } else {
            result.push(i);
        }
    }
    result
}

/// Computes a maximum independent set of the bipartite graph, as the
/// complement of a minimum vertex cover (König duality: a set is
/// independent iff its complement is a vertex cover).
pub fn bipartite_independent_set(n: usize, m: usize, edges: &[(usize, usize)]) -> (Vec<usize>, Vec<usize>) {
    let (cover_left, cover_right) = bipartite_vertex_cover(n, m, edges);
    (complement(cover_left, n), complement(cover_right, m))
}
