//! The recursive branching enumerator with memoization (component C6).

use hashbrown::HashMap;

use crate::boundary::boundary;
use crate::flow::furthest_min_cut;
use crate::reachability::path_exists;
use crate::vertex_set::{VertexSet, VertexSetFamily};

/// Canonical memo key over one recursion instance. `x`, `y` and `d` are
/// the bitmap-backed [`VertexSet`]s, so two instances with the same
/// members hash and compare equal regardless of the order vertices were
/// added in along different recursion paths.
#[derive(Clone, PartialEq, Eq, Hash)]
struct Key {
    x: VertexSet,
    y: VertexSet,
    k: usize,
    d: VertexSet,
}

/// Depth-first branch over boundary-vertex decisions, returning the
/// family of important (X, Y)-separators of `G - D` of size at most `k`.
///
/// `memo` is owned by the top-level call (see [`crate::important_separators`])
/// and threaded through every recursive frame so repeated instances -
/// which do arise, since different branching orders can reach the same
/// (X, Y, k, D) - are solved once.
pub(crate) fn enumerate(
    adjacency: &[Vec<usize>],
    n_total: usize,
    x: &VertexSet,
    y: &VertexSet,
    k: usize,
    d: &VertexSet,
    memo: &mut HashMap<Key, VertexSetFamily>,
) -> VertexSetFamily {
    let key = Key {
        x: x.clone(),
        y: y.clone(),
        k,
        d: d.clone(),
    };
    if let Some(family) = memo.get(&key) {
        return family.clone();
    }

    let family = enumerate_uncached(adjacency, n_total, x, y, k, d, memo);
    memo.insert(key, family.clone());
    family
}

fn empty_family(n_total: usize) -> VertexSetFamily {
    let mut family = VertexSetFamily::new();
    family.insert(VertexSet::empty(n_total));
    family
}

fn enumerate_uncached(
    adjacency: &[Vec<usize>],
    n_total: usize,
    x: &VertexSet,
    y: &VertexSet,
    k: usize,
    d: &VertexSet,
    memo: &mut HashMap<Key, VertexSetFamily>,
) -> VertexSetFamily {
    if !path_exists(adjacency, x, y, d) {
        return empty_family(n_total);
    }

    let (lambda, r_max) = furthest_min_cut(adjacency, n_total, x, y, d, k);
    if lambda > k {
        return VertexSetFamily::new();
    }

    let v = match boundary(adjacency, &r_max, x, y, d) {
        Some(v) => v,
        // r_max already covers everything reachable: no further
        // branching is possible given path_exists is true and lambda <=
        // k, this is an internal invariant violation; fall back to the
        // empty separator rather than panic.
        None => {
            debug_assert!(false, "boundary selector found no candidate");
            return empty_family(n_total);
        }
    };

    let mut family = VertexSetFamily::new();

    if k >= 1 {
        let deleted = d.with(v);
        let branch_a = enumerate(adjacency, n_total, x, y, k - 1, &deleted, memo);
        for s in branch_a {
            family.insert(s.with(v));
        }
    }

    let protected = x.with(v);
    let branch_b = enumerate(adjacency, n_total, &protected, y, k, d, memo);
    for s in branch_b {
        family.insert(s);
    }

    family
}
