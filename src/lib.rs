//! Enumeration of **important vertex separators** between two terminals
//! of an undirected graph, bounded by a parameter `k`.
//!
//! Given a graph `G`, terminals `s` and `t`, and a budget `k`, the
//! entry point [`important_separators`] returns every vertex subset
//! `S` with `|S| <= k` that disconnects `s` from `t` in `G - S` and is
//! *important*: no other separator of size at most `|S|` has a strictly
//! larger s-side reachable region. This is the fixed-parameter-tractable
//! primitive behind Marx's multiway-cut and multicut algorithms.
//!
//! The heavy lifting is a recursive branching enumerator ([`enumerate`])
//! driven by a furthest-minimum-vertex-cut routine built on a vertex-split
//! unit-capacity maxflow network ([`flow`]). Building a demo graph,
//! parsing a budget from the command line, or visualizing a separator is
//! left to the caller; this crate is the algorithm, not a driver.

mod boundary;
mod enumerate;
mod flow;
mod reachability;
mod vertex_set;

pub mod error;
pub mod graph;

pub use error::Error;
pub use graph::Graph;

use std::collections::HashSet as StdHashSet;
use std::hash::Hash;

use hashbrown::HashMap;

use vertex_set::{VertexIndex, VertexSet};

/// Enumerate the important s-t vertex separators of `graph` of size at
/// most `k`.
///
/// Each element of the returned vector is an important separator: a
/// vertex set `S` with `|S| <= k`, `s`, `t` not in `S`, such that
/// `graph` with `S` removed has no path from `s` to `t`, and no other
/// separator of size at most `|S|` has a strictly larger s-side
/// reachable region. The empty separator appears iff `s` and `t` are
/// already disconnected, or `s == t`. The returned vector never
/// contains duplicate sets.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `s` or `t` is not a vertex of
/// `graph`.
pub fn important_separators<V>(
    graph: &Graph<V>,
    s: V,
    t: V,
    k: usize,
) -> Result<Vec<StdHashSet<V>>, Error>
where
    V: Eq + Hash + Clone,
{
    if s == t {
        return Ok(vec![StdHashSet::new()]);
    }
    if !graph.contains(&s) || !graph.contains(&t) {
        return Err(Error::InvalidInput);
    }

    let index = VertexIndex::build(graph);
    let n_total = index.len();
    let adjacency: Vec<Vec<usize>> = (0..n_total)
        .map(|i| {
            graph
                .neighbors(index.vertex_at(i))
                .map(|w| index.index_of(w).expect("neighbor missing from index"))
                .collect()
        })
        .collect();

    let s_index = index.index_of(&s).expect("validated above");
    let t_index = index.index_of(&t).expect("validated above");

    let x = VertexSet::singleton(n_total, s_index);
    let y = VertexSet::singleton(n_total, t_index);
    let d = VertexSet::empty(n_total);

    let mut memo = HashMap::new();
    let family = enumerate::enumerate(&adjacency, n_total, &x, &y, k, &d, &mut memo);

    Ok(family
        .into_iter()
        .map(|internal| {
            internal
                .iter()
                .map(|i| index.vertex_at(i).clone())
                .collect()
        })
        .collect())
}
