//! The vertex-split unit-capacity flow network (component C3).
//!
//! Conceptually every node is one of four tagged kinds -- `Src`, `Snk`,
//! `In(v)`, `Out(v)` -- over the dense vertex indices of
//! [`VertexIndex`](crate::vertex_set::VertexIndex), never a
//! string-concatenated or pointer-derived identity. At runtime these
//! tags are flattened to plain `usize` node ids by [`in_node`] and
//! [`out_node`] so the network can be stored as the flat arrays of
//! [`FlowNetwork`](super::network::FlowNetwork).

use crate::vertex_set::VertexSet;

use super::network::FlowNetwork;

pub(crate) const SRC: usize = 0;
pub(crate) const SNK: usize = 1;

/// The in-copy node `v_in` for dense vertex index `v`.
pub(crate) fn in_node(v: usize) -> usize {
    2 + 2 * v
}

/// The out-copy node `v_out` for dense vertex index `v`.
pub(crate) fn out_node(v: usize) -> usize {
    2 + 2 * v + 1
}

pub(crate) struct SplitNetwork {
    pub(crate) network: FlowNetwork,
}

/// Build the split network for the instance (X, Y, D, k) over a graph
/// with `n_total` vertices and dense-index `adjacency`.
///
/// INF is any capacity strictly greater than `k`; saturating a unit arc
/// is the only way a min cut of size `<= k` can arise, so choosing
/// `INF = max(k + 1, n_total + k + 5)` keeps every protected or
/// edge-gadget arc unsaturatable without risking overflow.
pub(crate) fn build(
    adjacency: &[Vec<usize>],
    n_total: usize,
    x: &VertexSet,
    y: &VertexSet,
    d: &VertexSet,
    k: usize,
) -> SplitNetwork {
    let inf = std::cmp::max(k as i64 + 1, n_total as i64 + k as i64 + 5);
    let mut network = FlowNetwork::new(2 + 2 * n_total);

    for v in 0..n_total {
        if d.contains(v) {
            continue;
        }
        let cap = if x.contains(v) || y.contains(v) { inf } else { 1 };
        network.add_arc(in_node(v), out_node(v), cap);
    }

    for v in 0..n_total {
        if d.contains(v) {
            continue;
        }
        for &w in &adjacency[v] {
            if d.contains(w) {
                continue;
            }
            // Each undirected edge {v, w} becomes two directed arcs,
            // v_out -> w_in and w_out -> v_in; visiting every (v, w) and
            // (w, v) adjacency pair once each produces exactly both,
            // since adjacency is symmetric.
            network.add_arc(out_node(v), in_node(w), inf);
        }
    }

    for xv in x.iter() {
        debug_assert!(!d.contains(xv), "X and D must be disjoint");
        network.add_arc(SRC, out_node(xv), inf);
    }
    for yv in y.iter() {
        debug_assert!(!d.contains(yv), "Y and D must be disjoint");
        network.add_arc(in_node(yv), SNK, inf);
    }

    SplitNetwork { network }
}
