//! Dinic's maxflow algorithm and the furthest-min-cut residual
//! projection (component C4).
//!
//! Dinic's is used instead of Ford-Fulkerson/Edmonds-Karp or
//! preflow-push because its level-graph/blocking-flow structure leaves a
//! residual graph that is immediately convenient to BFS for the furthest
//! min-cut; the level-graph construction (`build_level_graph`) is shared
//! between the maxflow loop and the cut projection below.

use std::collections::VecDeque;

use crate::vertex_set::VertexSet;

use super::network::FlowNetwork;
use super::split_network::{self, out_node};

/// Makes a BFS that labels network nodes with their distance from
/// `source`, considering only arcs with strictly positive residual
/// capacity. Nodes not reachable are left at level `-1`.
///
/// Returns `None` if `sink` is not reachable -- the signal to stop
/// Dinic's main loop.
fn build_level_graph(network: &FlowNetwork, source: usize, sink: usize) -> Option<Vec<i32>> {
    let mut level = vec![-1; network.node_count()];
    level[source] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &arc in network.arcs_from(u) {
            if network.residual(arc) <= 0 {
                continue;
            }
            let w = network.head(arc);
            if level[w] < 0 {
                level[w] = level[u] + 1;
                queue.push_back(w);
            }
        }
    }

    if level[sink] < 0 {
        None
    } else {
        Some(level)
    }
}

/// Push up to `bound` units of flow from `u` to `sink` along arcs that
/// strictly advance the level graph, using `cursor` to skip arcs already
/// known to be dead ends within this phase (the standard Dinic
/// optimization that keeps a single blocking-flow phase near-linear).
fn send_flow(
    network: &mut FlowNetwork,
    level: &[i32],
    cursor: &mut [usize],
    u: usize,
    sink: usize,
    bound: i64,
) -> i64 {
    if u == sink || bound == 0 {
        return bound;
    }

    while cursor[u] < network.arcs_from(u).len() {
        let arc = network.arcs_from(u)[cursor[u]];
        let w = network.head(arc);
        let residual = network.residual(arc);

        if residual > 0 && level[w] == level[u] + 1 {
            let pushed = send_flow(network, level, cursor, w, sink, bound.min(residual));
            if pushed > 0 {
                network.push(arc, pushed);
                return pushed;
            }
        }
        cursor[u] += 1;
    }
    0
}

fn max_flow(network: &mut FlowNetwork, source: usize, sink: usize) -> i64 {
    let mut total = 0i64;
    while let Some(level) = build_level_graph(network, source, sink) {
        let mut cursor = vec![0usize; network.node_count()];
        loop {
            let pushed = send_flow(network, &level, &mut cursor, source, sink, i64::MAX);
            if pushed == 0 {
                break;
            }
            total += pushed;
        }
    }
    total
}

/// The min-cut lattice has a unique minimal source side (the nodes
/// forward-reachable from the source in the residual graph of any
/// maxflow) and a unique maximal one (the complement of the nodes that
/// can still reach the sink). Both are invariant across every maxflow
/// achieving the same value, regardless of which augmenting paths were
/// taken to get there. The furthest min-cut needs the maximal side, so
/// this walks the residual graph backwards from the sink instead of
/// forwards from the source.
fn nodes_that_reach_sink(network: &FlowNetwork, sink: usize) -> Vec<bool> {
    let mut incoming = vec![Vec::new(); network.node_count()];
    for u in 0..network.node_count() {
        for &arc in network.arcs_from(u) {
            incoming[network.head(arc)].push(arc);
        }
    }

    let mut reach = vec![false; network.node_count()];
    reach[sink] = true;
    let mut queue = VecDeque::new();
    queue.push_back(sink);

    while let Some(w) = queue.pop_front() {
        for &arc in &incoming[w] {
            if network.residual(arc) <= 0 {
                continue;
            }
            let u = network.from_node(arc);
            if !reach[u] {
                reach[u] = true;
                queue.push_back(u);
            }
        }
    }

    reach
}

/// Run a maxflow on the split network for (X, Y, D, k) and project the
/// furthest min-cut's source side back to original dense vertex indices.
///
/// Returns `(lambda, r_max)`: the minimum (X, Y)-vertex cut size in
/// `G - D`, and the unique furthest min-cut's reachable region.
pub(crate) fn furthest_min_cut(
    adjacency: &[Vec<usize>],
    n_total: usize,
    x: &VertexSet,
    y: &VertexSet,
    d: &VertexSet,
    k: usize,
) -> (usize, VertexSet) {
    let split = split_network::build(adjacency, n_total, x, y, d, k);
    let mut network = split.network;
    let lambda = max_flow(&mut network, split_network::SRC, split_network::SNK);

    let reaches_sink = nodes_that_reach_sink(&network, split_network::SNK);

    let mut r_max = VertexSet::empty(n_total);
    for v in 0..n_total {
        if d.contains(v) || y.contains(v) {
            continue;
        }
        if !reaches_sink[out_node(v)] {
            r_max.insert(v);
        }
    }

    debug_assert!(lambda >= 0);
    (lambda as usize, r_max)
}
