//! The maxflow machinery behind the important-separator recursion:
//! [`network`] is the flat dense-index flow graph, [`split_network`]
//! turns a vertex-cut instance into a unit-capacity edge-cut instance
//! over it (C3), and [`dinic`] solves that instance and projects the
//! furthest min-cut back out (C4).

mod dinic;
mod network;
mod split_network;

pub(crate) use dinic::furthest_min_cut;
