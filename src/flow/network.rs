//! A flat, dense-index directed flow network with paired residual arcs.
//!
//! The split network is rebuilt and discarded on every call to
//! [`furthest_min_cut`](super::furthest_min_cut), so it is represented
//! as a forward-star adjacency over small `Vec`s of arc ids rather than
//! reusing the general-purpose [`Graph`](crate::graph::Graph) type from
//! the public API -- the same tradeoff transient flow networks make in
//! edge-list-based maxflow implementations.
//!
//! Arcs are always added in forward/residual pairs: `add_arc` returns the
//! forward arc id `e`, and its paired residual arc is always `e ^ 1`.

pub(crate) struct FlowNetwork {
    /// `heads[arc]` is the node the arc points into.
    heads: Vec<usize>,
    /// `caps[arc]` is the arc's *remaining* residual capacity.
    caps: Vec<i64>,
    /// `adj[node]` lists the arc ids leaving `node`.
    adj: Vec<Vec<usize>>,
}

impl FlowNetwork {
    pub(crate) fn new(node_count: usize) -> Self {
        FlowNetwork {
            heads: Vec::new(),
            caps: Vec::new(),
            adj: vec![Vec::new(); node_count],
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Add a directed arc `from -> to` with the given capacity, plus its
    /// zero-capacity residual arc `to -> from`. Returns the forward arc id.
    pub(crate) fn add_arc(&mut self, from: usize, to: usize, cap: i64) -> usize {
        let fwd = self.heads.len();
        self.heads.push(to);
        self.caps.push(cap);
        self.adj[from].push(fwd);

        let rev = self.heads.len();
        self.heads.push(from);
        self.caps.push(0);
        self.adj[to].push(rev);

        debug_assert_eq!(fwd ^ 1, rev);
        fwd
    }

    pub(crate) fn head(&self, arc: usize) -> usize {
        self.heads[arc]
    }

    /// The node `arc` leaves from. Every arc is added alongside its
    /// residual pair `arc ^ 1`, whose head is exactly `arc`'s origin, so
    /// this needs no separate bookkeeping.
    pub(crate) fn from_node(&self, arc: usize) -> usize {
        self.heads[arc ^ 1]
    }

    pub(crate) fn residual(&self, arc: usize) -> i64 {
        self.caps[arc]
    }

    pub(crate) fn arcs_from(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }

    /// Push `amount` of flow along `arc`, crediting its residual pair.
    pub(crate) fn push(&mut self, arc: usize, amount: i64) {
        self.caps[arc] -= amount;
        self.caps[arc ^ 1] += amount;
    }
}
