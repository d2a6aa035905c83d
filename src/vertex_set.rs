//! Dense vertex indexing and the bitmap-backed canonical vertex set.
//!
//! The public [`Graph`](crate::graph::Graph) is keyed by an arbitrary
//! hashable vertex identity. Internally, a single top-level call builds a
//! [`VertexIndex`] once (an order-preserving `V <-> usize` bijection over
//! `V(G)`) and every recursive frame thereafter works with
//! [`VertexSet`], a `fixedbitset::FixedBitSet` over those dense indices.
//! Two vertex sets that contain the same vertices produce bit-identical
//! `VertexSet`s regardless of insertion order, which is exactly the
//! order-independent canonical form the memoization table in
//! [`crate::enumerate`] needs as a hash key.

use std::hash::{Hash, Hasher};

use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use indexmap::IndexSet;

use crate::graph::Graph;

/// Assigns every vertex of a graph a dense `usize` index, stable for the
/// lifetime of one `important_separators` call.
pub(crate) struct VertexIndex<V: Eq + Hash + Clone> {
    order: IndexSet<V>,
}

impl<V: Eq + Hash + Clone> VertexIndex<V> {
    pub(crate) fn build(graph: &Graph<V>) -> Self {
        VertexIndex {
            order: graph.vertices().cloned().collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn index_of(&self, v: &V) -> Option<usize> {
        self.order.get_index_of(v)
    }

    pub(crate) fn vertex_at(&self, i: usize) -> &V {
        self.order
            .get_index(i)
            .expect("dense vertex index out of range")
    }
}

/// A canonical, order-independent vertex set over the dense indices of a
/// single [`VertexIndex`].
///
/// Used for X, Y, D, S and R throughout the enumerator, and as the
/// hashable component of the recursive memoization key.
#[derive(Clone, Debug)]
pub(crate) struct VertexSet {
    bits: FixedBitSet,
}

impl VertexSet {
    pub(crate) fn empty(capacity: usize) -> Self {
        VertexSet {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    pub(crate) fn singleton(capacity: usize, index: usize) -> Self {
        let mut set = VertexSet::empty(capacity);
        set.insert(index);
        set
    }

    pub(crate) fn insert(&mut self, index: usize) {
        self.bits.insert(index);
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.bits.contains(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the dense indices present in the set, in ascending order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }

    /// Union of `self` with `other`, as a new set.
    pub(crate) fn union_with(&self, other: &VertexSet) -> VertexSet {
        let mut result = self.clone();
        result.bits.union_with(&other.bits);
        result
    }

    /// `self` with `index` added, as a new set.
    pub(crate) fn with(&self, index: usize) -> VertexSet {
        let mut result = self.clone();
        result.insert(index);
        result
    }
}

impl PartialEq for VertexSet {
    fn eq(&self, other: &Self) -> bool {
        self.bits.as_slice() == other.bits.as_slice()
    }
}

impl Eq for VertexSet {}

impl Hash for VertexSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.as_slice().hash(state);
    }
}

/// A deduplicating collection of [`VertexSet`]s -- the internal
/// representation of a family of separators before translation back to
/// the caller's external vertex identity.
pub(crate) type VertexSetFamily = HashSet<VertexSet>;
