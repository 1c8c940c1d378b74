/*!
# Nodes and Identifiers

Users address nodes by arbitrary identifiers (any [`NodeId`]), whereas all algorithms work on
dense indices `Node = u32` in the range `0..n`.
Every graph interns its identifiers once at construction time; the index of an identifier is its
rank among all identifiers of the graph, so iterating `0..n` visits identifiers in ascending order.
*/

use std::{fmt::Debug, hash::Hash};

use bitvec::vec::BitVec;

/// Dense node index in the range `0..n`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Fixed-size bitset over the nodes `0..n`, used as visited-set by all searches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeBitSet(BitVec);

impl NodeBitSet {
    /// Creates a bitset for `n` nodes with no bit set
    pub fn new(n: NumNodes) -> Self {
        Self(BitVec::repeat(false, n as usize))
    }

    /// Sets the bit of `u` and returns its previous value
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.0.replace(u as usize, true)
    }

    /// Returns *true* if the bit of `u` is set
    /// ** Panics if `u >= n` **
    pub fn get_bit(&self, u: Node) -> bool {
        self.0[u as usize]
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.0.count_ones() as NumNodes
    }
}

/// Anything that can identify a node: small integers, characters, strings, ...
///
/// The total order is used to assign dense indices and thereby fixes the order in which
/// full-graph passes launch their searches.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + Debug {}
