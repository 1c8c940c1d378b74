/*!
# Graph Operations

Traits every graph representation implements. Algorithms are written against these traits and
never against a concrete representation.

There are two layers:
- the **index layer** ([`GraphNodeOrder`], [`AdjacencyList`], [`NeighborsSlice`], [`AdjacencyTest`])
  speaks in dense [`Node`] indices and is what the algorithms run on,
- the **identifier layer** ([`LabelledGraph`]) translates between user-facing identifiers and
  indices and is where queries enter and results leave.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in ascending order.
    /// The range does not borrow `self`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Traits pertaining getters for out-neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the successors of a given vertex in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of successors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    node_iterator!(degrees, degree_of, NumNodes);

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph, sorted lexicographically.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }

    /// Returns the number of nodes without any successor
    fn number_of_sinks(&self) -> NumNodes {
        self.degrees().filter(|&d| d == 0).count() as NumNodes
    }
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborsSlice {
    /// Returns a slice-reference of the (sorted) successors of a given vertex
    /// ** Panics if `u >= n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Graphs whose nodes carry user-facing identifiers.
///
/// Indices are assigned in ascending identifier order, i.e. for all `u < v` we have
/// `id_of(u) < id_of(v)`.
pub trait LabelledGraph: AdjacencyList + NeighborsSlice + AdjacencyTest {
    /// Identifier type of the nodes
    type Id: NodeId;

    /// Returns the index of `id` or `None` if `id` is not a node of the graph
    fn index_of(&self, id: &Self::Id) -> Option<Node>;

    /// Returns the identifier of the node with index `u`
    /// ** Panics if `u >= n` **
    fn id_of(&self, u: Node) -> &Self::Id;

    /// Returns the index of `id` or fails with [`GraphError::UnknownNode`]
    fn try_index_of(&self, id: &Self::Id) -> GraphResult<Node, Self::Id> {
        self.index_of(id)
            .ok_or_else(|| GraphError::UnknownNode { node: id.clone() })
    }

    /// Returns *true* if `id` is a node of the graph
    fn contains_node(&self, id: &Self::Id) -> bool {
        self.index_of(id).is_some()
    }

    /// Returns all identifiers in ascending order
    fn nodes(&self) -> impl Iterator<Item = &Self::Id> + '_ {
        self.vertices().map(|u| self.id_of(u))
    }

    /// Returns the successors of `id` in ascending order.
    /// Unknown identifiers have no successors.
    fn neighbors(&self, id: &Self::Id) -> impl Iterator<Item = &Self::Id> + '_ {
        self.index_of(id)
            .into_iter()
            .flat_map(move |u| self.neighbors_of(u))
            .map(move |v| self.id_of(v))
    }

    /// Returns *true* if the edge `(u, v)` exists; unknown identifiers have no edges.
    fn has_edge_between(&self, u: &Self::Id, v: &Self::Id) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(u), Some(v)) => self.has_edge(u, v),
            _ => false,
        }
    }

    /// Returns all edges as identifier pairs, sorted lexicographically
    fn labelled_edges(&self) -> impl Iterator<Item = (&Self::Id, &Self::Id)> + '_ {
        self.edges()
            .map(move |Edge(u, v)| (self.id_of(u), self.id_of(v)))
    }

    /// Translates a sequence of indices into owned identifiers
    fn ids_of<I>(&self, nodes: I) -> Vec<Self::Id>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes.into_iter().map(|u| self.id_of(u).clone()).collect_vec()
    }
}

/// Graphs that can produce their reversal.
pub trait GraphReverse: Sized {
    /// Returns a new graph where every edge `(u, v)` is replaced by `(v, u)`.
    ///
    /// The reversal has exactly the same nodes **with the same indices**, including nodes
    /// without any incident edge.
    fn reverse(&self) -> Self;
}
