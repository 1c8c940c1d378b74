/*!
# Graph Representation

There is exactly one concrete representation, [`DiGraph`]: a directed graph over arbitrary
identifiers whose successor sets are stored as sorted [`Neighborhood`]s of dense indices.

Inputs in other shapes (mappings of sets, lists of lists, adjacency matrices, edge lists) are
adapted at the boundary by [`GraphBuilder`] and the `from_*` constructors, so no algorithm ever
has to branch on how the caller stored its graph.
*/

use std::fmt::Debug;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{ops::*, *};

mod builder;
mod neighborhood;
mod reverse;

pub use builder::*;
pub use neighborhood::*;

/// A directed graph whose nodes are identified by values of type `L`.
///
/// The shape is fixed once built; algorithms only ever read it.
#[derive(Clone)]
pub struct DiGraph<L: NodeId> {
    ids: Vec<L>,
    index: FxHashMap<L, Node>,
    out_nbs: Vec<Neighborhood>,
    num_edges: NumEdges,
}

impl<L: NodeId> DiGraph<L> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// Assembles a graph from strictly ascending identifiers and one (sorted) neighborhood per
    /// identifier.
    pub(crate) fn from_parts(ids: Vec<L>, out_nbs: Vec<Neighborhood>) -> Self {
        debug_assert_eq!(ids.len(), out_nbs.len());
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(
            out_nbs
                .iter()
                .all(|nbs| nbs.neighbors().all(|v| (v as usize) < ids.len()))
        );

        let index = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i as Node))
            .collect();
        let num_edges = out_nbs.iter().map(|nbs| nbs.len() as NumEdges).sum();

        Self {
            ids,
            index,
            out_nbs,
            num_edges,
        }
    }

    /// Returns a graph with the same indices whose successor sets are given by `out_nbs`.
    pub(crate) fn with_neighborhoods(&self, out_nbs: Vec<Neighborhood>) -> Self {
        debug_assert_eq!(out_nbs.len(), self.out_nbs.len());
        let num_edges = out_nbs.iter().map(|nbs| nbs.len() as NumEdges).sum();

        Self {
            ids: self.ids.clone(),
            index: self.index.clone(),
            out_nbs,
            num_edges,
        }
    }
}

impl<L: NodeId> Default for DiGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: NodeId> PartialEq for DiGraph<L> {
    fn eq(&self, other: &Self) -> bool {
        // `index` is derived from `ids`
        self.ids == other.ids && self.out_nbs == other.out_nbs
    }
}

impl<L: NodeId> Eq for DiGraph<L> {}

impl<L: NodeId> Debug for DiGraph<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.vertices().map(|u| {
                let successors = self.neighbors_of(u).map(|v| self.id_of(v)).collect_vec();
                (self.id_of(u), successors)
            }))
            .finish()
    }
}

impl<L: NodeId> GraphNodeOrder for DiGraph<L> {
    fn number_of_nodes(&self) -> NumNodes {
        self.ids.len() as NumNodes
    }
}

impl<L: NodeId> GraphEdgeOrder for DiGraph<L> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<L: NodeId> AdjacencyList for DiGraph<L> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].len() as NumNodes
    }
}

impl<L: NodeId> NeighborsSlice for DiGraph<L> {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.out_nbs[u as usize].as_slice()
    }
}

impl<L: NodeId> AdjacencyTest for DiGraph<L> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs[u as usize].has_neighbor(v)
    }
}

impl<L: NodeId> LabelledGraph for DiGraph<L> {
    type Id = L;

    fn index_of(&self, id: &L) -> Option<Node> {
        self.index.get(id).copied()
    }

    fn id_of(&self, u: Node) -> &L {
        &self.ids[u as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn queries() {
        let graph = diamond();

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.nodes().copied().collect_vec(), vec!['a', 'b', 'c', 'd']);
        assert_eq!(graph.neighbors(&'a').copied().collect_vec(), vec!['b', 'c']);
        assert_eq!(graph.neighbors(&'d').count(), 0);
        assert_eq!(graph.neighbors(&'z').count(), 0);

        assert!(graph.has_edge_between(&'b', &'d'));
        assert!(!graph.has_edge_between(&'d', &'b'));
        assert!(!graph.has_edge_between(&'a', &'z'));

        assert!(graph.contains_node(&'c'));
        assert!(!graph.contains_node(&'z'));
        assert_eq!(graph.index_of(&'c'), Some(2));
        assert_eq!(*graph.id_of(3), 'd');
        assert_eq!(
            graph.try_index_of(&'z'),
            Err(GraphError::UnknownNode { node: 'z' })
        );

        assert_eq!(
            graph.labelled_edges().map(|(u, v)| (*u, *v)).collect_vec(),
            vec![('a', 'b'), ('a', 'c'), ('b', 'd'), ('c', 'd')]
        );
        assert_eq!(graph.max_degree(), 2);
        assert_eq!(graph.number_of_sinks(), 1);
    }

    #[test]
    fn empty_graph() {
        let graph: DiGraph<u32> = DiGraph::default();
        assert!(graph.is_empty());
        assert!(graph.is_singleton_graph());
        assert_eq!(graph.edges().count(), 0);
        assert_eq!(graph, DiGraph::new());
    }

    #[test]
    fn debug_as_map() {
        let graph = diamond();
        assert_eq!(
            format!("{graph:?}"),
            "{'a': ['b', 'c'], 'b': ['d'], 'c': ['d'], 'd': []}"
        );
    }
}
