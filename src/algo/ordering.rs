/*!
Full-graph depth-first orderings.

[`DfsOrdering`] launches a depth-first search from every node not yet visited (in ascending
order) and records every node twice: on first visit (**pre**-order) and once all of its
successors are finished (**post**-order). The reversed post-order (**revpost**) is the basis of
topological sorting and of Kosaraju's algorithm.
*/

use std::slice::Iter;

use log::{debug, trace};

use super::*;

/// How [`DfsOrdering`] descends into successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecursionStrategy {
    /// Uses the call stack; depth is bounded by the longest simple path explored
    Recursive,
    /// Simulates recursion with an explicit stack and works on arbitrarily deep graphs
    #[default]
    Iterative,
}

/// Pre-, post- and reverse post-order of a full-graph DFS.
/// Every node of the graph appears exactly once in each sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsOrder<L> {
    pub pre: Vec<L>,
    pub post: Vec<L>,
    pub revpost: Vec<L>,
}

/// Index-level pre- and post-order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeOrder {
    pub pre: Vec<Node>,
    pub post: Vec<Node>,
}

impl NodeOrder {
    /// Returns the post-order reversed
    pub fn revpost(&self) -> Vec<Node> {
        self.post.iter().rev().copied().collect()
    }
}

/// Configurable full-graph DFS.
///
/// DFS is launched from all unvisited nodes in ascending order and successors are explored in
/// ascending order. Both strategies produce identical sequences.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let g = DiGraph::from_adjacency([(0, vec![1, 2]), (1, vec![]), (2, vec![1])]);
/// let order = DfsOrdering::new(&g)
///     .strategy(RecursionStrategy::Recursive)
///     .compute();
///
/// assert_eq!(order.pre, vec![0, 1, 2]);
/// assert_eq!(order.post, vec![1, 2, 0]);
/// assert_eq!(order.revpost, vec![0, 2, 1]);
/// ```
pub struct DfsOrdering<'a, G> {
    graph: &'a G,
    strategy: RecursionStrategy,
}

impl<'a, G> DfsOrdering<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    /// Creates an ordering using the iterative strategy
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            strategy: RecursionStrategy::default(),
        }
    }

    /// Sets the recursion strategy
    pub fn set_strategy(&mut self, strategy: RecursionStrategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    /// Sets the recursion strategy
    pub fn strategy(mut self, strategy: RecursionStrategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Computes pre- and post-order on dense indices
    pub(crate) fn compute_nodes(&self) -> NodeOrder {
        let mut search = OrderingSearch {
            graph: self.graph,
            visited: self.graph.vertex_bitset_unset(),
            pre: Vec::with_capacity(self.graph.len()),
            post: Vec::with_capacity(self.graph.len()),
        };

        for root in self.graph.vertices() {
            if search.visited.set_bit(root) {
                continue;
            }

            trace!("DFS launch at node {root}");
            match self.strategy {
                RecursionStrategy::Recursive => search.visit_recursive(root),
                RecursionStrategy::Iterative => search.visit_iterative(root),
            }
        }

        debug_assert_eq!(search.pre.len(), self.graph.len());
        debug_assert_eq!(search.post.len(), self.graph.len());

        NodeOrder {
            pre: search.pre,
            post: search.post,
        }
    }

    /// Computes pre-, post- and reverse post-order
    pub fn compute(&self) -> DfsOrder<G::Id>
    where
        G: LabelledGraph,
    {
        debug!(
            "Compute {:?} DFS ordering of graph with {} nodes",
            self.strategy,
            self.graph.number_of_nodes()
        );

        let order = self.compute_nodes();
        DfsOrder {
            revpost: self.graph.ids_of(order.revpost()),
            pre: self.graph.ids_of(order.pre),
            post: self.graph.ids_of(order.post),
        }
    }
}

/// State of one full-graph ordering pass; discarded with the result
struct OrderingSearch<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    pre: Vec<Node>,
    post: Vec<Node>,
}

/// Simulated call of `visit(node)` with the successors still to be explored
struct StackFrame<'a> {
    node: Node,
    neighbors: Iter<'a, Node>,
}

impl<'a, G> OrderingSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    /// Requires `u` to be marked visited already
    fn visit_recursive(&mut self, u: Node) {
        self.pre.push(u);

        let graph = self.graph;
        for &v in graph.as_neighbors_slice(u) {
            if !self.visited.set_bit(v) {
                self.visit_recursive(v);
            }
        }

        self.post.push(u);
    }

    /// Requires `root` to be marked visited already
    fn visit_iterative(&mut self, root: Node) {
        let graph = self.graph;
        let frame = move |node: Node| StackFrame {
            node,
            neighbors: graph.as_neighbors_slice(node).iter(),
        };

        self.pre.push(root);
        let mut call_stack = vec![frame(root)];

        while let Some(top) = call_stack.last_mut() {
            let visited = &mut self.visited;
            if let Some(&v) = top.neighbors.find(|&&v| !visited.set_bit(v)) {
                self.pre.push(v);
                call_stack.push(frame(v));
            } else {
                self.post.push(top.node);
                call_stack.pop();
            }
        }
    }
}

/// Full-graph DFS orderings as methods on the graph
pub trait Orderings: LabelledGraph + Sized {
    /// Computes pre-, post- and reverse post-order with the (stack-safe) iterative strategy.
    /// See [`DfsOrdering`] for other strategies.
    fn dfs_order(&self) -> DfsOrder<Self::Id> {
        DfsOrdering::new(self).compute()
    }
}

impl<G> Orderings for G where G: LabelledGraph + Sized {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn diamond_order() {
        let graph = diamond();
        let order = graph.dfs_order();

        assert_eq!(order.pre, vec!['a', 'b', 'd', 'c']);
        assert_eq!(order.post, vec!['d', 'b', 'c', 'a']);
        assert_eq!(order.revpost, vec!['a', 'c', 'b', 'd']);
        assert_ne!(order.pre, order.revpost);
    }

    #[test]
    fn forest() {
        // two trees and a cycle; launches happen in ascending order
        let graph = DiGraph::from_edges(0..7, [(0, 1), (2, 0), (3, 4), (4, 3), (5, 6)]);
        let order = graph.dfs_order();

        assert_eq!(order.pre, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(order.post, vec![1, 0, 2, 4, 3, 6, 5]);
        assert_eq!(order.revpost, vec![5, 6, 3, 4, 2, 0, 1]);
    }

    #[test]
    fn self_loops_and_empty() {
        let graph = DiGraph::from_edges([7], [(7, 7)]);
        let order = graph.dfs_order();
        assert_eq!(order.pre, vec![7]);
        assert_eq!(order.post, vec![7]);

        let graph: DiGraph<char> = DiGraph::new();
        let order = graph.dfs_order();
        assert!(order.pre.is_empty() && order.post.is_empty() && order.revpost.is_empty());
    }

    #[test]
    fn strategies_agree() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(0xabcd);

        for _ in 0..100 {
            let n = rng.random_range(1..60);
            let graph = Gnp::new().nodes(n).avg_deg(2.5).generate(rng);

            let iterative = DfsOrdering::new(&graph)
                .strategy(RecursionStrategy::Iterative)
                .compute();
            let mut ordering = DfsOrdering::new(&graph);
            ordering.set_strategy(RecursionStrategy::Recursive);
            let recursive = ordering.compute();
            assert_eq!(iterative, recursive);

            // every node exactly once per sequence
            for seq in [&iterative.pre, &iterative.post, &iterative.revpost] {
                assert_eq!(seq.iter().copied().sorted().collect_vec(), graph.vertices().collect_vec());
            }
            assert_eq!(
                iterative.revpost,
                iterative.post.iter().rev().copied().collect_vec()
            );
        }
    }

    #[test]
    fn deep_path_iterative() {
        let n = 100_000;
        let graph = GraphBuilder::new().connect_path(0..n).build().unwrap();
        let order = graph.dfs_order();

        assert_eq!(order.pre, (0..n).collect_vec());
        assert_eq!(order.revpost, order.pre);
    }
}
