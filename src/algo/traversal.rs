/*!
Single-source graph traversals.

This module provides:
- The generic traversal iterator [`TraversalSearch`] parameterised by its frontier
  ([`VecDeque`] for BFS, [`Vec`] for DFS) and by whether it reports predecessors.
- A recursive DFS that builds the same kind of traversal tree through call-stack recursion.
- The [`Traversal`] trait exposing the index-level iterators on every adjacency list and the
  [`LabelledTraversal`] trait answering identifier-level queries with [`PredecessorMap`]s.

All traversals mark a node as discovered the moment it enters the frontier, so the first
discovery of a node wins and every reachable node is reported exactly once.
*/

use std::{collections::VecDeque, marker::PhantomData};

use log::trace;

use super::*;

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor
    /// may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The root of a traversal has no predecessor and is encoded as `(root, root)`.
/// No other node can be encoded this way as it would have to be discovered from itself.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        Vec::push(self, u)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Which frontier discipline a traversal uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frontier {
    /// FIFO frontier; the traversal tree encodes shortest paths
    #[default]
    BreadthFirst,
    /// LIFO frontier; the traversal tree encodes *some* paths
    DepthFirst,
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of discovered nodes and a bitset of all
/// nodes discovered so far. Each call to `next` removes one node from the frontier, pushes all
/// of its undiscovered successors (in ascending order) and yields the removed node.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BfsWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DfsWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(
                self.graph.len() - self.visited.cardinality() as usize
                    + self.sequencer.cardinality(),
            ),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            _item: PhantomData,
        }
    }

    /// Returns *true* if `u` has been discovered, i.e. it was yielded already or sits in the
    /// frontier.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Consumes the search and returns *true* iff `u` is reachable from the start node.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.any(|item| item.item() == u)
    }
}

/// Context of a single recursive depth-first search.
///
/// All state lives in this value; it is created per call and discarded with the result.
struct RecursiveSearch<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    tree: Vec<PredecessorOfNode>,
}

impl<'a, G> RecursiveSearch<'a, G>
where
    G: AdjacencyList,
{
    fn run(graph: &'a G, start: Node) -> Vec<PredecessorOfNode> {
        let mut search = Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            tree: Vec::new(),
        };

        search.visited.set_bit(start);
        search.tree.push(PredecessorOfNode::new_without_predecessor(start));
        search.visit(start);
        search.tree
    }

    fn visit(&mut self, u: Node) {
        let graph = self.graph;
        for v in graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.tree.push(PredecessorOfNode::new_with_predecessor(u, v));
                self.visit(v);
            }
        }
    }
}

/// Index-level traversals available on every adjacency list
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges([0, 1, 2], [(0, 2), (2, 1)]);
    ///
    /// let order: Vec<_> = g.bfs_from(0).collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn bfs_from(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs_from(&self, start: Node) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor of each node.
    fn bfs_with_predecessor(&self, start: Node) -> BfsWithPredecessor<'_, Self> {
        BfsWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor of each node.
    fn dfs_with_predecessor(&self, start: Node) -> DfsWithPredecessor<'_, Self> {
        DfsWithPredecessor::new(self, start)
    }

    /// Returns the traversal tree of a recursive DFS from `start` in discovery order.
    ///
    /// Successors are explored in ascending order, hence the tree may differ from the one
    /// of [`Traversal::dfs_with_predecessor`]. The recursion depth is bounded by the length
    /// of the longest simple path explored.
    fn dfs_recursive_tree(&self, start: Node) -> Vec<PredecessorOfNode> {
        RecursiveSearch::run(self, start)
    }

    /// Returns *true* if there is a directed path from `u` to `v`
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        u == v || self.bfs_from(u).is_node_reachable(v)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

/// Identifier-level traversal queries
pub trait LabelledTraversal: LabelledGraph + Traversal {
    /// Runs a traversal from `source` with the given frontier and returns its
    /// predecessor map. Fails if `source` is not a node.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_adjacency([('a', vec!['b', 'c']), ('b', vec!['d']), ('c', vec!['d'])]);
    ///
    /// let map = g.traverse(&'a', Frontier::BreadthFirst).unwrap();
    /// assert_eq!(map.predecessor_of(&'a'), Some(None));
    /// assert_eq!(map.predecessor_of(&'d'), Some(Some(&'b')));
    /// ```
    fn traverse(
        &self,
        source: &Self::Id,
        frontier: Frontier,
    ) -> GraphResult<PredecessorMap<Self::Id>, Self::Id> {
        let start = self.try_index_of(source)?;
        let map = match frontier {
            Frontier::BreadthFirst => {
                PredecessorMap::from_tree(self, start, self.bfs_with_predecessor(start))
            }
            Frontier::DepthFirst => {
                PredecessorMap::from_tree(self, start, self.dfs_with_predecessor(start))
            }
        };

        trace!(
            "{frontier:?} traversal from {source:?} reached {} of {} nodes",
            map.len(),
            self.number_of_nodes()
        );
        Ok(map)
    }

    /// Breadth-first traversal from `source`; see [`LabelledTraversal::traverse`]
    fn bfs(&self, source: &Self::Id) -> GraphResult<PredecessorMap<Self::Id>, Self::Id> {
        self.traverse(source, Frontier::BreadthFirst)
    }

    /// Iterative depth-first traversal from `source`; see [`LabelledTraversal::traverse`]
    fn dfs(&self, source: &Self::Id) -> GraphResult<PredecessorMap<Self::Id>, Self::Id> {
        self.traverse(source, Frontier::DepthFirst)
    }

    /// Recursive depth-first traversal from `source`.
    ///
    /// Reaches the same nodes as [`LabelledTraversal::dfs`] but may record different
    /// predecessors, since successors are explored in ascending instead of descending order.
    fn dfs_recursive(&self, source: &Self::Id) -> GraphResult<PredecessorMap<Self::Id>, Self::Id> {
        let start = self.try_index_of(source)?;
        Ok(PredecessorMap::from_tree(
            self,
            start,
            self.dfs_recursive_tree(start),
        ))
    }

    /// Returns all nodes reachable from `source` (including `source`) in BFS discovery order
    fn reachable_from(&self, source: &Self::Id) -> GraphResult<Vec<Self::Id>, Self::Id> {
        let start = self.try_index_of(source)?;
        Ok(self.ids_of(self.bfs_from(start)))
    }

    /// Returns a path from `source` to `target` found by a traversal with the given frontier.
    ///
    /// Fails with [`GraphError::UnknownNode`] if either identifier is not a node and with
    /// [`GraphError::NoPath`] if `target` is unreachable.
    fn path(
        &self,
        source: &Self::Id,
        target: &Self::Id,
        frontier: Frontier,
    ) -> GraphResult<Vec<Self::Id>, Self::Id> {
        self.try_index_of(target)?;
        let map = self.traverse(source, frontier)?;
        find_path(&map, source, target)
    }

    /// Returns a path from `source` to `target` with the fewest edges
    fn shortest_path(
        &self,
        source: &Self::Id,
        target: &Self::Id,
    ) -> GraphResult<Vec<Self::Id>, Self::Id> {
        self.path(source, target, Frontier::BreadthFirst)
    }
}

impl<G> LabelledTraversal for G where G: LabelledGraph + Traversal {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = DiGraph::from_edges(0..6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let order = graph.bfs_from(1).collect_vec();
        assert_eq!(order, vec![1, 0, 2, 5, 4, 3]);

        let order = Bfs::new(&graph, 5).collect_vec();
        assert_eq!(order, vec![5, 4, 3]);
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = DiGraph::from_edges(0..6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let mut edges = graph
            .bfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect_vec();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = DiGraph::from_edges(0..6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        // largest successor is popped first
        let order = Dfs::new(&graph, 1).collect_vec();
        assert_eq!(order, vec![1, 2, 0, 5, 4, 3]);

        let order = graph.dfs_from(5).collect_vec();
        assert_eq!(order, vec![5, 4, 3]);
    }

    #[test]
    fn recursive_tree() {
        let graph = DiGraph::from_edges(0..6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);
        assert_eq!(
            graph.dfs_recursive_tree(1),
            vec![(1, 1), (1, 0), (0, 5), (5, 4), (4, 3), (1, 2)]
        );
    }

    #[test]
    fn diamond_bfs() {
        let graph = diamond();
        let map = graph.bfs(&'a').unwrap();

        assert_eq!(map.source(), &'a');
        assert_eq!(map.predecessor_of(&'a'), Some(None));
        assert_eq!(map.predecessor_of(&'b'), Some(Some(&'a')));
        assert_eq!(map.predecessor_of(&'c'), Some(Some(&'a')));
        let via = map.predecessor_of(&'d').flatten().copied();
        assert!(via == Some('b') || via == Some('c'));

        let path = graph.shortest_path(&'a', &'d').unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(&'a'));
        assert_eq!(path.last(), Some(&'d'));
    }

    #[test]
    fn diamond_dfs() {
        let graph = diamond();

        for map in [graph.dfs(&'a').unwrap(), graph.dfs_recursive(&'a').unwrap()] {
            assert_eq!(map.len(), 4);
            let path = find_path(&map, &'a', &'d').unwrap();
            assert!(path == vec!['a', 'b', 'd'] || path == vec!['a', 'c', 'd']);
        }

        let path = graph.path(&'a', &'d', Frontier::DepthFirst).unwrap();
        assert!(path.len() == 3 || path.len() == 4);
    }

    #[test]
    fn unknown_nodes() {
        let graph = graph_hfg();

        assert_eq!(
            graph.path(&'h', &'a', Frontier::BreadthFirst),
            Err(GraphError::UnknownNode { node: 'a' })
        );
        assert_eq!(
            graph.shortest_path(&'a', &'h'),
            Err(GraphError::UnknownNode { node: 'a' })
        );
        assert_eq!(graph.bfs(&'x'), Err(GraphError::UnknownNode { node: 'x' }));
        assert_eq!(
            graph.dfs_recursive(&'x'),
            Err(GraphError::UnknownNode { node: 'x' })
        );
        assert_eq!(
            graph.reachable_from(&'x'),
            Err(GraphError::UnknownNode { node: 'x' })
        );
    }

    #[test]
    fn no_path() {
        let graph = DiGraph::from_edges(['a', 'b', 'c'], [('a', 'b')]);

        assert_eq!(
            graph.shortest_path(&'a', &'c'),
            Err(GraphError::NoPath { from: 'a', to: 'c' })
        );
        assert_eq!(
            graph.path(&'b', &'a', Frontier::DepthFirst),
            Err(GraphError::NoPath { from: 'b', to: 'a' })
        );
        assert_eq!(graph.shortest_path(&'c', &'c'), Ok(vec!['c']));
    }

    #[test]
    fn reachability() {
        let graph = graph_hfg();
        assert_eq!(graph.reachable_from(&'h').unwrap(), vec!['h', 'f', 'g', 'c']);
        assert_eq!(graph.reachable_from(&'c').unwrap(), vec!['c']);

        let h = graph.index_of(&'h').unwrap();
        let c = graph.index_of(&'c').unwrap();
        assert!(graph.is_reachable(h, c));
        assert!(!graph.is_reachable(c, h));
        assert!(graph.is_reachable(c, c));
    }

    #[test]
    fn bfs_paths_are_shortest() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);

        for _ in 0..50 {
            let n = rng.random_range(2..40);
            let graph = Gnp::new().nodes(n).avg_deg(2.0).generate(rng);

            for s in graph.vertices() {
                let bfs = graph.bfs(&s).unwrap();
                let dfs = graph.dfs(&s).unwrap();
                let rec = graph.dfs_recursive(&s).unwrap();

                // every other traversal reaches exactly the same nodes
                assert_eq!(dfs.reached().sorted().collect_vec(), bfs.reached().sorted().collect_vec());
                assert_eq!(rec.reached().sorted().collect_vec(), bfs.reached().sorted().collect_vec());

                let distances = bfs_distances(&graph, s);
                for t in graph.vertices() {
                    let Some(dist) = distances[t as usize] else {
                        assert!(!bfs.contains(&t));
                        continue;
                    };

                    let shortest = find_path(&bfs, &s, &t).unwrap();
                    assert_eq!(shortest.len() - 1, dist);
                    assert_valid_path(&graph, &shortest, s, t);

                    for other in [&dfs, &rec] {
                        let path = find_path(other, &s, &t).unwrap();
                        assert_valid_path(&graph, &path, s, t);
                        assert!(shortest.len() <= path.len());
                    }
                }
            }
        }
    }

    #[test]
    fn reachable_set_is_complete() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(0xbeef);

        for _ in 0..50 {
            let n = rng.random_range(1..30);
            let graph = Gnp::new().nodes(n).avg_deg(1.5).generate(rng);
            let s = rng.random_range(0..n);

            let reached = graph.reachable_from(&s).unwrap();
            let expected = reachable_oracle(&graph, s);
            assert_eq!(reached.iter().copied().sorted().collect_vec(), expected);
        }
    }

    fn assert_valid_path(graph: &DiGraph<Node>, path: &[Node], s: Node, t: Node) {
        assert_eq!(path.first(), Some(&s));
        assert_eq!(path.last(), Some(&t));
        for (u, v) in path.iter().tuple_windows() {
            assert!(graph.has_edge_between(u, v));
        }
    }
}
