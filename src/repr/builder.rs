use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use num::Zero;

use super::*;

/// How to treat an edge whose target was never declared as a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DanglingPolicy {
    /// Insert the target as a node without successors
    #[default]
    Tolerate,
    /// Fail construction with [`GraphError::DanglingEdge`]
    Reject,
}

/// Collects nodes and edges in any order and interns them into a [`DiGraph`].
///
/// A node is *declared* by [`GraphBuilder::add_node`] or by being the tail of an edge.
/// Heads of edges that are never declared are handled according to the [`DanglingPolicy`].
///
/// ```
/// use lgraphs::prelude::*;
///
/// let graph = GraphBuilder::new()
///     .dangling(DanglingPolicy::Reject)
///     .add_edge('a', 'b')
///     .add_node('b')
///     .build()
///     .unwrap();
/// assert_eq!(graph.number_of_edges(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<L: NodeId> {
    adjacency: BTreeMap<L, BTreeSet<L>>,
    dangling: DanglingPolicy,
}

impl<L: NodeId> Default for GraphBuilder<L> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            dangling: DanglingPolicy::default(),
        }
    }
}

impl<L: NodeId> GraphBuilder<L> {
    /// Creates an empty builder tolerating dangling edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for dangling edges
    pub fn set_dangling(&mut self, policy: DanglingPolicy) -> &mut Self {
        self.dangling = policy;
        self
    }

    /// Sets the policy for dangling edges
    pub fn dangling(mut self, policy: DanglingPolicy) -> Self {
        self.set_dangling(policy);
        self
    }

    /// Declares `u` as a node; declaring a node twice has no effect
    pub fn add_node(mut self, u: L) -> Self {
        self.insert_node(u);
        self
    }

    /// Adds the edge `u -> v` and declares `u`; parallel edges collapse
    pub fn add_edge(mut self, u: L, v: L) -> Self {
        self.insert_edge(u, v);
        self
    }

    /// Adds all edges of `edges`
    pub fn add_edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L)>,
    {
        for (u, v) in edges {
            self.insert_edge(u, v);
        }
        self
    }

    /// Declares `u` and adds an edge from `u` to every element of `successors`
    pub fn add_successors<I>(mut self, u: L, successors: I) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        self.adjacency.entry(u).or_default().extend(successors);
        self
    }

    /// Returns the number of nodes declared so far
    pub fn number_of_declared_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn insert_node(&mut self, u: L) {
        self.adjacency.entry(u).or_default();
    }

    pub(crate) fn insert_edge(&mut self, u: L, v: L) {
        self.adjacency.entry(u).or_default().insert(v);
    }

    /// Interns all identifiers and builds the graph.
    /// Fails with [`GraphError::DanglingEdge`] for the smallest dangling edge under
    /// [`DanglingPolicy::Reject`].
    pub fn build(self) -> GraphResult<DiGraph<L>, L> {
        if self.dangling == DanglingPolicy::Reject {
            for (u, successors) in &self.adjacency {
                if let Some(v) = successors
                    .iter()
                    .find(|v| !self.adjacency.contains_key(*v))
                {
                    return Err(GraphError::DanglingEdge {
                        from: u.clone(),
                        to: v.clone(),
                    });
                }
            }
        }

        Ok(self.assemble())
    }

    /// Builds the graph treating dangling heads as nodes without successors
    pub(crate) fn assemble(self) -> DiGraph<L> {
        let mut ids: BTreeSet<L> = BTreeSet::new();
        for (u, successors) in &self.adjacency {
            ids.insert(u.clone());
            ids.extend(successors.iter().cloned());
        }
        let ids = ids.into_iter().collect_vec();

        // ids are sorted and successor sets are sorted, so ranks stay sorted
        let rank = |v: &L| ids.binary_search(v).map(|i| i as Node);
        let out_nbs = ids
            .iter()
            .map(|u| match self.adjacency.get(u) {
                Some(successors) => {
                    Neighborhood::from_sorted(successors.iter().filter_map(|v| rank(v).ok()))
                }
                None => Neighborhood::default(),
            })
            .collect_vec();

        let graph = DiGraph::from_parts(ids, out_nbs);
        debug!(
            "Built graph with {} nodes and {} edges",
            graph.number_of_nodes(),
            graph.number_of_edges()
        );
        graph
    }
}

impl<L: NodeId> DiGraph<L> {
    /// Creates a graph from a mapping of nodes to successors, e.g. `HashMap<L, HashSet<L>>`,
    /// `BTreeMap<L, Vec<L>>` or a vector of pairs.
    /// Successors missing from the key set become nodes without successors.
    pub fn from_adjacency<I, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (L, S)>,
        S: IntoIterator<Item = L>,
    {
        adjacency
            .into_iter()
            .fold(GraphBuilder::new(), |builder, (u, successors)| {
                builder.add_successors(u, successors)
            })
            .assemble()
    }

    /// Creates a graph from an explicit node list and edge pairs.
    /// Endpoints of edges are nodes even if missing from `nodes`.
    pub fn from_edges<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = L>,
        E: IntoIterator<Item = (L, L)>,
    {
        let mut builder = GraphBuilder::new();
        for u in nodes {
            builder.insert_node(u);
        }
        builder.add_edges(edges).assemble()
    }
}

impl DiGraph<usize> {
    /// Creates a graph from a list of successor lists; the position in `lists` is the identifier.
    /// Successors beyond the list are treated as nodes without successors.
    pub fn from_adjacency_lists<I, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = usize>,
    {
        Self::from_adjacency(lists.into_iter().enumerate())
    }

    /// Creates a graph from a square adjacency matrix where every non-zero entry `rows[u][v]`
    /// is an edge `u -> v`.
    pub fn from_adjacency_matrix<R, T>(rows: &[R]) -> GraphResult<Self, usize>
    where
        R: AsRef<[T]>,
        T: Zero,
    {
        let n = rows.len();
        let mut builder = GraphBuilder::new();

        for (u, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphError::MalformedMatrix {
                    row: u,
                    len: row.len(),
                    expected: n,
                });
            }

            builder = builder.add_successors(
                u,
                row.iter()
                    .enumerate()
                    .filter_map(|(v, x)| (!x.is_zero()).then_some(v)),
            );
        }

        builder.build()
    }
}
