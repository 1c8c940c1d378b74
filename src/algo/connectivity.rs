/*!
Strongly connected components via Kosaraju's algorithm.

1. Compute the reverse post-order of a full DFS over the *reversed* graph.
   The first node of this order lies in a component without outgoing edges to other
   components (a sink of the condensation).
2. Walk that order; every node not yet assigned starts a search over the *original* graph
   restricted to unassigned nodes. All nodes reached form one component.

Since each search starts in a sink of the part of the condensation not yet assigned, component
ids appear in reverse topological order: for every edge `u -> v` we have `id(u) >= id(v)`.

The first pass is the plain ordering of [`DfsOrdering`] and does not reject cycles; it is never
exposed as a topological order.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use log::{debug, trace};

use super::*;

/// Identifier of a strongly connected component in `0..number_of_components`
pub type ComponentId = u32;

const UNASSIGNED: ComponentId = ComponentId::MAX;

/// Assignment of every node of a graph to its strongly connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMap<L: NodeId> {
    component_of: FxHashMap<L, ComponentId>,
    members: Vec<Vec<L>>,
    cyclic: Vec<bool>,
}

impl<L: NodeId> ComponentMap<L> {
    fn new<G>(graph: &G, components: &[ComponentId], num_components: ComponentId) -> Self
    where
        G: LabelledGraph<Id = L>,
    {
        let mut members = vec![Vec::new(); num_components as usize];
        let mut cyclic = vec![false; num_components as usize];

        // ascending indices keep the members of each component sorted
        for u in graph.vertices() {
            let c = components[u as usize] as usize;
            members[c].push(graph.id_of(u).clone());
            cyclic[c] |= graph.has_self_loop(u);
        }
        for (c, m) in members.iter().enumerate() {
            cyclic[c] |= m.len() > 1;
        }

        let component_of = graph
            .vertices()
            .map(|u| (graph.id_of(u).clone(), components[u as usize]))
            .collect();

        Self {
            component_of,
            members,
            cyclic,
        }
    }

    /// Returns the component of `u` or `None` if `u` is not a node
    pub fn component_of(&self, u: &L) -> Option<ComponentId> {
        self.component_of.get(u).copied()
    }

    /// Returns the number of strongly connected components
    pub fn number_of_components(&self) -> ComponentId {
        self.members.len() as ComponentId
    }

    /// Returns the members of every component (indexed by [`ComponentId`]) in ascending order
    pub fn components(&self) -> &[Vec<L>] {
        &self.members
    }

    /// Returns the members of component `c` in ascending order
    /// ** Panics if `c >= number_of_components` **
    pub fn members_of(&self, c: ComponentId) -> &[L] {
        &self.members[c as usize]
    }

    /// Returns *true* if `u` and `v` are nodes of the same component, i.e. each is reachable
    /// from the other
    pub fn same_component(&self, u: &L, v: &L) -> bool {
        match (self.component_of(u), self.component_of(v)) {
            (Some(cu), Some(cv)) => cu == cv,
            _ => false,
        }
    }

    /// Returns *true* if component `c` contains a directed cycle, i.e. it has more than one
    /// member or its only member has a self-loop.
    /// ** Panics if `c >= number_of_components` **
    pub fn is_cyclic(&self, c: ComponentId) -> bool {
        self.cyclic[c as usize]
    }

    /// Returns all `(node, component)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&L, ComponentId)> + '_ {
        self.component_of.iter().map(|(u, &c)| (u, c))
    }

    /// Returns the condensation of `graph`: one node per component and an edge `c -> d`
    /// whenever some edge of `graph` leads from component `c` to another component `d`.
    /// The result is acyclic and every edge `c -> d` satisfies `c > d`.
    pub fn condensation<G>(&self, graph: &G) -> DiGraph<ComponentId>
    where
        G: LabelledGraph<Id = L>,
    {
        let edges = graph
            .labelled_edges()
            .filter_map(|(u, v)| Some((self.component_of(u)?, self.component_of(v)?)))
            .filter(|(cu, cv)| cu != cv)
            .collect_vec();

        DiGraph::from_edges(0..self.number_of_components(), edges)
    }
}

/// Configurable computation of strongly connected components.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let g = DiGraph::from_edges(['d'], [('a', 'b'), ('b', 'c'), ('c', 'a')]);
/// let sccs = Kosaraju::new(&g).compute();
///
/// assert_eq!(sccs.number_of_components(), 2);
/// assert!(sccs.same_component(&'a', &'c'));
/// assert!(!sccs.same_component(&'a', &'d'));
/// ```
pub struct Kosaraju<'a, G> {
    graph: &'a G,
    strategy: RecursionStrategy,
}

impl<'a, G> Kosaraju<'a, G>
where
    G: LabelledGraph + GraphReverse,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            strategy: RecursionStrategy::default(),
        }
    }

    /// Sets the recursion strategy of the ordering pass
    pub fn set_strategy(&mut self, strategy: RecursionStrategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    /// Sets the recursion strategy of the ordering pass
    pub fn strategy(mut self, strategy: RecursionStrategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Returns the component of every node (by index) and the number of components
    fn assign(&self) -> (Vec<ComponentId>, ComponentId) {
        let graph = self.graph;
        let order = DfsOrdering::new(&graph.reverse())
            .strategy(self.strategy)
            .compute_nodes()
            .revpost();

        let mut components = vec![UNASSIGNED; graph.len()];
        let mut num_components: ComponentId = 0;
        let mut stack = Vec::new();

        for root in order {
            if components[root as usize] != UNASSIGNED {
                continue;
            }

            trace!("Component {num_components} rooted at node {root}");
            components[root as usize] = num_components;
            stack.push(root);

            while let Some(u) = stack.pop() {
                for v in graph.neighbors_of(u) {
                    if components[v as usize] == UNASSIGNED {
                        components[v as usize] = num_components;
                        stack.push(v);
                    }
                }
            }

            num_components += 1;
        }

        (components, num_components)
    }

    /// Computes the strongly connected components
    pub fn compute(&self) -> ComponentMap<G::Id> {
        let (components, num_components) = self.assign();
        let map = ComponentMap::new(self.graph, &components, num_components);

        debug!(
            "Found {} strongly connected components ({} cyclic) in graph with {} nodes",
            num_components,
            (0..num_components).filter(|&c| map.is_cyclic(c)).count(),
            self.graph.number_of_nodes()
        );
        map
    }
}

/// Strong connectivity as methods on the graph
pub trait StronglyConnected: LabelledGraph + GraphReverse {
    /// Partitions the nodes into strongly connected components; see [`Kosaraju`]
    fn strongly_connected_components(&self) -> ComponentMap<Self::Id> {
        Kosaraju::new(self).compute()
    }
}

impl<G> StronglyConnected for G where G: LabelledGraph + GraphReverse {}
