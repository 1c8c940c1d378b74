/*!
Predecessor maps and path reconstruction.

A [`PredecessorMap`] is the result of a single-source traversal: for every reached node it
stores the node it was first discovered from. [`find_path`] walks such a map backwards to
obtain an explicit path.
*/

use fxhash::FxHashMap;

use super::*;

/// Traversal tree of a single-source traversal, keyed by identifiers.
///
/// The source maps to `None`, every other reached node to the node it was first discovered
/// from. Nodes that were not reached are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap<L: NodeId> {
    source: L,
    order: Vec<L>,
    predecessors: FxHashMap<L, Option<L>>,
}

impl<L: NodeId> PredecessorMap<L> {
    /// Builds the map from the items of a traversal rooted at `root`
    pub(crate) fn from_tree<G, I>(graph: &G, root: Node, tree: I) -> Self
    where
        G: LabelledGraph<Id = L>,
        I: IntoIterator<Item = PredecessorOfNode>,
    {
        let mut order = Vec::new();
        let mut predecessors = FxHashMap::default();

        for item in tree {
            let (pred, u) = item.predecessor_with_item();
            let id = graph.id_of(u).clone();
            predecessors.insert(id.clone(), pred.map(|p| graph.id_of(p).clone()));
            order.push(id);
        }

        debug_assert_eq!(order.first(), Some(graph.id_of(root)));
        debug_assert_eq!(order.len(), predecessors.len());

        Self {
            source: graph.id_of(root).clone(),
            order,
            predecessors,
        }
    }

    /// Returns the node the traversal started from
    pub fn source(&self) -> &L {
        &self.source
    }

    /// Returns the number of reached nodes (including the source)
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always *false*: the source is reached by every traversal
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns *true* if `u` was reached
    pub fn contains(&self, u: &L) -> bool {
        self.predecessors.contains_key(u)
    }

    /// Returns `None` if `u` was not reached, `Some(None)` for the source and
    /// `Some(Some(p))` if `u` was first discovered from `p`.
    pub fn predecessor_of(&self, u: &L) -> Option<Option<&L>> {
        self.predecessors.get(u).map(Option::as_ref)
    }

    /// Returns all reached nodes in discovery order
    pub fn reached(&self) -> impl Iterator<Item = &L> + '_ {
        self.order.iter()
    }

    /// Returns all `(node, predecessor)` pairs in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&L, Option<&L>)> + '_ {
        self.order
            .iter()
            .map(|u| (u, self.predecessors.get(u).and_then(Option::as_ref)))
    }

    /// Returns the path from the source to `target`; shorthand for
    /// `find_path(self, self.source(), target)`
    pub fn path_to(&self, target: &L) -> GraphResult<Vec<L>, L> {
        find_path(self, &self.source, target)
    }
}

/// Reconstructs the path from `source` to `target` recorded in `map`.
///
/// Starting at `target`, predecessors are followed until `source` is met. Hence `source` may
/// be any ancestor of `target` in the traversal tree, not only its root.
/// Fails with [`GraphError::NoPath`] if `target` was not reached or `source` does not lie on
/// the tree path to `target`.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let g = DiGraph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3)]);
/// let map = g.bfs(&1).unwrap();
///
/// assert_eq!(find_path(&map, &1, &3), Ok(vec![1, 2, 3]));
/// assert_eq!(find_path(&map, &2, &3), Ok(vec![2, 3]));
/// assert_eq!(find_path(&map, &1, &4), Err(GraphError::NoPath { from: 1, to: 4 }));
/// ```
pub fn find_path<L: NodeId>(
    map: &PredecessorMap<L>,
    source: &L,
    target: &L,
) -> GraphResult<Vec<L>, L> {
    let no_path = || GraphError::NoPath {
        from: source.clone(),
        to: target.clone(),
    };

    let mut path = vec![target.clone()];
    let mut node = target;

    while node != source {
        match map.predecessor_of(node) {
            Some(Some(pred)) => {
                path.push(pred.clone());
                node = pred;
            }
            // reached the root (or `target` is not part of the map) without meeting `source`
            _ => return Err(no_path()),
        }
    }

    path.reverse();
    Ok(path)
}
