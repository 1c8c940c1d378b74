/*!
# Substructure Generators

Adds common motifs (paths and cycles) to a [`GraphBuilder`].
All nodes named by a motif are declared, so the motifs never produce dangling edges.

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let g = GraphBuilder::new()
    .connect_path(['a', 'b', 'c'])
    .connect_cycle(['c', 'd', 'e'])
    .build()
    .unwrap();

assert_eq!(g.number_of_edges(), 5);
assert!(g.has_edge_between(&'e', &'c'));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** while building a graph.
pub trait GeneratorSubstructures<L>: Sized {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(self, nodes_on_path: P) -> Self
    where
        P: IntoIterator<Item = L>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first; a single node gets a
    ///   self-loop.
    fn connect_cycle<C>(self, nodes_in_cycle: C) -> Self
    where
        C: IntoIterator<Item = L>;
}

impl<L: NodeId> GeneratorSubstructures<L> for GraphBuilder<L> {
    fn connect_path<P>(mut self, nodes_on_path: P) -> Self
    where
        P: IntoIterator<Item = L>,
    {
        let nodes = nodes_on_path.into_iter().collect_vec();
        for u in &nodes {
            self.insert_node(u.clone());
        }
        for (u, v) in nodes.into_iter().tuple_windows() {
            self.insert_edge(u, v);
        }
        self
    }

    fn connect_cycle<C>(self, nodes_in_cycle: C) -> Self
    where
        C: IntoIterator<Item = L>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        let closing = match (nodes.first(), nodes.last()) {
            (Some(first), Some(last)) => Some((last.clone(), first.clone())),
            _ => None,
        };

        let mut builder = self.connect_path(nodes);
        if let Some((last, first)) = closing {
            builder.insert_edge(last, first);
        }
        builder
    }
}
