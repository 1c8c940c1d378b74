/*!
`lgraphs` is a small library for **l**abelled directed graphs and the classic linear-time
algorithms on them:
- traversals (BFS/DFS, iterative and recursive) together with path reconstruction,
- DFS orderings (preorder, postorder, reverse postorder),
- topological sorting with cycle detection,
- strongly connected components (Kosaraju).

# Representation

Users address **nodes** by arbitrary identifiers: anything that is `Clone + Eq + Hash + Ord + Debug`
(see [`NodeId`](crate::node::NodeId)), e.g. integers, characters or strings.
A [`DiGraph`](crate::repr::DiGraph) interns its identifiers once at construction time and maps
them to dense indices `Node = u32` in the range `0..n`, ordered like the identifiers.
Successor lists are kept sorted and free of duplicates, so parallel edges collapse into one and
self-loops are kept as regular edges.

Graphs are immutable after construction. They are created either
- via [`GraphBuilder`](crate::repr::GraphBuilder) which can reject edges to undeclared nodes,
- or directly from mappings, edge lists, adjacency lists or adjacency matrices.

# Design

All algorithms are provided as configurable structs that one can alter using the *Builder* / *Setter*
pattern before calling the configured algorithm on a provided graph.
The commonly used functionality is additionally implemented via traits on the graph itself,
e.g. `graph.topological_sort()` or `graph.strongly_connected_components()`.

Results are deterministic: full-graph passes start their searches in ascending identifier order and
visit successors in ascending order.
Fallible operations return a [`GraphResult`](crate::error::GraphResult) carrying the offending
identifiers.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the graph representation,
- [`algo`] includes the algorithm traits and their configurable structs,
- [`gens`] includes random graph generators and deterministic substructures such as paths and cycles,
- [`io`] includes readers and writers for edge lists and a DOT writer for visualization.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```rust
use lgraphs::{prelude::*, algo::*};

let graph = DiGraph::from_adjacency([
    ("shirt", vec!["tie", "belt"]),
    ("tie", vec!["jacket"]),
    ("trousers", vec!["shoes", "belt"]),
    ("belt", vec!["jacket"]),
]);

let order = graph.topological_sort().unwrap();
assert_eq!(order.first(), Some(&"trousers"));
assert_eq!(order.last(), Some(&"jacket"));

let path = graph.path(&"trousers", &"jacket", Frontier::BreadthFirst).unwrap();
assert_eq!(path, vec!["trousers", "belt", "jacket"]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `lgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
