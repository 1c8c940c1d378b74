/*!
# Graph Algorithms

All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversals, path reconstruction, DFS orderings, topological sorting and
strongly connected components.

Every algorithm runs on dense node indices and translates to identifiers only when producing
its result. Full-graph passes launch their searches in ascending identifier order and explore
successors in ascending order, so all results are deterministic.
*/

mod connectivity;
mod ordering;
mod path;
mod topo;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use ordering::*;
pub use path::*;
pub use topo::*;
pub use traversal::*;
