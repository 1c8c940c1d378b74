/*!
# Graph Generators

Random graphs and deterministic motifs, mostly used to exercise the algorithms on many inputs.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters (e.g., `.nodes(n).prob(p)`).
3. Produce edges via `stream()` or a whole graph via `generate()`.

Supported models:
- G(n,p): every directed edge is present independently with probability `p`, optionally
  restricted to forward edges `u < v` (yielding a random DAG) or without self-loops.

Motifs (paths, cycles) are added to a [`GraphBuilder`] via [`GeneratorSubstructures`].
*/

use crate::prelude::*;

mod geometric;
mod gnp;
mod substructures;

pub use geometric::*;
pub use gnp::*;
pub use substructures::*;
