/*!
Topological sorting with cycle detection.

The sort is a full-graph DFS exploring nodes in exactly the order of [`DfsOrdering`], so on a
directed acyclic graph the result equals its reverse post-order. In addition every node is
coloured *on stack* while its successors are explored; meeting such a node again closes a
directed cycle, which is reported instead of an order.
*/

use std::slice::Iter;

use log::debug;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    OnStack,
    Finished,
}

struct StackFrame<'a> {
    node: Node,
    neighbors: Iter<'a, Node>,
}

/// Returns the nodes in reverse post-order of a full DFS, or the nodes of a directed cycle
/// (in edge order) if the DFS met one.
fn reverse_postorder_or_cycle<G>(graph: &G) -> Result<Vec<Node>, Vec<Node>>
where
    G: AdjacencyList + NeighborsSlice,
{
    let mut colors = vec![Color::Unvisited; graph.len()];
    let mut post = Vec::with_capacity(graph.len());
    let mut call_stack: Vec<StackFrame> = Vec::new();

    for root in graph.vertices() {
        if colors[root as usize] != Color::Unvisited {
            continue;
        }

        colors[root as usize] = Color::OnStack;
        call_stack.push(StackFrame {
            node: root,
            neighbors: graph.as_neighbors_slice(root).iter(),
        });

        'recurse: while let Some(frame) = call_stack.last_mut() {
            for &v in frame.neighbors.by_ref() {
                match colors[v as usize] {
                    Color::Unvisited => {
                        colors[v as usize] = Color::OnStack;
                        call_stack.push(StackFrame {
                            node: v,
                            neighbors: graph.as_neighbors_slice(v).iter(),
                        });
                        continue 'recurse;
                    }
                    Color::OnStack => {
                        // the stack holds a path from `v` to the current node
                        let start = call_stack
                            .iter()
                            .rposition(|f| f.node == v)
                            .unwrap_or_default();
                        return Err(call_stack[start..].iter().map(|f| f.node).collect());
                    }
                    Color::Finished => {}
                }
            }

            let u = frame.node;
            colors[u as usize] = Color::Finished;
            post.push(u);
            call_stack.pop();
        }
    }

    post.reverse();
    Ok(post)
}

/// Topological sorting as methods on the graph
pub trait TopologicalSort: LabelledGraph + Sized {
    /// Returns all nodes such that for every edge `(u, v)`, `u` precedes `v`.
    ///
    /// Ties are broken by the DFS order: searches are launched in ascending identifier order
    /// and successors explored in ascending order, the result is the reverse post-order.
    /// Fails with [`GraphError::Cycle`] carrying one directed cycle if the graph is not acyclic;
    /// self-loops are cycles of length one.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DiGraph::from_edges(['x', 'y', 'z'], [('z', 'x'), ('x', 'y')]);
    /// assert_eq!(g.topological_sort(), Ok(vec!['z', 'x', 'y']));
    ///
    /// let g = DiGraph::from_edges([], [(1, 2), (2, 1)]);
    /// assert_eq!(g.topological_sort(), Err(GraphError::Cycle { cycle: vec![1, 2] }));
    /// ```
    fn topological_sort(&self) -> GraphResult<Vec<Self::Id>, Self::Id> {
        match reverse_postorder_or_cycle(self) {
            Ok(order) => {
                debug!("Topologically sorted {} nodes", order.len());
                Ok(self.ids_of(order))
            }
            Err(cycle) => {
                debug!(
                    "Topological sort failed: found cycle of length {}",
                    cycle.len()
                );
                Err(GraphError::Cycle {
                    cycle: self.ids_of(cycle),
                })
            }
        }
    }

    /// Returns *true* if the graph contains no directed cycle (self-loops included)
    fn is_acyclic(&self) -> bool {
        reverse_postorder_or_cycle(self).is_ok()
    }
}

impl<G> TopologicalSort for G where G: LabelledGraph + Sized {}
