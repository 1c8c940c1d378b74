/*!
# Errors

All fallible graph operations return a [`GraphResult`].
The error is generic over the identifier type so callers receive the offending identifiers
back instead of dense indices or preformatted strings.
*/

use std::fmt::Debug;

use thiserror::Error;

/// Failure of a graph query or construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<L: Debug> {
    /// `to` cannot be reached from `from` in the traversal that was queried.
    #[error("no path from {from:?} to {to:?}")]
    NoPath { from: L, to: L },

    /// A topological order was requested for a graph containing a directed cycle.
    /// Consecutive entries of `cycle` are connected by an edge and the last entry has an
    /// edge back to the first.
    #[error("graph is not acyclic, found cycle {cycle:?}")]
    Cycle { cycle: Vec<L> },

    /// The queried identifier is not a node of the graph.
    #[error("unknown node {node:?}")]
    UnknownNode { node: L },

    /// An edge references a successor that was never declared as a node
    /// (only raised under [`DanglingPolicy::Reject`](crate::repr::DanglingPolicy::Reject)).
    #[error("edge {from:?} -> {to:?} references an undeclared node")]
    DanglingEdge { from: L, to: L },

    /// An adjacency matrix is not square.
    #[error("row {row} of adjacency matrix has {len} entries, expected {expected}")]
    MalformedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Shorthand for results of graph operations
pub type GraphResult<T, L> = Result<T, GraphError<L>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err: GraphError<char> = GraphError::NoPath { from: 'h', to: 'a' };
        assert_eq!(err.to_string(), "no path from 'h' to 'a'");

        let err: GraphError<u32> = GraphError::Cycle {
            cycle: vec![1, 2, 3],
        };
        assert_eq!(err.to_string(), "graph is not acyclic, found cycle [1, 2, 3]");

        let err: GraphError<&str> = GraphError::UnknownNode { node: "x" };
        assert_eq!(err.to_string(), "unknown node \"x\"");

        let err: GraphError<usize> = GraphError::MalformedMatrix {
            row: 2,
            len: 3,
            expected: 4,
        };
        assert_eq!(
            err.to_string(),
            "row 2 of adjacency matrix has 3 entries, expected 4"
        );
    }
}
