//! Fixtures and brute-force oracles shared by the unit tests.

use std::collections::VecDeque;

use itertools::Itertools;

use crate::prelude::*;

/// Routes `log` output through the test harness; `RUST_LOG=trace` shows every search.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// ```text
///   / b \
/// a      d
///   \ c /
/// ```
pub fn diamond() -> DiGraph<char> {
    DiGraph::from_adjacency([
        ('a', vec!['b', 'c']),
        ('b', vec!['d']),
        ('c', vec!['d']),
        ('d', vec![]),
    ])
}

/// Cyclic graph on `{f, g, h}` with a dangling edge `f -> c`
pub fn graph_hfg() -> DiGraph<char> {
    DiGraph::from_adjacency([
        ('h', vec!['f', 'g']),
        ('f', vec!['c', 'g', 'h']),
        ('g', vec!['f', 'h']),
    ])
}

/// Three strongly connected components `{a, b, c}`, `{d, e, f, g}` and `{h}`
pub fn graph_scc() -> DiGraph<char> {
    DiGraph::from_adjacency([
        ('a', vec!['b']),
        ('b', vec!['c']),
        ('c', vec!['a']),
        ('d', vec!['e']),
        ('e', vec!['f', 'd']),
        ('f', vec!['g', 'd', 'e']),
        ('g', vec!['d']),
        ('h', vec![]),
    ])
}

/// Hop distances from `s` computed without any of the crate's traversals
pub fn bfs_distances(graph: &DiGraph<Node>, s: Node) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.len()];
    distances[s as usize] = Some(0);

    let mut queue = VecDeque::from([s]);
    while let Some(u) = queue.pop_front() {
        let next = distances[u as usize].map(|d| d + 1);
        for &v in graph.as_neighbors_slice(u) {
            if distances[v as usize].is_none() {
                distances[v as usize] = next;
                queue.push_back(v);
            }
        }
    }

    distances
}

/// All nodes reachable from `s` (including `s`) in ascending order, computed as a fixpoint
pub fn reachable_oracle(graph: &DiGraph<Node>, s: Node) -> Vec<Node> {
    let mut reached = vec![false; graph.len()];
    reached[s as usize] = true;

    let mut changed = true;
    while changed {
        changed = false;
        for Edge(u, v) in graph.edges() {
            if reached[u as usize] && !reached[v as usize] {
                reached[v as usize] = true;
                changed = true;
            }
        }
    }

    graph.vertices().filter(|&u| reached[u as usize]).collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures() {
        init_logger();

        assert_eq!(diamond().number_of_edges(), 4);

        let hfg = graph_hfg();
        assert_eq!(hfg.number_of_nodes(), 4);
        assert!(hfg.contains_node(&'c'));
        assert_eq!(hfg.neighbors(&'c').count(), 0);

        let scc = graph_scc();
        assert_eq!(scc.number_of_nodes(), 8);
        assert_eq!(scc.number_of_edges(), 10);
    }

    #[test]
    fn oracles() {
        let graph = DiGraph::from_edges(0..5, [(0, 1), (1, 2), (2, 0), (3, 4)]);

        assert_eq!(bfs_distances(&graph, 0), vec![Some(0), Some(1), Some(2), None, None]);
        assert_eq!(reachable_oracle(&graph, 1), vec![0, 1, 2]);
        assert_eq!(reachable_oracle(&graph, 4), vec![4]);
    }
}
