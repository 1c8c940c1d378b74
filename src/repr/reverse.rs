use log::debug;

use super::*;

impl<L: NodeId> GraphReverse for DiGraph<L> {
    fn reverse(&self) -> Self {
        let mut out_nbs = vec![Neighborhood::default(); self.len()];

        // Visiting tails in ascending order appends to every reversed neighborhood in ascending
        // order, so the result is sorted without an extra pass.
        for Edge(u, v) in self.edges() {
            out_nbs[v as usize].push_sorted(u);
        }

        debug!(
            "Reversed graph with {} nodes and {} edges",
            self.number_of_nodes(),
            self.number_of_edges()
        );
        self.with_neighborhoods(out_nbs)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn reverse_edges() {
        let graph = diamond();
        let rev = graph.reverse();

        assert_eq!(rev.number_of_nodes(), 4);
        assert_eq!(rev.number_of_edges(), 4);
        assert_eq!(
            rev.labelled_edges().map(|(u, v)| (*u, *v)).collect_vec(),
            vec![('b', 'a'), ('c', 'a'), ('d', 'b'), ('d', 'c')]
        );

        // nodes without incoming edges keep an (empty) entry
        assert!(rev.contains_node(&'a'));
        assert_eq!(rev.neighbors(&'a').count(), 0);
    }

    #[test]
    fn isolated_nodes_and_loops() {
        let graph = DiGraph::from_edges([0, 1, 2, 3], [(1, 1), (2, 1)]);
        let rev = graph.reverse();

        assert_eq!(rev.nodes().copied().collect_vec(), vec![0, 1, 2, 3]);
        assert!(rev.has_edge_between(&1, &1));
        assert!(rev.has_edge_between(&1, &2));
        assert_eq!(rev.number_of_edges(), 2);
    }

    #[test]
    fn involution() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(0x1234);

        for _ in 0..50 {
            let n = rng.random_range(1..40);
            let graph = Gnp::new().nodes(n).avg_deg(3.0).generate(rng);
            let rev = graph.reverse();

            assert_eq!(rev.number_of_edges(), graph.number_of_edges());
            for (u, v) in graph.labelled_edges() {
                assert!(rev.has_edge_between(v, u));
            }
            assert_eq!(rev.reverse(), graph);
        }
    }
}
