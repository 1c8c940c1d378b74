use rand::Rng;

use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average out-degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible directed edge between `n` nodes with probability `p`
/// independent from each other.
///
/// The generated graph is a `DiGraph<Node>` whose identifiers equal the dense indices `0..n`.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(1);
/// let g = Gnp::new().nodes(10).prob(0.3).acyclic(true).generate(rng);
///
/// assert_eq!(g.number_of_nodes(), 10);
/// assert!(g.edges().all(|Edge(u, v)| u < v));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
    acyclic: bool,
    no_loops: bool,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `n`
    pub fn set_nodes(&mut self, n: NumNodes) -> &mut Self {
        self.n = n;
        self
    }

    /// Updates `n`
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }

    /// Updates `p` directly.
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn set_prob(&mut self, prob: f64) -> &mut Self {
        assert!(
            (0.0..=1.0).contains(&prob),
            "Probability {prob} is not in [0, 1]!"
        );
        self.p = GnpType::Prob(prob);
        self
    }

    /// Updates `p` directly.
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        self.set_prob(prob);
        self
    }

    /// Updates `p` such that `p = d/n` (capped at `1`).
    /// Note that this conversion will only be done when calling `stream/generate`.
    pub fn set_avg_deg(&mut self, deg: f64) -> &mut Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }

    /// Updates `p` such that `p = d/n` (capped at `1`)
    pub fn avg_deg(mut self, deg: f64) -> Self {
        self.set_avg_deg(deg);
        self
    }

    /// If set, only edges `u -> v` with `u < v` are kept and the graph is acyclic
    pub fn set_acyclic(&mut self, acyclic: bool) -> &mut Self {
        self.acyclic = acyclic;
        self
    }

    /// If set, only edges `u -> v` with `u < v` are kept and the graph is acyclic
    pub fn acyclic(mut self, acyclic: bool) -> Self {
        self.set_acyclic(acyclic);
        self
    }

    /// If set, self-loops are dropped
    pub fn set_no_loops(&mut self, no_loops: bool) -> &mut Self {
        self.no_loops = no_loops;
        self
    }

    /// If set, self-loops are dropped
    pub fn no_loops(mut self, no_loops: bool) -> Self {
        self.set_no_loops(no_loops);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) if self.n == 0 => d.clamp(0.0, 1.0),
            GnpType::AvgDeg(d) => (d / self.n as f64).clamp(0.0, 1.0),
        }
    }

    /// Creates a lazy iterator over the random edges in ascending order.
    /// ** Panics if neither probability nor average degree was set **
    pub fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let n = self.n as u64;
        let Self {
            acyclic, no_loops, ..
        } = *self;

        GeometricSampler::new(self.probability(), n * n)
            .sample_iter(rng)
            .map(move |x| Edge::from_u64(x, n))
            .filter(move |e| !(acyclic && e.0 >= e.1) && !(no_loops && e.is_loop()))
    }

    /// Generates a graph with nodes `0..n`
    pub fn generate<R: Rng>(&self, rng: &mut R) -> DiGraph<Node> {
        let edges = self.stream(rng).map(|Edge(u, v)| (u, v));
        DiGraph::from_edges(0..self.n, edges)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let empty = Gnp::new().nodes(5).prob(0.0).generate(rng);
        assert_eq!(empty.number_of_nodes(), 5);
        assert_eq!(empty.number_of_edges(), 0);

        let complete = Gnp::new().nodes(5).prob(1.0).generate(rng);
        assert_eq!(complete.number_of_edges(), 25);

        let no_loops = Gnp::new().nodes(5).prob(1.0).no_loops(true).generate(rng);
        assert_eq!(no_loops.number_of_edges(), 20);

        let dag = Gnp::new().nodes(5).prob(1.0).acyclic(true).generate(rng);
        assert_eq!(dag.number_of_edges(), 10);
    }

    #[test]
    fn identifiers_are_indices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let graph = Gnp::new().nodes(30).avg_deg(4.0).generate(rng);

        for u in graph.vertices() {
            assert_eq!(*graph.id_of(u), u);
        }
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 500;
        let graph = Gnp::new().nodes(n).avg_deg(8.0).generate(rng);

        let avg = graph.number_of_edges() as f64 / n as f64;
        assert!((7.0..9.0).contains(&avg));
    }

    #[test]
    fn setters_match_builder() {
        let mut gnp = Gnp::new();
        gnp.set_nodes(40).set_avg_deg(3.0).set_acyclic(true);
        gnp.set_no_loops(true).set_prob(0.2);

        let built = Gnp::new().nodes(40).prob(0.2).acyclic(true).no_loops(true);
        let first = gnp.generate(&mut Pcg64Mcg::seed_from_u64(5));
        let second = built.generate(&mut Pcg64Mcg::seed_from_u64(5));

        assert_eq!(first, second);
        assert!(first.edges().all(|Edge(u, v)| u < v));
    }

    #[test]
    #[should_panic]
    fn probability_not_set() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        Gnp::new().nodes(3).generate(rng);
    }
}
