//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (colored) nodes and edges.
//!
//! Every node is written as its own statement, so nodes without incident edges are drawn as well.
//! If a [`ComponentMap`] is attached, all nodes of a cyclic strongly connected component are
//! filled with the same color:
//! ```
//! use lgraphs::{prelude::*, algo::*, io::*};
//!
//! let graph = DiGraph::from_adjacency([('a', vec!['b']), ('b', vec!['a', 'c'])]);
//! let sccs = graph.strongly_connected_components();
//!
//! let mut buffer = Vec::new();
//! DotWriter::new().colored(&sccs).try_write_graph(&graph, &mut buffer).unwrap();
//!
//! let dot = String::from_utf8(buffer).unwrap();
//! assert!(dot.contains("\"a\" [style=filled, fillcolor="));
//! assert!(dot.contains("\"c\";"));
//! assert!(dot.contains("\"b\" -> \"c\";"));
//! ```
use std::fmt::Display;

use super::*;
use crate::algo::ComponentMap;

/// Fill colors cycled through when coloring components
const PALETTE: [DotColor; 8] = [
    DotColor::LightBlue,
    DotColor::LightSalmon,
    DotColor::PaleGreen,
    DotColor::Khaki,
    DotColor::Plum,
    DotColor::LightGray,
    DotColor::Orange,
    DotColor::Aquamarine,
];

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter<'a, L: NodeId> {
    /// Prefix of a node (default: none)
    prefix: String,
    /// Components whose cyclic members are filled
    components: Option<&'a ComponentMap<L>>,
}

impl<L: NodeId> Default for DotWriter<'_, L> {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            components: None,
        }
    }
}

impl<'a, L: NodeId + Display> DotWriter<'a, L> {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix written in front of every identifier (empty by default).
    /// Useful to draw several graphs with overlapping identifiers into one file.
    pub fn set_node_prefix<S>(&mut self, prefix: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Set the prefix written in front of every identifier (empty by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.set_node_prefix(prefix);
        self
    }

    /// Fill all nodes of a cyclic component with a color of the component
    pub fn set_colored(&mut self, components: &'a ComponentMap<L>) -> &mut Self {
        self.components = Some(components);
        self
    }

    /// Fill all nodes of a cyclic component with a color of the component
    pub fn colored(mut self, components: &'a ComponentMap<L>) -> Self {
        self.set_colored(components);
        self
    }

    /// Writes the opening brackets of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {{")
    }

    /// Formats a node as a quoted DOT identifier
    fn format_node(&self, u: &L) -> String {
        let name = format!("{}{u}", self.prefix);
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }

    /// Writes a statement per node, filled if it belongs to a cyclic component
    pub fn write_nodes<'b, W, I>(&self, writer: &mut W, nodes: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'b L>,
        L: 'b,
    {
        for u in nodes {
            let color = self
                .components
                .and_then(|map| map.component_of(u).filter(|&c| map.is_cyclic(c)))
                .map(|c| PALETTE[c as usize % PALETTE.len()]);

            match color {
                Some(c) => writeln!(
                    writer,
                    "{} [style=filled, fillcolor={c}];",
                    self.format_node(u)
                )?,
                None => writeln!(writer, "{};", self.format_node(u))?,
            }
        }
        Ok(())
    }

    /// Writes a statement per edge
    pub fn write_edges<'b, W, I>(&self, writer: &mut W, edges: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = (&'b L, &'b L)>,
        L: 'b,
    {
        for (u, v) in edges {
            writeln!(writer, "{} -> {};", self.format_node(u), self.format_node(v))?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter<'_, G::Id>
where
    G: LabelledGraph,
    G::Id: Display,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_nodes(&mut writer, graph.nodes())?;
        self.write_edges(&mut writer, graph.labelled_edges())?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    G: LabelledGraph,
    G::Id: Display,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Subset of the Svg-Dot colors taken from
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Aquamarine,
    Khaki,
    LightBlue,
    LightGray,
    LightSalmon,
    Orange,
    PaleGreen,
    Plum,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, testing::*};

    fn to_dot<G>(graph: &G, writer: DotWriter<'_, G::Id>) -> String
    where
        G: LabelledGraph,
        G::Id: Display,
    {
        let mut buffer = Vec::new();
        writer.try_write_graph(graph, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn plain() {
        let dot = to_dot(&diamond(), DotWriter::new());
        assert_eq!(
            dot,
            "digraph {\n\"a\";\n\"b\";\n\"c\";\n\"d\";\n\
             \"a\" -> \"b\";\n\"a\" -> \"c\";\n\"b\" -> \"d\";\n\"c\" -> \"d\";\n}\n"
        );
    }

    #[test]
    fn prefix_and_escaping() {
        let graph = DiGraph::from_edges(["say \"hi\"".to_string()], []);
        let dot = to_dot(&graph, DotWriter::new().node_prefix("g-"));
        assert!(dot.contains("\"g-say \\\"hi\\\"\";"));

        let graph = DiGraph::from_edges([], [(1, 2)]);
        let mut writer = DotWriter::new();
        writer.set_node_prefix("u");
        assert!(to_dot(&graph, writer).contains("\"u1\" -> \"u2\";"));
    }

    #[test]
    fn trailing_backslash() {
        let graph = DiGraph::from_edges([], [("a\\".to_string(), "b".to_string())]);
        let dot = to_dot(&graph, DotWriter::new());
        assert!(dot.contains("\n\"a\\\\\";\n"));
        assert!(dot.contains("\"a\\\\\" -> \"b\";"));
    }

    #[test]
    fn colored_components() {
        let graph = graph_scc();
        let sccs = graph.strongly_connected_components();
        let mut writer = DotWriter::new();
        writer.set_colored(&sccs);
        let dot = to_dot(&graph, writer);
        assert_eq!(dot, to_dot(&graph, DotWriter::new().colored(&sccs)));

        let filled = dot.lines().filter(|l| l.contains("fillcolor")).count();
        assert_eq!(filled, 7);
        assert!(dot.contains("\"h\";"));

        let color_of = |u: char| {
            let c = sccs.component_of(&u).unwrap();
            PALETTE[c as usize % PALETTE.len()]
        };
        assert_eq!(color_of('a'), color_of('c'));
        assert_ne!(color_of('a'), color_of('d'));
    }
}
