//! # EdgeList
//!
//! The EdgeList-Format consists of non-comment-lines `u v`, each representing a directed edge
//! `u -> v` between two identifiers separated by whitespace.
//! A line consisting of a single identifier `u` declares `u` as a node, which is needed for nodes
//! without successors (at least when reading with [`DanglingPolicy::Reject`]).
//! Empty lines and lines starting with the comment identifier (`#` by default) are skipped.
//!
//! ```
//! use lgraphs::{prelude::*, io::*};
//!
//! let input = "# dependencies\nparse lex\nlex\ncheck parse\n";
//! let graph: DiGraph<String> = EdgeListReader::new()
//!     .dangling(DanglingPolicy::Reject)
//!     .try_read_graph(input.as_bytes())
//!     .unwrap();
//!
//! assert_eq!(graph.number_of_nodes(), 3);
//! assert!(graph.has_edge_between(&"check".to_string(), &"parse".to_string()));
//! ```

use std::io::Lines;

use log::debug;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// How edges to undeclared identifiers are handled
    dangling: DanglingPolicy,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            dangling: DanglingPolicy::default(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn set_comment_identifier<S: Into<String>>(&mut self, c: S) -> &mut Self {
        self.comment_identifier = c.into();
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.set_comment_identifier(c);
        self
    }

    /// Updates the policy for edges whose target is never declared
    pub fn set_dangling(&mut self, policy: DanglingPolicy) -> &mut Self {
        self.dangling = policy;
        self
    }

    /// Updates the policy for edges whose target is never declared
    pub fn dangling(mut self, policy: DanglingPolicy) -> EdgeListReader {
        self.set_dangling(policy);
        self
    }
}

impl<L> GraphReader<DiGraph<L>> for EdgeListReader
where
    L: NodeId + FromStr + Send + Sync + 'static,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<DiGraph<L>> {
        let mut builder = GraphBuilder::new().dangling(self.dangling);

        for entry in EdgeListEntries::new(reader, &self.comment_identifier) {
            builder = match entry? {
                Entry::Node(u) => builder.add_node(u),
                Entry::Edge(u, v) => builder.add_edge(u, v),
            };
        }

        let graph = builder
            .build()
            .map_err(|err| io_error!(ErrorKind::InvalidData, err))?;

        debug!(
            "Read edge list with {} nodes and {} edges",
            graph.number_of_nodes(),
            graph.number_of_edges()
        );
        Ok(graph)
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<L> EdgeListRead for DiGraph<L>
where
    L: NodeId + FromStr + Send + Sync + 'static,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A single non-comment-line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry<L> {
    Node(L),
    Edge(L, L),
}

/// Iterator over the parsed lines of an EdgeList-Input
struct EdgeListEntries<'a, R, L> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of the last line taken from `lines` (starting at 1)
    line_number: usize,
    /// Comment identifier
    comment_identifier: &'a str,
    _label: std::marker::PhantomData<L>,
}

impl<'a, R: BufRead, L> EdgeListEntries<'a, R, L> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            comment_identifier,
            _label: Default::default(),
        }
    }

    /// Returns the next non-empty non-comment-line if it exists or propagate an error
    fn next_content_line(&mut self) -> Result<Option<String>> {
        loop {
            self.line_number += 1;
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) => {
                    let line = line.trim();
                    if line.is_empty()
                        || (!self.comment_identifier.is_empty()
                            && line.starts_with(self.comment_identifier))
                    {
                        continue;
                    }
                    return Ok(Some(line.to_string()));
                }
            }
        }
    }
}

impl<R: BufRead, L: FromStr> EdgeListEntries<'_, R, L> {
    /// Tries to parse an entry from the next content line
    fn parse_entry(&mut self) -> Result<Option<Entry<L>>> {
        let Some(line) = self.next_content_line()? else {
            return Ok(None);
        };
        let line_number = self.line_number;

        let tokens = line.split_whitespace().collect::<Vec<_>>();
        raise_error_unless!(
            tokens.len() <= 2,
            ErrorKind::InvalidData,
            format!(
                "Line {line_number}: expected `u` or `u v`, found {} tokens.",
                tokens.len()
            )
        );

        let u = parse_identifier!(tokens[0], line_number);
        let entry = match tokens.get(1) {
            Some(v) => Entry::Edge(u, parse_identifier!(v, line_number)),
            None => Entry::Node(u),
        };
        Ok(Some(entry))
    }
}

impl<R: BufRead, L: FromStr> Iterator for EdgeListEntries<'_, R, L> {
    type Item = Result<Entry<L>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_entry().transpose()
    }
}

/// A writer for the EdgeList-Format.
///
/// Every node without successors is written as a lone identifier, so reading the output
/// reproduces the graph even under [`DanglingPolicy::Reject`].
///
/// Writing fails with [`ErrorKind::InvalidInput`] (before anything is written) if an identifier
/// renders as an empty string, contains whitespace or starts with `#`, since the reader could not
/// recover it.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Optional comment written as the first line
    comment: Option<String>,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `comment` (which should start with the reader's comment identifier) as first line
    pub fn set_comment<S: Into<String>>(&mut self, comment: S) -> &mut Self {
        self.comment = Some(comment.into());
        self
    }

    /// Writes `comment` (which should start with the reader's comment identifier) as first line
    pub fn comment<S: Into<String>>(mut self, comment: S) -> EdgeListWriter {
        self.set_comment(comment);
        self
    }
}

/// Renders an identifier and checks that it reads back as a single token
fn format_identifier<L: Display>(id: &L) -> Result<String> {
    let name = id.to_string();
    raise_error_unless!(
        !name.is_empty() && !name.starts_with('#') && !name.chars().any(char::is_whitespace),
        ErrorKind::InvalidInput,
        format!("Identifier {name:?} cannot be written as an edge list token.")
    );
    Ok(name)
}

impl<G> GraphWriter<G> for EdgeListWriter
where
    G: LabelledGraph,
    G::Id: Display,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let names = graph
            .vertices()
            .map(|u| format_identifier(graph.id_of(u)))
            .collect::<Result<Vec<_>>>()?;

        if let Some(comment) = &self.comment {
            writeln!(writer, "{comment}")?;
        }

        for u in graph.vertices() {
            let name = &names[u as usize];
            if graph.degree_of(u) == 0 {
                writeln!(writer, "{name}")?;
            }
            for v in graph.neighbors_of(u) {
                writeln!(writer, "{name} {}", names[v as usize])?;
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G> EdgeListWrite for G
where
    G: LabelledGraph,
    G::Id: Display,
{
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
