/*!
# IO

Utilities for reading and writing labelled graphs from and to text formats.

## Input Formats

Currently supported input formats:
- **EdgeList**: one edge `u v` per line, a lone `u` declares a node. Identifiers are parsed via
  [`FromStr`], so `DiGraph<String>`, `DiGraph<u32>`, ... can all be read.

## Output Formats

For writing graphs, in addition to the above formats, the following is supported:
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).

Both writers print identifiers via their `Display` implementation.
In the DOT format every identifier is quoted, so identifiers containing spaces or hyphens are fine.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].

All functions report failures as [`std::io::Error`]; malformed input yields
[`ErrorKind::InvalidData`], identifiers the edge-list writer cannot express yield
[`ErrorKind::InvalidInput`].
*/

pub mod dot;
pub mod edge_list;

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use dot::*;
pub use edge_list::*;

/// Identifier for a graph file format.
///
/// Used in [`GraphRead`] and [`GraphWrite`] to determine the
/// correct parser or writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// DOT language of GraphViz (output only)
    Dot,
    /// Edge list format
    EdgeList,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(FileFormat::Dot),
            "edgelist" => Ok(FileFormat::EdgeList),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the format cannot be read or if the input does not
    /// match the expected format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: EdgeListRead,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::EdgeList => Self::try_read_edge_list(reader),
            FileFormat::Dot => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("{format:?} does not support GraphRead")
            )),
        }
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: LabelledGraph,
    G::Id: Display,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::EdgeList => self.try_write_edge_list(writer),
            FileFormat::Dot => self.try_write_dot(writer),
        }
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse a token into an identifier and returns early if it fails
macro_rules! parse_identifier {
    ($token : expr, $line : expr) => {
        $token.parse().map_err(|_| {
            io_error!(
                ErrorKind::InvalidData,
                format!("Line {}: cannot parse identifier {:?}.", $line, $token)
            )
        })?
    };
}

use io_error;
use parse_identifier;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_format() {
        assert_eq!("dot".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert_eq!("EdgeList".parse::<FileFormat>().unwrap(), FileFormat::EdgeList);
        assert_eq!(
            "metis".parse::<FileFormat>().unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn dispatch() {
        let graph = DiGraph::from_adjacency([("a".to_string(), vec!["b".to_string()])]);

        let mut buffer = Vec::new();
        graph
            .try_write_to_writer(&mut buffer, FileFormat::EdgeList)
            .unwrap();
        let read = DiGraph::<String>::try_from_reader(buffer.as_slice(), FileFormat::EdgeList)
            .unwrap();
        assert_eq!(read, graph);

        let mut buffer = Vec::new();
        graph.try_write_to_writer(&mut buffer, FileFormat::Dot).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("digraph {"));

        let err = DiGraph::<String>::try_from_reader("".as_bytes(), FileFormat::Dot).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
