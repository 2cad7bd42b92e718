//! Edge-list file parsing.
//!
//! The format is line oriented. The first significant line holds the vertex
//! count and every following significant line holds one `source target
//! weight` triple separated by whitespace. Blank lines and text after `#` are
//! ignored. Errors carry the 1-based line number they were found on.

use std::io::{self, BufRead};

use arbor_core::{Graph, GraphBuilder, GraphError, Weight};
use thiserror::Error;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading from the underlying source failed.
    #[error("failed to read edge list: {source}")]
    Read {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The input held no significant lines.
    #[error("edge list is empty; expected a vertex count")]
    MissingVertexCount,
    /// The header line was not a single unsigned integer.
    #[error("line {line}: expected a vertex count, found `{content}`")]
    InvalidVertexCount {
        /// 1-based line number.
        line: usize,
        /// Offending line with comments stripped.
        content: String,
    },
    /// An edge line did not hold exactly three fields.
    #[error("line {line}: expected `source target weight`, found `{content}`")]
    MalformedEdge {
        /// 1-based line number.
        line: usize,
        /// Offending line with comments stripped.
        content: String,
    },
    /// A field could not be parsed as a number.
    #[error("line {line}: invalid {field} `{value}`")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Which field failed.
        field: &'static str,
        /// Raw field text.
        value: String,
    },
    /// The graph rejected the vertex count or an edge.
    #[error("line {line}: {source}")]
    Graph {
        /// 1-based line number.
        line: usize,
        /// Validation failure reported by the graph builder.
        #[source]
        source: GraphError,
    },
}

impl InputError {
    /// Returns the 1-based line number the error refers to, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Read { .. } | Self::MissingVertexCount => None,
            Self::InvalidVertexCount { line, .. }
            | Self::MalformedEdge { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::Graph { line, .. } => Some(*line),
        }
    }
}

/// Parses an edge list into a [`Graph`].
///
/// # Errors
/// Returns [`InputError`] describing the first problem encountered.
///
/// # Examples
/// ```
/// use arbor_cli::cli::parse_edge_list;
///
/// let text = "# triangle\n3\n0 1 4\n1 2 1 # cheap\n\n0 2 2\n";
/// let graph = parse_edge_list(text.as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// # Ok::<(), arbor_cli::cli::InputError>(())
/// ```
pub fn parse_edge_list(reader: impl BufRead) -> Result<Graph, InputError> {
    let mut lines = significant_lines(reader);

    let (header_line, header) = lines.next().ok_or(InputError::MissingVertexCount)??;
    let vertex_count: usize = header.parse().map_err(|_| InputError::InvalidVertexCount {
        line: header_line,
        content: header.clone(),
    })?;

    let mut builder = GraphBuilder::new(vertex_count);
    for entry in lines {
        let (line, content) = entry?;
        let (source, target, weight) = parse_edge(line, &content)?;
        builder = builder
            .add_edge(source, target, weight)
            .map_err(|source| InputError::Graph { line, source })?;
    }

    builder.build().map_err(|source| InputError::Graph {
        line: header_line,
        source,
    })
}

/// Yields `(line_number, content)` for lines that still hold text once
/// comments and surrounding whitespace are removed.
fn significant_lines(
    reader: impl BufRead,
) -> impl Iterator<Item = Result<(usize, String), InputError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(text) => {
                let content = text.split('#').next().unwrap_or_default().trim();
                (!content.is_empty()).then(|| Ok((index + 1, content.to_owned())))
            }
            Err(source) => Some(Err(InputError::Read { source })),
        })
}

fn parse_edge(line: usize, content: &str) -> Result<(usize, usize, Weight), InputError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(InputError::MalformedEdge {
            line,
            content: content.to_owned(),
        });
    };
    Ok((
        parse_field(line, "source vertex", source)?,
        parse_field(line, "target vertex", target)?,
        parse_field(line, "weight", weight)?,
    ))
}

fn parse_field<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    raw: &str,
) -> Result<T, InputError> {
    raw.parse().map_err(|_| InputError::InvalidNumber {
        line,
        field,
        value: raw.to_owned(),
    })
}
