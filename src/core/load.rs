//! core::load
//!
//! Build a [`Digraph`] from a parsed edge list.
//!
//! # Behavior
//!
//! Entries are applied in order. Edges the graph refuses (duplicates,
//! self-loops, cycles) are collected as [`Rejection`]s rather than aborting,
//! unless strict mode is on. A bare vertex that is already known is not a
//! rejection: edge lists routinely declare a vertex and later use it.

use thiserror::Error;

use super::graph::{Digraph, GraphError};
use super::input::{self, Entry, ParseError, Statement};
use super::types::VertexName;

/// Errors from loading an edge list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("line {line}: cannot add '{statement}': {error}")]
    Rejected {
        line: usize,
        statement: Statement,
        error: GraphError,
    },
}

/// Loader settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Abort on the first rejected statement.
    pub strict: bool,
}

/// A statement the graph refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub line: usize,
    pub statement: Statement,
    pub error: GraphError,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.statement, self.error)
    }
}

/// The loaded graph plus everything that did not make it in.
#[derive(Debug)]
pub struct LoadReport {
    pub graph: Digraph<VertexName>,
    pub rejected: Vec<Rejection>,
}

impl LoadReport {
    /// Whether every statement was accepted.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse and load an edge list.
///
/// # Errors
///
/// - [`LoadError::Parse`] if the text is malformed
/// - [`LoadError::Rejected`] in strict mode, for the first refused statement
pub fn load(text: &str, options: LoadOptions) -> Result<LoadReport, LoadError> {
    let entries = input::parse(text)?;
    load_entries(entries, options)
}

/// Load already-parsed entries.
///
/// # Errors
///
/// Returns [`LoadError::Rejected`] in strict mode, for the first refused
/// statement.
pub fn load_entries(entries: Vec<Entry>, options: LoadOptions) -> Result<LoadReport, LoadError> {
    let graph = Digraph::new();
    let mut rejected = Vec::new();

    for Entry { line, statement } in entries {
        let outcome = match &statement {
            Statement::Vertex(name) => match graph.insert_vertex(name.clone()) {
                Err(GraphError::VertexExists) => Ok(()),
                other => other,
            },
            Statement::Edge { source, target } => {
                graph.insert_edge(source.clone(), target.clone())
            }
        };

        let Err(error) = outcome else {
            continue;
        };

        tracing::debug!(line, %statement, %error, "statement rejected");

        if options.strict {
            return Err(LoadError::Rejected {
                line,
                statement,
                error,
            });
        }
        rejected.push(Rejection {
            line,
            statement,
            error,
        });
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        rejected = rejected.len(),
        "edge list loaded"
    );

    Ok(LoadReport { graph, rejected })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> VertexName {
        VertexName::new(s).unwrap()
    }

    #[test]
    fn clean_load() {
        let report = load("a -> b\nb -> c\nd\n", LoadOptions::default()).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.graph.vertex_count(), 4);
        assert_eq!(report.graph.edge_count(), 2);
        assert_eq!(report.graph.root(), Some(name("a")));
        assert!(report.graph.reachable(&name("a"), &name("c")));
    }

    #[test]
    fn redeclared_vertex_is_not_rejected() {
        let report = load("a\na -> b\nb\n", LoadOptions::default()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.graph.vertex_count(), 2);
    }

    #[test]
    fn rejections_are_collected() {
        let text = "a -> b\nb -> c\nc -> a\na -> b\nx -> x\n";
        let report = load(text, LoadOptions::default()).unwrap();

        let summary: Vec<_> = report
            .rejected
            .iter()
            .map(|r| (r.line, r.error))
            .collect();
        assert_eq!(
            summary,
            vec![
                (3, GraphError::Cycle),
                (4, GraphError::EdgeExists),
                (5, GraphError::Cycle),
            ]
        );
        assert_eq!(report.graph.edge_count(), 2);
        assert_eq!(report.rejected[0].to_string(), "line 3: c -> a (edge would create a cycle)");
    }

    #[test]
    fn strict_mode_stops_at_first_rejection() {
        let text = "a -> b\nb -> a\nc -> d\n";
        let err = load(text, LoadOptions { strict: true }).unwrap_err();

        match err {
            LoadError::Rejected { line, error, .. } => {
                assert_eq!(line, 2);
                assert_eq!(error, GraphError::Cycle);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_errors_propagate() {
        let err = load("a ->\n", LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().starts_with("line 1:"));
    }
}
