//! core::input
//!
//! Edge-list text format.
//!
//! # Format
//!
//! ```text
//! # comments run to the end of the line
//! fetch -> compile
//! compile -> link -> package   # chains declare one edge per arrow
//! docs                         # a bare name declares a vertex
//! ```
//!
//! Blank lines are ignored. Every name must be a valid
//! [`VertexName`](super::types::VertexName). Line numbers are 1-based and are
//! kept on every entry so later rejections can point back at the source.

use thiserror::Error;

use super::types::{TypeError, VertexName};

const ARROW: &str = "->";
const COMMENT: char = '#';

/// Errors from parsing an edge list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: {source}")]
    InvalidName {
        line: usize,
        #[source]
        source: TypeError,
    },
}

/// One declaration from an edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A bare vertex.
    Vertex(VertexName),
    /// A directed edge.
    Edge {
        source: VertexName,
        target: VertexName,
    },
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Vertex(name) => write!(f, "{}", name),
            Statement::Edge { source, target } => write!(f, "{} {} {}", source, ARROW, target),
        }
    }
}

/// A statement together with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub line: usize,
    pub statement: Statement,
}

/// Parse an edge list.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; nothing is returned for the
/// lines before it.
pub fn parse(text: &str) -> Result<Vec<Entry>, ParseError> {
    let mut entries = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = match raw.find(COMMENT) {
            Some(pos) => &raw[..pos],
            None => raw,
        }
        .trim();

        if content.is_empty() {
            continue;
        }

        let names = content
            .split(ARROW)
            .map(|part| parse_name(part.trim(), line))
            .collect::<Result<Vec<_>, _>>()?;

        if let [single] = names.as_slice() {
            entries.push(Entry {
                line,
                statement: Statement::Vertex(single.clone()),
            });
            continue;
        }

        for pair in names.windows(2) {
            entries.push(Entry {
                line,
                statement: Statement::Edge {
                    source: pair[0].clone(),
                    target: pair[1].clone(),
                },
            });
        }
    }

    Ok(entries)
}

fn parse_name(part: &str, line: usize) -> Result<VertexName, ParseError> {
    if part.is_empty() {
        return Err(ParseError::Syntax {
            line,
            message: format!("'{}' must have a vertex on both sides", ARROW),
        });
    }
    VertexName::new(part).map_err(|source| ParseError::InvalidName { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> VertexName {
        VertexName::new(s).unwrap()
    }

    fn edge(line: usize, source: &str, target: &str) -> Entry {
        Entry {
            line,
            statement: Statement::Edge {
                source: name(source),
                target: name(target),
            },
        }
    }

    #[test]
    fn empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n   \n# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn edges_and_vertices() {
        let text = "a -> b\nc\n  b->c  \n";
        let entries = parse(text).unwrap();

        assert_eq!(
            entries,
            vec![
                edge(1, "a", "b"),
                Entry {
                    line: 2,
                    statement: Statement::Vertex(name("c")),
                },
                edge(3, "b", "c"),
            ]
        );
    }

    #[test]
    fn chains_expand_per_arrow() {
        let entries = parse("fetch -> compile -> link").unwrap();
        assert_eq!(
            entries,
            vec![edge(1, "fetch", "compile"), edge(1, "compile", "link")]
        );
    }

    #[test]
    fn trailing_comments_are_stripped() {
        let entries = parse("# header\n\na -> b # why\n").unwrap();
        assert_eq!(entries, vec![edge(3, "a", "b")]);
    }

    #[test]
    fn dangling_arrow_is_a_syntax_error() {
        let err = parse("a -> b\na ->\n").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 2, .. }));

        let err = parse("-> b").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, .. }));
    }

    #[test]
    fn statements_display_in_input_syntax() {
        assert_eq!(edge(1, "a", "b").statement.to_string(), "a -> b");
        assert_eq!(Statement::Vertex(name("solo")).to_string(), "solo");
    }

    #[test]
    fn invalid_name_reports_line() {
        let err = parse("ok\nnot ok -> b\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidName { line: 2, .. }));
        assert!(err.to_string().starts_with("line 2:"));
    }
}
