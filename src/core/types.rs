//! core::types
//!
//! Strong types for vertex identities read from text.
//!
//! The graph engine itself is generic over any `Eq + Hash` identity. The CLI
//! and the edge-list loader use [`VertexName`], which guarantees that a name
//! survives a round trip through the edge-list format.
//!
//! # Examples
//!
//! ```
//! use acyclic::core::types::VertexName;
//!
//! let name = VertexName::new("build:release").unwrap();
//! assert_eq!(name.as_str(), "build:release");
//!
//! assert!(VertexName::new("").is_err());
//! assert!(VertexName::new("a->b").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid vertex name: {0}")]
    InvalidVertexName(String),
}

/// A validated vertex name.
///
/// Vertex names:
/// - Cannot be empty
/// - Cannot contain whitespace or control characters
/// - Cannot contain `#` (starts a comment in edge lists)
/// - Cannot contain `->` (the edge arrow)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VertexName(String);

impl VertexName {
    /// Create a new validated vertex name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidVertexName` if the name breaks any rule above.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidVertexName(
                "vertex name cannot be empty".into(),
            ));
        }

        if name.contains("->") {
            return Err(TypeError::InvalidVertexName(format!(
                "'{name}' cannot contain '->'"
            )));
        }

        if name.contains('#') {
            return Err(TypeError::InvalidVertexName(format!(
                "'{name}' cannot contain '#'"
            )));
        }

        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TypeError::InvalidVertexName(format!(
                "'{}' cannot contain whitespace or control characters",
                name.escape_debug()
            )));
        }

        Ok(())
    }

    /// Get the vertex name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VertexName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl std::str::FromStr for VertexName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<VertexName> for String {
    fn from(name: VertexName) -> Self {
        name.0
    }
}

impl AsRef<str> for VertexName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VertexName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in ["a", "42", "core/io", "build:release", "x-y", "über", "a>b", "a-b"] {
            assert!(VertexName::new(name).is_ok(), "expected '{}' to be valid", name);
        }
    }

    #[test]
    fn invalid_names() {
        for name in ["", "a b", "tab\there", "a->b", "->", "x#y", "line\nbreak"] {
            assert!(
                VertexName::new(name).is_err(),
                "expected '{}' to be rejected",
                name.escape_debug()
            );
        }
    }

    #[test]
    fn serde_roundtrip() {
        let name = VertexName::new("compile").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"compile\"");

        let parsed: VertexName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn serde_rejects_invalid() {
        let parsed: Result<VertexName, _> = serde_json::from_str("\"a b\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn parses_from_str() {
        let name: VertexName = "link".parse().unwrap();
        assert_eq!(name.to_string(), "link");
        assert!("".parse::<VertexName>().is_err());
    }
}
