//! acyclic - A concurrency-safe directed acyclic graph container
//!
//! Callers insert vertices and directed edges; the graph refuses any edge
//! that would duplicate an existing one or close a cycle, and answers
//! reachability queries between any two vertices.
//!
//! # Architecture
//!
//! - [`core`] - Graph engine, tree rendering, edge-list input, configuration
//! - [`cli`] - Command-line interface over the engine
//! - [`ui`] - User-facing output utilities
//!
//! # Correctness Invariants
//!
//! The graph maintains the following invariants after every operation,
//! successful or not:
//!
//! 1. No vertex is reachable from itself
//! 2. No edge appears twice
//! 3. Vertex and edge counters match the stored graph
//!
//! # Example
//!
//! ```
//! use acyclic::core::graph::Digraph;
//!
//! let graph = Digraph::new();
//! graph.insert_edge("fetch", "compile").unwrap();
//! graph.insert_edge("compile", "link").unwrap();
//!
//! assert!(graph.reachable(&"fetch", &"link"));
//! assert!(graph.insert_edge("link", "fetch").is_err());
//! ```

pub mod cli;
pub mod core;
pub mod ui;
