//! core
//!
//! The graph engine and the domain types around it.
//!
//! # Modules
//!
//! - [`adjacency`] - Per-vertex ordered successor sets
//! - [`graph`] - The acyclic graph engine
//! - [`render`] - Indented tree rendering
//! - [`types`] - Strong types: VertexName
//! - [`input`] - Edge-list text format
//! - [`load`] - Building a graph from an edge list
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - The engine is generic over the caller's vertex identity
//! - Every operation either fully applies or leaves the graph untouched
//! - All access to graph state is serialized through one lock

pub mod adjacency;
pub mod config;
pub mod graph;
pub mod input;
pub mod load;
pub mod render;
pub mod types;
