//! core::graph
//!
//! The acyclic directed graph engine.
//!
//! # Architecture
//!
//! A [`Digraph`] owns a mapping from each vertex to its
//! [`AdjacencySet`] of direct successors, plus denormalized vertex and edge
//! counters and a root (the first vertex ever inserted).
//!
//! All state lives behind one `Mutex`. Every public operation, including
//! read-only queries, holds that lock for its full duration, so a
//! reachability search always observes a consistent graph and never races a
//! mutation. Reachability searches inspect arbitrary subgraphs, so the lock
//! is engine-wide rather than per vertex.
//!
//! # Invariants
//!
//! - Graph must be acyclic: no vertex reaches itself via one or more edges
//! - Every known vertex has exactly one adjacency set
//! - `edge_count` equals the total number of edges across all sets
//! - `vertex_count` equals the number of known vertices
//! - An edge appears in its source's adjacency set at most once
//!
//! Failed operations leave every invariant intact. The one documented side
//! effect of a failed [`Digraph::insert_edge`] is that missing endpoints are
//! still created as vertices.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use super::adjacency::AdjacencySet;
use super::render;

/// Errors from graph operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex is already present.
    #[error("vertex already exists")]
    VertexExists,

    /// The vertex is not present.
    #[error("vertex does not exist")]
    VertexNotFound,

    /// The edge is already present.
    #[error("edge already exists")]
    EdgeExists,

    /// The edge would be a self-loop or close a directed cycle.
    #[error("edge would create a cycle")]
    Cycle,
}

/// Lock-protected engine state.
#[derive(Debug)]
struct GraphState<V> {
    adjacency: HashMap<V, AdjacencySet<V>>,
    edge_count: usize,
    vertex_count: usize,
    root: Option<V>,
}

impl<V> Default for GraphState<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
            vertex_count: 0,
            root: None,
        }
    }
}

impl<V: Eq + Hash + Clone> GraphState<V> {
    fn insert_vertex(&mut self, vertex: V) -> Result<(), GraphError> {
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::VertexExists);
        }

        if self.root.is_none() {
            self.root = Some(vertex.clone());
        }
        self.adjacency.insert(vertex, AdjacencySet::new());
        self.vertex_count += 1;

        tracing::trace!(vertex_count = self.vertex_count, "vertex inserted");
        Ok(())
    }

    fn ensure_vertex(&mut self, vertex: &V) -> Result<(), GraphError> {
        if self.adjacency.contains_key(vertex) {
            return Ok(());
        }
        self.insert_vertex(vertex.clone())
    }

    fn has_edge(&self, source: &V, target: &V) -> bool {
        self.adjacency
            .get(source)
            .map(|set| set.contains(target))
            .unwrap_or(false)
    }

    /// Depth-first search from `source`, looking for `target`.
    ///
    /// `source` itself is not marked discovered up front, so it only counts
    /// as reachable from itself through a cycle.
    fn reaches<'a>(&'a self, source: &'a V, target: &V) -> bool {
        let mut discovered: HashSet<&'a V> = HashSet::new();
        let mut stack: Vec<&'a V> = vec![source];

        while let Some(vertex) = stack.pop() {
            let Some(set) = self.adjacency.get(vertex) else {
                continue;
            };

            // Reverse so the first successor is explored first.
            for next in set.successors().rev() {
                if discovered.insert(next) {
                    if next == target {
                        return true;
                    }
                    stack.push(next);
                }
            }
        }

        false
    }

    fn insert_edge(&mut self, source: V, target: V) -> Result<(), GraphError> {
        if source == target {
            return Err(GraphError::Cycle);
        }

        // Endpoints are created regardless of the edge outcome below.
        self.ensure_vertex(&source)?;
        self.ensure_vertex(&target)?;

        if self.has_edge(&source, &target) {
            tracing::debug!("edge rejected: already exists");
            return Err(GraphError::EdgeExists);
        }

        if self.reaches(&target, &source) {
            tracing::debug!("edge rejected: would close a cycle");
            return Err(GraphError::Cycle);
        }

        let set = self
            .adjacency
            .get_mut(&source)
            .ok_or(GraphError::VertexNotFound)?;
        set.append(target);
        self.edge_count += 1;

        tracing::trace!(edge_count = self.edge_count, "edge inserted");
        Ok(())
    }
}

/// A directed graph that refuses to become cyclic.
///
/// Vertex identity is the caller's value itself. The graph is safe to share
/// across threads (`&Digraph` is enough for every operation); all access is
/// serialized through one internal lock.
///
/// # Example
///
/// ```
/// use acyclic::core::graph::{Digraph, GraphError};
///
/// let graph = Digraph::new();
/// graph.insert_edge(1, 2).unwrap();
/// graph.insert_edge(2, 3).unwrap();
///
/// assert!(graph.depth_first_search(&1, &3));
/// assert_eq!(graph.insert_edge(3, 1), Err(GraphError::Cycle));
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug)]
pub struct Digraph<V> {
    state: Mutex<GraphState<V>>,
}

impl<V> Default for Digraph<V> {
    fn default() -> Self {
        Self {
            state: Mutex::new(GraphState::default()),
        }
    }
}

impl<V: Eq + Hash + Clone> Digraph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the engine lock.
    ///
    /// Every mutation runs all of its checks before touching state, so a
    /// panic while the lock is held cannot leave a half-applied change and
    /// the poisoned guard is safe to reuse.
    fn state(&self) -> MutexGuard<'_, GraphState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a vertex with no edges.
    ///
    /// The first vertex ever inserted becomes the root.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexExists`] if the vertex is already known.
    pub fn insert_vertex(&self, vertex: V) -> Result<(), GraphError> {
        self.state().insert_vertex(vertex)
    }

    /// Insert the edge `source -> target`.
    ///
    /// Both endpoints are inserted as vertices first if missing. That step is
    /// not undone when the edge itself is rejected.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Cycle`] if `source == target` (nothing is inserted)
    /// - [`GraphError::EdgeExists`] if the edge is already present
    /// - [`GraphError::Cycle`] if `target` already reaches `source`
    pub fn insert_edge(&self, source: V, target: V) -> Result<(), GraphError> {
        self.state().insert_edge(source, target)
    }

    /// Check whether `target` is a direct successor of `source`.
    ///
    /// Unknown vertices simply yield `false`.
    pub fn has_edge(&self, source: &V, target: &V) -> bool {
        self.state().has_edge(source, target)
    }

    /// Check whether a directed path of one or more edges leads from
    /// `source` to `target`.
    ///
    /// Discovery state is allocated per call, so concurrent searches never
    /// share it.
    pub fn depth_first_search(&self, source: &V, target: &V) -> bool {
        self.state().reaches(source, target)
    }

    /// Alias for [`depth_first_search`](Self::depth_first_search).
    pub fn reachable(&self, source: &V, target: &V) -> bool {
        self.depth_first_search(source, target)
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.state().edge_count
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.state().vertex_count
    }

    /// Whether no vertex has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.state().root.is_none()
    }

    /// Check whether a vertex is known.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.state().adjacency.contains_key(vertex)
    }

    /// The first vertex ever inserted, if any.
    pub fn root(&self) -> Option<V> {
        self.state().root.clone()
    }

    /// Snapshot of the direct successors of `vertex`, in insertion order.
    ///
    /// Returns `None` for an unknown vertex.
    pub fn successors(&self, vertex: &V) -> Option<Vec<V>> {
        self.state()
            .adjacency
            .get(vertex)
            .map(|set| set.successors().cloned().collect())
    }

    /// Snapshot of every known vertex, in no particular order.
    pub fn vertices(&self) -> Vec<V> {
        self.state().adjacency.keys().cloned().collect()
    }
}

impl<V: Eq + Hash + Clone + Display> Digraph<V> {
    /// Render the subgraph reachable from `root` as an indented tree.
    ///
    /// When `include_repeats` is false, a vertex that was already printed in
    /// this call is printed again but its successors are not re-expanded.
    /// Keeping the line means every edge out of a printed vertex still shows
    /// up once, and the sibling markers of its neighbours stay aligned.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `root` is not a known vertex.
    pub fn render(&self, root: &V, include_repeats: bool) -> Result<String, GraphError> {
        let state = self.state();
        if !state.adjacency.contains_key(root) {
            return Err(GraphError::VertexNotFound);
        }
        Ok(render::render_tree(&state.adjacency, root, include_repeats))
    }

    /// Render from the recorded root without repeats.
    ///
    /// Returns an empty string for an empty graph.
    pub fn default_render(&self) -> String {
        let state = self.state();
        match &state.root {
            Some(root) => render::render_tree(&state.adjacency, root, false),
            None => String::new(),
        }
    }
}
