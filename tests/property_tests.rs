//! Property-based tests for the graph engine.
//!
//! These tests use proptest to verify the graph invariants hold across
//! randomly generated insertion sequences.

use std::collections::HashSet;

use proptest::prelude::*;

use acyclic::core::graph::{Digraph, GraphError};

/// Strategy for a sequence of edge insertions over a small vertex space.
///
/// A small space makes duplicates and cycle attempts common.
fn edge_sequence() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 0..80)
}

proptest! {
    /// Inserting the same vertex twice fails the second time; the counter
    /// only counts distinct vertices.
    #[test]
    fn vertex_count_counts_distinct(vertices in prop::collection::vec(0u16..50, 0..100)) {
        let graph = Digraph::new();
        let mut seen = HashSet::new();

        for v in vertices {
            let result = graph.insert_vertex(v);
            if seen.insert(v) {
                prop_assert_eq!(result, Ok(()));
            } else {
                prop_assert_eq!(result, Err(GraphError::VertexExists));
            }
        }
        prop_assert_eq!(graph.vertex_count(), seen.len());
    }

    /// Self-loops always fail with Cycle and never change the edge count.
    #[test]
    fn self_loops_always_rejected(edges in edge_sequence(), v in 0u8..12) {
        let graph = Digraph::new();
        for (s, t) in edges {
            let _ = graph.insert_edge(s, t);
        }

        let before = graph.edge_count();
        prop_assert_eq!(graph.insert_edge(v, v), Err(GraphError::Cycle));
        prop_assert_eq!(graph.edge_count(), before);
    }

    /// A repeated edge insertion fails with EdgeExists and the edge count
    /// grows by exactly one across both calls.
    #[test]
    fn duplicate_edge_rejected(a in 0u16..100, b in 0u16..100) {
        prop_assume!(a != b);
        let graph = Digraph::new();

        prop_assert_eq!(graph.insert_edge(a, b), Ok(()));
        prop_assert_eq!(graph.insert_edge(a, b), Err(GraphError::EdgeExists));
        prop_assert_eq!(graph.edge_count(), 1);
    }

    /// The counters always match what actually went in.
    #[test]
    fn counters_match_history(edges in edge_sequence()) {
        let graph = Digraph::new();
        let mut accepted = 0usize;
        let mut named = HashSet::new();

        for (s, t) in edges {
            if s != t {
                named.insert(s);
                named.insert(t);
            }
            if graph.insert_edge(s, t).is_ok() {
                accepted += 1;
            }
        }

        prop_assert_eq!(graph.edge_count(), accepted);
        prop_assert_eq!(graph.vertex_count(), named.len());

        let stored: usize = graph
            .vertices()
            .iter()
            .map(|v| graph.successors(v).map(|s| s.len()).unwrap_or(0))
            .sum();
        prop_assert_eq!(stored, accepted);
    }

    /// No sequence of insertions can make a vertex reach itself.
    #[test]
    fn graph_stays_acyclic(edges in edge_sequence()) {
        let graph = Digraph::new();
        for (s, t) in edges {
            let _ = graph.insert_edge(s, t);
        }

        for v in graph.vertices() {
            prop_assert!(!graph.depth_first_search(&v, &v));
        }
    }

    /// Every stored edge is a one-hop reachability fact, and reachability is
    /// never symmetric.
    #[test]
    fn edges_imply_one_way_reachability(edges in edge_sequence()) {
        let graph = Digraph::new();
        for (s, t) in edges {
            let _ = graph.insert_edge(s, t);
        }

        for v in graph.vertices() {
            for w in graph.successors(&v).unwrap_or_default() {
                prop_assert!(graph.has_edge(&v, &w));
                prop_assert!(graph.reachable(&v, &w));
                prop_assert!(!graph.reachable(&w, &v));
            }
        }
    }

    /// A refused edge leaves the graph exactly as it was.
    #[test]
    fn refused_edges_change_nothing(edges in edge_sequence(), s in 0u8..12, t in 0u8..12) {
        let graph = Digraph::new();
        for (a, b) in edges {
            let _ = graph.insert_edge(a, b);
        }
        prop_assume!(graph.contains_vertex(&s) && graph.contains_vertex(&t));

        let vertices = graph.vertex_count();
        let edge_count = graph.edge_count();
        let rendered = graph.default_render();

        if graph.insert_edge(s, t).is_err() {
            prop_assert_eq!(graph.vertex_count(), vertices);
            prop_assert_eq!(graph.edge_count(), edge_count);
            prop_assert_eq!(graph.default_render(), rendered);
        }
    }
}

#[test]
fn reachability_scenario() {
    let graph = Digraph::new();
    for (s, t) in [
        (1, 2),
        (1, 5),
        (2, 3),
        (2, 5),
        (3, 4),
        (3, 6),
        (4, 5),
        (4, 6),
        (5, 6),
    ] {
        graph.insert_edge(s, t).unwrap();
    }

    assert!(graph.reachable(&1, &4));
    assert!(graph.reachable(&2, &6));
    assert!(!graph.reachable(&6, &3));
    assert!(!graph.reachable(&4, &1));
}

#[test]
fn render_unknown_root_and_empty_graph() {
    let graph: Digraph<u32> = Digraph::new();
    assert_eq!(graph.default_render(), "");
    assert_eq!(graph.render(&1, false), Err(GraphError::VertexNotFound));
}

#[test]
fn deep_chain_reachability_does_not_overflow() {
    let graph = Digraph::new();
    for i in 0..100_000u32 {
        graph.insert_edge(i, i + 1).unwrap();
    }

    assert!(graph.reachable(&0, &100_000));
    assert_eq!(graph.insert_edge(100_000, 0), Err(GraphError::Cycle));
}
