//! core::adjacency
//!
//! Per-vertex successor bookkeeping.
//!
//! # Design
//!
//! An [`AdjacencySet`] is an ordered sequence of the direct successors of a
//! single vertex. Insertion order is preserved because it drives both the
//! traversal order of reachability searches and the printed order of
//! rendered trees.
//!
//! The set carries no synchronization of its own. It is only ever touched
//! while the owning [`Digraph`](super::graph::Digraph) holds its lock.
//!
//! # Complexity
//!
//! Membership is a linear scan. Out-degrees are expected to be small, so a
//! `Vec` beats a hashed set on both memory and constant factors here.

use std::slice;

/// Ordered successors of one vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencySet<V> {
    targets: Vec<V>,
}

impl<V> Default for AdjacencySet<V> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
        }
    }
}

impl<V: PartialEq> AdjacencySet<V> {
    /// Create an empty adjacency set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate the direct successors in insertion order.
    ///
    /// Each call starts a fresh iteration.
    pub fn successors(&self) -> Successors<'_, V> {
        Successors {
            inner: self.targets.iter(),
        }
    }

    /// Check whether `target` is a direct successor.
    pub fn contains(&self, target: &V) -> bool {
        self.targets.iter().any(|t| t == target)
    }

    /// Append `target` as the last successor.
    ///
    /// Uniqueness is not checked here. Callers test [`contains`](Self::contains)
    /// first.
    pub fn append(&mut self, target: V) {
        self.targets.push(target);
    }

    /// Number of direct successors.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the vertex has no successors.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Iterator over the successors of an [`AdjacencySet`].
#[derive(Debug, Clone)]
pub struct Successors<'a, V> {
    inner: slice::Iter<'a, V>,
}

impl<'a, V> Iterator for Successors<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Successors<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Successors<'_, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_successors() {
        let set: AdjacencySet<u32> = AdjacencySet::new();
        assert!(set.is_empty());
        assert_eq!(set.successors().count(), 0);
        assert!(!set.contains(&1));
    }

    #[test]
    fn successors_preserve_insertion_order() {
        let mut set = AdjacencySet::new();
        for v in [1, 2, 3, 4, 5, 6] {
            set.append(v);
        }

        let collected: Vec<_> = set.successors().copied().collect();
        assert_eq!(collected, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn successors_are_restartable() {
        let mut set = AdjacencySet::new();
        set.append("b");
        set.append("a");

        let first: Vec<_> = set.successors().collect();
        let second: Vec<_> = set.successors().collect();
        assert_eq!(first, second);
        assert_eq!(set.successors().len(), 2);
    }

    #[test]
    fn contains_finds_appended_targets() {
        let mut set = AdjacencySet::new();
        set.append(7);
        set.append(9);

        assert!(set.contains(&7));
        assert!(set.contains(&9));
        assert!(!set.contains(&8));
        assert_eq!(set.len(), 2);
    }
}
