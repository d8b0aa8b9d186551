//! core::render
//!
//! Tree rendering for graph inspection.
//!
//! # Format
//!
//! Each vertex is printed on its own line as `<prefix> - <vertex>`. The root
//! has an empty prefix. A child's prefix extends its parent's with `"   |"`
//! when more siblings follow it, and with `"    "` when it is the last
//! sibling:
//!
//! ```text
//!  - 1
//!    | - 2
//!    |     - 3
//!      - 4
//! ```
//!
//! The output is for humans only; there is no parser for it.

use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Write as _};
use std::hash::Hash;

use super::adjacency::AdjacencySet;

const BRANCH: &str = "   |";
const LAST: &str = "    ";

/// Render the subgraph reachable from `root`.
///
/// Traversal is pre-order depth-first over an explicit stack, visiting
/// successors in insertion order. When `include_repeats` is false, a vertex
/// seen earlier in this call still gets its line but is not expanded again.
///
/// `root` must be a key of `adjacency`; an unknown root renders as a single
/// line.
pub(crate) fn render_tree<V>(
    adjacency: &HashMap<V, AdjacencySet<V>>,
    root: &V,
    include_repeats: bool,
) -> String
where
    V: Eq + Hash + Display,
{
    let mut out = String::new();
    let mut printed: HashSet<&V> = HashSet::new();
    let mut stack: Vec<(&V, String)> = vec![(root, String::new())];

    while let Some((vertex, prefix)) = stack.pop() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{} - {}", prefix, vertex);

        if !include_repeats && !printed.insert(vertex) {
            continue;
        }

        let Some(set) = adjacency.get(vertex) else {
            continue;
        };

        let count = set.len();
        for (i, child) in set.successors().enumerate().rev() {
            let marker = if i + 1 == count { LAST } else { BRANCH };
            stack.push((child, format!("{}{}", prefix, marker)));
        }
    }

    out
}
