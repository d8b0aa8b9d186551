//! render command - Print the graph as an indented tree

use super::{load_file, warn_rejections};
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::load::LoadOptions;
use crate::core::types::VertexName;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Print the graph loaded from `file` as a tree.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `config` - Resolved configuration
/// * `file` - Edge-list file
/// * `root` - Vertex to start from (default: the graph's root)
/// * `include_repeats` - Expand shared subtrees on every encounter
pub fn render(
    ctx: &Context,
    config: &Config,
    file: &Path,
    root: Option<&str>,
    include_repeats: bool,
) -> Result<()> {
    let options = LoadOptions {
        strict: config.strict(),
    };
    let report = load_file(ctx, file, options)?;
    warn_rejections(ctx, &report);

    let graph = &report.graph;
    let tree = match root {
        Some(name) => {
            let root = VertexName::new(name).context("Invalid --root")?;
            graph
                .render(&root, include_repeats)
                .with_context(|| format!("Cannot render from '{}'", root))?
        }
        None if !include_repeats => graph.default_render(),
        None => match graph.root() {
            Some(root) => graph.render(&root, true)?,
            None => String::new(),
        },
    };

    // The tree is the result; print it even in quiet mode.
    print!("{}", tree);
    Ok(())
}
