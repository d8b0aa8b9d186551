//! reach command - Test whether one vertex reaches another

use super::{load_file, warn_rejections};
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::load::LoadOptions;
use crate::core::types::VertexName;
use crate::ui::output;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Print `true` if a path of one or more edges leads from `from` to `to`.
pub fn reach(ctx: &Context, config: &Config, file: &Path, from: &str, to: &str) -> Result<()> {
    let from = VertexName::new(from).context("Invalid start vertex")?;
    let to = VertexName::new(to).context("Invalid destination vertex")?;

    let report = load_file(
        ctx,
        file,
        LoadOptions {
            strict: config.strict(),
        },
    )?;
    warn_rejections(ctx, &report);

    let graph = &report.graph;
    for vertex in [&from, &to] {
        if !graph.contains_vertex(vertex) {
            output::warn(
                format!("vertex '{}' is not in the graph", vertex),
                ctx.verbosity(),
            );
        }
    }

    println!("{}", graph.depth_first_search(&from, &to));
    Ok(())
}
