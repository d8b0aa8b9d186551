//! stats command - Show vertex and edge counts

use super::load_file;
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::load::LoadOptions;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Summary of a loaded edge list.
#[derive(Debug, Serialize)]
struct Stats {
    vertices: usize,
    edges: usize,
    root: Option<String>,
    rejected: usize,
}

/// Print counts for the graph loaded from `file`.
pub fn stats(ctx: &Context, config: &Config, file: &Path, json: bool) -> Result<()> {
    let report = load_file(
        ctx,
        file,
        LoadOptions {
            strict: config.strict(),
        },
    )?;

    let stats = Stats {
        vertices: report.graph.vertex_count(),
        edges: report.graph.edge_count(),
        root: report.graph.root().map(String::from),
        rejected: report.rejected.len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("vertices: {}", stats.vertices);
    println!("edges: {}", stats.edges);
    println!("root: {}", stats.root.as_deref().unwrap_or("(none)"));
    println!("refused: {}", stats.rejected);
    Ok(())
}
