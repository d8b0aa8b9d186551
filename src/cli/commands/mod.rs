//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Reads its input file and loads it into a graph
//! 2. Asks the graph engine for the answer
//! 3. Formats and displays output
//!
//! Handlers never reach into graph internals; they only use the public
//! operations on [`Digraph`](crate::core::graph::Digraph).

mod check;
mod completion;
mod config_cmd;
mod reach;
mod render;
mod stats;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use reach::reach;
pub use render::render;
pub use stats::stats;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::load::{self, LoadOptions, LoadReport};
use crate::ui::output;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Render {
            file,
            root,
            repeats,
            no_repeats,
        } => {
            let config = load_config(ctx)?;
            let include_repeats = if repeats {
                true
            } else if no_repeats {
                false
            } else {
                config.include_repeats()
            };
            render::render(ctx, &config, &file, root.as_deref(), include_repeats)
        }
        Command::Check { file } => check::check(ctx, &file),
        Command::Reach { file, from, to } => {
            let config = load_config(ctx)?;
            reach::reach(ctx, &config, &file, &from, &to)
        }
        Command::Stats { file, json } => {
            let config = load_config(ctx)?;
            stats::stats(ctx, &config, &file, json)
        }
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load configuration for the working directory.
pub(crate) fn load_config(ctx: &Context) -> Result<Config> {
    let dir = ctx.working_dir()?;
    let config = Config::load(Some(&dir)).context("Failed to load config")?;

    let verbosity = ctx.verbosity();
    if let Some(path) = config.global_config_loaded_from() {
        output::debug(format!("global config: {}", path.display()), verbosity);
    }
    if let Some(path) = config.project_config_loaded_from() {
        output::debug(format!("project config: {}", path.display()), verbosity);
    }

    Ok(config)
}

/// Read an edge-list file and load it into a graph.
pub(crate) fn load_file(ctx: &Context, file: &Path, options: LoadOptions) -> Result<LoadReport> {
    let path = ctx.resolve(file)?;
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    let report = load::load(&text, options)
        .with_context(|| format!("Failed to load '{}'", path.display()))?;

    output::debug(
        format!(
            "loaded {} vertices, {} edges from {}",
            report.graph.vertex_count(),
            report.graph.edge_count(),
            path.display()
        ),
        ctx.verbosity(),
    );

    Ok(report)
}

/// Warn about refused statements without failing.
pub(crate) fn warn_rejections(ctx: &Context, report: &LoadReport) {
    if report.is_clean() {
        return;
    }
    output::warn(
        format!(
            "{} statement(s) refused:\n{}",
            report.rejected.len(),
            output::format_list(&report.rejected, "  ")
        ),
        ctx.verbosity(),
    );
}
