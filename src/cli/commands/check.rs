//! check command - Report statements the graph refuses

use super::load_file;
use crate::cli::Context;
use crate::core::load::LoadOptions;
use crate::ui::output;
use anyhow::{bail, Result};
use std::path::Path;

/// Load `file` and list every refused statement.
///
/// Always loads non-strictly so that every problem is reported, not just the
/// first. Fails when anything was refused.
pub fn check(ctx: &Context, file: &Path) -> Result<()> {
    let report = load_file(ctx, file, LoadOptions { strict: false })?;
    let verbosity = ctx.verbosity();

    if report.is_clean() {
        output::print(
            format!(
                "ok: {} vertices, {} edges",
                report.graph.vertex_count(),
                report.graph.edge_count()
            ),
            verbosity,
        );
        return Ok(());
    }

    println!("{}", output::format_list(&report.rejected, ""));
    bail!("{} statement(s) refused", report.rejected.len())
}
