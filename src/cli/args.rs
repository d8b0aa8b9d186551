//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug output
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// acyclic - Build, check, and render directed acyclic graphs from edge lists
#[derive(Parser, Debug)]
#[command(name = "acyclic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if acyclic was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the graph as an indented tree
    #[command(
        name = "render",
        long_about = "Print the graph described by an edge list as an indented tree.\n\n\
            Rendering starts at the first vertex named in the file unless --root is \
            given. A vertex reachable along several paths is expanded only the first \
            time it appears, unless --repeats is set.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Render from the first vertex in the file
    acyclic render deps.txt

    # Render the subtree below one vertex
    acyclic render deps.txt --root compile

    # Expand shared subtrees every time they appear
    acyclic render deps.txt --repeats

READING THE OUTPUT:
     - fetch
       | - compile      <- more siblings follow
       |     - link
         - docs         <- last child of fetch"
    )]
    Render {
        /// Edge-list file
        file: PathBuf,

        /// Vertex to start from (default: first vertex in the file)
        #[arg(long)]
        root: Option<String>,

        /// Expand shared subtrees on every encounter
        #[arg(long, conflicts_with = "no_repeats")]
        repeats: bool,

        /// Expand shared subtrees only once (overrides config)
        #[arg(long)]
        no_repeats: bool,
    },

    /// Report statements that would break the graph
    #[command(
        name = "check",
        long_about = "Load an edge list and report every statement the graph refuses.\n\n\
            Duplicate edges, self-loops, and edges that would close a cycle are listed \
            with their line numbers. Exits non-zero when anything was refused."
    )]
    Check {
        /// Edge-list file
        file: PathBuf,
    },

    /// Test whether one vertex reaches another
    #[command(name = "reach")]
    Reach {
        /// Edge-list file
        file: PathBuf,

        /// Start vertex
        from: String,

        /// Destination vertex
        to: String,
    },

    /// Show vertex and edge counts
    #[command(name = "stats")]
    Stats {
        /// Edge-list file
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        after_help = "\
KEYS:
    render.include_repeats   expand shared subtrees every time (default: false)
    load.strict              abort on the first refused statement (default: false)"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    acyclic completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    acyclic completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value in the global config
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from(["acyclic", "render", "g.txt", "--root", "a", "--repeats"])
            .unwrap();
        match cli.command {
            Command::Render {
                file,
                root,
                repeats,
                no_repeats,
            } => {
                assert_eq!(file, PathBuf::from("g.txt"));
                assert_eq!(root.as_deref(), Some("a"));
                assert!(repeats);
                assert!(!no_repeats);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn repeats_flags_conflict() {
        let result = Cli::try_parse_from(["acyclic", "render", "g.txt", "--repeats", "--no-repeats"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["acyclic", "stats", "g.txt", "--quiet", "--debug"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
