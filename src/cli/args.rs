//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};

/// Outfitter - Discover and clone project templates.
#[derive(Debug, Parser)]
#[command(name = "outfitter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Metadata service endpoint (overrides the default)
    #[arg(long, global = true, env = "OUTFITTER_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available templates
    List(ListArgs),

    /// Show full details for one template
    Show(ShowArgs),

    /// Search templates by keyword
    Search(SearchArgs),

    /// Clone a template into a local directory
    Clone(CloneArgs),

    /// Inspect a directory before cloning into it
    Status(StatusArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Only show templates in this domain
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Only show templates by this creator
    #[arg(long)]
    pub creator: Option<String>,

    /// Maximum number of templates to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Template ID
    pub id: String,
}

/// Arguments for the `search` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the `clone` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CloneArgs {
    /// Template ID to clone
    pub id: String,

    /// Target directory for the clone
    pub target: String,

    /// Project name to use in the summary
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {
    /// Directory to inspect
    pub path: String,
}
