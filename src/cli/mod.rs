//! Command-line interface for Outfitter.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the routing of subcommands onto template operations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`dispatcher`] - Routing of subcommands onto [`crate::ops::TemplateService`]

pub mod args;
pub mod dispatcher;

pub use args::{Cli, CloneArgs, Commands, ListArgs, SearchArgs, ShowArgs, StatusArgs};
pub use dispatcher::{CommandDispatcher, CommandResult};
