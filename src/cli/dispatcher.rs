//! Command dispatching.
//!
//! Routes CLI subcommands to [`TemplateService`] operations and turns the
//! operation outcome into a process exit code.

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ops::{OpResult, TemplateService};
use crate::remote::{MetadataClient, DEFAULT_ENDPOINT};

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to template operations.
pub struct CommandDispatcher {
    service: TemplateService,
}

impl CommandDispatcher {
    /// Create a dispatcher against the given metadata endpoint.
    pub fn new(endpoint: Option<&str>) -> Self {
        let client = MetadataClient::new(endpoint.unwrap_or(DEFAULT_ENDPOINT));
        Self {
            service: TemplateService::new(client),
        }
    }

    /// Dispatch and execute a command, printing its report to stdout.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        let outcome = self.run(cli)?;
        println!("{}", outcome.text);

        if outcome.success {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }

    fn run(&self, cli: &Cli) -> Result<OpResult> {
        match &cli.command {
            Commands::List(args) => self.service.list_templates(
                args.domain.as_deref(),
                args.creator.as_deref(),
                args.limit,
            ),
            Commands::Show(args) => self.service.get_template_details(&args.id),
            Commands::Search(args) => self.service.search_templates(&args.query, args.limit),
            Commands::Clone(args) => {
                self.service
                    .clone_template(&args.id, &args.target, args.name.as_deref())
            }
            Commands::Status(args) => self.service.check_directory_status(&args.path),
        }
    }
}
